//! Convergence plots for root-finding runs.
//!
//! See [`PlotObserver`], [`Plottable`] and [`show_convergence`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points};
use rootline_core::Observer;
use rootline_solvers::equation::IterationTrace;

use crate::traits::{HasIteration, HasResidual};

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Convergence - Bisection").markers().log_y())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    axis_labels: Option<(String, String)>,
    legend: bool,
    markers: bool,
    log_y: bool,
}

impl ShowConfig {
    /// Creates a config with no title, no legend, plain lines and a linear
    /// y-axis.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Labels the x and y axes.
    #[must_use]
    pub fn axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.axis_labels = Some((x.into(), y.into()));
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Draws each trace as circle markers joined by a dashed line.
    #[must_use]
    pub fn markers(mut self) -> Self {
        self.markers = true;
        self
    }

    /// Enables a logarithmic y-axis (base 10).
    ///
    /// y values are transformed with log₁₀ before plotting. Non-positive
    /// values are skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }
}

/// Extracts plottable data from a solver event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely, or
/// `None` in a trace slot to skip that trace for the event.
///
/// Every event with an iteration number and a residual is plottable as a
/// single `|residual|` trace against the iteration.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl<E: HasIteration + HasResidual> Plottable<1> for E {
    fn x(&self) -> Option<f64> {
        Some(self.iteration() as f64)
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [Some(self.residual().abs())]
    }
}

/// An observer that collects trace data during solving and displays it via egui.
///
/// The const generic `N` is the number of traces. Record data either by
/// passing `&mut PlotObserver<1>` straight to a solver, or by calling
/// [`record`][PlotObserver::record] from a closure observer to compare
/// several runs on one plot.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<1>::new(["|f(c)|"]);
/// bisection::solve(&f, [0.0, 2.0], &Config::default(), &mut obs)?;
/// obs.show(ShowConfig::new().title("Convergence - Bisection").markers())?;
/// ```
#[derive(Debug, Clone)]
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    #[must_use]
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// `None` in a slot skips recording for that trace only.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (points, y) in self.data.iter_mut().zip(traces) {
            if let Some(y) = y {
                points.push([x, y]);
            }
        }
    }

    /// Returns the points collected for trace `index`.
    #[must_use]
    pub fn points(&self, index: usize) -> &[[f64; 2]] {
        self.data.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.clone().unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(PlotApp { traces, config }))),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

/// Opens a window plotting `|f(c)|` against the iteration for `trace`.
///
/// The window is titled `Convergence - <method>`. Blocks until closed.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show_convergence(trace: &IterationTrace, log_y: bool) -> Result<(), eframe::Error> {
    let mut obs = PlotObserver::<1>::new(["|f(c)|"]);
    for [x, y] in trace.convergence() {
        obs.record(x, [Some(y)]);
    }

    let mut config = ShowConfig::new()
        .title(format!("Convergence - {}", trace.method()))
        .axis_labels("Iteration", "|f(c)|")
        .markers();
    if log_y {
        config = config.log_y();
    }

    obs.show(config)
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    config: ShowConfig,
}

impl PlotApp {
    fn transformed(&self, points: &[[f64; 2]]) -> Vec<[f64; 2]> {
        if self.config.log_y {
            points
                .iter()
                .filter(|p| p[1] > 0.0)
                .map(|p| [p[0], p[1].log10()])
                .collect()
        } else {
            points.to_vec()
        }
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(title) = &self.config.title {
                ui.heading(title.as_str());
            }

            let mut plot = Plot::new("convergence_plot");
            if self.config.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some((x, y)) = &self.config.axis_labels {
                let y = if self.config.log_y {
                    format!("log₁₀ {y}")
                } else {
                    y.clone()
                };
                plot = plot.x_axis_label(x.clone()).y_axis_label(y);
            }

            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let points = self.transformed(points);
                    if self.config.markers {
                        plot_ui.line(
                            Line::new(PlotPoints::from(points.clone()))
                                .style(LineStyle::dashed_loose())
                                .name(name),
                        );
                        plot_ui.points(
                            Points::new(PlotPoints::from(points))
                                .shape(MarkerShape::Circle)
                                .radius(3.0)
                                .name(name),
                        );
                    } else {
                        plot_ui.line(Line::new(PlotPoints::from(points)).name(name));
                    }
                }
            });
        });
    }
}
