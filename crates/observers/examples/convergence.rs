//! Compares how the three methods converge on the same equation.
//!
//! # Usage
//!
//! ```text
//! cargo run --example convergence --features plot
//! cargo run --example convergence --features plot -- "x^3 - 2*x - 5" 2 3
//! ```
//!
//! The expression defaults to `cos(x) - x`, whose root is the Dottie number
//! ≈ 0.7391, on the bracket `[0, 2]`. Newton-Raphson starts from the lower
//! bound. Residuals are drawn on a log scale so the different convergence
//! rates are visible.

use std::error::Error;

use rootline_observers::{PlotObserver, Plottable, ShowConfig};
use rootline_solvers::equation::{Action, Config, Event, Method, MethodParameters, run_observed};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let text = args.next().unwrap_or_else(|| "cos(x) - x".into());
    let lower: f64 = args.next().as_deref().unwrap_or("0").parse()?;
    let upper: f64 = args.next().as_deref().unwrap_or("2").parse()?;

    let f = rootline_expr::parse(&text)?;
    let df = f.derivative();

    let mut obs = PlotObserver::<3>::new(Method::ALL.map(Method::name));

    for (slot, method) in Method::ALL.into_iter().enumerate() {
        let params = MethodParameters::new(method, lower, Some(upper), Config::default())?;

        let trace = run_observed(&params, &f, Some(&df), |event: &Event<'_>| -> Option<Action> {
            if let Some(x) = Plottable::<1>::x(event) {
                let mut traces = [None; 3];
                traces[slot] = Plottable::<1>::traces(event)[0];
                obs.record(x, traces);
            }
            None
        })?;

        match trace.root() {
            Some(root) => println!("{method}: root {root:.6} after {} iterations", trace.len()),
            None => println!("{method}: {} after {} iterations", trace.termination(), trace.len()),
        }
    }

    obs.show(
        ShowConfig::new()
            .title(format!("Convergence - {text}"))
            .axis_labels("Iteration", "|f(c)|")
            .legend()
            .markers()
            .log_y(),
    )?;

    Ok(())
}
