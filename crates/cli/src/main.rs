//! rootline - find a root of f(x) = 0 from the command line.
//!
//! The flags mirror the input form: method, function, `a` (or `x0`), `b`,
//! tolerance and iteration limit. Each can also be set through a
//! `ROOTLINE_*` environment variable. Results are printed as an iteration
//! table followed by a summary line, or as JSON with `--format json`.
//!
//! # Examples
//!
//! ```text
//! rootline -m bisection -f "x^2 - 4" -a 0 -b 5
//! rootline -m newton -f "cos(x) - x" -a 1 --format json
//! rootline -m false-position -f "x^3 - 2*x - 5" -a 2 -b 3 --plot --log-y
//! ```
//!
//! Logs go to stderr and follow `RUST_LOG`; `-v` turns on per-iteration
//! debug logging when `RUST_LOG` is unset.

use std::process::ExitCode;

use clap::Parser;
use rootline_core::Observer;
use rootline_observers::{LogObserver, Stall};
use rootline_solvers::equation::{Action, Event, IterationTrace};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod error;
mod render;

use args::{Args, Format};
use error::{CliError, Result};
use render::Report;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(args: &Args) -> Result<()> {
    check_plot(args.plot)?;
    let prepared = rootline_input::validate(&args.raw_input())?;
    info!(method = %prepared.method(), function = %prepared.function(), "solving");

    let mut log = LogObserver::new();
    let mut stall = args.stall.map(Stall::new);

    let result = prepared.run_observed(|event: &Event<'_>| -> Option<Action> {
        let _: Option<Action> = log.observe(event);
        stall.as_mut().and_then(|stall| stall.observe(event))
    });

    let function = prepared.function().to_string();
    let derivative = prepared.derivative().map(ToString::to_string);

    match result {
        Ok(trace) => {
            info!(
                iterations = trace.len(),
                termination = %trace.termination(),
                "solve finished"
            );
            let report = Report::finished(function, derivative, &trace);
            print_report(args.format, &report)?;
            if args.plot {
                plot(&trace, args.log_y)?;
            }
            Ok(())
        }
        Err(err) => {
            let report = Report::failed(
                prepared.method(),
                function,
                derivative,
                err.records(),
                err.to_string(),
            );
            print_report(args.format, &report)?;
            Err(err.into())
        }
    }
}

fn print_report(format: Format, report: &Report<'_>) -> Result<()> {
    match format {
        Format::Table => print!("{}", report.to_table()),
        Format::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

#[cfg(feature = "plot")]
fn check_plot(_requested: bool) -> Result<()> {
    Ok(())
}

/// Fails before solving when `--plot` is given to a build without plotting.
#[cfg(not(feature = "plot"))]
fn check_plot(requested: bool) -> Result<()> {
    if requested {
        return Err(CliError::PlotUnavailable);
    }
    Ok(())
}

#[cfg(feature = "plot")]
fn plot(trace: &IterationTrace, log_y: bool) -> Result<()> {
    rootline_observers::show_convergence(trace, log_y).map_err(|err| CliError::Plot(err.to_string()))
}

// Unreachable once `check_plot` has passed.
#[cfg(not(feature = "plot"))]
fn plot(_trace: &IterationTrace, _log_y: bool) -> Result<()> {
    Err(CliError::PlotUnavailable)
}
