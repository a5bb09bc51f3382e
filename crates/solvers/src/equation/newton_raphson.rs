//! Newton-Raphson iteration from an initial guess.
//!
//! # Algorithm
//!
//! Starting from `x0`, each step follows the tangent at the current iterate:
//!
//! ```text
//! c = x - f(x) / f'(x)
//! ```
//!
//! The run converges when `|f(c)| < tolerance` or the step `|c - x|` is
//! below the tolerance. A derivative of exactly zero at `x0` is a
//! precondition failure; later in the run it ends the iteration with
//! [`Termination::DegenerateDerivative`] and keeps the records so far.

use rootline_core::{Function, Observer};

use super::{Action, Config, Error, Event, IterationTrace, Method, Termination, recorder::Recorder};

/// Checks that `x0` is a usable initial guess for `df`.
///
/// Returns the derivative at `x0`.
///
/// # Errors
///
/// - [`Error::NonFiniteGuess`] if `x0` is not finite.
/// - [`Error::Derivative`] or [`Error::NonFiniteResidual`] if `df` cannot be
///   evaluated at `x0`.
/// - [`Error::ZeroDerivative`] if `df(x0)` is exactly zero.
pub fn check_derivative<D: Function>(df: &D, x0: f64) -> Result<f64, Error> {
    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { x0 });
    }

    let slope = df.call(x0).map_err(|source| Error::Derivative {
        x: x0,
        source: Box::new(source),
        records: Vec::new(),
    })?;

    if !slope.is_finite() {
        return Err(Error::NonFiniteResidual {
            x: x0,
            residual: slope,
            records: Vec::new(),
        });
    }

    if slope == 0.0 {
        return Err(Error::ZeroDerivative { x0 });
    }

    Ok(slope)
}

/// Finds a root of `f` starting from `x0`, using `df` as its derivative.
///
/// The observer receives an [`Event`] after each record is appended.
///
/// # Errors
///
/// Returns an error if `x0` is unusable (see [`check_derivative`]), if `f`
/// or `df` fails or is non-finite at a point the method needs, or if a step
/// overflows.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<IterationTrace, Error>
where
    F: Function,
    D: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut slope = check_derivative(df, x0)?;

    let mut recorder = Recorder::new(Method::NewtonRaphson, config, observer);
    let mut x = x0;
    let mut fx = recorder.function(f, x)?;

    for step in 0..config.max_iters() {
        if step > 0 {
            slope = recorder.derivative(df, x)?;
            if slope == 0.0 {
                return Ok(recorder.finish(Termination::DegenerateDerivative));
            }
        }

        let candidate = x - fx / slope;
        if !candidate.is_finite() {
            return Err(recorder.diverged(x));
        }

        let residual = recorder.function(f, candidate)?;
        let action = recorder.record(x, None, candidate, residual);

        if config.within(residual) || config.within(candidate - x) {
            return Ok(recorder.finish(Termination::Converged));
        }

        if let Some(Action::StopEarly) = action {
            return Ok(recorder.finish(Termination::StoppedByObserver));
        }

        x = candidate;
        fx = residual;
    }

    Ok(recorder.finish(Termination::Exhausted))
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns an error if `x0` is unusable (see [`check_derivative`]), if `f`
/// or `df` fails or is non-finite at a point the method needs, or if a step
/// overflows.
pub fn solve_unobserved<F: Function, D: Function>(
    f: &F,
    df: &D,
    x0: f64,
    config: &Config,
) -> Result<IterationTrace, Error> {
    solve(f, df, x0, config, ())
}
