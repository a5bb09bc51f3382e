//! Bisection on a sign-changing bracket.
//!
//! # Algorithm
//!
//! Each step evaluates the midpoint `c = (lower + upper) / 2` and records it.
//! The run converges when `|f(c)| < tolerance` or the bracket the midpoint
//! came from is narrower than the tolerance. Otherwise the half whose
//! endpoints still change sign becomes the new bracket, so the width halves
//! every step.

use rootline_core::{Function, Observer};

use super::{
    Action, Config, Error, Event, IterationTrace, Method, Termination, check_bracket,
    recorder::Recorder,
};

/// Finds a root of `f` in `bracket` using bisection.
///
/// The observer receives an [`Event`] after each record is appended.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or does not change sign, or if
/// `f` fails or is non-finite at a point the method needs.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<IterationTrace, Error>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let ends = check_bracket(f, bracket)?;
    let (mut lower, mut upper, mut f_lower) = (ends.lower, ends.upper, ends.f_lower);

    let mut recorder = Recorder::new(Method::Bisection, config, observer);

    for _ in 0..config.max_iters() {
        let candidate = (lower + upper) / 2.0;
        let residual = recorder.function(f, candidate)?;
        let action = recorder.record(lower, Some(upper), candidate, residual);

        if config.within(residual) || config.within(upper - lower) {
            return Ok(recorder.finish(Termination::Converged));
        }

        if let Some(Action::StopEarly) = action {
            return Ok(recorder.finish(Termination::StoppedByObserver));
        }

        if f_lower * residual < 0.0 {
            upper = candidate;
        } else {
            lower = candidate;
            f_lower = residual;
        }
    }

    Ok(recorder.finish(Termination::Exhausted))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or does not change sign, or if
/// `f` fails or is non-finite at a point the method needs.
pub fn solve_unobserved<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<IterationTrace, Error> {
    solve(f, bracket, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootline_core::{from_fn, try_from_fn};

    #[derive(Debug, thiserror::Error)]
    #[error("undefined")]
    struct Undefined;

    #[test]
    fn finds_square_root() {
        let f = from_fn(|x| x * x - 4.0);
        let config = Config::new(1e-6, 50).expect("valid config");

        let trace = solve_unobserved(&f, [0.0, 5.0], &config).expect("should solve");

        assert_eq!(trace.termination(), Termination::Converged);
        assert_relative_eq!(trace.root().expect("root"), 2.0, epsilon = 1e-6);
        assert!(trace.len() < 25);
    }

    #[test]
    fn first_record_is_the_midpoint() {
        let f = from_fn(|x| x * x - 4.0);
        let trace = solve_unobserved(&f, [0.0, 5.0], &Config::default()).expect("should solve");

        let first = trace.records()[0];
        assert_eq!(first.index, 1);
        assert_relative_eq!(first.lower, 0.0);
        assert_eq!(first.upper, Some(5.0));
        assert_relative_eq!(first.candidate, 2.5);
        assert_relative_eq!(first.residual, 2.25);

        // f(0) * f(2.5) < 0, so the upper bound moves.
        let second = trace.records()[1];
        assert_relative_eq!(second.lower, 0.0);
        assert_eq!(second.upper, Some(2.5));
    }

    #[test]
    fn exact_midpoint_root_converges_immediately() {
        let f = from_fn(|x| x - 1.0);
        let trace = solve_unobserved(&f, [0.0, 2.0], &Config::default()).expect("should solve");

        assert_eq!(trace.len(), 1);
        assert_eq!(trace.root(), Some(1.0));
    }

    #[test]
    fn converges_on_bracket_width() {
        // A step function never has a small residual, only a narrow bracket.
        let f = from_fn(|x| if x < 0.3 { -1.0 } else { 1.0 });
        let config = Config::new(1e-3, 100).expect("valid config");

        let trace = solve_unobserved(&f, [0.0, 1.0], &config).expect("should solve");

        assert_eq!(trace.termination(), Termination::Converged);
        let last = trace.records().last().expect("records");
        assert!(last.upper.expect("upper") - last.lower < 1e-3);
        assert_relative_eq!(trace.root().expect("root"), 0.3, epsilon = 1e-3);
    }

    #[test]
    fn exhausts_iteration_limit() {
        let f = from_fn(|x| x * x - 2.0);
        let config = Config::new(1e-12, 1).expect("valid config");

        let trace = solve_unobserved(&f, [0.0, 2.0], &config).expect("should run");

        assert_eq!(trace.termination(), Termination::Exhausted);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.root(), None);
    }

    #[test]
    fn rejects_bracket_without_sign_change() {
        let f = from_fn(|x| x * x + 1.0);
        let result = solve_unobserved(&f, [-1.0, 1.0], &Config::default());
        assert!(matches!(result, Err(Error::NoSignChange { .. })));
    }

    #[test]
    fn observer_can_stop_iteration() {
        let f = from_fn(|x| x * x - 2.0);

        let mut calls = 0usize;
        let observer = |event: &Event<'_>| {
            calls += 1;
            if event.index() >= 3 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let trace = solve(&f, [0.0, 2.0], &Config::default(), observer).expect("should stop");

        assert_eq!(trace.termination(), Termination::StoppedByObserver);
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.root(), None);
        assert_eq!(calls, 3);
    }

    #[test]
    fn evaluation_failure_keeps_records() {
        // Undefined just left of the root, reached on the third midpoint.
        let f = try_from_fn(|x: f64| {
            if (0.74..0.76).contains(&x) {
                Err(Undefined)
            } else {
                Ok(x - 0.8)
            }
        });

        let err = solve_unobserved(&f, [0.0, 2.0], &Config::default()).expect_err("should fail");

        assert!(matches!(err, Error::Function { x, .. } if x == 0.75));
        let candidates: Vec<_> = err.records().iter().map(|r| r.candidate).collect();
        assert_eq!(candidates, [1.0, 0.5]);
    }
}
