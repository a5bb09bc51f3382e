//! False position (regula falsi) on a sign-changing bracket.
//!
//! # Algorithm
//!
//! Each step takes the point where the secant through `(lower, f(lower))`
//! and `(upper, f(upper))` crosses zero:
//!
//! ```text
//! c = upper - f(upper) * (upper - lower) / (f(upper) - f(lower))
//! ```
//!
//! The endpoint on the same side of the root as `c` is replaced, so the
//! bracket keeps its sign change. Only the residual is tested for
//! convergence: one endpoint can stay fixed for the whole run, so the
//! bracket width need not shrink below the tolerance.

use rootline_core::{Function, Observer};

use super::{
    Action, Config, Error, Event, IterationTrace, Method, Termination, check_bracket,
    recorder::Recorder,
};

/// Finds a root of `f` in `bracket` using false position.
///
/// The observer receives an [`Event`] after each record is appended.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or does not change sign, if
/// `f` fails or is non-finite at a point the method needs, or if the secant
/// through the endpoints is flat.
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
    let (mut lower, mut upper) = (ends.lower, ends.upper);
    let (mut f_lower, mut f_upper) = (ends.f_lower, ends.f_upper);

    let mut recorder = Recorder::new(Method::FalsePosition, config, observer);

    for _ in 0..config.max_iters() {
        let slope = f_upper - f_lower;

        if slope == 0.0 {
            return Err(recorder.flat_secant(lower, upper, f_upper));
        }

        let candidate = upper - f_upper * (upper - lower) / slope;
        let residual = recorder.function(f, candidate)?;
        let action = recorder.record(lower, Some(upper), candidate, residual);

        if config.within(residual) {
            return Ok(recorder.finish(Termination::Converged));
        }

        if let Some(Action::StopEarly) = action {
            return Ok(recorder.finish(Termination::StoppedByObserver));
        }

        if f_lower * residual < 0.0 {
            upper = candidate;
            f_upper = residual;
        } else {
            lower = candidate;
            f_lower = residual;
        }
    }

    Ok(recorder.finish(Termination::Exhausted))
}

/// Runs false position without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or does not change sign, if
/// `f` fails or is non-finite at a point the method needs, or if the secant
/// through the endpoints is flat.
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
    use rootline_core::from_fn;

    #[test]
    fn finds_cube_root_of_two() {
        let f = from_fn(|x| x * x * x - 2.0);
        let config = Config::new(1e-8, 200).expect("valid config");

        let trace = solve_unobserved(&f, [0.0, 2.0], &config).expect("should solve");

        assert_eq!(trace.termination(), Termination::Converged);
        assert_relative_eq!(trace.root().expect("root"), 2f64.cbrt(), epsilon = 1e-6);
    }

    #[test]
    fn linear_function_converges_in_one_step() {
        let f = from_fn(|x| 2.0 * x - 3.0);
        let trace = solve_unobserved(&f, [0.0, 10.0], &Config::default()).expect("should solve");

        assert_eq!(trace.len(), 1);
        assert_relative_eq!(trace.root().expect("root"), 1.5);
    }

    #[test]
    fn first_candidate_is_secant_crossing() {
        let f = from_fn(|x| x * x - 4.0);
        let trace = solve_unobserved(&f, [0.0, 5.0], &Config::default()).expect("should solve");

        // Secant through (0, -4) and (5, 21) crosses zero at 5 - 21 * 5 / 25.
        let first = trace.records()[0];
        assert_relative_eq!(first.candidate, 0.8, epsilon = 1e-12);
        assert_relative_eq!(first.residual, -3.36, epsilon = 1e-12);
        assert_eq!(first.upper, Some(5.0));

        // The residual is negative, so the lower endpoint moves.
        let second = trace.records()[1];
        assert_relative_eq!(second.lower, 0.8, epsilon = 1e-12);
        assert_eq!(second.upper, Some(5.0));
    }

    #[test]
    fn candidates_stay_inside_the_bracket() {
        let f = from_fn(|x: f64| x.exp() - 3.0);
        let trace = solve_unobserved(&f, [-1.0, 4.0], &Config::default()).expect("should solve");

        for record in trace.records() {
            let upper = record.upper.expect("bracketing method");
            assert!(record.lower <= record.candidate && record.candidate <= upper);
        }
        assert_relative_eq!(trace.root().expect("root"), 3f64.ln(), epsilon = 1e-5);
    }

    #[test]
    fn ignores_bracket_width() {
        // Tolerance is wider than the whole bracket, but the residual is not small.
        let f = from_fn(|x| 1000.0 * x * x * x - 1.0);
        let config = Config::new(0.5, 1).expect("valid config");

        let trace = solve_unobserved(&f, [0.0, 0.2], &config).expect("should run");

        assert_relative_eq!(trace.records()[0].candidate, 0.025, epsilon = 1e-12);
        assert!(trace.records()[0].residual.abs() > 0.5);
        assert_eq!(trace.termination(), Termination::Exhausted);
    }

    #[test]
    fn exhausts_iteration_limit() {
        let f = from_fn(|x| x * x * x - 2.0);
        let config = Config::new(1e-14, 3).expect("valid config");

        let trace = solve_unobserved(&f, [0.0, 2.0], &config).expect("should run");

        assert_eq!(trace.termination(), Termination::Exhausted);
        assert_eq!(trace.len(), 3);
    }

    #[test]
    fn observer_can_stop_iteration() {
        let f = from_fn(|x| x * x * x - 2.0);
        let observer = |_: &Event<'_>| Some(Action::StopEarly);

        let trace = solve(&f, [0.0, 2.0], &Config::default(), observer).expect("should stop");

        assert_eq!(trace.termination(), Termination::StoppedByObserver);
        assert_eq!(trace.len(), 1);
    }
}
