use rootline_core::{Function, Observer};

use super::{
    Action, Error, Event, IterationTrace, Method, MethodParameters, bisection, false_position,
    newton_raphson,
};

/// Runs the method selected by `params` without observation.
///
/// `df` is only used by Newton-Raphson.
///
/// # Errors
///
/// Returns [`Error::MissingDerivative`] if Newton-Raphson is selected without
/// `df`, or any error raised by the selected solver.
pub fn run<F, D>(params: &MethodParameters, f: &F, df: Option<&D>) -> Result<IterationTrace, Error>
where
    F: Function,
    D: Function,
{
    run_observed(params, f, df, ())
}

/// Runs the method selected by `params`, notifying `observer` after each
/// iteration.
///
/// # Errors
///
/// Returns [`Error::MissingDerivative`] if Newton-Raphson is selected without
/// `df`, or any error raised by the selected solver.
pub fn run_observed<F, D, Obs>(
    params: &MethodParameters,
    f: &F,
    df: Option<&D>,
    observer: Obs,
) -> Result<IterationTrace, Error>
where
    F: Function,
    D: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let config = params.config();
    let method = params.method();

    match method {
        Method::Bisection => {
            let bracket = params.bracket().ok_or(Error::MissingUpperBound { method })?;
            bisection::solve(f, bracket, config, observer)
        }
        Method::FalsePosition => {
            let bracket = params.bracket().ok_or(Error::MissingUpperBound { method })?;
            false_position::solve(f, bracket, config, observer)
        }
        Method::NewtonRaphson => {
            let df = df.ok_or(Error::MissingDerivative)?;
            newton_raphson::solve(f, df, params.lower(), config, observer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootline_core::{FromFn, from_fn};

    use crate::equation::{Config, Termination};

    type Slope = FromFn<fn(f64) -> f64>;

    fn params(method: Method, lower: f64, upper: Option<f64>) -> MethodParameters {
        MethodParameters::new(method, lower, upper, Config::default()).expect("valid params")
    }

    #[test]
    fn every_method_finds_the_same_root() {
        let f = from_fn(|x| x * x - 4.0);
        let df = from_fn(|x| 2.0 * x);

        for method in Method::ALL {
            let trace = run(&params(method, 0.5, Some(5.0)), &f, Some(&df)).expect("should solve");
            assert_eq!(trace.method(), method);
            assert_relative_eq!(trace.root().expect("root"), 2.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn bracketing_methods_ignore_derivative() {
        let f = from_fn(|x| x - 1.0);
        let trace = run::<_, Slope>(&params(Method::Bisection, 0.0, Some(2.0)), &f, None)
            .expect("should solve");
        assert_eq!(trace.termination(), Termination::Converged);
    }

    #[test]
    fn newton_requires_derivative() {
        let f = from_fn(|x| x - 1.0);
        let result = run::<_, Slope>(&params(Method::NewtonRaphson, 0.0, None), &f, None);
        assert!(matches!(result, Err(Error::MissingDerivative)));
    }

    #[test]
    fn rerun_gives_identical_trace() {
        let f = from_fn(|x: f64| x.cos() - x);
        let df = from_fn(|x: f64| -x.sin() - 1.0);

        for method in Method::ALL {
            let params = params(method, 0.0, Some(1.0));
            let first = run(&params, &f, Some(&df)).expect("should solve");
            let second = run(&params, &f, Some(&df)).expect("should solve");
            assert_eq!(first, second);
        }
    }
}
