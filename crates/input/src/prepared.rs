use std::str::FromStr;

use rootline_core::Observer;
use rootline_expr::Formula;
use rootline_solvers::equation::{
    self, Action, BracketError, Config, ConfigError, Event, IterationTrace, Method,
    MethodParameters, ParamsError, check_bracket, check_derivative,
};
use tracing::{debug, warn};

use crate::{Field, RawInput, ValidationError, ValidationKind};

/// A validated run: parameters, compiled function and, for Newton-Raphson,
/// its compiled derivative.
///
/// Every precondition of the selected method held when this value was built.
/// A `Prepared` can be run any number of times; each run starts fresh and
/// yields an identical trace.
#[derive(Debug, Clone)]
pub struct Prepared {
    params: MethodParameters,
    function: Formula,
    derivative: Option<Formula>,
}

impl Prepared {
    #[must_use]
    pub fn params(&self) -> &MethodParameters {
        &self.params
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.params.method()
    }

    #[must_use]
    pub fn function(&self) -> &Formula {
        &self.function
    }

    /// Returns the derivative, present only for Newton-Raphson.
    #[must_use]
    pub fn derivative(&self) -> Option<&Formula> {
        self.derivative.as_ref()
    }

    /// Runs the selected method.
    ///
    /// # Errors
    ///
    /// Returns an error if the function or derivative cannot be evaluated
    /// at a point the method reaches.
    pub fn run(&self) -> Result<IterationTrace, equation::Error> {
        self.run_observed(())
    }

    /// Runs the selected method, notifying `observer` after each iteration.
    ///
    /// # Errors
    ///
    /// Returns an error if the function or derivative cannot be evaluated
    /// at a point the method reaches.
    pub fn run_observed<Obs>(&self, observer: Obs) -> Result<IterationTrace, equation::Error>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        equation::run_observed(
            &self.params,
            &self.function,
            self.derivative.as_ref(),
            observer,
        )
    }
}

/// Validates the form and prepares a run.
///
/// Fields are checked in form order and the first failure is returned. Once
/// every field is well formed, the method's precondition is checked:
/// `f(a) * f(b) < 0` for the bracketing methods, `f'(x0) != 0` for
/// Newton-Raphson.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the offending field.
pub fn validate(raw: &RawInput) -> Result<Prepared, ValidationError> {
    prepare(raw)
        .inspect(|prepared| {
            debug!(
                method = %prepared.method(),
                function = %prepared.function,
                derivative = ?prepared.derivative.as_ref().map(ToString::to_string),
                "input validated"
            );
        })
        .inspect_err(|err| warn!(field = %err.field, "input rejected: {}", err.kind))
}

fn prepare(raw: &RawInput) -> Result<Prepared, ValidationError> {
    let method: Method = parse(raw, Field::Method, ValidationKind::UnknownMethod)?;

    let function = rootline_expr::parse(required(raw, Field::Expression)?)
        .map_err(|err| ValidationError::new(Field::Expression, ValidationKind::Expression(err)))?;

    let lower = number(raw, Field::Lower)?;
    let upper = if method.needs_bracket() {
        Some(number(raw, Field::Upper)?)
    } else {
        if !raw.upper.trim().is_empty() {
            debug!(upper = raw.upper.trim(), "ignoring b for {method}");
        }
        None
    };

    let tolerance = number(raw, Field::Tolerance)?;
    let max_iters = parse(raw, Field::MaxIterations, |source| {
        ValidationKind::InvalidInteger {
            text: raw.max_iterations.trim().to_owned(),
            source,
        }
    })?;

    let config = Config::new(tolerance, max_iters).map_err(|err| {
        let field = match err {
            ConfigError::Tolerance => Field::Tolerance,
            ConfigError::MaxIters => Field::MaxIterations,
        };
        ValidationError::new(field, err.into())
    })?;

    let params = MethodParameters::new(method, lower, upper, config).map_err(|err| match err {
        ParamsError::MissingUpperBound { .. } => {
            ValidationError::new(Field::Upper, ValidationKind::Missing)
        }
        ParamsError::NonFiniteLower { value } => {
            ValidationError::new(Field::Lower, ValidationKind::NonFinite { value })
        }
        ParamsError::NonFiniteUpper { value } => {
            ValidationError::new(Field::Upper, ValidationKind::NonFinite { value })
        }
    })?;

    let derivative = match params.bracket() {
        Some(bracket) => {
            check_bracket(&function, bracket).map_err(|err| precondition(err, lower))?;
            None
        }
        None => {
            let derivative = function.derivative();
            check_derivative(&derivative, lower).map_err(|err| precondition(err, lower))?;
            Some(derivative)
        }
    };

    Ok(Prepared {
        params,
        function,
        derivative,
    })
}

/// Returns the trimmed text of `field`, or a `Missing` error if it is blank.
fn required(raw: &RawInput, field: Field) -> Result<&str, ValidationError> {
    let text = raw.get(field).trim();
    if text.is_empty() {
        Err(ValidationError::new(field, ValidationKind::Missing))
    } else {
        Ok(text)
    }
}

fn parse<T: FromStr>(
    raw: &RawInput,
    field: Field,
    kind: impl FnOnce(T::Err) -> ValidationKind,
) -> Result<T, ValidationError> {
    required(raw, field)?
        .parse()
        .map_err(|err| ValidationError::new(field, kind(err)))
}

fn number(raw: &RawInput, field: Field) -> Result<f64, ValidationError> {
    parse(raw, field, |source| ValidationKind::InvalidNumber {
        text: raw.get(field).trim().to_owned(),
        source,
    })
}

/// Maps a failed precondition check to the field it implicates.
fn precondition(err: equation::Error, lower: f64) -> ValidationError {
    match err {
        equation::Error::NoSignChange {
            lower,
            upper,
            f_lower,
            f_upper,
        } => ValidationError::new(
            Field::Upper,
            ValidationKind::NoSignChange {
                lower,
                upper,
                f_lower,
                f_upper,
            },
        ),
        equation::Error::ZeroDerivative { x0 } => {
            ValidationError::new(Field::Lower, ValidationKind::ZeroDerivative { x0 })
        }
        equation::Error::InvalidBracket(BracketError::ZeroWidth) => {
            ValidationError::new(Field::Upper, ValidationKind::ZeroWidth)
        }
        equation::Error::Function { x, .. }
        | equation::Error::Derivative { x, .. }
        | equation::Error::NonFiniteResidual { x, .. } => {
            let field = if x == lower { Field::Lower } else { Field::Upper };
            ValidationError::new(field, ValidationKind::Evaluation(err))
        }
        other => ValidationError::new(Field::Expression, ValidationKind::Evaluation(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootline_solvers::equation::Termination;

    fn form(method: &str, expression: &str, lower: &str, upper: &str) -> RawInput {
        RawInput {
            method: method.into(),
            expression: expression.into(),
            lower: lower.into(),
            upper: upper.into(),
            tolerance: "1e-6".into(),
            max_iterations: "50".into(),
        }
    }

    fn rejected(raw: &RawInput) -> ValidationError {
        validate(raw).expect_err("input should be rejected")
    }

    #[test]
    fn prepares_bracketing_run() {
        let prepared = validate(&form("bisection", "x^2 - 4", "0", "5")).expect("valid input");

        assert_eq!(prepared.method(), Method::Bisection);
        assert_eq!(prepared.params().bracket(), Some([0.0, 5.0]));
        assert!(prepared.derivative().is_none());

        let trace = prepared.run().expect("should solve");
        assert_relative_eq!(trace.root().expect("root"), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn prepares_newton_run_with_derivative() {
        let prepared =
            validate(&form("Newton-Raphson", "x^2 - 4", " 1 ", "")).expect("valid input");

        assert_eq!(prepared.params().upper(), None);
        assert_eq!(
            prepared.derivative().map(ToString::to_string).as_deref(),
            Some("2*x")
        );
        assert_eq!(prepared.run().expect("should solve").termination(), Termination::Converged);
    }

    #[test]
    fn newton_ignores_upper() {
        let prepared = validate(&form("newton", "x - 3", "0", "not a number")).expect("valid input");
        assert_eq!(prepared.params().upper(), None);
    }

    #[test]
    fn blank_fields_are_missing() {
        let mut raw = form("bisection", "x", "-1", "1");
        raw.tolerance = "  ".into();

        let err = rejected(&raw);
        assert_eq!(err.field, Field::Tolerance);
        assert!(matches!(err.kind, ValidationKind::Missing));
    }

    #[test]
    fn bracketing_methods_need_b() {
        let err = rejected(&form("false position", "x", "-1", ""));
        assert_eq!(err.field, Field::Upper);
        assert!(matches!(err.kind, ValidationKind::Missing));
    }

    #[test]
    fn reports_unparsable_numbers() {
        let err = rejected(&form("bisection", "x", "one", "1"));
        assert_eq!(err.field, Field::Lower);
        assert!(matches!(err.kind, ValidationKind::InvalidNumber { ref text, .. } if text == "one"));

        let mut raw = form("bisection", "x", "-1", "1");
        raw.max_iterations = "2.5".into();
        let err = rejected(&raw);
        assert_eq!(err.field, Field::MaxIterations);
        assert!(matches!(err.kind, ValidationKind::InvalidInteger { .. }));
    }

    #[test]
    fn reports_unknown_method() {
        let err = rejected(&form("secant", "x", "-1", "1"));
        assert_eq!(err.field, Field::Method);
        assert!(matches!(err.kind, ValidationKind::UnknownMethod(_)));
    }

    #[test]
    fn reports_bad_expression() {
        let err = rejected(&form("bisection", "x^^2", "-1", "1"));
        assert_eq!(err.field, Field::Expression);
        assert!(matches!(err.kind, ValidationKind::Expression(_)));
    }

    #[test]
    fn reports_bad_config() {
        let mut raw = form("bisection", "x", "-1", "1");
        raw.tolerance = "0".into();
        assert_eq!(rejected(&raw).field, Field::Tolerance);

        let mut raw = form("bisection", "x", "-1", "1");
        raw.max_iterations = "0".into();
        let err = rejected(&raw);
        assert_eq!(err.field, Field::MaxIterations);
        assert!(matches!(err.kind, ValidationKind::Config(ConfigError::MaxIters)));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let err = rejected(&form("bisection", "x", "-inf", "1"));
        assert_eq!(err.field, Field::Lower);
        assert!(matches!(err.kind, ValidationKind::NonFinite { .. }));
    }

    #[test]
    fn rejects_bracket_without_sign_change() {
        let err = rejected(&form("bisection", "x^2 + 1", "-1", "1"));

        assert_eq!(err.field, Field::Upper);
        assert!(err.is_precondition());
        match err.kind {
            ValidationKind::NoSignChange {
                f_lower, f_upper, ..
            } => assert_relative_eq!(f_lower * f_upper, 4.0),
            other => panic!("unexpected kind: {other}"),
        }
    }

    #[test]
    fn rejects_zero_derivative_at_guess() {
        let err = rejected(&form("newton-raphson", "x^2", "0", ""));

        assert_eq!(err.field, Field::Lower);
        assert!(matches!(err.kind, ValidationKind::ZeroDerivative { x0 } if x0 == 0.0));
    }

    #[test]
    fn rejects_equal_bounds() {
        let err = rejected(&form("bisection", "x", "1", "1"));
        assert_eq!(err.field, Field::Upper);
        assert!(matches!(err.kind, ValidationKind::ZeroWidth));
    }

    #[test]
    fn reports_undefined_endpoint() {
        let err = rejected(&form("bisection", "ln(x)", "-1", "5"));
        assert_eq!(err.field, Field::Lower);
        assert!(matches!(err.kind, ValidationKind::Evaluation(_)));
    }

    #[test]
    fn prepared_runs_are_repeatable() {
        let prepared = validate(&form("false-position", "cos(x) - x", "0", "1")).expect("valid");
        assert_eq!(
            prepared.run().expect("first run"),
            prepared.run().expect("second run")
        );
    }
}
