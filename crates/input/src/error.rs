use std::num::{ParseFloatError, ParseIntError};

use rootline_expr::ParseError;
use rootline_solvers::equation::{self, ConfigError, UnknownMethod};
use thiserror::Error;

use crate::Field;

/// Input that cannot be turned into a run, and the field responsible.
#[derive(Debug, Error)]
#[error("{field}: {kind}")]
pub struct ValidationError {
    pub field: Field,
    #[source]
    pub kind: ValidationKind,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: Field, kind: ValidationKind) -> Self {
        Self { field, kind }
    }

    /// Returns true if the input was well formed but the function violates
    /// a method precondition at the given bounds.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self.kind,
            ValidationKind::NoSignChange { .. } | ValidationKind::ZeroDerivative { .. }
        )
    }
}

/// Why a field was rejected.
#[derive(Debug, Error)]
pub enum ValidationKind {
    #[error("required")]
    Missing,

    #[error("'{text}' is not a number")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("'{text}' is not a whole number")]
    InvalidInteger {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("must be finite, got {value}")]
    NonFinite { value: f64 },

    #[error(transparent)]
    UnknownMethod(#[from] UnknownMethod),

    #[error("invalid expression: {0}")]
    Expression(#[source] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("a and b must differ")]
    ZeroWidth,

    #[error("f(a) * f(b) must be negative, got f({lower}) = {f_lower} and f({upper}) = {f_upper}")]
    NoSignChange {
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_upper: f64,
    },

    #[error("derivative must not be zero at x0 = {x0}")]
    ZeroDerivative { x0: f64 },

    #[error("f cannot be evaluated here: {0}")]
    Evaluation(#[source] equation::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_field() {
        let err = ValidationError::new(Field::MaxIterations, ValidationKind::Missing);
        assert_eq!(err.to_string(), "max iterations: required");
    }

    #[test]
    fn precondition_kinds() {
        let sign = ValidationError::new(
            Field::Upper,
            ValidationKind::NoSignChange {
                lower: -1.0,
                upper: 1.0,
                f_lower: 2.0,
                f_upper: 2.0,
            },
        );
        assert!(sign.is_precondition());
        assert!(!ValidationError::new(Field::Lower, ValidationKind::Missing).is_precondition());
    }
}
