use std::error::Error as StdError;

use thiserror::Error;

use super::{BracketError, ConfigError, IterationRecord, Method};

/// Errors that can occur while running a root-finding solver.
///
/// Precondition failures (`InvalidBracket`, `NoSignChange`, `ZeroDerivative`,
/// and friends) happen before the first iteration. Evaluation failures during
/// the run carry the records gathered up to that point; see
/// [`Error::records`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("initial guess must be finite, got {x0}")]
    NonFiniteGuess { x0: f64 },

    #[error("no sign change in bracket: f({lower}) = {f_lower}, f({upper}) = {f_upper}")]
    NoSignChange {
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_upper: f64,
    },

    #[error("derivative is zero at the initial guess x0 = {x0}")]
    ZeroDerivative { x0: f64 },

    #[error("{method} requires an upper bound")]
    MissingUpperBound { method: Method },

    #[error("Newton-Raphson requires a derivative")]
    MissingDerivative,

    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
        records: Vec<IterationRecord>,
    },

    #[error("derivative evaluation failed at x = {x}")]
    Derivative {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
        records: Vec<IterationRecord>,
    },

    #[error("secant is flat: f({lower}) and f({upper}) are both {value}")]
    FlatSecant {
        lower: f64,
        upper: f64,
        value: f64,
        records: Vec<IterationRecord>,
    },

    #[error("Newton step from x = {x} left the finite range")]
    Diverged {
        x: f64,
        records: Vec<IterationRecord>,
    },

    #[error("non-finite value {residual} at x = {x}")]
    NonFiniteResidual {
        x: f64,
        residual: f64,
        records: Vec<IterationRecord>,
    },
}

impl Error {
    /// Returns the records gathered before the run failed.
    ///
    /// Empty for errors raised before the first iteration.
    #[must_use]
    pub fn records(&self) -> &[IterationRecord] {
        match self {
            Error::Function { records, .. }
            | Error::Derivative { records, .. }
            | Error::FlatSecant { records, .. }
            | Error::Diverged { records, .. }
            | Error::NonFiniteResidual { records, .. } => records,
            _ => &[],
        }
    }

    /// Returns true if the error was raised before any iteration ran
    /// because an input precondition does not hold.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::InvalidConfig(_)
                | Error::InvalidBracket(_)
                | Error::NonFiniteGuess { .. }
                | Error::NoSignChange { .. }
                | Error::ZeroDerivative { .. }
                | Error::MissingUpperBound { .. }
                | Error::MissingDerivative
        )
    }
}
