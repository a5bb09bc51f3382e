use rootline_core::Function;
use thiserror::Error;

use super::Error;

/// Errors that can occur when validating bracket bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
}

/// Ordered bracket endpoints with their function values.
///
/// Produced by [`check_bracket`], which guarantees
/// `lower < upper` and `f_lower * f_upper < 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoints {
    pub lower: f64,
    pub upper: f64,
    pub f_lower: f64,
    pub f_upper: f64,
}

/// Checks the bracketing precondition for `f` on `bracket`.
///
/// Endpoints may be given in either order; they are returned sorted.
///
/// # Errors
///
/// - [`Error::InvalidBracket`] if an endpoint is non-finite or both are equal.
/// - [`Error::Function`] or [`Error::NonFiniteResidual`] if `f` cannot be
///   evaluated at an endpoint.
/// - [`Error::NoSignChange`] if `f(lower) * f(upper)` is not negative.
pub fn check_bracket<F: Function>(f: &F, bracket: [f64; 2]) -> Result<Endpoints, Error> {
    let [lower, upper] = order(bracket)?;

    let f_lower = endpoint_value(f, lower)?;
    let f_upper = endpoint_value(f, upper)?;

    if f_lower * f_upper >= 0.0 {
        return Err(Error::NoSignChange {
            lower,
            upper,
            f_lower,
            f_upper,
        });
    }

    Ok(Endpoints {
        lower,
        upper,
        f_lower,
        f_upper,
    })
}

/// Validates and orders the bracket endpoints.
fn order(bracket: [f64; 2]) -> Result<[f64; 2], BracketError> {
    let [a, b] = bracket;

    if !a.is_finite() || !b.is_finite() {
        return Err(BracketError::NonFinite);
    }

    if a == b {
        return Err(BracketError::ZeroWidth);
    }

    Ok(if a < b { [a, b] } else { [b, a] })
}

fn endpoint_value<F: Function>(f: &F, x: f64) -> Result<f64, Error> {
    let value = f.call(x).map_err(|source| Error::Function {
        x,
        source: Box::new(source),
        records: Vec::new(),
    })?;

    if !value.is_finite() {
        return Err(Error::NonFiniteResidual {
            x,
            residual: value,
            records: Vec::new(),
        });
    }

    Ok(value)
}
