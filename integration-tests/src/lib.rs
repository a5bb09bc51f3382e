//! Shared fixtures for the end-to-end scenarios.

use rootline_input::{Prepared, RawInput, ValidationError, validate};

/// Builds a fully populated form.
#[must_use]
pub fn form(
    method: &str,
    expression: &str,
    lower: &str,
    upper: &str,
    tolerance: &str,
    max_iterations: &str,
) -> RawInput {
    RawInput {
        method: method.into(),
        expression: expression.into(),
        lower: lower.into(),
        upper: upper.into(),
        tolerance: tolerance.into(),
        max_iterations: max_iterations.into(),
    }
}

/// Validates a form with the default tolerance and limit used by the
/// scenarios (`1e-6`, 50 iterations).
///
/// # Errors
///
/// Returns the validation failure for the form.
pub fn prepare(
    method: &str,
    expression: &str,
    lower: &str,
    upper: &str,
) -> Result<Prepared, ValidationError> {
    validate(&form(method, expression, lower, upper, "1e-6", "50"))
}
