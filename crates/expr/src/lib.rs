//! Single-variable expressions for rootline.
//!
//! Turns text such as `"x^2 - 4"` into a [`Formula`] that can be called as a
//! [`Function`], and produces its symbolic derivative for Newton-Raphson.
//!
//! # Syntax
//!
//! - Literals: `2`, `0.5`, `.5`, `1e-6`
//! - Variable: `x`; constants `pi` and `e`
//! - Operators: `+ - * /`, power `^` or `**` (right associative), unary `-`
//! - Functions: `sin cos tan asin acos atan sinh cosh tanh exp ln log log10
//!   sqrt abs sign` (`log` is the natural logarithm)
//!
//! # Example
//!
//! ```
//! use rootline_core::Function;
//!
//! let f = rootline_expr::parse("x^2 - 4").unwrap();
//! let df = rootline_expr::differentiate("x^2 - 4").unwrap();
//!
//! assert_eq!(f.call(3.0), Ok(5.0));
//! assert_eq!(df.call(3.0), Ok(6.0));
//! assert_eq!(df.to_string(), "2*x");
//! ```
//!
//! [`Function`]: rootline_core::Function

mod derivative;
mod error;
mod expr;
mod formula;
mod parser;
mod token;

pub use derivative::derivative;
pub use error::{DomainError, ParseError};
pub use expr::{Expr, Func};
pub use formula::Formula;

/// Parses `text` into a callable formula.
///
/// # Errors
///
/// Returns a [`ParseError`] if `text` is not a valid expression in `x`.
pub fn parse(text: &str) -> Result<Formula, ParseError> {
    text.parse()
}

/// Parses `text` and returns the derivative of the expression with respect
/// to `x`, as a callable formula.
///
/// # Errors
///
/// Returns a [`ParseError`] under the same conditions as [`parse`].
pub fn differentiate(text: &str) -> Result<Formula, ParseError> {
    parse(text).map(|formula| formula.derivative())
}
