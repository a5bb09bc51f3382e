use std::{fmt, str::FromStr};

use rootline_core::Function;

use crate::{DomainError, Expr, ParseError, derivative::derivative, parser::parse_expr};

/// A parsed expression in `x`, callable as a [`Function`].
///
/// Evaluation fails with a [`DomainError`] wherever the expression is
/// undefined or produces a non-finite value.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    expr: Expr,
}

impl Formula {
    /// Wraps an expression tree.
    #[must_use]
    pub fn new(expr: Expr) -> Self {
        Self { expr }
    }

    /// Returns the underlying expression tree.
    #[must_use]
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Returns the symbolic derivative with respect to `x`.
    #[must_use]
    pub fn derivative(&self) -> Formula {
        Formula::new(derivative(&self.expr))
    }

    /// Evaluates the formula at `x`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the formula is undefined at `x` or the
    /// result is not finite.
    pub fn eval(&self, x: f64) -> Result<f64, DomainError> {
        let value = self.expr.eval(x)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(DomainError::NonFinite { x })
        }
    }
}

impl Function for Formula {
    type Error = DomainError;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        self.eval(x)
    }
}

impl FromStr for Formula {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_expr(s).map(Formula::new)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.expr, f)
    }
}
