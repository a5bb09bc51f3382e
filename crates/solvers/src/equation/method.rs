use std::{fmt, str::FromStr};

use thiserror::Error;

use super::Config;

/// The available root-finding methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Method {
    Bisection,
    FalsePosition,
    NewtonRaphson,
}

impl Method {
    /// All methods, in presentation order.
    pub const ALL: [Method; 3] = [
        Method::Bisection,
        Method::FalsePosition,
        Method::NewtonRaphson,
    ];

    /// Returns the human-readable name of the method.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Method::Bisection => "Bisection",
            Method::FalsePosition => "False Position",
            Method::NewtonRaphson => "Newton-Raphson",
        }
    }

    /// Returns true if the method needs a sign-changing bracket.
    #[must_use]
    pub fn needs_bracket(self) -> bool {
        matches!(self, Method::Bisection | Method::FalsePosition)
    }

    /// Returns true if the method needs the derivative of the function.
    #[must_use]
    pub fn needs_derivative(self) -> bool {
        matches!(self, Method::NewtonRaphson)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a method name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown method '{0}', expected bisection, false-position, or newton-raphson")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    /// Parses a method name, ignoring case and treating spaces and
    /// underscores as hyphens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '_' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "bisection" | "bisect" => Ok(Method::Bisection),
            "false-position" | "regula-falsi" => Ok(Method::FalsePosition),
            "newton-raphson" | "newton" => Ok(Method::NewtonRaphson),
            _ => Err(UnknownMethod(s.to_owned())),
        }
    }
}

/// Errors that can occur when assembling [`MethodParameters`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParamsError {
    #[error("{method} requires an upper bound")]
    MissingUpperBound { method: Method },

    #[error("lower bound must be finite, got {value}")]
    NonFiniteLower { value: f64 },

    #[error("upper bound must be finite, got {value}")]
    NonFiniteUpper { value: f64 },
}

/// A validated description of one solver run.
///
/// For Newton-Raphson `lower` is the initial guess and `upper` is always
/// `None`; any supplied upper bound is dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodParameters {
    method: Method,
    lower: f64,
    upper: Option<f64>,
    config: Config,
}

impl MethodParameters {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if a bracketing method has no upper bound or if a
    /// used bound is not finite.
    pub fn new(
        method: Method,
        lower: f64,
        upper: Option<f64>,
        config: Config,
    ) -> Result<Self, ParamsError> {
        if !lower.is_finite() {
            return Err(ParamsError::NonFiniteLower { value: lower });
        }

        let upper = if method.needs_bracket() {
            let upper = upper.ok_or(ParamsError::MissingUpperBound { method })?;
            if !upper.is_finite() {
                return Err(ParamsError::NonFiniteUpper { value: upper });
            }
            Some(upper)
        } else {
            None
        };

        Ok(Self {
            method,
            lower,
            upper,
            config,
        })
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the lower bound, or the initial guess for Newton-Raphson.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> Option<f64> {
        self.upper
    }

    /// Returns `[lower, upper]` for bracketing methods.
    #[must_use]
    pub fn bracket(&self) -> Option<[f64; 2]> {
        self.upper.map(|upper| [self.lower, upper])
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.config.tolerance()
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.config.max_iters()
    }
}
