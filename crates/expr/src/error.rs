use thiserror::Error;

/// Errors that can occur while parsing an expression.
///
/// Positions are byte offsets into the source text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("invalid number '{text}' at position {position}")]
    InvalidNumber { text: String, position: usize },

    #[error("unexpected {found} at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unknown identifier '{name}' at position {position}, the only variable is 'x'")]
    UnknownIdentifier { name: String, position: usize },

    #[error("unknown function '{name}' at position {position}")]
    UnknownFunction { name: String, position: usize },

    #[error("unclosed '(' at position {position}")]
    UnclosedParen { position: usize },
}

/// Errors that can occur when evaluating an expression at a point where it
/// is mathematically undefined.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("logarithm of non-positive value {value}")]
    LogOfNonPositive { value: f64 },

    #[error("square root of negative value {value}")]
    SqrtOfNegative { value: f64 },

    #[error("{function} is undefined at {value}")]
    OutsideDomain { function: &'static str, value: f64 },

    #[error("{base} raised to non-integer power {exponent} is not real")]
    UndefinedPower { base: f64, exponent: f64 },

    #[error("expression evaluates to a non-finite value at x = {x}")]
    NonFinite { x: f64 },
}
