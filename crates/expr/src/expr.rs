use std::fmt;

use crate::DomainError;

/// A built-in function of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    /// Natural logarithm, spelled `ln` or `log`.
    Ln,
    Log10,
    Sqrt,
    Abs,
    /// Sign of the argument: -1, 0, or 1.
    Sign,
}

impl Func {
    /// Looks up a function by the name used in expression text.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let func = match name {
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "asin" => Func::Asin,
            "acos" => Func::Acos,
            "atan" => Func::Atan,
            "sinh" => Func::Sinh,
            "cosh" => Func::Cosh,
            "tanh" => Func::Tanh,
            "exp" => Func::Exp,
            "ln" | "log" => Func::Ln,
            "log10" => Func::Log10,
            "sqrt" => Func::Sqrt,
            "abs" => Func::Abs,
            "sign" => Func::Sign,
            _ => return None,
        };
        Some(func)
    }

    /// Returns the canonical name of the function.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Sinh => "sinh",
            Func::Cosh => "cosh",
            Func::Tanh => "tanh",
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Log10 => "log10",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
            Func::Sign => "sign",
        }
    }

    /// Applies the function, rejecting arguments outside its real domain.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the function is undefined at `value`.
    pub fn apply(self, value: f64) -> Result<f64, DomainError> {
        let result = match self {
            Func::Sin => value.sin(),
            Func::Cos => value.cos(),
            Func::Tan => value.tan(),
            Func::Asin | Func::Acos if !(-1.0..=1.0).contains(&value) => {
                return Err(DomainError::OutsideDomain {
                    function: self.name(),
                    value,
                });
            }
            Func::Asin => value.asin(),
            Func::Acos => value.acos(),
            Func::Atan => value.atan(),
            Func::Sinh => value.sinh(),
            Func::Cosh => value.cosh(),
            Func::Tanh => value.tanh(),
            Func::Exp => value.exp(),
            Func::Ln | Func::Log10 if value <= 0.0 => {
                return Err(DomainError::LogOfNonPositive { value });
            }
            Func::Ln => value.ln(),
            Func::Log10 => value.log10(),
            Func::Sqrt if value < 0.0 => return Err(DomainError::SqrtOfNegative { value }),
            Func::Sqrt => value.sqrt(),
            Func::Abs => value.abs(),
            Func::Sign if value == 0.0 => 0.0,
            Func::Sign => value.signum(),
        };
        Ok(result)
    }
}

/// An expression tree in the single free variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant.
    Num(f64),
    /// The free variable `x`.
    Var,
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Call(Func, Box<Expr>),
}

impl Expr {
    /// Evaluates the expression with the free variable bound to `x`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if any subexpression is undefined at `x`.
    pub fn eval(&self, x: f64) -> Result<f64, DomainError> {
        match self {
            Expr::Num(value) => Ok(*value),
            Expr::Var => Ok(x),
            Expr::Neg(inner) => Ok(-inner.eval(x)?),
            Expr::Add(lhs, rhs) => Ok(lhs.eval(x)? + rhs.eval(x)?),
            Expr::Sub(lhs, rhs) => Ok(lhs.eval(x)? - rhs.eval(x)?),
            Expr::Mul(lhs, rhs) => Ok(lhs.eval(x)? * rhs.eval(x)?),
            Expr::Div(lhs, rhs) => {
                let numerator = lhs.eval(x)?;
                let denominator = rhs.eval(x)?;
                if denominator == 0.0 {
                    return Err(DomainError::DivisionByZero);
                }
                Ok(numerator / denominator)
            }
            Expr::Pow(base, exponent) => power(base.eval(x)?, exponent.eval(x)?),
            Expr::Call(func, arg) => func.apply(arg.eval(x)?),
        }
    }

    /// Returns true if the expression does not depend on `x`.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        match self {
            Expr::Num(_) => true,
            Expr::Var => false,
            Expr::Neg(inner) | Expr::Call(_, inner) => inner.is_constant(),
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs) => lhs.is_constant() && rhs.is_constant(),
        }
    }

    /// Binding strength used when printing.
    fn precedence(&self) -> u8 {
        match self {
            Expr::Add(..) | Expr::Sub(..) => 1,
            Expr::Mul(..) | Expr::Div(..) => 2,
            Expr::Neg(_) => 3,
            Expr::Num(value) if value.is_sign_negative() => 3,
            Expr::Pow(..) => 4,
            Expr::Num(_) | Expr::Var | Expr::Call(..) => 5,
        }
    }

    fn fmt_child(&self, f: &mut fmt::Formatter<'_>, min_precedence: u8) -> fmt::Result {
        if self.precedence() < min_precedence {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

/// Raises `base` to `exponent` over the reals.
fn power(base: f64, exponent: f64) -> Result<f64, DomainError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(DomainError::DivisionByZero);
    }

    #[allow(clippy::cast_possible_truncation)]
    if exponent.fract() == 0.0 && exponent.abs() <= f64::from(i32::MAX) {
        return Ok(base.powi(exponent as i32));
    }

    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(DomainError::UndefinedPower { base, exponent });
    }

    Ok(base.powf(exponent))
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(value) => write!(f, "{value}"),
            Expr::Var => f.write_str("x"),
            Expr::Neg(inner) => {
                f.write_str("-")?;
                inner.fmt_child(f, 3)
            }
            Expr::Add(lhs, rhs) => {
                lhs.fmt_child(f, 1)?;
                f.write_str(" + ")?;
                rhs.fmt_child(f, 1)
            }
            Expr::Sub(lhs, rhs) => {
                lhs.fmt_child(f, 1)?;
                f.write_str(" - ")?;
                rhs.fmt_child(f, 2)
            }
            Expr::Mul(lhs, rhs) => {
                lhs.fmt_child(f, 2)?;
                f.write_str("*")?;
                rhs.fmt_child(f, 3)
            }
            Expr::Div(lhs, rhs) => {
                lhs.fmt_child(f, 2)?;
                f.write_str("/")?;
                rhs.fmt_child(f, 3)
            }
            Expr::Pow(base, exponent) => {
                base.fmt_child(f, 5)?;
                f.write_str("^")?;
                exponent.fmt_child(f, 4)
            }
            Expr::Call(func, arg) => write!(f, "{}({arg})", func.name()),
        }
    }
}
