//! Symbolic differentiation with respect to `x`.
//!
//! Results are built through small folding constructors so that derivatives
//! of polynomials stay readable (`2*x` rather than `2*x^1*1`). Folding only
//! removes identities and combines literal constants.

use crate::{Expr, Func};

/// Returns the derivative of `expr` with respect to the free variable.
#[must_use]
pub fn derivative(expr: &Expr) -> Expr {
    match expr {
        Expr::Num(_) => Expr::Num(0.0),
        Expr::Var => Expr::Num(1.0),
        Expr::Neg(inner) => neg(derivative(inner)),
        Expr::Add(u, v) => add(derivative(u), derivative(v)),
        Expr::Sub(u, v) => sub(derivative(u), derivative(v)),
        Expr::Mul(u, v) => add(
            mul(derivative(u), (**v).clone()),
            mul((**u).clone(), derivative(v)),
        ),
        Expr::Div(u, v) => div(
            sub(
                mul(derivative(u), (**v).clone()),
                mul((**u).clone(), derivative(v)),
            ),
            pow((**v).clone(), Expr::Num(2.0)),
        ),
        Expr::Pow(base, exponent) => power_rule(base, exponent),
        Expr::Call(func, arg) => mul(outer_derivative(*func, arg), derivative(arg)),
    }
}

/// Derivative of `base^exponent`.
fn power_rule(base: &Expr, exponent: &Expr) -> Expr {
    let u = base.clone();
    let v = exponent.clone();

    if exponent.is_constant() {
        // v * u^(v - 1) * u'
        let reduced = sub(v.clone(), Expr::Num(1.0));
        return mul(mul(v, pow(u, reduced)), derivative(base));
    }

    if base.is_constant() {
        // u^v * ln(u) * v'
        let ln_u = call(Func::Ln, u.clone());
        return mul(mul(pow(u, v), ln_u), derivative(exponent));
    }

    // u^v * (v' * ln(u) + v * u' / u)
    let ln_u = call(Func::Ln, u.clone());
    let inner = add(
        mul(derivative(exponent), ln_u),
        div(mul(v.clone(), derivative(base)), u.clone()),
    );
    mul(pow(u, v), inner)
}

/// Derivative of `func` evaluated at `arg`, before the chain rule factor.
fn outer_derivative(func: Func, arg: &Expr) -> Expr {
    let u = arg.clone();
    match func {
        Func::Sin => call(Func::Cos, u),
        Func::Cos => neg(call(Func::Sin, u)),
        Func::Tan => div(Expr::Num(1.0), pow(call(Func::Cos, u), Expr::Num(2.0))),
        Func::Asin => div(
            Expr::Num(1.0),
            call(Func::Sqrt, sub(Expr::Num(1.0), pow(u, Expr::Num(2.0)))),
        ),
        Func::Acos => neg(div(
            Expr::Num(1.0),
            call(Func::Sqrt, sub(Expr::Num(1.0), pow(u, Expr::Num(2.0)))),
        )),
        Func::Atan => div(Expr::Num(1.0), add(Expr::Num(1.0), pow(u, Expr::Num(2.0)))),
        Func::Sinh => call(Func::Cosh, u),
        Func::Cosh => call(Func::Sinh, u),
        Func::Tanh => div(Expr::Num(1.0), pow(call(Func::Cosh, u), Expr::Num(2.0))),
        Func::Exp => call(Func::Exp, u),
        Func::Ln => div(Expr::Num(1.0), u),
        Func::Log10 => div(Expr::Num(1.0), mul(u, Expr::Num(std::f64::consts::LN_10))),
        Func::Sqrt => div(Expr::Num(1.0), mul(Expr::Num(2.0), call(Func::Sqrt, u))),
        Func::Abs => call(Func::Sign, u),
        Func::Sign => Expr::Num(0.0),
    }
}

fn is_num(expr: &Expr, value: f64) -> bool {
    matches!(expr, Expr::Num(n) if *n == value)
}

fn neg(u: Expr) -> Expr {
    match u {
        Expr::Num(n) => Expr::Num(-n),
        Expr::Neg(inner) => *inner,
        u => Expr::Neg(Box::new(u)),
    }
}

fn add(u: Expr, v: Expr) -> Expr {
    match (u, v) {
        (Expr::Num(a), Expr::Num(b)) => Expr::Num(a + b),
        (u, v) if is_num(&u, 0.0) => v,
        (u, v) if is_num(&v, 0.0) => u,
        (u, Expr::Neg(v)) => Expr::Sub(Box::new(u), v),
        (u, v) => Expr::Add(Box::new(u), Box::new(v)),
    }
}

fn sub(u: Expr, v: Expr) -> Expr {
    match (u, v) {
        (Expr::Num(a), Expr::Num(b)) => Expr::Num(a - b),
        (u, v) if is_num(&v, 0.0) => u,
        (u, v) if is_num(&u, 0.0) => neg(v),
        (u, Expr::Neg(v)) => Expr::Add(Box::new(u), v),
        (u, v) => Expr::Sub(Box::new(u), Box::new(v)),
    }
}

fn mul(u: Expr, v: Expr) -> Expr {
    match (u, v) {
        (Expr::Num(a), Expr::Num(b)) => Expr::Num(a * b),
        (u, v) if is_num(&u, 0.0) || is_num(&v, 0.0) => Expr::Num(0.0),
        (u, v) if is_num(&u, 1.0) => v,
        (u, v) if is_num(&v, 1.0) => u,
        (u, v) if is_num(&u, -1.0) => neg(v),
        (u, v) if is_num(&v, -1.0) => neg(u),
        // Keep numeric factors in front: x*2 -> 2*x
        (u, Expr::Num(b)) => Expr::Mul(Box::new(Expr::Num(b)), Box::new(u)),
        (u, v) => Expr::Mul(Box::new(u), Box::new(v)),
    }
}

fn div(u: Expr, v: Expr) -> Expr {
    match (u, v) {
        (u, v) if is_num(&v, 1.0) => u,
        (u, v) if is_num(&u, 0.0) && !is_num(&v, 0.0) => Expr::Num(0.0),
        (u, v) => Expr::Div(Box::new(u), Box::new(v)),
    }
}

fn pow(u: Expr, v: Expr) -> Expr {
    match (u, v) {
        (_, v) if is_num(&v, 0.0) => Expr::Num(1.0),
        (u, v) if is_num(&v, 1.0) => u,
        (u, v) => Expr::Pow(Box::new(u), Box::new(v)),
    }
}

fn call(func: Func, u: Expr) -> Expr {
    Expr::Call(func, Box::new(u))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::parser::parse_expr;

    fn d(text: &str) -> Expr {
        derivative(&parse_expr(text).expect("should parse"))
    }

    /// Central difference used to check symbolic results numerically.
    fn numeric(text: &str, x: f64) -> f64 {
        let expr = parse_expr(text).expect("should parse");
        let h = 1e-6;
        let forward = expr.eval(x + h).expect("defined");
        let backward = expr.eval(x - h).expect("defined");
        (forward - backward) / (2.0 * h)
    }

    #[test]
    fn polynomial_derivatives_are_folded() {
        assert_eq!(d("x^2 - 4").to_string(), "2*x");
        assert_eq!(d("3*x").to_string(), "3");
        assert_eq!(d("x").to_string(), "1");
        assert_eq!(d("7").to_string(), "0");
    }

    #[test]
    fn matches_finite_differences() {
        let cases = [
            ("x^3 - 2*x + 1", 1.3),
            ("sin(x)*cos(x)", 0.4),
            ("exp(-x^2)", 0.7),
            ("ln(x)/x", 2.0),
            ("sqrt(x + 1)", 3.0),
            ("tan(x)", 0.3),
            ("atan(2*x)", 0.5),
            ("asin(x/2)", 0.5),
            ("acos(x/2)", 0.5),
            ("x^x", 1.5),
            ("2^x", 0.8),
            ("log10(x^2 + 1)", 1.1),
            ("sinh(x) - tanh(x) + cosh(x)", 0.6),
            ("abs(x - 3)", 1.0),
            ("1/(x - 1)", 3.0),
        ];

        for (text, x) in cases {
            let symbolic = d(text).eval(x).expect("derivative defined");
            assert_relative_eq!(symbolic, numeric(text, x), epsilon = 1e-5, max_relative = 1e-5);
        }
    }

    #[test]
    fn derivative_of_zero_power_is_zero() {
        assert_eq!(d("x^0").to_string(), "0");
    }

    #[test]
    fn derivative_can_be_undefined_where_function_is_defined() {
        // d/dx sqrt(x) = 1/(2*sqrt(x)) is undefined at 0.
        let expr = d("sqrt(x)");
        assert!(expr.eval(0.0).is_err());
    }
}
