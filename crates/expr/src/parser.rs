//! Recursive-descent parser for the expression grammar.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('^' unary)?
//! primary := number | 'x' | 'pi' | 'e' | name '(' expr ')' | '(' expr ')'
//! ```
//!
//! Power binds tighter than unary minus and is right associative, so `-x^2`
//! is `-(x^2)` and `2^3^2` is `2^(3^2)`.

use std::f64::consts::{E, PI};

use crate::{
    Expr, Func, ParseError,
    token::{Spanned, Token, tokenize},
};

/// Parses `text` into an expression tree.
///
/// # Errors
///
/// Returns a [`ParseError`] if `text` is not a valid expression in `x`.
pub(crate) fn parse_expr(text: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expr()?;

    match parser.peek() {
        None => Ok(expr),
        Some(spanned) => Err(unexpected(spanned)),
    }
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Spanned> {
        let spanned = self.tokens.get(self.pos).cloned();
        if spanned.is_some() {
            self.pos += 1;
        }
        spanned
    }

    /// Consumes the next token if it equals `token`.
    fn eat(&mut self, token: &Token) -> bool {
        if self.peek().is_some_and(|s| &s.token == token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.term()?;
        loop {
            if self.eat(&Token::Plus) {
                lhs = Expr::Add(Box::new(lhs), Box::new(self.term()?));
            } else if self.eat(&Token::Minus) {
                lhs = Expr::Sub(Box::new(lhs), Box::new(self.term()?));
            } else {
                return Ok(lhs);
            }
        }
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.unary()?;
        loop {
            if self.eat(&Token::Star) {
                lhs = Expr::Mul(Box::new(lhs), Box::new(self.unary()?));
            } else if self.eat(&Token::Slash) {
                lhs = Expr::Div(Box::new(lhs), Box::new(self.unary()?));
            } else {
                return Ok(lhs);
            }
        }
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.eat(&Token::Minus) {
            return Ok(Expr::Neg(Box::new(self.unary()?)));
        }
        if self.eat(&Token::Plus) {
            return self.unary();
        }
        self.power()
    }

    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.primary()?;
        if self.eat(&Token::Caret) {
            let exponent = self.unary()?;
            return Ok(Expr::Pow(Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let Some(Spanned { token, position }) = self.next() else {
            return Err(ParseError::UnexpectedEnd {
                expected: "a number, 'x', a function, or '('",
            });
        };

        match token {
            Token::Number(value) => Ok(Expr::Num(value)),
            Token::LParen => {
                let inner = self.expr()?;
                self.close_paren(position)?;
                Ok(inner)
            }
            Token::Ident(name) => self.identifier(name, position),
            token => Err(unexpected(&Spanned { token, position })),
        }
    }

    fn identifier(&mut self, name: String, position: usize) -> Result<Expr, ParseError> {
        if let Some(open) = self.peek().filter(|s| s.token == Token::LParen) {
            let open = open.position;
            let Some(func) = Func::from_name(&name) else {
                return Err(ParseError::UnknownFunction { name, position });
            };
            self.pos += 1;
            let arg = self.expr()?;
            self.close_paren(open)?;
            return Ok(Expr::Call(func, Box::new(arg)));
        }

        match name.as_str() {
            "x" => Ok(Expr::Var),
            "pi" => Ok(Expr::Num(PI)),
            "e" | "E" => Ok(Expr::Num(E)),
            _ if Func::from_name(&name).is_some() => Err(match self.peek() {
                Some(spanned) => unexpected(spanned),
                None => ParseError::UnexpectedEnd {
                    expected: "'(' after function name",
                },
            }),
            _ => Err(ParseError::UnknownIdentifier { name, position }),
        }
    }

    fn close_paren(&mut self, open: usize) -> Result<(), ParseError> {
        match self.next() {
            Some(Spanned {
                token: Token::RParen,
                ..
            }) => Ok(()),
            Some(spanned) => Err(unexpected(&spanned)),
            None => Err(ParseError::UnclosedParen { position: open }),
        }
    }
}

fn unexpected(spanned: &Spanned) -> ParseError {
    ParseError::UnexpectedToken {
        found: spanned.token.to_string(),
        position: spanned.position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval(text: &str, x: f64) -> f64 {
        parse_expr(text)
            .expect("should parse")
            .eval(x)
            .expect("should be defined")
    }

    #[test]
    fn respects_precedence() {
        assert_relative_eq!(eval("1 + 2 * 3", 0.0), 7.0);
        assert_relative_eq!(eval("(1 + 2) * 3", 0.0), 9.0);
        assert_relative_eq!(eval("8 / 4 / 2", 0.0), 1.0);
        assert_relative_eq!(eval("10 - 4 - 3", 0.0), 3.0);
    }

    #[test]
    fn power_is_right_associative_and_binds_tighter_than_minus() {
        assert_relative_eq!(eval("2^3^2", 0.0), 512.0);
        assert_relative_eq!(eval("-x^2", 3.0), -9.0);
        assert_relative_eq!(eval("2^-1", 0.0), 0.5);
        assert_relative_eq!(eval("x**2", 5.0), 25.0);
    }

    #[test]
    fn functions_and_constants() {
        assert_relative_eq!(eval("sin(pi/2)", 0.0), 1.0);
        assert_relative_eq!(eval("ln(e)", 0.0), 1.0);
        assert_relative_eq!(eval("log(x)", E), 1.0);
        assert_relative_eq!(eval("exp(0) + sqrt(16)", 0.0), 5.0);
        assert_relative_eq!(eval("cos(x)^2 + sin(x)^2", 0.8), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn unary_plus_and_minus_chain() {
        assert_relative_eq!(eval("--x", 2.0), 2.0);
        assert_relative_eq!(eval("+x - -1", 2.0), 3.0);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(parse_expr(""), Err(ParseError::Empty));
        assert_eq!(parse_expr("   "), Err(ParseError::Empty));
    }

    #[test]
    fn rejects_other_variables() {
        assert_eq!(
            parse_expr("x + y"),
            Err(ParseError::UnknownIdentifier {
                name: "y".into(),
                position: 4
            })
        );
    }

    #[test]
    fn rejects_unknown_functions() {
        assert!(matches!(
            parse_expr("foo(x)"),
            Err(ParseError::UnknownFunction { .. })
        ));
    }

    #[test]
    fn rejects_function_without_argument() {
        assert!(parse_expr("sin").is_err());
        assert!(parse_expr("sin + 1").is_err());
    }

    #[test]
    fn rejects_dangling_operators() {
        assert!(matches!(
            parse_expr("x +"),
            Err(ParseError::UnexpectedEnd { .. })
        ));
        assert!(matches!(
            parse_expr("* x"),
            Err(ParseError::UnexpectedToken { position: 0, .. })
        ));
    }

    #[test]
    fn rejects_unbalanced_parentheses() {
        assert_eq!(
            parse_expr("(x + 1"),
            Err(ParseError::UnclosedParen { position: 0 })
        );
        assert!(matches!(
            parse_expr("x + 1)"),
            Err(ParseError::UnexpectedToken { position: 5, .. })
        ));
    }

    #[test]
    fn rejects_implicit_multiplication() {
        assert!(matches!(
            parse_expr("2x"),
            Err(ParseError::UnexpectedToken { position: 1, .. })
        ));
    }
}
