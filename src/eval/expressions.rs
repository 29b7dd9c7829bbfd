//! Expression trees for constant folding
//!
//! Expression text is parsed once into an [`Expr`] and then evaluated against
//! a [`VariableTable`]. Names are resolved by lookup at evaluation time.
//!
//! # Grouping
//!
//! Each precedence level splits its input at the *rightmost* operator of that
//! level. The left part is parsed again at the same level and the right part
//! at the next tighter level:
//!
//! ```text
//! additive       ::= additive ('+' | '-') multiplicative | multiplicative
//! multiplicative ::= multiplicative ('*' | '/') factor   | factor
//! factor         ::= digits | letters
//! ```
//!
//! so `10-2+1` is `(10-2)+1` and `8/2/2` is `(8/2)/2`. There are no
//! parentheses and no unary minus: `-5` has an empty left operand and is
//! rejected.

use super::errors::EvalError;
use super::variables::VariableTable;
use std::fmt;

/// Arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    fn from_char(c: char) -> Option<BinOp> {
        match c {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            '*' => Some(BinOp::Mul),
            '/' => Some(BinOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }
}

/// A parsed arithmetic expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(i64),
    Variable(String),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Evaluate against `vars` with checked `i64` arithmetic.
    ///
    /// Division truncates toward zero.
    pub fn evaluate(&self, vars: &VariableTable) -> Result<i64, EvalError> {
        match self {
            Expr::Literal(n) => Ok(*n),
            Expr::Variable(name) => vars
                .get(name)
                .ok_or_else(|| EvalError::UndefinedVariable { name: name.clone() }),
            Expr::Binary { op, lhs, rhs } => {
                let a = lhs.evaluate(vars)?;
                let b = rhs.evaluate(vars)?;
                let result = match op {
                    BinOp::Add => a.checked_add(b),
                    BinOp::Sub => a.checked_sub(b),
                    BinOp::Mul => a.checked_mul(b),
                    BinOp::Div => {
                        if b == 0 {
                            return Err(EvalError::DivisionByZero);
                        }
                        a.checked_div(b)
                    }
                };
                result.ok_or_else(|| EvalError::IntegerOverflow {
                    operation: format!("{} {} {}", a, op.symbol(), b),
                })
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(n) => write!(f, "{}", n),
            Expr::Variable(name) => f.write_str(name),
            Expr::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op.symbol(), rhs),
        }
    }
}

/// Parse expression text. All whitespace is removed first.
pub fn parse_expression(text: &str) -> Result<Expr, EvalError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    parse_additive(&compact)
}

fn parse_additive(text: &str) -> Result<Expr, EvalError> {
    match rightmost_operator(text, &['+', '-']) {
        Some((i, op)) => Ok(Expr::Binary {
            op,
            lhs: Box::new(parse_additive(&text[..i])?),
            rhs: Box::new(parse_multiplicative(&text[i + 1..])?),
        }),
        None => parse_multiplicative(text),
    }
}

fn parse_multiplicative(text: &str) -> Result<Expr, EvalError> {
    match rightmost_operator(text, &['*', '/']) {
        Some((i, op)) => Ok(Expr::Binary {
            op,
            lhs: Box::new(parse_multiplicative(&text[..i])?),
            rhs: Box::new(parse_factor(&text[i + 1..])?),
        }),
        None => parse_factor(text),
    }
}

fn parse_factor(text: &str) -> Result<Expr, EvalError> {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return text
            .parse::<i64>()
            .map(Expr::Literal)
            .map_err(|_| EvalError::IntegerOverflow {
                operation: format!("literal {}", text),
            });
    }

    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Ok(Expr::Variable(text.to_string()));
    }

    Err(EvalError::MalformedExpression {
        fragment: text.to_string(),
    })
}

/// Byte index and operator of the last character of `text` found in `ops`
fn rightmost_operator(text: &str, ops: &[char]) -> Option<(usize, BinOp)> {
    text.char_indices()
        .rev()
        .find(|(_, c)| ops.contains(c))
        .and_then(|(i, c)| BinOp::from_char(c).map(|op| (i, op)))
}
