//! Evaluation error types
//!
//! [`EvalError`] covers every way a constant expression can fail to produce a
//! value. The parser wraps it in a `ParseError` with the declaration's
//! location; the demonstration interpreter records it and prints `0` instead.

use std::fmt;

/// Errors raised while parsing or evaluating an arithmetic expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A fragment that is neither a number, a name, nor a binary operation.
    /// An empty operand (as in `5+` or `-3`) lands here too.
    MalformedExpression { fragment: String },

    /// Right-hand side of `/` evaluated to zero
    DivisionByZero,

    /// Result or literal does not fit in an `i64`
    IntegerOverflow { operation: String },

    /// A name with no entry in the variable table
    UndefinedVariable { name: String },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::MalformedExpression { fragment } if fragment.is_empty() => {
                write!(f, "Malformed expression: missing operand")
            }
            EvalError::MalformedExpression { fragment } => {
                write!(f, "Malformed expression: '{}'", fragment)
            }
            EvalError::DivisionByZero => write!(f, "Division by zero"),
            EvalError::IntegerOverflow { operation } => {
                write!(f, "Integer overflow in {}", operation)
            }
            EvalError::UndefinedVariable { name } => {
                write!(f, "Undefined variable '{}'", name)
            }
        }
    }
}

impl std::error::Error for EvalError {}
