//! Constant-expression evaluation
//!
//! - [`expressions`]: expression trees, the rightmost-split parser, evaluation
//! - [`variables`]: the flat [`VariableTable`]
//! - [`errors`]: [`EvalError`]
//!
//! The parser folds every `ye` declaration through [`evaluate`] while it
//! parses; the demonstration interpreter calls it again for `bol` statements.

pub mod errors;
pub mod expressions;
pub mod variables;

pub use errors::EvalError;
pub use expressions::{parse_expression, BinOp, Expr};
pub use variables::VariableTable;

/// Parse `text` and evaluate it against `vars` in one step.
pub fn evaluate(text: &str, vars: &VariableTable) -> Result<i64, EvalError> {
    parse_expression(text)?.evaluate(vars)
}
