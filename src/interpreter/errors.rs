//! Runtime error types for the demonstration interpreter
//!
//! Evaluation failures are not runtime errors: a `bol` whose expression
//! cannot be evaluated prints `0` and the failure is recorded on the side
//! (see [`Interpreter::evaluation_errors`]). What remains are failures of the
//! history machinery.
//!
//! [`Interpreter::evaluation_errors`]: crate::interpreter::engine::Interpreter::evaluation_errors

use crate::parser::ast::SourceLocation;
use std::fmt;

/// Errors raised while recording or navigating execution history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Snapshot history limit exceeded
    SnapshotLimitExceeded { current: usize, limit: usize },

    /// Stepping past either end of the recorded history
    HistoryBoundary {
        message: String,
        location: SourceLocation,
    },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::SnapshotLimitExceeded { current, limit } => write!(
                f,
                "Snapshot memory limit exceeded: {} bytes needed, limit is {} bytes",
                current, limit
            ),
            RuntimeError::HistoryBoundary { message, .. } => f.write_str(message),
        }
    }
}

impl std::error::Error for RuntimeError {}
