// Execution engine for the demonstration run

use crate::eval::{self, EvalError, VariableTable};
use crate::interpreter::constants::OUTPUT_PREFIX;
use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::*;
use crate::snapshot::{MockTerminal, Snapshot, SnapshotManager};

/// A `bol` whose expression failed to evaluate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationFailure {
    pub expression: String,
    pub error: EvalError,
    pub location: SourceLocation,
}

/// Walks a parsed program's top-level statements and records each step
pub struct Interpreter {
    program: Program,

    /// Variables declared so far in this run (not the parser's table)
    variables: VariableTable,

    /// Mock terminal for `bol` output
    terminal: MockTerminal,

    /// Current source location being executed
    current_location: SourceLocation,

    /// Index of the next top-level statement
    statement_index: usize,

    /// Snapshot manager for stepping backward and forward
    snapshot_manager: SnapshotManager,

    /// Current position in execution history
    history_position: usize,

    /// Failed `bol` evaluations, in execution order
    evaluation_errors: Vec<EvaluationFailure>,

    /// Whether `run` completed; not reset by browsing history
    finished: bool,
}

impl Interpreter {
    /// Create a new interpreter with the parsed program
    pub fn new(program: Program, snapshot_memory_limit: usize) -> Self {
        let current_location = program
            .statements
            .first()
            .map(Statement::location)
            .unwrap_or_else(|| SourceLocation::new(1, 1));

        Interpreter {
            program,
            variables: VariableTable::new(),
            terminal: MockTerminal::new(),
            current_location,
            statement_index: 0,
            snapshot_manager: SnapshotManager::new(snapshot_memory_limit),
            history_position: 0,
            evaluation_errors: Vec::new(),
            finished: false,
        }
    }

    /// Run the program from start to finish
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        self.take_snapshot()?;

        while self.statement_index < self.program.statements.len() {
            let stmt = self.program.statements[self.statement_index].clone();
            self.execute_statement(&stmt);
            self.statement_index += 1;

            if let Some(next) = self.program.statements.get(self.statement_index) {
                self.current_location = next.location();
            }
            self.take_snapshot()?;
        }

        self.finished = true;
        Ok(())
    }

    /// Execute a single top-level statement
    fn execute_statement(&mut self, stmt: &Statement) {
        self.current_location = stmt.location();

        match stmt {
            Statement::Declaration { name, value, .. } => {
                self.variables.set(name, *value);
            }

            Statement::Print {
                expression,
                location,
            } => {
                let value = match eval::evaluate(expression, &self.variables) {
                    Ok(value) => value,
                    Err(error) => {
                        self.evaluation_errors.push(EvaluationFailure {
                            expression: expression.clone(),
                            error,
                            location: *location,
                        });
                        0
                    }
                };
                self.terminal
                    .print(format!("{}{}\n", OUTPUT_PREFIX, value), *location);
            }

            // Accepted as data only
            Statement::Conditional { .. }
            | Statement::Loop { .. }
            | Statement::SwitchCase { .. }
            | Statement::Array { .. }
            | Statement::FileOperation { .. } => {}
        }
    }

    /// Take a snapshot of the current state
    fn take_snapshot(&mut self) -> Result<(), RuntimeError> {
        let snapshot = Snapshot {
            variables: self.variables.clone(),
            terminal: self.terminal.clone(),
            statement_index: self.statement_index,
            source_location: self.current_location,
        };

        self.snapshot_manager
            .push(snapshot)
            .map_err(|current| RuntimeError::SnapshotLimitExceeded {
                current,
                limit: self.snapshot_manager.memory_limit(),
            })?;

        self.history_position = self.snapshot_manager.len() - 1;
        Ok(())
    }

    /// Restore execution state from a snapshot
    fn restore_snapshot(&mut self, snapshot: &Snapshot) {
        self.variables = snapshot.variables.clone();
        self.terminal = snapshot.terminal.clone();
        self.statement_index = snapshot.statement_index;
        self.current_location = snapshot.source_location;
    }

    /// Step backward in execution (restore previous snapshot)
    pub fn step_backward(&mut self) -> Result<(), RuntimeError> {
        if self.history_position == 0 {
            return Err(RuntimeError::HistoryBoundary {
                message: "Already at the beginning of execution".to_string(),
                location: self.current_location,
            });
        }

        self.restore_at(self.history_position - 1)
    }

    /// Step forward in execution (restore next snapshot if available)
    pub fn step_forward(&mut self) -> Result<(), RuntimeError> {
        if self.history_position + 1 >= self.snapshot_manager.len() {
            return Err(RuntimeError::HistoryBoundary {
                message: "No more snapshots available (execution finished)".to_string(),
                location: self.current_location,
            });
        }

        self.restore_at(self.history_position + 1)
    }

    /// Rewind to the beginning of execution history
    pub fn rewind_to_start(&mut self) -> Result<(), RuntimeError> {
        if self.snapshot_manager.is_empty() {
            return Err(RuntimeError::HistoryBoundary {
                message: "No snapshots available".to_string(),
                location: self.current_location,
            });
        }

        self.restore_at(0)
    }

    /// Jump to the last recorded snapshot
    pub fn jump_to_end(&mut self) -> Result<(), RuntimeError> {
        match self.snapshot_manager.len() {
            0 => Err(RuntimeError::HistoryBoundary {
                message: "No snapshots available".to_string(),
                location: self.current_location,
            }),
            len => self.restore_at(len - 1),
        }
    }

    fn restore_at(&mut self, position: usize) -> Result<(), RuntimeError> {
        let snapshot = self.snapshot_manager.get(position).cloned().ok_or_else(|| {
            RuntimeError::HistoryBoundary {
                message: "Snapshot not found in history".to_string(),
                location: self.current_location,
            }
        })?;

        self.history_position = position;
        self.restore_snapshot(&snapshot);
        Ok(())
    }

    // ========== Getter methods for UI ==========

    /// Get the current source location
    pub fn current_location(&self) -> SourceLocation {
        self.current_location
    }

    /// The statement about to run at the current history position, if any
    pub fn current_statement(&self) -> Option<&Statement> {
        self.program.statements.get(self.statement_index)
    }

    /// Index of the statement about to run; the statement count once finished
    pub fn statement_index(&self) -> usize {
        self.statement_index
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Get a reference to the variable table at the current position
    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Get a reference to the terminal output
    pub fn terminal(&self) -> &MockTerminal {
        &self.terminal
    }

    /// Every failed `bol` evaluation of the run (not rewound by stepping)
    pub fn evaluation_errors(&self) -> &[EvaluationFailure] {
        &self.evaluation_errors
    }

    /// Get the current history position
    pub fn history_position(&self) -> usize {
        self.history_position
    }

    /// Get the total number of snapshots
    pub fn total_snapshots(&self) -> usize {
        self.snapshot_manager.len()
    }

    /// Check if the run completed. Stays true after rewinding; see
    /// [`Interpreter::is_at_end`] for the cursor position.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the history cursor is past the last statement
    pub fn is_at_end(&self) -> bool {
        self.statement_index >= self.program.statements.len()
    }
}
