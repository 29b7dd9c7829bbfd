// Snapshot management for stepping back and forth through a demonstration run

use crate::eval::VariableTable;
use crate::interpreter::constants::{
    SNAPSHOT_BASE_ESTIMATE, TERMINAL_LINE_ESTIMATE, VARIABLE_ENTRY_ESTIMATE,
};
use crate::parser::ast::SourceLocation;

/// Mock terminal for capturing `bol` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockTerminal {
    pub lines: Vec<TerminalLine>,
}

impl MockTerminal {
    pub fn new() -> Self {
        MockTerminal { lines: Vec::new() }
    }

    /// Print without newline
    pub fn print(&mut self, text: String, location: SourceLocation) {
        if let Some(last) = self.lines.last_mut() {
            if last.location.line == location.line {
                last.text.push_str(&text);
                return;
            }
        }
        self.lines.push(TerminalLine { text, location });
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        self.lines
            .iter()
            .flat_map(|tl| {
                // Several prints from one source line share a TerminalLine
                let mut result: Vec<String> = tl.text.split('\n').map(|s| s.to_string()).collect();
                if result.last().is_some_and(|s| s.is_empty()) {
                    result.pop();
                }
                result
            })
            .collect()
    }
}

impl Default for MockTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// A line of terminal output with source location tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub text: String,
    pub location: SourceLocation,
}

/// State of a demonstration run just before a top-level statement executes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub variables: VariableTable,
    pub terminal: MockTerminal,
    /// Index of the next statement to run; equals the statement count once
    /// the run is over
    pub statement_index: usize,
    pub source_location: SourceLocation,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        let variables_size = self.variables.len() * VARIABLE_ENTRY_ESTIMATE;
        let terminal_size = self.terminal.lines.len() * TERMINAL_LINE_ESTIMATE;
        SNAPSHOT_BASE_ESTIMATE + variables_size + terminal_size
    }
}

/// Manages execution history
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history. Fails with the usage that would have
    /// resulted when the limit is exceeded.
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), usize> {
        let snapshot_size = snapshot.estimated_size();
        let new_total = self.current_memory + snapshot_size;

        if new_total > self.max_memory {
            return Err(new_total);
        }

        self.current_memory = new_total;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_merges_same_line() {
        let mut terminal = MockTerminal::new();
        terminal.print("Output: 1\n".to_string(), SourceLocation::new(1, 1));
        terminal.print("Output: 2\n".to_string(), SourceLocation::new(1, 9));
        terminal.print("Output: 3\n".to_string(), SourceLocation::new(2, 1));

        assert_eq!(terminal.lines.len(), 2);
        assert_eq!(
            terminal.get_output(),
            vec!["Output: 1", "Output: 2", "Output: 3"]
        );
    }

    #[test]
    fn test_manager_limit() {
        let mut variables = VariableTable::new();
        variables.set("x", 1);
        let snapshot = Snapshot {
            variables,
            terminal: MockTerminal::new(),
            statement_index: 0,
            source_location: SourceLocation::new(1, 1),
        };
        let size = snapshot.estimated_size();

        let mut manager = SnapshotManager::new(size);
        assert!(manager.push(snapshot.clone()).is_ok());
        assert_eq!(manager.push(snapshot), Err(size * 2));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.memory_usage(), size);
        assert_eq!(manager.memory_limit(), size);
    }
}
