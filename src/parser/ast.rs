// AST (Abstract Syntax Tree) definitions for ye/bol scripts

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The two directions a `file` directive can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Read,
    Write,
}

impl FileOp {
    pub fn as_str(self) -> &'static str {
        match self {
            FileOp::Read => "read",
            FileOp::Write => "write",
        }
    }
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `case <label>` branch of a switch, kept in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchArm {
    pub label: String,
    pub body: Vec<Statement>,
}

/// Statement nodes
///
/// Conditions, print expressions and switch subjects are kept as the raw text
/// of a single token. Declarations carry the value the parser already folded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `ye x = <expr>`
    Declaration {
        name: String,
        value: i64,
        location: SourceLocation,
    },

    /// `bol <operand>`
    Print {
        expression: String,
        location: SourceLocation,
    },

    /// `agar <cond> ... [warna ...] end`
    Conditional {
        condition: String,
        body: Vec<Statement>,
        else_body: Vec<Statement>,
        location: SourceLocation,
    },

    /// `jabtak <cond> ... end`
    Loop {
        condition: String,
        body: Vec<Statement>,
        location: SourceLocation,
    },

    /// `switch <expr> case ... default ... end`
    ///
    /// `default_body` is `None` when no `default` keyword appeared, which is
    /// different from an empty default branch.
    SwitchCase {
        expression: String,
        cases: Vec<SwitchArm>,
        default_body: Option<Vec<Statement>>,
        location: SourceLocation,
    },

    /// `array <name> <n>*`
    Array {
        name: String,
        values: Vec<i64>,
        location: SourceLocation,
    },

    /// `file read <name>` / `file write <name> <content>`
    FileOperation {
        operation: FileOp,
        filename: String,
        content: String,
        location: SourceLocation,
    },
}

impl Statement {
    /// Location of the keyword that introduced this statement.
    pub fn location(&self) -> SourceLocation {
        match self {
            Statement::Declaration { location, .. }
            | Statement::Print { location, .. }
            | Statement::Conditional { location, .. }
            | Statement::Loop { location, .. }
            | Statement::SwitchCase { location, .. }
            | Statement::Array { location, .. }
            | Statement::FileOperation { location, .. } => *location,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Declaration { .. } => "declaration",
            Statement::Print { .. } => "print",
            Statement::Conditional { .. } => "conditional",
            Statement::Loop { .. } => "loop",
            Statement::SwitchCase { .. } => "switch",
            Statement::Array { .. } => "array",
            Statement::FileOperation { .. } => "file operation",
        }
    }
}

/// Root of the AST
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program {
            statements: Vec::new(),
        }
    }
}
