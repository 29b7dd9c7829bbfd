//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! - This module: Parser struct, token cursor helpers, [`ParseError`]
//! - `statements`: one method per statement keyword, plus block parsing
//!
//! The parser owns the [`VariableTable`] it folds declarations into. Each
//! `ye` statement is evaluated as soon as it is parsed, so later statements
//! in the same run see its value. Seed the table with
//! [`Parser::with_variables`] and read it back with [`Parser::variables`].

use crate::eval::{EvalError, VariableTable};
use crate::parser::ast::*;
use crate::parser::lexer::{Lexer, SkippedChar, Token};
use std::fmt;

/// Parser error type
///
/// Every variant is fatal: the parser stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token that cannot appear where it was found
    UnexpectedToken {
        found: String,
        expected: String,
        location: SourceLocation,
    },

    /// Input ran out in the middle of a construct
    UnexpectedEndOfInput {
        expected: String,
        location: SourceLocation,
    },

    /// A declaration whose expression could not be folded
    Evaluation {
        error: EvalError,
        location: SourceLocation,
    },

    /// An array element that does not fit in an `i64`
    InvalidNumber {
        text: String,
        location: SourceLocation,
    },
}

impl ParseError {
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::UnexpectedToken { location, .. }
            | ParseError::UnexpectedEndOfInput { location, .. }
            | ParseError::Evaluation { location, .. }
            | ParseError::InvalidNumber { location, .. } => *location,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loc = self.location();
        write!(f, "Parse error at line {}, column {}: ", loc.line, loc.column)?;
        match self {
            ParseError::UnexpectedToken {
                found, expected, ..
            } => write!(f, "expected {}, found {}", expected, found),
            ParseError::UnexpectedEndOfInput { expected, .. } => {
                write!(f, "expected {}, found end of input", expected)
            }
            ParseError::Evaluation { error, .. } => write!(f, "{}", error),
            ParseError::InvalidNumber { text, .. } => {
                write!(f, "integer literal {} is out of range", text)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Evaluation { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Recursive descent parser for ye/bol scripts
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    pub(crate) variables: VariableTable,
    pub(crate) ignored: Vec<Token>,
    skipped: Vec<SkippedChar>,
    eof_location: SourceLocation,
}

impl Parser {
    /// Scan `source` and prepare to parse it.
    pub fn new(source: &str) -> Self {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize();
        let mut parser = Self::from_tokens(tokens);
        parser.skipped = lexer.skipped().to_vec();
        parser.eof_location = lexer.current_location();
        parser
    }

    /// Parse an already scanned token sequence.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let eof_location = tokens
            .last()
            .map(|t| SourceLocation::new(t.location.line, t.location.column + t.text.len()))
            .unwrap_or_else(|| SourceLocation::new(1, 1));
        Self {
            tokens,
            position: 0,
            variables: VariableTable::new(),
            ignored: Vec::new(),
            skipped: Vec::new(),
            eof_location,
        }
    }

    /// Start from an existing variable table instead of an empty one.
    pub fn with_variables(mut self, variables: VariableTable) -> Self {
        self.variables = variables;
        self
    }

    /// Parse the entire program
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        while !self.is_at_end() {
            if let Some(statement) = self.parse_statement()? {
                program.statements.push(statement);
            }
        }

        Ok(program)
    }

    /// The table as folded so far
    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    pub fn into_variables(self) -> VariableTable {
        self.variables
    }

    /// The full scanned token sequence
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Tokens dropped because they could not start a statement
    pub fn ignored_tokens(&self) -> &[Token] {
        &self.ignored
    }

    /// Characters the scanner skipped (empty for [`Parser::from_tokens`])
    pub fn skipped_characters(&self) -> &[SkippedChar] {
        &self.skipped
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().map(|t| t.location).unwrap_or(self.eof_location)
    }

    /// Consume the next token if it is the keyword `word`.
    pub(crate) fn match_keyword(&mut self, word: &str) -> bool {
        if self.peek().is_some_and(|t| t.is_keyword(word)) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consume the next token if its text is `word`, whatever its kind.
    ///
    /// Used for the contextual words `end`, `read` and `write`, which the
    /// scanner tags as identifiers.
    pub(crate) fn match_word(&mut self, word: &str) -> bool {
        if self.peek().is_some_and(|t| t.text == word) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consume the next token if `accept` approves it, otherwise report
    /// `expected`.
    pub(crate) fn expect_token(
        &mut self,
        accept: impl Fn(&Token) -> bool,
        expected: &str,
    ) -> Result<Token, ParseError> {
        if !self.peek().is_some_and(|t| accept(t)) {
            return Err(self.unexpected(expected));
        }

        let token = self.tokens[self.position].clone();
        self.position += 1;
        Ok(token)
    }

    /// Error describing the current token (or end of input) as not being
    /// `expected`.
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                found: token.to_string(),
                expected: expected.to_string(),
                location: token.location,
            },
            None => ParseError::UnexpectedEndOfInput {
                expected: expected.to_string(),
                location: self.eof_location,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;

    #[test]
    fn test_empty_program() {
        let mut parser = Parser::new("   \n  ");
        let program = parser.parse_program().unwrap();
        assert!(program.statements.is_empty());
    }

    #[test]
    fn test_from_tokens_matches_new() {
        let source = "ye x = 2 + 3\nbol x";
        let from_source = Parser::new(source).parse_program().unwrap();
        let from_tokens = Parser::from_tokens(tokenize(source))
            .parse_program()
            .unwrap();
        assert_eq!(from_source, from_tokens);
    }

    #[test]
    fn test_seeded_variables() {
        let seed: VariableTable = [("base", 40)].into_iter().collect();
        let mut parser = Parser::new("ye answer = base + 2").with_variables(seed);
        let program = parser.parse_program().unwrap();

        assert!(matches!(
            &program.statements[0],
            Statement::Declaration { name, value: 42, .. } if name == "answer"
        ));
        assert_eq!(parser.variables().get("base"), Some(40));
        assert_eq!(parser.into_variables().get("answer"), Some(42));
    }

    #[test]
    fn test_error_display() {
        let err = Parser::new("ye").parse_program().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parse error at line 1, column 3: expected variable name after 'ye', found end of input"
        );
    }

    #[test]
    fn test_evaluation_error_source() {
        use std::error::Error;

        let err = Parser::new("ye x = 5 / 0").parse_program().unwrap_err();
        assert_eq!(
            err,
            ParseError::Evaluation {
                error: EvalError::DivisionByZero,
                location: SourceLocation::new(1, 4),
            }
        );
        assert!(err.source().is_some());
    }
}
