//! Statement parsing implementation
//!
//! This module handles parsing of every ye/bol statement:
//!
//! - Declarations: `ye x = 2 + 3`
//! - Output: `bol x`
//! - Control flow: `agar` / `warna`, `jabtak`, `switch` / `case` / `default`
//! - Data: `array arr 1 2 3`, `file write name content`, `file read name`
//!
//! # Grammar
//!
//! ```text
//! statement   ::= declaration | print | conditional | loop | switch | array | file
//! declaration ::= 'ye' IDENT ( '=' expr_token* )?
//! print       ::= 'bol' operand
//! conditional ::= 'agar' operand block ( 'warna' block )? 'end'
//! loop        ::= 'jabtak' operand block 'end'
//! switch      ::= 'switch' operand ( 'case' operand block )* ( 'default' block )? 'end'
//! array       ::= 'array' IDENT NUMBER*
//! file        ::= 'file' ( 'read' operand | 'write' operand operand )
//! operand     ::= IDENT | NUMBER
//! ```
//!
//! Conditions, print expressions and switch subjects are exactly one token.
//! Tokens left over after them (the `< y` of `agar x < y`) cannot start a
//! statement and are skipped, then reported through
//! [`Parser::ignored_tokens`].
//!
//! Blocks end at a marker word. `warna`, `case` and `default` are keywords;
//! `end` scans as an identifier and is matched by its text, so a variable
//! called `end` in statement position closes the enclosing block.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::eval;
use crate::parser::ast::*;
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::parse::{ParseError, Parser};

/// Contextual word closing every block
const END: &str = "end";

/// True if `token` is the block marker `marker`.
fn is_marker(token: &Token, marker: &str) -> bool {
    if marker == END {
        token.text == END
    } else {
        token.is_keyword(marker)
    }
}

/// True for any token that only makes sense as the end of some block
fn is_any_marker(token: &Token) -> bool {
    ["warna", "case", "default", END]
        .iter()
        .any(|marker| is_marker(token, marker))
}

impl Parser {
    /// Parse one statement.
    ///
    /// Returns `Ok(None)` after skipping a token that cannot start a
    /// statement.
    pub(crate) fn parse_statement(&mut self) -> Result<Option<Statement>, ParseError> {
        let loc = self.current_location();

        let statement = if self.match_keyword("ye") {
            self.parse_declaration(loc)?
        } else if self.match_keyword("bol") {
            self.parse_print(loc)?
        } else if self.match_keyword("agar") {
            self.parse_conditional(loc)?
        } else if self.match_keyword("jabtak") {
            self.parse_loop(loc)?
        } else if self.match_keyword("switch") {
            self.parse_switch(loc)?
        } else if self.match_keyword("array") {
            self.parse_array(loc)?
        } else if self.match_keyword("file") {
            self.parse_file_operation(loc)?
        } else {
            // A marker here belongs to no open block
            if self.peek().is_some_and(is_any_marker) {
                return Err(self.unexpected("a statement"));
            }
            if let Some(token) = self.advance() {
                self.ignored.push(token);
            }
            return Ok(None);
        };

        Ok(Some(statement))
    }

    /// Parse statements until one of `markers` is next. The marker itself is
    /// left for the caller.
    pub(crate) fn parse_block(
        &mut self,
        markers: &[&str],
        expected: &str,
    ) -> Result<Vec<Statement>, ParseError> {
        let mut statements = Vec::new();

        loop {
            match self.peek() {
                None => return Err(self.unexpected(expected)),
                Some(token) if markers.iter().any(|m| is_marker(token, m)) => {
                    return Ok(statements);
                }
                Some(_) => {
                    if let Some(statement) = self.parse_statement()? {
                        statements.push(statement);
                    }
                }
            }
        }
    }

    fn expect_end(&mut self, opener: &str) -> Result<(), ParseError> {
        self.expect_token(
            |t| is_marker(t, END),
            &format!("'end' to close '{}'", opener),
        )?;
        Ok(())
    }

    /// Parse `ye <name> [= <expr>]`, folding the value into the variable table
    fn parse_declaration(&mut self, loc: SourceLocation) -> Result<Statement, ParseError> {
        let name = self.expect_token(
            |t| t.kind == TokenKind::Identifier,
            "variable name after 'ye'",
        )?;

        let value = if self
            .peek()
            .is_some_and(|t| t.kind == TokenKind::Operator && t.text == "=")
        {
            self.position += 1;

            // Tokens are glued together as written: `2 + 3` becomes "2+3"
            let mut expression = String::new();
            while let Some(token) = self.peek() {
                if token.kind == TokenKind::Keyword || is_marker(token, END) {
                    break;
                }
                expression.push_str(&token.text);
                self.position += 1;
            }

            eval::evaluate(&expression, &self.variables).map_err(|error| {
                ParseError::Evaluation {
                    error,
                    location: name.location,
                }
            })?
        } else {
            0
        };

        self.variables.set(&name.text, value);

        Ok(Statement::Declaration {
            name: name.text,
            value,
            location: loc,
        })
    }

    /// Parse `bol <operand>`
    fn parse_print(&mut self, loc: SourceLocation) -> Result<Statement, ParseError> {
        let expression = self.expect_token(Token::is_operand, "expression after 'bol'")?;

        Ok(Statement::Print {
            expression: expression.text,
            location: loc,
        })
    }

    /// Parse `agar <cond> <body> [warna <body>] end`
    fn parse_conditional(&mut self, loc: SourceLocation) -> Result<Statement, ParseError> {
        let condition = self.expect_token(Token::is_operand, "condition after 'agar'")?;

        let body = self.parse_block(&["warna", END], "'warna' or 'end' to close 'agar'")?;

        let else_body = if self.match_keyword("warna") {
            self.parse_block(&[END], "'end' to close 'agar'")?
        } else {
            Vec::new()
        };

        self.expect_end("agar")?;

        Ok(Statement::Conditional {
            condition: condition.text,
            body,
            else_body,
            location: loc,
        })
    }

    /// Parse `jabtak <cond> <body> end`
    fn parse_loop(&mut self, loc: SourceLocation) -> Result<Statement, ParseError> {
        let condition = self.expect_token(Token::is_operand, "condition after 'jabtak'")?;
        let body = self.parse_block(&[END], "'end' to close 'jabtak'")?;
        self.expect_end("jabtak")?;

        Ok(Statement::Loop {
            condition: condition.text,
            body,
            location: loc,
        })
    }

    /// Parse `switch <expr> (case <label> <body>)* [default <body>] end`
    ///
    /// A repeated label replaces the body of the earlier arm and keeps its
    /// position.
    fn parse_switch(&mut self, loc: SourceLocation) -> Result<Statement, ParseError> {
        let expression = self.expect_token(Token::is_operand, "expression after 'switch'")?;

        let mut cases: Vec<SwitchArm> = Vec::new();
        let mut default_body = None;

        loop {
            if self.match_keyword("case") {
                let label = self.expect_token(Token::is_operand, "case label after 'case'")?;
                let body = self.parse_block(&["case", "default", END], "'end' to close 'switch'")?;

                match cases.iter_mut().find(|arm| arm.label == label.text) {
                    Some(arm) => arm.body = body,
                    None => cases.push(SwitchArm {
                        label: label.text,
                        body,
                    }),
                }
            } else if self.match_keyword("default") {
                default_body = Some(self.parse_block(&[END], "'end' to close 'switch'")?);
            } else if self.match_word(END) {
                break;
            } else {
                return Err(self.unexpected("'case', 'default' or 'end' in switch"));
            }
        }

        Ok(Statement::SwitchCase {
            expression: expression.text,
            cases,
            default_body,
            location: loc,
        })
    }

    /// Parse `array <name> <n>*`
    fn parse_array(&mut self, loc: SourceLocation) -> Result<Statement, ParseError> {
        let name = self.expect_token(
            |t| t.kind == TokenKind::Identifier,
            "array name after 'array'",
        )?;

        let mut values = Vec::new();
        while let Some(token) = self.peek() {
            if token.kind != TokenKind::Number {
                break;
            }
            let value = token
                .text
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidNumber {
                    text: token.text.clone(),
                    location: token.location,
                })?;
            values.push(value);
            self.position += 1;
        }

        Ok(Statement::Array {
            name: name.text,
            values,
            location: loc,
        })
    }

    /// Parse `file read <name>` or `file write <name> <content>`
    fn parse_file_operation(&mut self, loc: SourceLocation) -> Result<Statement, ParseError> {
        let op = self.expect_token(
            |t| t.text == "read" || t.text == "write",
            "'read' or 'write' after 'file'",
        )?;
        let operation = if op.text == "write" {
            FileOp::Write
        } else {
            FileOp::Read
        };

        let filename = self.expect_token(Token::is_operand, "file name")?;

        let content = match operation {
            FileOp::Write => self.expect_token(Token::is_operand, "content to write")?.text,
            FileOp::Read => String::new(),
        };

        Ok(Statement::FileOperation {
            operation,
            filename: filename.text,
            content,
            location: loc,
        })
    }
}
