//! # Introduction
//!
//! Tarjuma translates a small keyword-driven scripting language (`ye`, `bol`,
//! `agar`, `jabtak`, ...) into Go source text. Declarations are folded to
//! constants while parsing; everything else is emitted as written.
//!
//! ## Translation pipeline
//!
//! ```text
//! Source → Lexer → Parser (+ Evaluator) → AST → Code Generator → Go
//!                                          └──→ Interpreter → Snapshots → TUI
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds an AST, folding every
//!    declaration through [`eval`].
//! 2. [`eval`]: integer expression trees over a flat
//!    [`eval::VariableTable`].
//! 3. [`codegen`]: renders the AST as Go, optionally wrapped in a complete
//!    `package main` file.
//! 4. [`interpreter`]: a demonstration run over the top-level statements
//!    that captures a [`snapshot::Snapshot`] before each one.
//! 5. [`snapshot`]: bounded snapshot history and the
//!    [`snapshot::MockTerminal`] that records `bol` output.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use tarjuma::codegen::GenOptions;
//!
//! let go = tarjuma::translate("ye x = 2 + 3\nbol x", &GenOptions::default()).unwrap();
//! assert_eq!(go, "const x = 5\nfmt.Println(x)");
//! ```

pub mod codegen;
pub mod eval;
pub mod interpreter;
pub mod parser;
pub mod snapshot;
pub mod ui;

use codegen::GenOptions;
use parser::parse::{ParseError, Parser};

/// Scan, parse and generate in one call.
pub fn translate(source: &str, options: &GenOptions) -> Result<String, ParseError> {
    let program = Parser::new(source).parse_program()?;
    Ok(codegen::generate(&program, options))
}
