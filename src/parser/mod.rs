//! ye/bol source code parser
//!
//! This module transforms script text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: The [`Parser`](parse::Parser) struct, cursor helpers and errors
//! - `statements`: Statement parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # The language
//!
//! - `ye x = 2 + 3` declares `x`; the expression is folded while parsing
//! - `bol x` prints one identifier or number
//! - `agar c ... warna ... end`, `jabtak c ... end`
//! - `switch x case 1 ... default ... end`
//! - `array arr 1 2 3`, `file write name content`, `file read name`
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser. Expressions in declarations are
//! handed to [`crate::eval`] as text; no other statement evaluates anything.

pub mod ast;
pub mod lexer;
pub mod parse;
mod statements;
