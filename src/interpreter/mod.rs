//! Demonstration interpreter
//!
//! This module provides the walker the translator is demonstrated with:
//! - [`engine`]: [`Interpreter`](engine::Interpreter), which runs top-level
//!   statements and records history
//! - [`errors`]: Runtime error types
//! - [`constants`]: history limits and size estimates
//!
//! # Execution Model
//!
//! Only two statement kinds do anything. A declaration stores its folded
//! value in a fresh variable table and a `bol` evaluates its expression
//! against that table and prints `Output: <value>`. Conditionals, loops,
//! switches, arrays and file directives are passed over as data; nested
//! blocks are never entered.
//!
//! A snapshot is taken before every statement and once after the last, so
//! the UI can step through the run in both directions.

pub mod constants;
pub mod engine;
pub mod errors;
