//! Go code generation
//!
//! Turns a parsed [`Program`] into Go source text:
//! - [`emitter`]: per-statement templates and indentation
//! - this module: [`GenOptions`], the public entry points, and the optional
//!   `package main` wrapper
//!
//! Generation is one-way. Print expressions and conditions are emitted as
//! the text the parser kept, never as values, so the Go program recomputes
//! them when it runs. Declarations are the exception: they carry the value
//! folded at parse time.

pub mod emitter;

use crate::parser::ast::{Program, Statement};
use emitter::Emitter;

/// Output settings for the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenOptions {
    /// One level of indentation inside blocks
    pub indent: String,
    /// Emit a complete Go file (`package`, imports, `func main`)
    pub wrap_in_main: bool,
    /// Package clause used when wrapping
    pub package: String,
}

impl Default for GenOptions {
    fn default() -> Self {
        GenOptions {
            indent: "\t".to_string(),
            wrap_in_main: false,
            package: "main".to_string(),
        }
    }
}

/// Generate Go for a whole program.
pub fn generate(program: &Program, options: &GenOptions) -> String {
    if options.wrap_in_main {
        return generate_file(program, options);
    }

    let mut emitter = Emitter::new(options);
    emitter.emit_program(program);
    emitter.finish()
}

/// Generate Go for a single statement (and its nested blocks).
pub fn generate_statement(statement: &Statement, options: &GenOptions) -> String {
    let mut emitter = Emitter::new(options);
    emitter.emit_statement(statement);
    emitter.finish()
}

/// Standard-library packages the generated body refers to, in import order
pub fn required_imports(program: &Program) -> Vec<&'static str> {
    let mut uses_fmt = false;
    let mut uses_os = false;
    scan_imports(&program.statements, &mut uses_fmt, &mut uses_os);

    let mut imports = Vec::new();
    if uses_fmt {
        imports.push("fmt");
    }
    if uses_os {
        imports.push("os");
    }
    imports
}

fn scan_imports(statements: &[Statement], uses_fmt: &mut bool, uses_os: &mut bool) {
    use crate::parser::ast::FileOp;

    for statement in statements {
        match statement {
            Statement::Print { .. } => *uses_fmt = true,
            Statement::FileOperation { operation, .. } => {
                *uses_os = true;
                if *operation == FileOp::Read {
                    *uses_fmt = true;
                }
            }
            Statement::Conditional {
                body, else_body, ..
            } => {
                scan_imports(body, uses_fmt, uses_os);
                scan_imports(else_body, uses_fmt, uses_os);
            }
            Statement::Loop { body, .. } => scan_imports(body, uses_fmt, uses_os),
            Statement::SwitchCase {
                cases,
                default_body,
                ..
            } => {
                for arm in cases {
                    scan_imports(&arm.body, uses_fmt, uses_os);
                }
                if let Some(body) = default_body {
                    scan_imports(body, uses_fmt, uses_os);
                }
            }
            Statement::Declaration { .. } | Statement::Array { .. } => {}
        }
    }
}

fn generate_file(program: &Program, options: &GenOptions) -> String {
    let mut out = format!("package {}\n\n", options.package);

    let imports = required_imports(program);
    if !imports.is_empty() {
        out.push_str("import (\n");
        for import in imports {
            out.push_str(&format!("{}\"{}\"\n", options.indent, import));
        }
        out.push_str(")\n\n");
    }

    out.push_str("func main() {\n");
    let mut emitter = Emitter::new(options).with_depth(1);
    emitter.emit_program(program);
    let body = emitter.finish();
    if !body.is_empty() {
        out.push_str(&body);
        out.push('\n');
    }
    out.push_str("}\n");
    out
}
