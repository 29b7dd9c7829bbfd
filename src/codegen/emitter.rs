//! Per-statement Go emission
//!
//! [`Emitter`] walks the AST and collects output lines. Nested blocks are
//! indented one [`GenOptions::indent`] per level; nothing is validated, so a
//! print of an undeclared name is emitted as written.

use super::GenOptions;
use crate::parser::ast::{FileOp, Program, Statement};

/// Line-oriented Go writer
pub struct Emitter<'a> {
    options: &'a GenOptions,
    lines: Vec<String>,
    depth: usize,
}

impl<'a> Emitter<'a> {
    pub fn new(options: &'a GenOptions) -> Self {
        Emitter {
            options,
            lines: Vec::new(),
            depth: 0,
        }
    }

    /// Start at `depth` levels of indentation.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Join everything emitted so far with newlines.
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }

    pub fn emit_program(&mut self, program: &Program) {
        for statement in &program.statements {
            self.emit_statement(statement);
        }
    }

    pub fn emit_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Declaration { name, value, .. } => {
                self.line(format!("const {} = {}", name, value));
            }

            Statement::Print { expression, .. } => {
                self.line(format!("fmt.Println({})", expression));
            }

            Statement::Conditional {
                condition,
                body,
                else_body,
                ..
            } => {
                self.line(format!("if ({}) {{", condition));
                self.block(body);
                if !else_body.is_empty() {
                    self.line("} else {");
                    self.block(else_body);
                }
                self.line("}");
            }

            Statement::Loop {
                condition, body, ..
            } => {
                self.line(format!("for ({}) {{", condition));
                self.block(body);
                self.line("}");
            }

            Statement::SwitchCase {
                expression,
                cases,
                default_body,
                ..
            } => {
                self.line(format!("switch ({}) {{", expression));
                for arm in cases {
                    self.line(format!("case {}:", arm.label));
                    self.block(&arm.body);
                }
                if let Some(body) = default_body {
                    self.line("default:");
                    self.block(body);
                }
                self.line("}");
            }

            Statement::Array { name, values, .. } => {
                let elements: Vec<String> = values.iter().map(i64::to_string).collect();
                self.line(format!(
                    "var {} = [{}]int{{{}}}",
                    name,
                    values.len(),
                    elements.join(", ")
                ));
            }

            Statement::FileOperation {
                operation,
                filename,
                content,
                ..
            } => match operation {
                FileOp::Write => self.line(format!(
                    "os.WriteFile({}, []byte({}), 0644)",
                    go_string(filename),
                    go_string(content)
                )),
                FileOp::Read => {
                    self.line(format!("content, _ := os.ReadFile({})", go_string(filename)));
                    self.line("fmt.Println(string(content))");
                }
            },
        }
    }

    fn block(&mut self, statements: &[Statement]) {
        self.depth += 1;
        for statement in statements {
            self.emit_statement(statement);
        }
        self.depth -= 1;
    }

    fn line(&mut self, text: impl AsRef<str>) {
        let indent = self.options.indent.repeat(self.depth);
        self.lines.push(format!("{}{}", indent, text.as_ref()));
    }
}

/// Quote `text` as a Go interpreted string literal
fn go_string(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{SourceLocation, SwitchArm};

    fn emit(statement: &Statement) -> String {
        let options = GenOptions::default();
        let mut emitter = Emitter::new(&options);
        emitter.emit_statement(statement);
        emitter.finish()
    }

    fn print(expression: &str) -> Statement {
        Statement::Print {
            expression: expression.to_string(),
            location: SourceLocation::default(),
        }
    }

    #[test]
    fn test_declaration_and_print() {
        let decl = Statement::Declaration {
            name: "x".to_string(),
            value: -3,
            location: SourceLocation::default(),
        };
        assert_eq!(emit(&decl), "const x = -3");
        assert_eq!(emit(&print("x")), "fmt.Println(x)");
    }

    #[test]
    fn test_conditional_else_branch() {
        let without_else = Statement::Conditional {
            condition: "x".to_string(),
            body: vec![print("x")],
            else_body: vec![],
            location: SourceLocation::default(),
        };
        assert_eq!(emit(&without_else), "if (x) {\n\tfmt.Println(x)\n}");

        let with_else = Statement::Conditional {
            condition: "x".to_string(),
            body: vec![print("x")],
            else_body: vec![print("y")],
            location: SourceLocation::default(),
        };
        let code = emit(&with_else);
        assert_eq!(code, "if (x) {\n\tfmt.Println(x)\n} else {\n\tfmt.Println(y)\n}");
        assert_eq!(code.matches("else").count(), 1);
    }

    #[test]
    fn test_loop_nesting() {
        let inner = Statement::Loop {
            condition: "b".to_string(),
            body: vec![print("c")],
            location: SourceLocation::default(),
        };
        let outer = Statement::Loop {
            condition: "a".to_string(),
            body: vec![inner],
            location: SourceLocation::default(),
        };
        assert_eq!(
            emit(&outer),
            "for (a) {\n\tfor (b) {\n\t\tfmt.Println(c)\n\t}\n}"
        );
    }

    #[test]
    fn test_switch_branches() {
        let switch = Statement::SwitchCase {
            expression: "x".to_string(),
            cases: vec![
                SwitchArm {
                    label: "10".to_string(),
                    body: vec![print("x")],
                },
                SwitchArm {
                    label: "20".to_string(),
                    body: vec![print("y")],
                },
            ],
            default_body: Some(vec![print("z")]),
            location: SourceLocation::default(),
        };
        let code = emit(&switch);

        assert_eq!(
            code,
            "switch (x) {\ncase 10:\n\tfmt.Println(x)\ncase 20:\n\tfmt.Println(y)\ndefault:\n\tfmt.Println(z)\n}"
        );
        assert_eq!(code.matches("case ").count(), 2);
        assert_eq!(code.matches("default:").count(), 1);
    }

    #[test]
    fn test_switch_without_default() {
        let switch = Statement::SwitchCase {
            expression: "x".to_string(),
            cases: vec![],
            default_body: None,
            location: SourceLocation::default(),
        };
        assert_eq!(emit(&switch), "switch (x) {\n}");
    }

    #[test]
    fn test_array_literal() {
        let array = Statement::Array {
            name: "arr".to_string(),
            values: vec![1, 2, 3, 4, 5],
            location: SourceLocation::default(),
        };
        assert_eq!(emit(&array), "var arr = [5]int{1, 2, 3, 4, 5}");

        let empty = Statement::Array {
            name: "none".to_string(),
            values: vec![],
            location: SourceLocation::default(),
        };
        assert_eq!(emit(&empty), "var none = [0]int{}");
    }

    #[test]
    fn test_file_operations() {
        let write = Statement::FileOperation {
            operation: FileOp::Write,
            filename: "test".to_string(),
            content: "txt".to_string(),
            location: SourceLocation::default(),
        };
        assert_eq!(
            emit(&write),
            "os.WriteFile(\"test\", []byte(\"txt\"), 0644)"
        );

        let read = Statement::FileOperation {
            operation: FileOp::Read,
            filename: "test".to_string(),
            content: String::new(),
            location: SourceLocation::default(),
        };
        assert_eq!(
            emit(&read),
            "content, _ := os.ReadFile(\"test\")\nfmt.Println(string(content))"
        );
    }

    #[test]
    fn test_go_string_escapes() {
        assert_eq!(go_string("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }
}
