// Integration tests for the full translation pipeline

use tarjuma::codegen::{self, GenOptions};
use tarjuma::eval::EvalError;
use tarjuma::interpreter::constants::DEFAULT_SNAPSHOT_LIMIT;
use tarjuma::interpreter::engine::Interpreter;
use tarjuma::parser::ast::{Program, Statement};
use tarjuma::parser::parse::{ParseError, Parser};
use std::fs;
use std::path::Path;

fn read_showcase() -> String {
    let path = Path::new("demos/showcase.ye");
    fs::read_to_string(path).expect("Failed to read demo script")
}

fn parse(source: &str) -> Program {
    Parser::new(source).parse_program().expect("Parsing failed")
}

const SHOWCASE_GO: &str = "const x = 10
const y = 20
if (x) {
\tfmt.Println(x)
} else {
\tfmt.Println(y)
}
for (x) {
\tfmt.Println(x)
\tconst x = 11
}
switch (x) {
case 10:
\tfmt.Println(x)
case 20:
\tfmt.Println(x)
default:
\tfmt.Println(x)
}
var arr = [5]int{1, 2, 3, 4, 5}
fmt.Println(arr)
os.WriteFile(\"test\", []byte(\"txt\"), 0644)
content, _ := os.ReadFile(\"test\")
fmt.Println(string(content))";

#[test]
fn test_showcase_translation() {
    let source = read_showcase();
    let go = tarjuma::translate(&source, &GenOptions::default()).expect("Translation failed");

    assert_eq!(go, SHOWCASE_GO);
}

#[test]
fn test_showcase_statements() {
    let source = read_showcase();
    let mut parser = Parser::new(&source);
    let program = parser.parse_program().expect("Parsing failed");

    let kinds: Vec<&str> = program.statements.iter().map(Statement::kind_name).collect();
    assert_eq!(kinds.len(), 9);
    assert!(matches!(
        &program.statements[4],
        Statement::SwitchCase { cases, default_body: Some(_), .. } if cases.len() == 2
    ));

    // The loop body re-declared x while parsing
    assert_eq!(parser.variables().get("x"), Some(11));
    assert_eq!(parser.variables().get("y"), Some(20));

    // `< y` after the one-token conditions, the words of the quoted strings
    let ignored: Vec<&str> = parser.ignored_tokens().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(
        ignored,
        vec![
            "<", "y", "<", "y", "is", "10", "is", "20", "is", "something", "else", "Hello",
            "World", "txt"
        ]
    );

    let skipped: String = parser.skipped_characters().iter().map(|s| s.ch).collect();
    assert_eq!(skipped.matches('"').count(), 12);
    assert!(skipped.contains(','));
    assert!(skipped.contains('!'));
}

#[test]
fn test_showcase_wrapped_file() {
    let source = read_showcase();
    let options = GenOptions {
        wrap_in_main: true,
        ..GenOptions::default()
    };
    let go = tarjuma::translate(&source, &options).expect("Translation failed");

    assert!(go.starts_with("package main\n\nimport (\n\t\"fmt\"\n\t\"os\"\n)\n\nfunc main() {\n"));
    assert!(go.contains("\n\tconst x = 10\n"));
    assert!(go.contains("\n\t\tconst x = 11\n"));
    assert!(go.ends_with("\tfmt.Println(string(content))\n}\n"));
}

#[test]
fn test_showcase_demo_run() {
    let program = parse(&read_showcase());
    let mut interpreter = Interpreter::new(program, DEFAULT_SNAPSHOT_LIMIT);
    interpreter.run().expect("Execution failed");

    // Only `bol arr` runs at top level, and arr is not a scalar
    assert_eq!(interpreter.terminal().get_output(), vec!["Output: 0"]);
    assert_eq!(interpreter.evaluation_errors().len(), 1);
    assert_eq!(
        interpreter.evaluation_errors()[0].error,
        EvalError::UndefinedVariable {
            name: "arr".to_string()
        }
    );

    // Nested blocks are not entered, so the run sees the top-level x
    assert_eq!(interpreter.variables().get("x"), Some(10));
    assert_eq!(interpreter.total_snapshots(), 10);
}

#[test]
fn test_generate_matches_translate() {
    let source = "ye n = 3 * 4\njabtak n\n bol n\nend";
    let program = parse(source);

    assert_eq!(
        codegen::generate(&program, &GenOptions::default()),
        tarjuma::translate(source, &GenOptions::default()).unwrap()
    );
}

#[test]
fn test_missing_end() {
    let result = tarjuma::translate("agar x\n bol x", &GenOptions::default());
    assert!(matches!(
        result,
        Err(ParseError::UnexpectedEndOfInput { .. })
    ));
}

#[test]
fn test_error_message_has_location() {
    let err = tarjuma::translate("ye x = 1\nye 5", &GenOptions::default()).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("line 2"), "unexpected message: {}", message);
    assert_eq!(err.location().line, 2);
}

#[test]
fn test_undefined_variable_in_declaration() {
    let err = tarjuma::translate("ye x = y + 1", &GenOptions::default()).unwrap_err();
    match err {
        ParseError::Evaluation { error, .. } => {
            assert_eq!(
                error,
                EvalError::UndefinedVariable {
                    name: "y".to_string()
                }
            );
        }
        other => panic!("Expected evaluation error, got {:?}", other),
    }
}
