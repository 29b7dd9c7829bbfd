use tarjuma::eval::{self, EvalError, VariableTable};
use tarjuma::interpreter::constants::DEFAULT_SNAPSHOT_LIMIT;
use tarjuma::interpreter::engine::Interpreter;
use tarjuma::parser::ast::Statement;
use tarjuma::parser::parse::{ParseError, Parser};
use std::fs;
use std::path::Path;

fn declared_values(source: &str) -> Vec<(String, i64)> {
    let program = Parser::new(source).parse_program().expect("Parsing failed");
    program
        .statements
        .into_iter()
        .filter_map(|statement| match statement {
            Statement::Declaration { name, value, .. } => Some((name, value)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_arithmetic_demo() {
    let path = Path::new("demos/arithmetic.ye");
    let source = fs::read_to_string(path).expect("Failed to read demo script");

    let mut parser = Parser::new(&source);
    let program = parser.parse_program().expect("Parsing failed");
    let vars = parser.variables();

    // Rightmost split keeps chains left-associative
    assert_eq!(vars.get("a"), Some(9));
    assert_eq!(vars.get("b"), Some(14));
    assert_eq!(vars.get("c"), Some(2));
    assert_eq!(vars.get("d"), Some(1));
    assert_eq!(vars.get("e"), Some(2));
    assert_eq!(vars.get("f"), Some(18));
    assert_eq!(vars.get("g"), Some(124));
    assert_eq!(vars.get("h"), Some(0));

    let mut interpreter = Interpreter::new(program, DEFAULT_SNAPSHOT_LIMIT);
    interpreter.run().expect("Execution failed");

    let output = interpreter.terminal().get_output();
    println!("Interpreter output:\n{}", output.join("\n"));
    assert_eq!(output, vec!["Output: 124", "Output: 0"]);
}

#[test]
fn test_redeclaration_uses_previous_value() {
    let values = declared_values("ye x = 5\nye x = x * x - 1\nye y = x / 4");
    assert_eq!(
        values,
        vec![
            ("x".to_string(), 5),
            ("x".to_string(), 24),
            ("y".to_string(), 6)
        ]
    );
}

#[test]
fn test_division_truncates_toward_zero() {
    let mut vars = VariableTable::new();
    vars.set("n", 0);
    assert_eq!(eval::evaluate("n-7", &vars), Ok(-7));

    vars.set("n", -7);
    assert_eq!(eval::evaluate("n/2", &vars), Ok(-3));
}

#[test]
fn test_division_by_zero_aborts_parse() {
    let result = Parser::new("ye z = 0\nye q = 5 / z").parse_program();
    assert!(matches!(
        result,
        Err(ParseError::Evaluation {
            error: EvalError::DivisionByZero,
            ..
        })
    ));
}

#[test]
fn test_overflow_is_reported() {
    let result = Parser::new("ye big = 9223372036854775807 + 1").parse_program();
    assert!(matches!(
        result,
        Err(ParseError::Evaluation {
            error: EvalError::IntegerOverflow { .. },
            ..
        })
    ));
}

#[test]
fn test_leading_minus_is_malformed() {
    let result = Parser::new("ye neg = - 5").parse_program();
    assert!(matches!(
        result,
        Err(ParseError::Evaluation {
            error: EvalError::MalformedExpression { .. },
            ..
        })
    ));
}

#[test]
fn test_seeded_table() {
    let seeded: VariableTable = [("base", 40)].into_iter().collect();
    let mut parser = Parser::new("ye total = base + 2").with_variables(seeded);
    parser.parse_program().expect("Parsing failed");
    assert_eq!(parser.variables().get("total"), Some(42));
}

#[test]
fn test_negative_value_feeds_later_declaration() {
    // Looked up as a value, so -3 never becomes the malformed text "-3+1"
    let values = declared_values("ye a = 2 - 5\nye b = a + 1\nye c = b * 3");
    assert_eq!(
        values,
        vec![
            ("a".to_string(), -3),
            ("b".to_string(), -2),
            ("c".to_string(), -6)
        ]
    );
}

#[test]
fn test_adjacent_names_do_not_concatenate_values() {
    let result = Parser::new("ye x = 1\nye y = 2\nye z = x y").parse_program();
    assert!(matches!(
        result,
        Err(ParseError::Evaluation {
            error: EvalError::UndefinedVariable { ref name },
            ..
        }) if name == "xy"
    ));
}
