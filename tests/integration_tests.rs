//! Integration tests for end-to-end parsing.
//!
//! These tests go through the public entry point, from source text through
//! tokenization and parsing to the rendered tree and error reports.

use std::thread;

use wipple_syntax::{
    ast::{
        ast::{Node, SourceFile},
        display::pretty_print,
        expressions::Expression,
        statements::Statement,
    },
    errors::errors::ErrorKind,
    lexer::lexer::tokenize,
    parse,
    parser::parser,
};

const PROGRAM: &str = r#"-- A value that might be missing
Maybe : value => type {
  Some value
  None
}

Show : value => trait (value -> Text)

-- Adds two numbers
[operator]
add :: Number -> Number -> Number where (Add Number Number)

instance (Show Number) : n -> "number"

describe : x -> when x {
  Some y -> "some _" y
  None -> "none"
}

numbers : 1, 2, 3
total : numbers . sum
"#;

fn single_expression(source: &str) -> Expression {
    let (source_file, errors) = parse(source);
    assert!(errors.is_empty(), "{:?}", errors);

    match source_file.statements.into_iter().next() {
        Some(Statement::Expression(statement)) => statement.expression,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

#[test]
fn test_parse_complete_program() {
    let (source_file, errors) = parse(PROGRAM);
    assert!(errors.is_empty(), "{:?}", errors);

    let kinds: Vec<&str> = source_file.statements.iter().map(|statement| statement.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            "type_definition_statement",
            "trait_definition_statement",
            "constant_definition_statement",
            "instance_definition_statement",
            "assignment_statement",
            "assignment_statement",
            "assignment_statement",
        ]
    );

    match &source_file.statements[2] {
        Statement::ConstantDefinition(definition) => {
            assert_eq!(definition.comments.len(), 1);
            assert_eq!(definition.attributes.len(), 1);
            assert!(definition.type_annotation.where_clause.is_some());
        }
        other => panic!("expected a constant definition, got {:?}", other),
    }
}

#[test]
fn test_operator_precedence_examples() {
    assert_eq!(
        single_expression("2 + 3 * 4").to_string(),
        "(add_expression (number_expression 2) (multiply_expression (number_expression 3) (number_expression 4)))"
    );
    assert_eq!(
        single_expression("2 - 3 - 4").to_string(),
        "(subtract_expression (subtract_expression (number_expression 2) (number_expression 3)) (number_expression 4))"
    );
    assert_eq!(
        single_expression("2 ^ 2 ^ 3").to_string(),
        "(power_expression (number_expression 2) (power_expression (number_expression 2) (number_expression 3)))"
    );
}

#[test]
fn test_call_and_function_literal() {
    assert_eq!(
        single_expression("f x + 1").to_string(),
        "(add_expression (call_expression (variable_name_expression f) (variable_name_expression x)) (number_expression 1))"
    );

    let (source_file, errors) = parse("f : x -> x + 1");
    assert!(errors.is_empty());
    match &source_file.statements[0] {
        Statement::Assignment(assignment) => {
            assert_eq!(assignment.value.kind(), "function_expression");
        }
        other => panic!("expected an assignment, got {:?}", other),
    }
}

#[test]
fn test_inline_and_multiline_sequences_have_the_same_elements() {
    let inline = single_expression("a, b, c");
    let multiline = single_expression("(\n  a,\n  b,\n  c,\n)");

    match (&inline, &multiline) {
        (Expression::Collection(inline), Expression::Collection(multiline)) => {
            let render = |elements: &[Expression]| {
                elements.iter().map(|element| element.to_string()).collect::<Vec<_>>()
            };
            assert_eq!(render(&inline.elements), render(&multiline.elements));
            assert_eq!(inline.elements.len(), 3);
        }
        other => panic!("expected two collections, got {:?}", other),
    }
}

#[test]
fn test_reserved_word_is_a_structural_error() {
    let (source_file, errors) = parse("when : 1");

    assert!(!errors.is_empty());
    assert!(errors.iter().all(|error| error.kind() == ErrorKind::Structural));
    assert!(!source_file.to_string().contains("variable_name"));
}

#[test]
fn test_parsing_is_deterministic() {
    let (first, first_errors) = parse(PROGRAM);
    let (second, second_errors) = parse(PROGRAM);

    assert_eq!(first, second);
    assert_eq!(first_errors, second_errors);
}

#[test]
fn test_partial_recovery_produces_one_error_node() {
    let (source_file, errors) = parse("x : = 1\ny : 2");

    assert_eq!(source_file.error_count(), 1, "{}", source_file);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        source_file.to_string(),
        "(source_file (ERROR) (assignment_statement (variable_pattern y) (number_expression 2)))"
    );
}

#[test]
fn test_recovery_resumes_on_next_line() {
    let (source_file, errors) = parse("a : 1\nb : )\nc : 3");

    assert_eq!(errors.len(), 1);
    assert_eq!(source_file.statements.len(), 3);
    assert!(matches!(source_file.statements[1], Statement::Error(_)));
    assert_eq!(source_file.statements[1].get_span().as_str("a : 1\nb : )\nc : 3"), "b : )");
}

#[test]
fn test_when_arms_keep_source_order() {
    let expression = single_expression("when n {\n  3 -> c\n  1 -> a\n  2 -> b\n}");

    match expression {
        Expression::When(when) => {
            let patterns: Vec<String> = when.arms.iter().map(|arm| arm.pattern.to_string()).collect();
            assert_eq!(
                patterns,
                vec!["(number_pattern 3)", "(number_pattern 1)", "(number_pattern 2)"]
            );
        }
        other => panic!("expected a when expression, got {:?}", other),
    }
}

#[test]
fn test_parse_in_parallel() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let source = format!("x : {}\ny : x + {}", i, i);
                parse(&source)
            })
        })
        .collect();

    for handle in handles {
        let (source_file, errors) = handle.join().unwrap();
        assert!(errors.is_empty());
        assert_eq!(source_file.statements.len(), 2);
    }
}

#[test]
fn test_lexical_errors_are_reported_with_the_tree() {
    let (source_file, errors) = parse("x : 1\ny : 2 § 3");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ErrorKind::Lexical);
    assert_eq!(source_file.statements.len(), 2);
    assert!(matches!(source_file.statements[1], Statement::Error(_)));
    assert_eq!(source_file.error_count(), 1);
    assert_eq!(source_file.statements[1].get_span().as_str("x : 1\ny : 2 § 3"), "y : 2 § 3");
}

#[test]
fn test_deep_nesting_becomes_an_error_node() {
    let source = format!("f : {}x{}\ng : 2", "(".repeat(5000), ")".repeat(5000));
    let (source_file, errors) = parse(&source);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ErrorKind::Structural);
    assert_eq!(errors[0].get_error_name(), "NestingTooDeep");
    assert_eq!(source_file.error_count(), 1);
    assert!(matches!(source_file.statements[0], Statement::Error(_)));
    assert!(matches!(source_file.statements[1], Statement::Assignment(_)));
}

#[test]
fn test_errors_are_sorted_by_position() {
    let (_, errors) = parse("a : )\n§\nb : )");

    let starts: Vec<_> = errors.iter().map(|error| error.get_span().start).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);
    assert_eq!(errors.len(), 3);
}

#[test]
fn test_render_error() {
    let source = "a : 1\nb : )";
    let (_, errors) = parse(source);

    let rendered = errors[0].render(source, "main.wpl");
    assert!(rendered.contains("main.wpl"));
    assert!(rendered.contains("2 | b : )"));
    assert!(rendered.contains('^'));
}

#[test]
fn test_tokens_and_parser_compose() {
    let (tokens, lexical_errors) = tokenize("x : 1");
    assert!(lexical_errors.is_empty());

    let (source_file, errors): (SourceFile, _) = parser::parse(tokens);
    assert!(errors.is_empty());
    assert_eq!(
        source_file.to_string(),
        "(source_file (assignment_statement (variable_pattern x) (number_expression 1)))"
    );
}

#[test]
fn test_pretty_print_tree() {
    let (source_file, _) = parse("x : f \"(a)\"");
    let printed = pretty_print(&source_file.to_string());

    assert_eq!(
        printed,
        "(source_file\n  (assignment_statement\n    (variable_pattern x)\n    (call_expression\n      (variable_name_expression f)\n      (text_expression \"(a)\"))))"
    );
}
