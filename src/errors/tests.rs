//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Span;

fn unexpected(expected: &str, found: &str, span: Span) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            expected: expected.to_string(),
            found: found.to_string(),
        },
        span,
    )
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Span::new(10, 11),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.kind(), ErrorKind::Lexical);
}

#[test]
fn test_error_span() {
    let error = unexpected("`)`", "`}`", Span::new(42, 43));

    assert_eq!(error.get_span().start.0, 42);
    assert_eq!(error.get_span().end.0, 43);
}

#[test]
fn test_error_kinds() {
    let span = Span::new(0, 1);

    assert_eq!(unexpected("name", "`:`", span).kind(), ErrorKind::Structural);
    assert_eq!(
        Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: "`}`".to_string()
            },
            span
        )
        .kind(),
        ErrorKind::Structural
    );
    assert_eq!(
        Error::new(
            ErrorImpl::ReservedWord {
                word: "when".to_string(),
                expected: "name".to_string()
            },
            span
        )
        .kind(),
        ErrorKind::Structural
    );
    assert_eq!(
        Error::new(
            ErrorImpl::AmbiguousElision {
                construct: "sequence".to_string(),
                message: "mixed separators".to_string()
            },
            span
        )
        .kind(),
        ErrorKind::AmbiguousElision
    );
}

#[test]
fn test_expected_found_message() {
    let error = unexpected("`)`", "`}`", Span::new(0, 1));

    assert_eq!(error.to_string(), "expected `)`, found `}`");
}

#[test]
fn test_reserved_word_message() {
    let error = Error::new(
        ErrorImpl::ReservedWord {
            word: "when".to_string(),
            expected: "pattern".to_string(),
        },
        Span::new(0, 4),
    );

    assert_eq!(error.to_string(), "expected pattern, found reserved word `when`");
    assert_eq!(error.get_error_name(), "ReservedWord");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "$".to_string(),
        },
        Span::new(0, 1),
    );

    let tip = error.get_tip();
    assert!(matches!(tip, ErrorTip::None));
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_tip_suggestion() {
    let error = unexpected("`)`", "`}`", Span::new(0, 1));

    match error.get_tip() {
        ErrorTip::Suggestion(message) => assert!(message.contains("expected `)`")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_render_points_at_column() {
    let source = "a : 1\n  f (x }\n";
    let error = unexpected("`)`", "`}`", Span::new(13, 14));

    let rendered = error.render(source, "main.wpl");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "Error: UnexpectedToken (expected `)`, found `}`)");
    assert_eq!(lines[1], "-> main.wpl");
    assert_eq!(lines[2], "  |");
    assert_eq!(lines[3], "2 | f (x }");
    assert_eq!(lines[4], "  | -----^");
}

#[test]
fn test_render_out_of_range() {
    let error = unexpected("`)`", "`}`", Span::new(100, 101));

    let rendered = error.render("x", "main.wpl");

    assert_eq!(rendered.lines().count(), 2);
}

#[test]
fn test_errors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
