//! Unit tests for the lexer module.
//!
//! Covers name classes, literals, trivia, longest-match symbol selection,
//! signed numbers and error recovery.

use super::{
    lexer::{tokenize, Lexer},
    tokens::{Token, TokenClass, TokenKind},
};
use crate::Span;

fn kinds(source: &str) -> Vec<TokenKind> {
    let (tokens, errors) = tokenize(source);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    tokens.into_iter().map(|token| token.kind).collect()
}

fn values(source: &str) -> Vec<String> {
    let (tokens, _) = tokenize(source);
    tokens.into_iter().map(|token| token.value).collect()
}

#[test]
fn test_tokenize_names() {
    let (tokens, errors) = tokenize("foo Bar-baz is-empty? 2-Dimensional x!");
    assert!(errors.is_empty());

    assert_eq!(tokens[0].kind, TokenKind::LowercaseName);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::CapitalName);
    assert_eq!(tokens[1].value, "Bar-baz");
    assert_eq!(tokens[2].kind, TokenKind::LowercaseName);
    assert_eq!(tokens[2].value, "is-empty?");
    assert_eq!(tokens[3].kind, TokenKind::CapitalName);
    assert_eq!(tokens[3].value, "2-Dimensional");
    assert_eq!(tokens[4].kind, TokenKind::LowercaseName);
    assert_eq!(tokens[4].value, "x!");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_reserved_words() {
    assert_eq!(
        kinds("do infer instance intrinsic set trait type when where _"),
        vec![
            TokenKind::Do,
            TokenKind::Infer,
            TokenKind::Instance,
            TokenKind::Intrinsic,
            TokenKind::Set,
            TokenKind::Trait,
            TokenKind::Type,
            TokenKind::When,
            TokenKind::Where,
            TokenKind::Underscore,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_reserved_prefix_is_a_name() {
    assert_eq!(
        kinds("types _x setter"),
        vec![
            TokenKind::LowercaseName,
            TokenKind::LowercaseName,
            TokenKind::LowercaseName,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_operator_words_are_names() {
    let (tokens, _) = tokenize("x is y and z");

    assert_eq!(tokens[1].kind, TokenKind::LowercaseName);
    assert!(tokens[1].is_operator_word());
    assert!(tokens[3].is_operator_word());
    assert!(!tokens[0].is_operator_word());
}

#[test]
fn test_tokenize_numbers() {
    let (tokens, _) = tokenize("42 3.14 0 100.5");

    for token in &tokens[..4] {
        assert_eq!(token.kind, TokenKind::Number);
    }
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_signed_number_after_open_paren() {
    assert_eq!(
        kinds("(-1)"),
        vec![
            TokenKind::OpenParen,
            TokenKind::Number,
            TokenKind::CloseParen,
            TokenKind::EOF,
        ]
    );
    assert_eq!(values("x : -1.5")[2], "-1.5");
    assert_eq!(values("+7")[0], "+7");
}

#[test]
fn test_sign_after_operand_is_an_operator() {
    assert_eq!(
        kinds("a -1"),
        vec![
            TokenKind::LowercaseName,
            TokenKind::Dash,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
    assert_eq!(
        kinds("(a) +2"),
        vec![
            TokenKind::OpenParen,
            TokenKind::LowercaseName,
            TokenKind::CloseParen,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_text() {
    let (tokens, _) = tokenize(r#""hello" "multiple words" """#);

    assert_eq!(tokens[0].kind, TokenKind::Text);
    assert_eq!(tokens[0].value, "\"hello\"");
    assert_eq!(tokens[1].value, "\"multiple words\"");
    assert_eq!(tokens[2].value, "\"\"");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_text_spans_lines() {
    let (tokens, _) = tokenize("\"a\nb\" c");

    assert_eq!(tokens[0].kind, TokenKind::Text);
    assert_eq!(tokens[0].value, "\"a\nb\"");
    assert_eq!(tokens[1].kind, TokenKind::LowercaseName);
}

#[test]
fn test_tokenize_comment() {
    let (tokens, _) = tokenize("-- hello there\nx");

    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].value, "-- hello there");
    assert_eq!(tokens[1].kind, TokenKind::LineBreak);
    assert_eq!(tokens[2].kind, TokenKind::LowercaseName);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_line_breaks_collapse() {
    let (tokens, _) = tokenize("a\n\n  \nb");

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[1].kind, TokenKind::LineBreak);
    assert_eq!(tokens[1].value, "\n\n  \n");
    assert_eq!(tokens[2].value, "b");
}

#[test]
fn test_tokenize_symbols() {
    assert_eq!(
        kinds(":: : => -> /= <= >= ^ * / % + - < > = . ; , ( ) { } [ ]"),
        vec![
            TokenKind::DoubleColon,
            TokenKind::Colon,
            TokenKind::FatArrow,
            TokenKind::Arrow,
            TokenKind::SlashEquals,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Caret,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Equals,
            TokenKind::Dot,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_longest_symbol_wins() {
    assert_eq!(
        kinds("x->y"),
        vec![
            TokenKind::LowercaseName,
            TokenKind::Arrow,
            TokenKind::LowercaseName,
            TokenKind::EOF,
        ]
    );
    assert_eq!(
        kinds("a<=b"),
        vec![
            TokenKind::LowercaseName,
            TokenKind::LessEquals,
            TokenKind::LowercaseName,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_hyphenated_name_is_one_token() {
    assert_eq!(values("a-b"), vec!["a-b".to_string(), String::new()]);
    assert_eq!(
        kinds("2 - 3"),
        vec![
            TokenKind::Number,
            TokenKind::Dash,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_token_spans() {
    let (tokens, _) = tokenize("foo : 1");

    assert_eq!(tokens[0].span, Span::new(0, 3));
    assert_eq!(tokens[1].span, Span::new(4, 5));
    assert_eq!(tokens[2].span, Span::new(6, 7));
    assert_eq!(tokens[3].span, Span::new(7, 7));
}

#[test]
fn test_unrecognised_character_recovers() {
    let (tokens, errors) = tokenize("a § b");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnrecognisedToken");
    assert_eq!(*errors[0].get_span(), Span::new(2, 4));

    let names: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(names, vec!["a", "§", "b", ""]);
    assert_eq!(tokens[1].kind, TokenKind::Unrecognised);
    assert_eq!(tokens[1].span, Span::new(2, 4));
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
}

#[test]
fn test_lexer_is_lazy_and_restartable() {
    let mut lexer = Lexer::new("a b c");

    let first = lexer.next().unwrap().unwrap();
    assert_eq!(first.value, "a");

    let rest: Vec<Token> = lexer.clone().map(|token| token.unwrap()).collect();
    assert_eq!(rest.len(), 3);

    lexer.reset();
    assert_eq!(lexer.position(), 0);
    assert_eq!(lexer.count(), 4);
}

#[test]
fn test_lexer_ends_after_eof() {
    let mut lexer = Lexer::new("x");

    assert!(lexer.next().is_some());
    assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::EOF);
    assert!(lexer.next().is_none());
}

#[test]
fn test_token_classes() {
    let (tokens, _) = tokenize("Foo foo 1 \"t\" -- c\n:");

    let classes: Vec<TokenClass> = tokens.iter().map(|token| token.kind.class()).collect();
    assert_eq!(
        classes,
        vec![
            TokenClass::CapitalName,
            TokenClass::LowercaseName,
            TokenClass::Number,
            TokenClass::Text,
            TokenClass::Comment,
            TokenClass::LineBreak,
            TokenClass::Symbol,
            TokenClass::EndOfInput,
        ]
    );
}
