#![allow(clippy::module_inception)]

//! Parser for the Wipple language.
//!
//! Source text goes through the [`lexer`] into a flat token stream (trivia
//! included), and the [`parser`] turns that stream into a [`ast::ast::SourceFile`].
//! Parsing never fails outright: malformed statements become error nodes and
//! the accompanying errors are returned alongside the tree.

use std::fmt::Display;

use crate::{ast::ast::SourceFile, errors::errors::Error};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub u32);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Offsets past `u32::MAX` are clamped to it.
    pub fn new(start: usize, end: usize) -> Self {
        Span {
            start: Position(u32::try_from(start).unwrap_or(u32::MAX)),
            end: Position(u32::try_from(end).unwrap_or(u32::MAX)),
        }
    }

    /// Span covering both `self` and `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn as_str<'a>(&self, source: &'a str) -> &'a str {
        source
            .get(self.start.0 as usize..self.end.0 as usize)
            .unwrap_or_default()
    }
}

/// Returns the 1-based line number, the text of that line and the column of
/// `position` within it, or `None` if the position lies outside `source`.
pub fn get_line_at_position(source: &str, position: Position) -> Option<(usize, String, usize)> {
    let pos = position.0 as usize;

    if pos > source.len() {
        return None;
    } else if source.is_empty() {
        return Some((1, String::new(), 0));
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    // End of input, reported on the last line
    let last = source.rsplit('\n').next().unwrap_or_default();
    if source.ends_with('\n') {
        Some((line_number, String::new(), 0))
    } else {
        Some((line_number - 1, last.to_string(), last.len()))
    }
}

/// Tokenizes and parses `source`, returning the tree together with every
/// lexical and structural error encountered.
pub fn parse(source: &str) -> (SourceFile, Vec<Error>) {
    let (tokens, mut errors) = lexer::lexer::tokenize(source);
    let (source_file, parse_errors) = parser::parser::parse(tokens);
    errors.extend(parse_errors);
    errors.sort_by_key(|error| error.get_span().start);
    // A statement that stops at an unrecognised character repeats the
    // lexer's error for it
    errors.dedup();

    (source_file, errors)
}

#[cfg(test)]
mod tests {
    use crate::Position;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nfoo\n\nTesting { }\n";

        let (line_number, line, line_pos) =
            super::get_line_at_position(source, Position(10)).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) =
            super::get_line_at_position(source, Position(27)).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_span_offsets_saturate() {
        let span = super::Span::new(3, usize::MAX);
        assert_eq!(span.start, Position(3));
        assert_eq!(span.end, Position(u32::MAX));
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) =
            super::get_line_at_position("a : 1\nb", Position(7)).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "b");
        assert_eq!(line_pos, 1);

        assert!(super::get_line_at_position("abc", Position(10)).is_none());
    }
}
