use std::fmt::{Display, Write};

use thiserror::Error;

use crate::{get_line_at_position, Span};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character sequence the lexer does not recognise.
    Lexical,
    /// A token that is not valid in its grammatical position.
    Structural,
    /// A sequence that can't be read as either a tuple or a collection.
    AmbiguousElision,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorKind::Lexical,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedEndOfInput { .. }
            | ErrorImpl::ReservedWord { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::Structural,
            ErrorImpl::AmbiguousElision { .. } => ErrorKind::AmbiguousElision,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::ReservedWord { .. } => "ReservedWord",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::AmbiguousElision { .. } => "AmbiguousElision",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "expected {}, found {}",
                expected, found
            )),
            ErrorImpl::UnexpectedEndOfInput { expected } => {
                ErrorTip::Suggestion(format!("expected {} before the end of input", expected))
            }
            ErrorImpl::ReservedWord { word, .. } => ErrorTip::Suggestion(format!(
                "`{}` is a reserved word and can't be used as a name",
                word
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "move some of the inner code into separate definitions",
            )),
            ErrorImpl::AmbiguousElision { .. } => ErrorTip::Suggestion(String::from(
                "use only `;` for a tuple or only `,` for a collection",
            )),
        }
    }

    /// Formats the error as a diagnostic pointing into `source`:
    ///
    /// ```text
    /// Error: UnexpectedToken (expected `)`, found `}`)
    /// -> main.wpl
    ///   |
    /// 2 | f (x }
    ///   | -----^
    /// ```
    pub fn render(&self, source: &str, file: &str) -> String {
        let mut output = String::new();

        if let ErrorTip::None = self.get_tip() {
            let _ = writeln!(output, "Error: {} ({})", self.get_error_name(), self);
        } else {
            let _ = writeln!(output, "Error: {} ({})", self.get_error_name(), self.get_tip());
        }
        let _ = writeln!(output, "-> {}", file);

        let Some((line, line_text, line_pos)) = get_line_at_position(source, self.span.start)
        else {
            return output;
        };

        let line_str = line.to_string();
        let padding = line_str.len() + 2;

        let trimmed = line_text.trim_start_matches([' ', '\t']);
        let removed_whitespace = line_text.len() - trimmed.len();
        let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

        let _ = writeln!(output, "{:>padding$}", "|");
        let _ = writeln!(output, "{} | {}", line_str, trimmed.trim_end());
        let _ = writeln!(output, "{:>padding$} {:->arrows$}", "|", "^");

        output
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character {token:?}")]
    UnrecognisedToken { token: String },
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("expected {expected}, found end of input")]
    UnexpectedEndOfInput { expected: String },
    #[error("expected {expected}, found reserved word `{word}`")]
    ReservedWord { word: String, expected: String },
    #[error("nesting too deep (more than {limit} levels)")]
    NestingTooDeep { limit: usize },
    #[error("ambiguous {construct}: {message}")]
    AmbiguousElision { construct: String, message: String },
}
