use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Classifies a match; `None` means the match is skipped (whitespace).
pub type RegexHandler = fn(&Lexer, &str) -> Option<TokenKind>;

/// Decides whether a pattern may be tried at the current position.
pub type RegexGuard = fn(&Lexer) -> bool;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
    guard: Option<RegexGuard>,
}

macro_rules! symbol {
    ($pattern:literal, $kind:expr) => {
        RegexPattern {
            regex: Regex::new(concat!("^", $pattern)).unwrap(),
            handler: MK_DEFAULT_HANDLER!($kind),
            guard: None,
        }
    };
}

lazy_static! {
    /// Every pattern is tried at each position and the longest match wins.
    /// Ties go to the pattern listed first.
    static ref LEXER_PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^--[^\n]*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comment), guard: None },
        RegexPattern { regex: Regex::new(r#"^"[^"]*""#).unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Text), guard: None },
        RegexPattern { regex: Regex::new(r"^[+\-]\d+(?:\.\d+)?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Number), guard: Some(sign_allowed) },
        RegexPattern { regex: Regex::new(r"^\d+(?:\.\d+)?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Number), guard: None },
        RegexPattern { regex: Regex::new(r"^(?:\d-)*[A-Z]\w*(?:-\w+)*[!?]?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CapitalName), guard: None },
        RegexPattern { regex: Regex::new(r"^\w+(?:-\w+)*[!?]?").unwrap(), handler: lowercase_name_handler, guard: None },
        RegexPattern { regex: Regex::new(r"^\n(?:[ \t\r]*\n)*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LineBreak), guard: None },
        RegexPattern { regex: Regex::new(r"^[ \t\r]+").unwrap(), handler: skip_handler, guard: None },
        symbol!("::", TokenKind::DoubleColon),
        symbol!(":", TokenKind::Colon),
        symbol!("=>", TokenKind::FatArrow),
        symbol!("->", TokenKind::Arrow),
        symbol!("/=", TokenKind::SlashEquals),
        symbol!("<=", TokenKind::LessEquals),
        symbol!(">=", TokenKind::GreaterEquals),
        symbol!("\\^", TokenKind::Caret),
        symbol!("\\*", TokenKind::Star),
        symbol!("/", TokenKind::Slash),
        symbol!("%", TokenKind::Percent),
        symbol!("\\+", TokenKind::Plus),
        symbol!("-", TokenKind::Dash),
        symbol!("<", TokenKind::Less),
        symbol!(">", TokenKind::Greater),
        symbol!("=", TokenKind::Equals),
        symbol!("\\.", TokenKind::Dot),
        symbol!(";", TokenKind::Semicolon),
        symbol!(",", TokenKind::Comma),
        symbol!("\\(", TokenKind::OpenParen),
        symbol!("\\)", TokenKind::CloseParen),
        symbol!("\\{", TokenKind::OpenCurly),
        symbol!("\\}", TokenKind::CloseCurly),
        symbol!("\\[", TokenKind::OpenBracket),
        symbol!("\\]", TokenKind::CloseBracket),
    ];
}

/// Lazily produces tokens (trivia included) followed by a single `EOF`.
/// Unrecognised characters are reported one at a time and skipped.
#[derive(Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    last_kind: Option<TokenKind>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            last_kind: None,
            finished: false,
        }
    }

    /// Restarts lexing from the beginning of the source.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.last_kind = None;
        self.finished = false;
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Whether the previous token could end an operand, in which case a
    /// following `+`/`-` is an operator rather than a sign.
    pub fn follows_operand(&self) -> bool {
        self.last_kind.is_some_and(|kind| kind.ends_operand())
    }

    fn longest_match(&self) -> Option<(&'static RegexPattern, usize)> {
        let remainder = self.remainder();
        let mut best: Option<(&'static RegexPattern, usize)> = None;

        for pattern in LEXER_PATTERNS.iter() {
            if let Some(guard) = pattern.guard {
                if !guard(self) {
                    continue;
                }
            }

            if let Some(found) = pattern.regex.find(remainder) {
                let len = found.end();
                if len > 0 && best.map_or(true, |(_, best_len)| len > best_len) {
                    best = Some((pattern, len));
                }
            }
        }

        best
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }

            if self.at_eof() {
                self.finished = true;
                return Some(Ok(MK_TOKEN!(
                    TokenKind::EOF,
                    String::new(),
                    Span::new(self.pos, self.pos)
                )));
            }

            let start = self.pos;
            let remainder = self.remainder();

            let Some((pattern, len)) = self.longest_match() else {
                let character = remainder.chars().next()?;
                self.advance_n(character.len_utf8());
                return Some(Err(Error::new(
                    ErrorImpl::UnrecognisedToken {
                        token: character.to_string(),
                    },
                    Span::new(start, self.pos),
                )));
            };

            let matched = &remainder[..len];
            let kind = (pattern.handler)(self, matched);
            self.advance_n(len);

            if let Some(kind) = kind {
                self.last_kind = Some(kind);
                return Some(Ok(MK_TOKEN!(
                    kind,
                    matched.to_string(),
                    Span::new(start, self.pos)
                )));
            }
        }
    }
}

fn sign_allowed(lexer: &Lexer) -> bool {
    !lexer.follows_operand()
}

fn skip_handler(_lexer: &Lexer, _matched: &str) -> Option<TokenKind> {
    None
}

fn lowercase_name_handler(_lexer: &Lexer, matched: &str) -> Option<TokenKind> {
    Some(
        RESERVED_LOOKUP
            .get(matched)
            .copied()
            .unwrap_or(TokenKind::LowercaseName),
    )
}

/// Lexes the whole source, separating tokens from lexical errors. The token
/// list always ends with `EOF`.
///
/// Each lexical error also leaves an `Unrecognised` token in the list, so the
/// parser can't read the surrounding statement as if the character were
/// absent.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Error>) {
    let mut tokens = vec![];
    let mut errors = vec![];

    for result in Lexer::new(source) {
        match result {
            Ok(token) => tokens.push(token),
            Err(error) => {
                let span = *error.get_span();
                tokens.push(MK_TOKEN!(
                    TokenKind::Unrecognised,
                    span.as_str(source).to_string(),
                    span
                ));
                errors.push(error);
            }
        }
    }

    (tokens, errors)
}
