//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct: a cursor over the token
//! stream with checkpoints for speculative parsing, the helpers shared by
//! the statement, expression, pattern and type parsers, and the statement
//! list loop that recovers from malformed statements.

use log::debug;

use crate::{
    ast::{
        ast::{AttributeName, Comment, Number, SourceFile, Text, TypeName, TypeParameterName, VariableName, VariantName},
        statements::{ErrorStatement, Statement},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::stmt::parse_stmt;

/// How many constructs may nest inside one another before the enclosing
/// statement is abandoned.
pub const MAX_NESTING_DEPTH: usize = 64;

/// The main parser structure that maintains parsing state.
///
/// Comment tokens are invisible to everything except [`Parser::leading_comments`];
/// line breaks are significant and have to be skipped explicitly.
pub struct Parser {
    /// The list of tokens to parse, always ending with `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Span of the last consumed token other than a line break
    previous_span: Span,
    /// Errors recorded by statement recovery
    errors: Vec<Error>,
    /// Number of [`Parser::nested`] calls currently running
    depth: usize,
}

/// A saved parser state to return to after a failed speculative parse.
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint {
    pos: usize,
    previous_span: Span,
    errors_len: usize,
}

/// Result of parsing a parenthesized form shared by expressions, patterns
/// and types.
pub enum Parenthesized<T> {
    /// `()`
    Unit,
    /// `(x)`, which produces no node of its own
    Group(T),
    /// `(a ; b)`, `(a , b ,)`, `(;)` and the multi-line forms
    Sequence(TokenKind, Vec<T>),
}

impl Parser {
    /// Creates a new Parser instance over `tokens`.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map_or(true, |token| token.kind != TokenKind::EOF) {
            let end = tokens.last().map_or(0, |token| token.span.end.0 as usize);
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::new(),
                span: Span::new(end, end),
            });
        }

        Parser {
            tokens,
            pos: 0,
            previous_span: Span::default(),
            errors: vec![],
            depth: 0,
        }
    }

    fn significant_index(&self) -> usize {
        let mut index = self.pos;
        while self.tokens[index].kind == TokenKind::Comment && index + 1 < self.tokens.len() {
            index += 1;
        }
        index
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.significant_index()]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    pub fn current_span(&self) -> Span {
        self.current_token().span
    }

    /// Returns the token after the current one.
    pub fn peek(&self) -> &Token {
        let mut index = self.significant_index();
        if index + 1 < self.tokens.len() {
            index += 1;
            while self.tokens[index].kind == TokenKind::Comment && index + 1 < self.tokens.len() {
                index += 1;
            }
        }
        &self.tokens[index]
    }

    /// Advances to the next token and returns the consumed token. The
    /// parser never moves past `EOF`.
    pub fn advance(&mut self) -> Token {
        let index = self.significant_index();
        let token = self.tokens[index].clone();

        if token.kind == TokenKind::EOF {
            self.pos = index;
        } else {
            self.pos = index + 1;
            if token.kind != TokenKind::LineBreak {
                self.previous_span = token.span;
            }
        }

        token
    }

    /// The current token and everything after it, comments excluded.
    pub fn tokens_ahead(&self) -> impl Iterator<Item = &Token> {
        self.tokens[self.significant_index()..]
            .iter()
            .filter(|token| token.kind != TokenKind::Comment)
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    pub fn has_tokens(&self) -> bool {
        !self.at(TokenKind::EOF)
    }

    /// Span from `start` to the end of the last consumed token.
    pub fn span_from(&self, start: Span) -> Span {
        start.to(&self.previous_span)
    }

    /// Skips line breaks (and any comments between them). Returns whether
    /// anything was skipped.
    pub fn skip_line_break(&mut self) -> bool {
        let mut skipped = false;
        while self.at(TokenKind::LineBreak) {
            self.advance();
            skipped = true;
        }
        skipped
    }

    /// Consumes the comments (and the line breaks between them) sitting on
    /// their own lines before the next token.
    pub fn leading_comments(&mut self) -> Vec<Comment> {
        let mut comments = vec![];

        loop {
            let token = &self.tokens[self.pos];
            match token.kind {
                TokenKind::Comment => comments.push(Comment {
                    value: token
                        .value
                        .strip_prefix("--")
                        .unwrap_or(&token.value)
                        .to_string(),
                    span: token.span,
                }),
                TokenKind::LineBreak => {}
                _ => break,
            }
            self.pos += 1;
        }

        comments
    }

    /// Builds the error for the current token not being `expected`.
    pub fn unexpected(&self, expected: &str) -> Error {
        let token = self.current_token();

        let error = if token.kind == TokenKind::EOF {
            ErrorImpl::UnexpectedEndOfInput {
                expected: expected.to_string(),
            }
        } else if token.kind == TokenKind::Unrecognised {
            // Same error the lexer reported for this character
            ErrorImpl::UnrecognisedToken {
                token: token.value.clone(),
            }
        } else if token.kind.is_reserved() {
            ErrorImpl::ReservedWord {
                word: token.value.clone(),
                expected: expected.to_string(),
            }
        } else {
            ErrorImpl::UnexpectedToken {
                expected: expected.to_string(),
                found: token.describe(),
            }
        };

        Error::new(error, token.span)
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            Err(error.unwrap_or_else(|| self.unexpected(&expected_kind.describe())))
        } else {
            Ok(self.advance())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            previous_span: self.previous_span,
            errors_len: self.errors.len(),
        }
    }

    /// Rewinds to `checkpoint`, discarding errors recorded since.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.previous_span = checkpoint.previous_span;
        self.errors.truncate(checkpoint.errors_len);
    }

    /// Runs `parse`, rewinding if it fails.
    pub fn speculate<T>(&mut self, parse: impl FnOnce(&mut Parser) -> Result<T, Error>) -> Option<T> {
        let checkpoint = self.checkpoint();
        match parse(self) {
            Ok(value) => Some(value),
            Err(_) => {
                self.restore(checkpoint);
                None
            }
        }
    }

    /// Runs `parse` one nesting level deeper. Fails without running it once
    /// `MAX_NESTING_DEPTH` levels are open.
    pub fn nested<T>(&mut self, parse: impl FnOnce(&mut Parser) -> Result<T, Error>) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.current_span(),
            ));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    pub fn record(&mut self, error: Error) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    // NAMES AND LITERALS

    fn name_token(&mut self, kind: TokenKind, expected: &str) -> Result<Token, Error> {
        if !self.at(kind) {
            return Err(self.unexpected(expected));
        }
        Ok(self.advance())
    }

    pub fn type_name(&mut self) -> Result<TypeName, Error> {
        let token = self.name_token(TokenKind::CapitalName, "type name")?;
        Ok(TypeName { value: token.value, span: token.span })
    }

    pub fn variant_name(&mut self) -> Result<VariantName, Error> {
        let token = self.name_token(TokenKind::CapitalName, "variant name")?;
        Ok(VariantName { value: token.value, span: token.span })
    }

    pub fn variable_name(&mut self) -> Result<VariableName, Error> {
        let token = self.name_token(TokenKind::LowercaseName, "variable name")?;
        Ok(VariableName { value: token.value, span: token.span })
    }

    pub fn type_parameter_name(&mut self) -> Result<TypeParameterName, Error> {
        let token = self.name_token(TokenKind::LowercaseName, "type parameter name")?;
        Ok(TypeParameterName { value: token.value, span: token.span })
    }

    pub fn attribute_name(&mut self) -> Result<AttributeName, Error> {
        let token = self.name_token(TokenKind::LowercaseName, "attribute name")?;
        Ok(AttributeName { value: token.value, span: token.span })
    }

    pub fn text(&mut self) -> Result<Text, Error> {
        let token = self.expect(TokenKind::Text)?;
        let value = token.value[1..token.value.len() - 1].to_string();
        Ok(Text { value, span: token.span })
    }

    pub fn number(&mut self) -> Result<Number, Error> {
        let token = self.expect(TokenKind::Number)?;
        Ok(Number { value: token.value, span: token.span })
    }

    // SHARED GRAMMAR

    /// Parses line-separated items up to (not including) `terminator`, with
    /// optional leading and trailing line breaks.
    pub fn lines<T>(
        &mut self,
        terminator: TokenKind,
        mut item: impl FnMut(&mut Parser) -> Result<T, Error>,
    ) -> Result<Vec<T>, Error> {
        let mut items = vec![];

        self.skip_line_break();
        while !self.at(terminator) && self.has_tokens() {
            items.push(item(self)?);

            if !self.skip_line_break() && !self.at(terminator) {
                return Err(self.unexpected(&format!("line break or {}", terminator.describe())));
            }
        }

        Ok(items)
    }

    /// Parses a parenthesized group or sequence. Elements are separated by
    /// one of `separators`; a sequence spanning several lines must end every
    /// element with a separator.
    pub fn parenthesized<T>(
        &mut self,
        construct: &str,
        separators: &[TokenKind],
        mut element: impl FnMut(&mut Parser) -> Result<T, Error>,
    ) -> Result<Parenthesized<T>, Error> {
        self.expect(TokenKind::OpenParen)?;
        if self.at(TokenKind::CloseParen) {
            self.advance();
            return Ok(Parenthesized::Unit);
        }

        let multiline = self.skip_line_break();

        let kind = self.current_token_kind();
        if separators.contains(&kind) {
            self.advance();
            self.skip_line_break();
            self.expect(TokenKind::CloseParen)?;
            return Ok(Parenthesized::Sequence(kind, vec![]));
        }

        let first = element(self)?;
        self.parenthesized_rest(construct, separators, first, multiline, element)
    }

    /// Continues a parenthesized form whose opening `(` and `first` element
    /// were already consumed, up to and including the closing `)`.
    pub fn parenthesized_rest<T>(
        &mut self,
        construct: &str,
        separators: &[TokenKind],
        first: T,
        mut multiline: bool,
        mut element: impl FnMut(&mut Parser) -> Result<T, Error>,
    ) -> Result<Parenthesized<T>, Error> {
        let mut rest = vec![];
        let mut separator: Option<TokenKind> = None;
        let mut trailing = false;

        loop {
            let kind = self.current_token_kind();

            if separators.contains(&kind) {
                if separator.is_some_and(|separator| separator != kind) {
                    return Err(mixed_separators(construct, self.current_span()));
                }
                separator = Some(kind);
                self.advance();
                multiline |= self.skip_line_break();
                trailing = true;

                if self.at(TokenKind::CloseParen) {
                    break;
                }
                rest.push(element(self)?);
                trailing = false;
            } else if kind == TokenKind::CloseParen && (trailing || !multiline) {
                break;
            } else {
                let expected = separators
                    .iter()
                    .map(|separator| separator.describe())
                    .collect::<Vec<_>>()
                    .join(" or ");
                return Err(self.unexpected(&format!("{} before the end of the line", expected)));
            }
        }

        self.expect(TokenKind::CloseParen)?;

        Ok(match separator {
            None => Parenthesized::Group(first),
            Some(separator) => {
                rest.insert(0, first);
                Parenthesized::Sequence(separator, rest)
            }
        })
    }

    // STATEMENTS

    /// Parses statements up to `terminator` (`}` for blocks, `EOF` at the top
    /// level). A statement that fails to parse, or is followed by anything
    /// other than a line break, is replaced with an error statement and
    /// parsing resumes on the next line.
    pub fn parse_statements(&mut self, terminator: TokenKind) -> Vec<Statement> {
        let mut statements = vec![];

        loop {
            let comments = self.leading_comments();
            if self.at(terminator) || !self.has_tokens() {
                break;
            }

            let start = self.current_span();
            let result = self
                .nested(|parser| parse_stmt(parser, comments))
                .and_then(|statement| {
                    if self.at(TokenKind::LineBreak) || self.at(terminator) || !self.has_tokens() {
                        Ok(statement)
                    } else {
                        Err(self.unexpected(&format!("line break or {}", terminator.describe())))
                    }
                });

            match result {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    let span = self.recover(error, start, terminator);
                    statements.push(Statement::Error(ErrorStatement { span }));
                }
            }

            if self.at(TokenKind::LineBreak) {
                self.advance();
            } else {
                break;
            }
        }

        statements
    }

    /// Records `error` and skips to the next line break outside brackets,
    /// stopping early at `terminator`. Returns the span of the abandoned
    /// statement.
    fn recover(&mut self, error: Error, start: Span, terminator: TokenKind) -> Span {
        debug!("recovering from `{}` at {}", error, error.get_span().start);
        self.record(error);

        let mut depth = 0usize;
        loop {
            match self.current_token_kind() {
                TokenKind::EOF => break,
                TokenKind::LineBreak if depth == 0 => break,
                kind if kind == terminator && depth == 0 => break,
                TokenKind::OpenParen | TokenKind::OpenCurly | TokenKind::OpenBracket => depth += 1,
                TokenKind::CloseParen | TokenKind::CloseCurly | TokenKind::CloseBracket => {
                    depth = depth.saturating_sub(1)
                }
                _ => {}
            }
            self.advance();
        }

        self.span_from(start)
    }
}

pub fn mixed_separators(construct: &str, span: Span) -> Error {
    Error::new(
        ErrorImpl::AmbiguousElision {
            construct: construct.to_string(),
            message: String::from("`;` and `,` can't be mixed in one sequence"),
        },
        span,
    )
}

/// Parses a token stream into a syntax tree. Always returns a tree; the
/// errors describe any statements that were replaced with error nodes.
pub fn parse(tokens: Vec<Token>) -> (SourceFile, Vec<Error>) {
    let mut parser = Parser::new(tokens);
    let statements = parser.parse_statements(TokenKind::EOF);

    let end = parser.current_span().end.0 as usize;
    let source_file = SourceFile {
        statements,
        span: Span::new(0, end),
    };

    (source_file, parser.errors)
}
