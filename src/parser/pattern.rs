//! Pattern parsing implementation.
//!
//! Mirrors the expression parser: subpatterns are dispatched through
//! `SUBPATTERN_LOOKUP`, variant and `set` patterns are built on top of
//! them, and `or` chains them at the lowest precedence.

use crate::{
    ast::patterns::{
        AnnotatePattern, DestructurePattern, DestructurePatternField, NumberPattern, OrPattern,
        Pattern, SetPattern, TextPattern, TuplePattern, UnitPattern, VariablePattern,
        VariantPattern, WildcardPattern,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{can_start_subpattern, SUBPATTERN_LOOKUP},
    parser::{Parenthesized, Parser},
    types::parse_type_element,
};

/// Parses a pattern element, or an inline tuple `a ; b ; c`.
pub fn parse_pattern(parser: &mut Parser) -> Result<Pattern, Error> {
    let start = parser.current_span();
    let first = parse_pattern_element(parser)?;

    if !parser.at(TokenKind::Semicolon) {
        return Ok(first);
    }

    let mut elements = vec![first];
    while parser.at(TokenKind::Semicolon) {
        parser.advance();
        elements.push(parse_pattern_element(parser)?);
    }

    Ok(Pattern::Tuple(TuplePattern {
        elements,
        span: parser.span_from(start),
    }))
}

fn at_or(parser: &Parser) -> bool {
    let token = parser.current_token();
    token.kind == TokenKind::LowercaseName && token.value == "or"
}

/// Parses `operand (or operand)*`, left-associated.
pub fn parse_pattern_element(parser: &mut Parser) -> Result<Pattern, Error> {
    parser.nested(parse_or_pattern)
}

fn parse_or_pattern(parser: &mut Parser) -> Result<Pattern, Error> {
    let start = parser.current_span();
    let mut left = parse_pattern_operand(parser)?;

    while at_or(parser) {
        parser.advance();
        parser.skip_line_break();
        let right = parse_pattern_operand(parser)?;

        left = Pattern::Or(OrPattern {
            left: Box::new(left),
            right: Box::new(right),
            span: parser.span_from(start),
        });
    }

    Ok(left)
}

/// Parses a `set` pattern, a variant pattern or a subpattern. This is also
/// the right operand of `is`, which can't contain a top-level `or`.
pub fn parse_pattern_operand(parser: &mut Parser) -> Result<Pattern, Error> {
    let start = parser.current_span();

    match parser.current_token_kind() {
        TokenKind::Set => {
            parser.advance();
            let variable = parser.variable_name()?;
            Ok(Pattern::Set(SetPattern {
                variable,
                span: parser.span_from(start),
            }))
        }
        TokenKind::CapitalName => {
            let variant = parser.variant_name()?;
            let mut elements = vec![];
            while can_start_subpattern(parser.current_token()) {
                elements.push(parse_subpattern(parser)?);
            }
            Ok(Pattern::Variant(VariantPattern {
                variant,
                elements,
                span: parser.span_from(start),
            }))
        }
        _ => parse_subpattern(parser),
    }
}

pub fn parse_subpattern(parser: &mut Parser) -> Result<Pattern, Error> {
    match SUBPATTERN_LOOKUP.get(&parser.current_token_kind()) {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("pattern")),
    }
}

pub fn parse_wildcard_pattern(parser: &mut Parser) -> Result<Pattern, Error> {
    let token = parser.expect(TokenKind::Underscore)?;
    Ok(Pattern::Wildcard(WildcardPattern { span: token.span }))
}

pub fn parse_variable_pattern(parser: &mut Parser) -> Result<Pattern, Error> {
    let variable = parser.variable_name()?;
    Ok(Pattern::Variable(VariablePattern {
        span: variable.span,
        variable,
    }))
}

pub fn parse_number_pattern(parser: &mut Parser) -> Result<Pattern, Error> {
    let value = parser.number()?;
    Ok(Pattern::Number(NumberPattern {
        span: value.span,
        value,
    }))
}

pub fn parse_text_pattern(parser: &mut Parser) -> Result<Pattern, Error> {
    let value = parser.text()?;
    Ok(Pattern::Text(TextPattern {
        span: value.span,
        value,
    }))
}

pub fn parse_destructure_pattern(parser: &mut Parser) -> Result<Pattern, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span;

    let fields = parser.lines(TokenKind::CloseCurly, |parser| {
        let field_start = parser.current_span();
        let name = parser.variable_name()?;
        parser.expect(TokenKind::Colon)?;
        parser.skip_line_break();
        let value = parse_pattern(parser)?;

        Ok(DestructurePatternField {
            name,
            value,
            span: parser.span_from(field_start),
        })
    })?;

    if fields.is_empty() {
        return Err(parser.unexpected("field pattern"));
    }
    parser.expect(TokenKind::CloseCurly)?;

    Ok(Pattern::Destructure(DestructurePattern {
        fields,
        span: parser.span_from(start),
    }))
}

/// Parses `()`, `(pattern :: Type)`, a parenthesized pattern or a
/// parenthesized tuple. The first element is parsed once and the token after
/// it decides which form this is.
pub fn parse_parenthesized_pattern(parser: &mut Parser) -> Result<Pattern, Error> {
    let start = parser.current_span();

    let parenthesized = match parser.peek().kind {
        TokenKind::CloseParen | TokenKind::LineBreak | TokenKind::Semicolon => {
            parser.parenthesized("tuple pattern", &[TokenKind::Semicolon], parse_pattern_element)?
        }
        _ => {
            parser.expect(TokenKind::OpenParen)?;
            let first = parse_pattern_element(parser)?;

            if parser.at(TokenKind::DoubleColon) {
                parser.advance();
                parser.skip_line_break();
                let right = parse_type_element(parser)?;
                parser.expect(TokenKind::CloseParen)?;

                return Ok(Pattern::Annotate(AnnotatePattern {
                    left: Box::new(first),
                    right,
                    span: parser.span_from(start),
                }));
            }

            parser.parenthesized_rest(
                "tuple pattern",
                &[TokenKind::Semicolon],
                first,
                false,
                parse_pattern_element,
            )?
        }
    };

    Ok(match parenthesized {
        Parenthesized::Unit => Pattern::Unit(UnitPattern {
            span: parser.span_from(start),
        }),
        Parenthesized::Group(pattern) => pattern,
        Parenthesized::Sequence(_, elements) => Pattern::Tuple(TuplePattern {
            elements,
            span: parser.span_from(start),
        }),
    })
}
