//! Type parsing implementation.
//!
//! This module handles parsing of types, type annotations, `where` clauses
//! and type function headers. Subtypes are dispatched through
//! `SUBTYPE_LOOKUP`; function types and parameterized named types are built
//! on top of them in [`parse_type_element`].

use crate::{
    ast::types::{
        BlockType, BoundConstraint, Constraint, DefaultConstraint, FunctionType, InferConstraint,
        NamedType, ParameterType, PlaceholderType, TupleType, Type, TypeAnnotation, TypeFunction,
        UnitType, WhereClause,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{can_start_subtype, SUBTYPE_LOOKUP},
    parser::{Parenthesized, Parser},
};

pub fn parse_subtype(parser: &mut Parser) -> Result<Type, Error> {
    match SUBTYPE_LOOKUP.get(&parser.current_token_kind()) {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("type")),
    }
}

/// Parses a function type, a parameterized named type or a single subtype.
///
/// `Maybe a -> b` is a function type with two inputs; a parameterized
/// input needs parentheses, as in `(Maybe a) -> b`.
pub fn parse_type_element(parser: &mut Parser) -> Result<Type, Error> {
    parser.nested(parse_function_or_named_type)
}

fn parse_function_or_named_type(parser: &mut Parser) -> Result<Type, Error> {
    let start = parser.current_span();
    let bare_name = parser.at(TokenKind::CapitalName);

    let first = parse_subtype(parser)?;
    let mut rest = vec![];
    while can_start_subtype(parser.current_token()) {
        rest.push(parse_subtype(parser)?);
    }

    if parser.at(TokenKind::Arrow) {
        parser.advance();
        parser.skip_line_break();
        let output = parse_type_element(parser)?;

        rest.insert(0, first);
        return Ok(Type::Function(FunctionType {
            inputs: rest,
            output: Box::new(output),
            span: parser.span_from(start),
        }));
    }

    if rest.is_empty() {
        return Ok(first);
    }

    match first {
        Type::Named(named) if bare_name => Ok(Type::Named(NamedType {
            name: named.name,
            parameters: rest,
            span: parser.span_from(start),
        })),
        _ => Err(parser.unexpected("`->`")),
    }
}

pub fn parse_placeholder_type(parser: &mut Parser) -> Result<Type, Error> {
    let token = parser.expect(TokenKind::Underscore)?;
    Ok(Type::Placeholder(PlaceholderType { span: token.span }))
}

pub fn parameter_type(parser: &mut Parser) -> Result<ParameterType, Error> {
    let name = parser.type_parameter_name()?;
    Ok(ParameterType {
        span: name.span,
        name,
    })
}

pub fn parse_parameter_type(parser: &mut Parser) -> Result<Type, Error> {
    Ok(Type::Parameter(parameter_type(parser)?))
}

/// A bare type name; parameters are attached by [`parse_type_element`].
pub fn parse_named_type(parser: &mut Parser) -> Result<Type, Error> {
    let name = parser.type_name()?;
    Ok(Type::Named(NamedType {
        span: name.span,
        name,
        parameters: vec![],
    }))
}

pub fn parse_block_type(parser: &mut Parser) -> Result<Type, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span;
    parser.skip_line_break();
    let output = parse_type_element(parser)?;
    parser.skip_line_break();
    parser.expect(TokenKind::CloseCurly)?;

    Ok(Type::Block(BlockType {
        output: Box::new(output),
        span: parser.span_from(start),
    }))
}

pub fn parse_parenthesized_type(parser: &mut Parser) -> Result<Type, Error> {
    let start = parser.current_span();

    Ok(
        match parser.parenthesized("tuple type", &[TokenKind::Semicolon], parse_type_element)? {
            Parenthesized::Unit => Type::Unit(UnitType {
                span: parser.span_from(start),
            }),
            Parenthesized::Group(r#type) => r#type,
            Parenthesized::Sequence(_, elements) => Type::Tuple(TupleType {
                elements,
                span: parser.span_from(start),
            }),
        },
    )
}

// ANNOTATIONS AND CONSTRAINTS

pub fn parse_type_annotation(parser: &mut Parser) -> Result<TypeAnnotation, Error> {
    let start = parser.current_span();
    let r#type = parse_type_element(parser)?;
    let where_clause = parse_where_clause(parser)?;

    Ok(TypeAnnotation {
        r#type,
        where_clause,
        span: parser.span_from(start),
    })
}

/// Parses `where (constraint)+` if the next token is `where`.
pub fn parse_where_clause(parser: &mut Parser) -> Result<Option<WhereClause>, Error> {
    if !parser.at(TokenKind::Where) {
        return Ok(None);
    }

    let start = parser.advance().span;
    let mut constraints = vec![parse_constraint(parser)?];
    while parser.at(TokenKind::OpenParen) {
        constraints.push(parse_constraint(parser)?);
    }

    Ok(Some(WhereClause {
        constraints,
        span: parser.span_from(start),
    }))
}

fn parse_constraint(parser: &mut Parser) -> Result<Constraint, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let start = parser.current_span();

    let constraint = match parser.current_token_kind() {
        TokenKind::Infer => {
            parser.advance();
            let parameter = parser.type_parameter_name()?;
            Constraint::Infer(InferConstraint {
                parameter,
                span: parser.span_from(start),
            })
        }
        TokenKind::LowercaseName => {
            let parameter = parser.type_parameter_name()?;
            parser.expect(TokenKind::Colon)?;
            parser.skip_line_break();
            let value = parse_type_element(parser)?;
            Constraint::Default(DefaultConstraint {
                parameter,
                value,
                span: parser.span_from(start),
            })
        }
        TokenKind::CapitalName => {
            let trait_name = parser.type_name()?;
            let mut parameters = vec![parse_subtype(parser)?];
            while can_start_subtype(parser.current_token()) {
                parameters.push(parse_subtype(parser)?);
            }
            Constraint::Bound(BoundConstraint {
                trait_name,
                parameters,
                span: parser.span_from(start),
            })
        }
        _ => return Err(parser.unexpected("constraint")),
    };

    parser.expect(TokenKind::CloseParen)?;
    Ok(constraint)
}

/// Parses `param1 param2 ... =>`.
pub fn parse_type_function(parser: &mut Parser) -> Result<TypeFunction, Error> {
    let start = parser.current_span();

    let mut parameters = vec![parameter_type(parser)?];
    while parser.at(TokenKind::LowercaseName) {
        parameters.push(parameter_type(parser)?);
    }

    parser.expect(TokenKind::FatArrow)?;
    let span = parser.span_from(start);
    parser.skip_line_break();

    Ok(TypeFunction { parameters, span })
}
