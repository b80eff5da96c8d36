//! Statement parsing implementation.
//!
//! Statements are tried in a fixed order: instance definitions, type and
//! trait definitions, constant definitions, assignments and finally plain
//! expressions. The first form that matches wins, so `x : 1` is always an
//! assignment and never an expression.

use log::trace;

use crate::{
    ast::{
        ast::{Comment, TypeName},
        attributes::Attribute,
        statements::{
            AssignmentStatement, ConstantDefinitionStatement, EnumerationTypeRepresentation,
            ExpressionStatement, FieldDefinition, InstanceDefinitionStatement, Statement,
            StructureTypeRepresentation, TraitDefinitionStatement, TypeDefinitionStatement,
            TypeRepresentation, VariantDefinition,
        },
        types::TypeFunction,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    attributes::parse_attributes,
    expr::parse_expression,
    lookups::can_start_subtype,
    parser::Parser,
    pattern::parse_pattern,
    types::{parse_subtype, parse_type_annotation, parse_type_function, parse_where_clause},
};

/// Leading comments and attributes of a definition, along with where it
/// starts.
struct Header {
    comments: Vec<Comment>,
    attributes: Vec<Attribute>,
    start: Span,
}

pub fn parse_stmt(parser: &mut Parser, comments: Vec<Comment>) -> Result<Statement, Error> {
    let start = parser.current_span();
    trace!("parsing statement at {}: {}", start.start, parser.current_token());

    let attributes = parse_attributes(parser)?;
    let header = Header {
        comments,
        attributes,
        start,
    };

    if parser.at(TokenKind::Instance) {
        return parse_instance_definition(parser, header);
    }

    if parser.at(TokenKind::CapitalName) && parser.peek().kind == TokenKind::Colon {
        let checkpoint = parser.checkpoint();

        let name = parser.type_name()?;
        parser.advance();
        parser.skip_line_break();
        let type_function = parser.speculate(parse_type_function);

        match parser.current_token_kind() {
            TokenKind::Type => return parse_type_definition(parser, header, name, type_function),
            TokenKind::Trait => return parse_trait_definition(parser, header, name, type_function),
            _ => parser.restore(checkpoint),
        }
    }

    if parser.at(TokenKind::LowercaseName) && parser.peek().kind == TokenKind::DoubleColon {
        return parse_constant_definition(parser, header);
    }

    if !header.attributes.is_empty() {
        return Err(parser.unexpected("definition"));
    }

    let pattern = parser.speculate(|parser| {
        let pattern = parse_pattern(parser)?;
        parser.expect(TokenKind::Colon)?;
        Ok(pattern)
    });

    if let Some(pattern) = pattern {
        parser.skip_line_break();
        let value = parse_expression(parser)?;

        return Ok(Statement::Assignment(AssignmentStatement {
            pattern,
            value,
            span: parser.span_from(start),
        }));
    }

    let expression = parse_expression(parser)?;
    Ok(Statement::Expression(ExpressionStatement {
        expression,
        span: parser.span_from(start),
    }))
}

fn parse_type_definition(
    parser: &mut Parser,
    header: Header,
    name: TypeName,
    type_function: Option<TypeFunction>,
) -> Result<Statement, Error> {
    trace!("parsing type definition `{}`", name.value);
    parser.expect(TokenKind::Type)?;

    let representation = if parser.at(TokenKind::OpenCurly) {
        Some(parse_type_representation(parser)?)
    } else {
        None
    };

    Ok(Statement::TypeDefinition(TypeDefinitionStatement {
        comments: header.comments,
        attributes: header.attributes,
        name,
        type_function,
        representation,
        span: parser.span_from(header.start),
    }))
}

/// Parses `{ fields }` or `{ variants }`. The first name in the braces
/// decides which one it is.
fn parse_type_representation(parser: &mut Parser) -> Result<TypeRepresentation, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span;
    parser.skip_line_break();

    let representation = match parser.current_token_kind() {
        TokenKind::LowercaseName => {
            let fields = parser.lines(TokenKind::CloseCurly, parse_field_definition)?;
            parser.expect(TokenKind::CloseCurly)?;
            TypeRepresentation::Structure(StructureTypeRepresentation {
                fields,
                span: parser.span_from(start),
            })
        }
        TokenKind::CapitalName => {
            let variants = parser.lines(TokenKind::CloseCurly, parse_variant_definition)?;
            parser.expect(TokenKind::CloseCurly)?;
            TypeRepresentation::Enumeration(EnumerationTypeRepresentation {
                variants,
                span: parser.span_from(start),
            })
        }
        _ => return Err(parser.unexpected("field or variant")),
    };

    Ok(representation)
}

fn parse_field_definition(parser: &mut Parser) -> Result<FieldDefinition, Error> {
    let start = parser.current_span();
    let name = parser.variable_name()?;
    parser.expect(TokenKind::DoubleColon)?;
    parser.skip_line_break();
    let type_annotation = parse_type_annotation(parser)?;

    Ok(FieldDefinition {
        name,
        type_annotation,
        span: parser.span_from(start),
    })
}

fn parse_variant_definition(parser: &mut Parser) -> Result<VariantDefinition, Error> {
    let start = parser.current_span();
    let name = parser.variant_name()?;

    let mut elements = vec![];
    while can_start_subtype(parser.current_token()) {
        elements.push(parse_subtype(parser)?);
    }

    Ok(VariantDefinition {
        name,
        elements,
        span: parser.span_from(start),
    })
}

fn parse_trait_definition(
    parser: &mut Parser,
    header: Header,
    name: TypeName,
    type_function: Option<TypeFunction>,
) -> Result<Statement, Error> {
    trace!("parsing trait definition `{}`", name.value);
    parser.expect(TokenKind::Trait)?;

    let r#type = if can_start_subtype(parser.current_token()) {
        Some(parse_subtype(parser)?)
    } else {
        None
    };
    let where_clause = parse_where_clause(parser)?;

    Ok(Statement::TraitDefinition(TraitDefinitionStatement {
        comments: header.comments,
        attributes: header.attributes,
        name,
        type_function,
        r#type,
        where_clause,
        span: parser.span_from(header.start),
    }))
}

fn parse_constant_definition(parser: &mut Parser, header: Header) -> Result<Statement, Error> {
    let name = parser.variable_name()?;
    parser.expect(TokenKind::DoubleColon)?;
    parser.skip_line_break();
    let type_annotation = parse_type_annotation(parser)?;

    Ok(Statement::ConstantDefinition(ConstantDefinitionStatement {
        comments: header.comments,
        attributes: header.attributes,
        name,
        type_annotation,
        span: parser.span_from(header.start),
    }))
}

fn parse_instance_definition(parser: &mut Parser, header: Header) -> Result<Statement, Error> {
    parser.expect(TokenKind::Instance)?;
    parser.expect(TokenKind::OpenParen)?;

    let trait_name = parser.type_name()?;
    trace!("parsing instance definition for `{}`", trait_name.value);
    let mut parameters = vec![parse_subtype(parser)?];
    while can_start_subtype(parser.current_token()) {
        parameters.push(parse_subtype(parser)?);
    }
    parser.expect(TokenKind::CloseParen)?;

    let where_clause = parse_where_clause(parser)?;

    let value = if parser.at(TokenKind::Colon) {
        parser.advance();
        parser.skip_line_break();
        Some(parse_expression(parser)?)
    } else {
        None
    };

    Ok(Statement::InstanceDefinition(InstanceDefinitionStatement {
        comments: header.comments,
        attributes: header.attributes,
        trait_name,
        parameters,
        where_clause,
        value,
        span: parser.span_from(header.start),
    }))
}
