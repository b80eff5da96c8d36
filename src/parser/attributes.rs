use crate::{
    ast::attributes::{AssignAttribute, Attribute, AttributeValue, NameAttribute},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses the attributes in front of a definition. Each one may sit on its
/// own line.
pub fn parse_attributes(parser: &mut Parser) -> Result<Vec<Attribute>, Error> {
    let mut attributes = vec![];

    while parser.at(TokenKind::OpenBracket) {
        attributes.push(parse_attribute(parser)?);
        parser.skip_line_break();
    }

    Ok(attributes)
}

fn parse_attribute(parser: &mut Parser) -> Result<Attribute, Error> {
    let start = parser.expect(TokenKind::OpenBracket)?.span;
    let name = parser.attribute_name()?;

    if !parser.at(TokenKind::Colon) {
        parser.expect(TokenKind::CloseBracket)?;
        return Ok(Attribute::Name(NameAttribute {
            name,
            span: parser.span_from(start),
        }));
    }

    parser.advance();
    parser.skip_line_break();

    let value = match parser.current_token_kind() {
        TokenKind::Text => AttributeValue::Text(parser.text()?),
        TokenKind::Number => AttributeValue::Number(parser.number()?),
        _ => return Err(parser.unexpected("text or number")),
    };
    parser.expect(TokenKind::CloseBracket)?;

    Ok(Attribute::Assign(AssignAttribute {
        name,
        value,
        span: parser.span_from(start),
    }))
}
