use crate::Span;

use super::ast::{AttributeName, Node, Number, Text};

/// Bracketed metadata preceding a definition: `[name]` or `[name : value]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    Name(NameAttribute),
    Assign(AssignAttribute),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAttribute {
    pub name: AttributeName,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignAttribute {
    pub name: AttributeName,
    pub value: AttributeValue,
    pub span: Span,
}

/// Attribute values are restricted to literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(Text),
    Number(Number),
}

impl Node for Attribute {
    fn get_span(&self) -> Span {
        match self {
            Attribute::Name(attribute) => attribute.span,
            Attribute::Assign(attribute) => attribute.span,
        }
    }
    fn kind(&self) -> &'static str {
        match self {
            Attribute::Name(_) => "name_attribute",
            Attribute::Assign(_) => "assign_attribute",
        }
    }
}

impl Node for AttributeValue {
    fn get_span(&self) -> Span {
        match self {
            AttributeValue::Text(text) => text.span,
            AttributeValue::Number(number) => number.span,
        }
    }
    fn kind(&self) -> &'static str {
        match self {
            AttributeValue::Text(text) => text.kind(),
            AttributeValue::Number(number) => number.kind(),
        }
    }
}
