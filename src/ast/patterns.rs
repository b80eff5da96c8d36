use crate::Span;

use super::{
    ast::{Node, Number, Text, VariableName, VariantName},
    types::Type,
};

/// Pattern Enum
///
/// Patterns appear on the left of assignments, in `when` arms, as function
/// inputs and on the right of `is`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Wildcard(WildcardPattern),
    Variable(VariablePattern),
    Number(NumberPattern),
    Text(TextPattern),
    Destructure(DestructurePattern),
    Unit(UnitPattern),
    Tuple(TuplePattern),
    Or(OrPattern),
    Annotate(AnnotatePattern),
    Set(SetPattern),
    Variant(VariantPattern),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardPattern {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariablePattern {
    pub variable: VariableName,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPattern {
    pub value: Number,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPattern {
    pub value: Text,
    pub span: Span,
}

/// `{ name : pattern }` with one field per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestructurePattern {
    pub fields: Vec<DestructurePatternField>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestructurePatternField {
    pub name: VariableName,
    pub value: Pattern,
    pub span: Span,
}

impl Node for DestructurePatternField {
    fn get_span(&self) -> Span {
        self.span
    }
    fn kind(&self) -> &'static str {
        "destructure_pattern_field"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitPattern {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuplePattern {
    pub elements: Vec<Pattern>,
    pub span: Span,
}

/// `left or right`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrPattern {
    pub left: Box<Pattern>,
    pub right: Box<Pattern>,
    pub span: Span,
}

/// `(pattern :: Type)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatePattern {
    pub left: Box<Pattern>,
    pub right: Type,
    pub span: Span,
}

/// `set name`, assigning to an existing variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetPattern {
    pub variable: VariableName,
    pub span: Span,
}

/// `Variant element1 element2 ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantPattern {
    pub variant: VariantName,
    pub elements: Vec<Pattern>,
    pub span: Span,
}

impl Node for Pattern {
    fn get_span(&self) -> Span {
        match self {
            Pattern::Wildcard(node) => node.span,
            Pattern::Variable(node) => node.span,
            Pattern::Number(node) => node.span,
            Pattern::Text(node) => node.span,
            Pattern::Destructure(node) => node.span,
            Pattern::Unit(node) => node.span,
            Pattern::Tuple(node) => node.span,
            Pattern::Or(node) => node.span,
            Pattern::Annotate(node) => node.span,
            Pattern::Set(node) => node.span,
            Pattern::Variant(node) => node.span,
        }
    }
    fn kind(&self) -> &'static str {
        match self {
            Pattern::Wildcard(_) => "wildcard_pattern",
            Pattern::Variable(_) => "variable_pattern",
            Pattern::Number(_) => "number_pattern",
            Pattern::Text(_) => "text_pattern",
            Pattern::Destructure(_) => "destructure_pattern",
            Pattern::Unit(_) => "unit_pattern",
            Pattern::Tuple(_) => "tuple_pattern",
            Pattern::Or(_) => "or_pattern",
            Pattern::Annotate(_) => "annotate_pattern",
            Pattern::Set(_) => "set_pattern",
            Pattern::Variant(_) => "variant_pattern",
        }
    }
}
