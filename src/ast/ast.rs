use std::fmt::Debug;

use crate::Span;

use super::statements::Statement;

/// Node Trait
///
/// Implemented by every syntax tree node.
pub trait Node: Debug {
    /// Returns the span of source text the node was parsed from.
    fn get_span(&self) -> Span;
    /// Returns the node's kind tag, eg. `call_expression`.
    fn kind(&self) -> &'static str;
}

/// Root of a parsed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub statements: Vec<Statement>,
    pub span: Span,
}

impl SourceFile {
    /// Number of statements that failed to parse.
    pub fn error_count(&self) -> usize {
        self.statements
            .iter()
            .filter(|statement| matches!(statement, Statement::Error(_)))
            .count()
    }
}

impl Node for SourceFile {
    fn get_span(&self) -> Span {
        self.span
    }
    fn kind(&self) -> &'static str {
        "source_file"
    }
}

macro_rules! name_node {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            pub value: String,
            pub span: Span,
        }

        impl Node for $name {
            fn get_span(&self) -> Span {
                self.span
            }
            fn kind(&self) -> &'static str {
                $kind
            }
        }
    };
}

// Capitalized and lowercase names share a token kind; the grammatical
// position decides which of these a name becomes.

name_node!(
    /// A capitalized name naming a type or trait.
    TypeName,
    "type_name"
);
name_node!(
    /// A capitalized name naming an enumeration variant.
    VariantName,
    "variant_name"
);
name_node!(VariableName, "variable_name");
name_node!(TypeParameterName, "type_parameter_name");
name_node!(AttributeName, "attribute_name");

/// Comment text, without the leading `--`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub value: String,
    pub span: Span,
}

impl Node for Comment {
    fn get_span(&self) -> Span {
        self.span
    }
    fn kind(&self) -> &'static str {
        "comment"
    }
}

/// Text literal contents, without the surrounding quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub value: String,
    pub span: Span,
}

impl Node for Text {
    fn get_span(&self) -> Span {
        self.span
    }
    fn kind(&self) -> &'static str {
        "text"
    }
}

/// Number literal as written, sign included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    pub value: String,
    pub span: Span,
}

impl Node for Number {
    fn get_span(&self) -> Span {
        self.span
    }
    fn kind(&self) -> &'static str {
        "number"
    }
}
