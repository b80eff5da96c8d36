use crate::Span;

use super::{
    ast::{Comment, Node, TypeName, VariableName, VariantName},
    attributes::Attribute,
    expressions::Expression,
    patterns::Pattern,
    types::{Type, TypeAnnotation, TypeFunction, WhereClause},
};

/// Statement Enum
///
/// A single line-delimited statement. Statements that failed to parse are
/// kept as [`Statement::Error`] so that their siblings are still available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    TypeDefinition(TypeDefinitionStatement),
    TraitDefinition(TraitDefinitionStatement),
    ConstantDefinition(ConstantDefinitionStatement),
    InstanceDefinition(InstanceDefinitionStatement),
    Assignment(AssignmentStatement),
    Expression(ExpressionStatement),
    Error(ErrorStatement),
}

/// Type Definition Statement
///
/// `Name : [params =>] type [{ representation }]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinitionStatement {
    pub comments: Vec<Comment>,
    pub attributes: Vec<Attribute>,
    pub name: TypeName,
    pub type_function: Option<TypeFunction>,
    pub representation: Option<TypeRepresentation>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRepresentation {
    Structure(StructureTypeRepresentation),
    Enumeration(EnumerationTypeRepresentation),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureTypeRepresentation {
    pub fields: Vec<FieldDefinition>,
    pub span: Span,
}

/// `name :: Type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: VariableName,
    pub type_annotation: TypeAnnotation,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationTypeRepresentation {
    pub variants: Vec<VariantDefinition>,
    pub span: Span,
}

/// `Variant element1 element2 ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDefinition {
    pub name: VariantName,
    pub elements: Vec<Type>,
    pub span: Span,
}

/// Trait Definition Statement
///
/// `Name : [params =>] trait [Type [where ...]]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitDefinitionStatement {
    pub comments: Vec<Comment>,
    pub attributes: Vec<Attribute>,
    pub name: TypeName,
    pub type_function: Option<TypeFunction>,
    pub r#type: Option<Type>,
    pub where_clause: Option<WhereClause>,
    pub span: Span,
}

/// Constant Definition Statement
///
/// `name :: Type [where ...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantDefinitionStatement {
    pub comments: Vec<Comment>,
    pub attributes: Vec<Attribute>,
    pub name: VariableName,
    pub type_annotation: TypeAnnotation,
    pub span: Span,
}

/// Instance Definition Statement
///
/// `instance (Trait param1 param2 ...) [where ...] [: value]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceDefinitionStatement {
    pub comments: Vec<Comment>,
    pub attributes: Vec<Attribute>,
    pub trait_name: TypeName,
    pub parameters: Vec<Type>,
    pub where_clause: Option<WhereClause>,
    pub value: Option<Expression>,
    pub span: Span,
}

/// `pattern : value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentStatement {
    pub pattern: Pattern,
    pub value: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub span: Span,
}

/// The unparsed remainder of a malformed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorStatement {
    pub span: Span,
}

impl Node for Statement {
    fn get_span(&self) -> Span {
        match self {
            Statement::TypeDefinition(node) => node.span,
            Statement::TraitDefinition(node) => node.span,
            Statement::ConstantDefinition(node) => node.span,
            Statement::InstanceDefinition(node) => node.span,
            Statement::Assignment(node) => node.span,
            Statement::Expression(node) => node.span,
            Statement::Error(node) => node.span,
        }
    }
    fn kind(&self) -> &'static str {
        match self {
            Statement::TypeDefinition(_) => "type_definition_statement",
            Statement::TraitDefinition(_) => "trait_definition_statement",
            Statement::ConstantDefinition(_) => "constant_definition_statement",
            Statement::InstanceDefinition(_) => "instance_definition_statement",
            Statement::Assignment(_) => "assignment_statement",
            Statement::Expression(_) => "expression_statement",
            Statement::Error(_) => "ERROR",
        }
    }
}

impl Node for TypeRepresentation {
    fn get_span(&self) -> Span {
        match self {
            TypeRepresentation::Structure(node) => node.span,
            TypeRepresentation::Enumeration(node) => node.span,
        }
    }
    fn kind(&self) -> &'static str {
        match self {
            TypeRepresentation::Structure(_) => "structure_type_representation",
            TypeRepresentation::Enumeration(_) => "enumeration_type_representation",
        }
    }
}

impl Node for FieldDefinition {
    fn get_span(&self) -> Span {
        self.span
    }
    fn kind(&self) -> &'static str {
        "field_definition"
    }
}

impl Node for VariantDefinition {
    fn get_span(&self) -> Span {
        self.span
    }
    fn kind(&self) -> &'static str {
        "variant_definition"
    }
}
