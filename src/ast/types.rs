use crate::Span;

use super::ast::{Node, TypeName, TypeParameterName};

/// Type Enum
///
/// Every form a type can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Placeholder(PlaceholderType),
    Parameter(ParameterType),
    Named(NamedType),
    Function(FunctionType),
    Block(BlockType),
    Unit(UnitType),
    Tuple(TupleType),
}

/// `_`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderType {
    pub span: Span,
}

/// A lowercase name referring to a type parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterType {
    pub name: TypeParameterName,
    pub span: Span,
}

/// `Name` or `Name param1 param2 ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    pub name: TypeName,
    pub parameters: Vec<Type>,
    pub span: Span,
}

/// `input1 input2 ... -> output`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionType {
    pub inputs: Vec<Type>,
    pub output: Box<Type>,
    pub span: Span,
}

/// `{ output }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockType {
    pub output: Box<Type>,
    pub span: Span,
}

/// `()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitType {
    pub span: Span,
}

/// `a ; b ; c`, or the parenthesized multi-line form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleType {
    pub elements: Vec<Type>,
    pub span: Span,
}

impl Node for Type {
    fn get_span(&self) -> Span {
        match self {
            Type::Placeholder(node) => node.span,
            Type::Parameter(node) => node.span,
            Type::Named(node) => node.span,
            Type::Function(node) => node.span,
            Type::Block(node) => node.span,
            Type::Unit(node) => node.span,
            Type::Tuple(node) => node.span,
        }
    }
    fn kind(&self) -> &'static str {
        match self {
            Type::Placeholder(_) => "placeholder_type",
            Type::Parameter(_) => "parameter_type",
            Type::Named(_) => "named_type",
            Type::Function(_) => "function_type",
            Type::Block(_) => "block_type",
            Type::Unit(_) => "unit_type",
            Type::Tuple(_) => "tuple_type",
        }
    }
}

/// A type followed by an optional `where` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAnnotation {
    pub r#type: Type,
    pub where_clause: Option<WhereClause>,
    pub span: Span,
}

/// `where (constraint1) (constraint2) ...`, with at least one constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    pub constraints: Vec<Constraint>,
    pub span: Span,
}

impl Node for WhereClause {
    fn get_span(&self) -> Span {
        self.span
    }
    fn kind(&self) -> &'static str {
        "where_clause"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// `(Trait param1 param2 ...)`
    Bound(BoundConstraint),
    /// `(infer param)`
    Infer(InferConstraint),
    /// `(param : Type)`
    Default(DefaultConstraint),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundConstraint {
    pub trait_name: TypeName,
    pub parameters: Vec<Type>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferConstraint {
    pub parameter: TypeParameterName,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultConstraint {
    pub parameter: TypeParameterName,
    pub value: Type,
    pub span: Span,
}

impl Node for Constraint {
    fn get_span(&self) -> Span {
        match self {
            Constraint::Bound(node) => node.span,
            Constraint::Infer(node) => node.span,
            Constraint::Default(node) => node.span,
        }
    }
    fn kind(&self) -> &'static str {
        match self {
            Constraint::Bound(_) => "bound_constraint",
            Constraint::Infer(_) => "infer_constraint",
            Constraint::Default(_) => "default_constraint",
        }
    }
}

/// `param1 param2 ... =>`, introducing the parameters of a type or trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeFunction {
    pub parameters: Vec<ParameterType>,
    pub span: Span,
}

impl Node for TypeFunction {
    fn get_span(&self) -> Span {
        self.span
    }
    fn kind(&self) -> &'static str {
        "type_function"
    }
}
