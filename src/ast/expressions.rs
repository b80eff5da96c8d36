use crate::{parser::lookups::BinaryOperator, Span};

use super::{
    ast::{Node, Number, Text, TypeName, VariableName},
    patterns::Pattern,
    statements::Statement,
    types::Type,
};

/// Expression Enum
///
/// Every form an expression can take. Parenthesized expressions have no node
/// of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Placeholder(PlaceholderExpression),
    VariableName(VariableNameExpression),
    TypeName(TypeNameExpression),
    Number(NumberExpression),
    Text(TextExpression),
    Structure(StructureExpression),
    Block(BlockExpression),
    Unit(UnitExpression),
    FormattedText(FormattedTextExpression),
    Call(CallExpression),
    Do(DoExpression),
    When(WhenExpression),
    Intrinsic(IntrinsicExpression),
    Binary(BinaryExpression),
    Tuple(TupleExpression),
    Collection(CollectionExpression),
    Function(FunctionExpression),
}

// LITERALS AND NAMES

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderExpression {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableNameExpression {
    pub variable: VariableName,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNameExpression {
    pub type_name: TypeName,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberExpression {
    pub value: Number,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextExpression {
    pub value: Text,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitExpression {
    pub span: Span,
}

// BRACED

/// `{ name : value }` with one field per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureExpression {
    pub fields: Vec<StructureExpressionField>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureExpressionField {
    pub name: VariableName,
    pub value: Expression,
    pub span: Span,
}

impl Node for StructureExpressionField {
    fn get_span(&self) -> Span {
        self.span
    }
    fn kind(&self) -> &'static str {
        "structure_expression_field"
    }
}

/// `{ statements }`; may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockExpression {
    pub statements: Vec<Statement>,
    pub span: Span,
}

// APPLICATION

/// `"text" input1 input2 ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTextExpression {
    pub text: Text,
    pub inputs: Vec<Expression>,
    pub span: Span,
}

/// `function input1 input2 ...`, with at least one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    pub function: Box<Expression>,
    pub inputs: Vec<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoExpression {
    pub input: Box<Expression>,
    pub span: Span,
}

/// `when input { arm1 \n arm2 ... }`. Arms are kept in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhenExpression {
    pub input: Box<Expression>,
    pub arms: Vec<Arm>,
    pub span: Span,
}

/// `pattern -> value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arm {
    pub pattern: Pattern,
    pub value: Expression,
    pub span: Span,
}

impl Node for Arm {
    fn get_span(&self) -> Span {
        self.span
    }
    fn kind(&self) -> &'static str {
        "arm"
    }
}

/// `intrinsic "name" input1 input2 ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntrinsicExpression {
    pub name: Text,
    pub inputs: Vec<Expression>,
    pub span: Span,
}

// OPERATORS

/// Any of the binary operator expressions, eg. `add_expression`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpression {
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Operand,
    pub span: Span,
}

/// The right-hand side of a binary operator. Most operators take an
/// expression, but `::` and `as` take a type and `is` takes a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Expression(Box<Expression>),
    Pattern(Box<Pattern>),
    Type(Box<Type>),
}

impl Operand {
    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Operand::Expression(expression) => Some(expression),
            _ => None,
        }
    }
}

impl Node for Operand {
    fn get_span(&self) -> Span {
        match self {
            Operand::Expression(expression) => expression.get_span(),
            Operand::Pattern(pattern) => pattern.get_span(),
            Operand::Type(r#type) => r#type.get_span(),
        }
    }
    fn kind(&self) -> &'static str {
        match self {
            Operand::Expression(expression) => expression.kind(),
            Operand::Pattern(pattern) => pattern.kind(),
            Operand::Type(r#type) => r#type.kind(),
        }
    }
}

// SEQUENCES

/// `a ; b ; c`, or the parenthesized multi-line form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleExpression {
    pub elements: Vec<Expression>,
    pub span: Span,
}

/// `a , b , c`, or the parenthesized multi-line form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionExpression {
    pub elements: Vec<Expression>,
    pub span: Span,
}

/// `input1 input2 ... -> output`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionExpression {
    pub inputs: Vec<Pattern>,
    pub output: Box<Expression>,
    pub span: Span,
}

impl Node for Expression {
    fn get_span(&self) -> Span {
        match self {
            Expression::Placeholder(node) => node.span,
            Expression::VariableName(node) => node.span,
            Expression::TypeName(node) => node.span,
            Expression::Number(node) => node.span,
            Expression::Text(node) => node.span,
            Expression::Structure(node) => node.span,
            Expression::Block(node) => node.span,
            Expression::Unit(node) => node.span,
            Expression::FormattedText(node) => node.span,
            Expression::Call(node) => node.span,
            Expression::Do(node) => node.span,
            Expression::When(node) => node.span,
            Expression::Intrinsic(node) => node.span,
            Expression::Binary(node) => node.span,
            Expression::Tuple(node) => node.span,
            Expression::Collection(node) => node.span,
            Expression::Function(node) => node.span,
        }
    }
    fn kind(&self) -> &'static str {
        match self {
            Expression::Placeholder(_) => "placeholder_expression",
            Expression::VariableName(_) => "variable_name_expression",
            Expression::TypeName(_) => "type_name_expression",
            Expression::Number(_) => "number_expression",
            Expression::Text(_) => "text_expression",
            Expression::Structure(_) => "structure_expression",
            Expression::Block(_) => "block_expression",
            Expression::Unit(_) => "unit_expression",
            Expression::FormattedText(_) => "formatted_text_expression",
            Expression::Call(_) => "call_expression",
            Expression::Do(_) => "do_expression",
            Expression::When(_) => "when_expression",
            Expression::Intrinsic(_) => "intrinsic_expression",
            Expression::Binary(node) => node.operator.expression_kind(),
            Expression::Tuple(_) => "tuple_expression",
            Expression::Collection(_) => "collection_expression",
            Expression::Function(_) => "function_expression",
        }
    }
}
