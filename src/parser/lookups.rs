use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{expressions::Expression, patterns::Pattern, types::Type},
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::*, parser::Parser, pattern::*, types::*};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BinaryOperator {
    Annotate,
    As,
    To,
    By,
    Power,
    Multiply,
    Divide,
    Remainder,
    Add,
    Subtract,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Equal,
    NotEqual,
    Is,
    And,
    Or,
    Apply,
}

impl BinaryOperator {
    /// Kind tag of the expression node this operator produces.
    pub fn expression_kind(&self) -> &'static str {
        match self {
            BinaryOperator::Annotate => "annotate_expression",
            BinaryOperator::As => "as_expression",
            BinaryOperator::To => "to_expression",
            BinaryOperator::By => "by_expression",
            BinaryOperator::Power => "power_expression",
            BinaryOperator::Multiply => "multiply_expression",
            BinaryOperator::Divide => "divide_expression",
            BinaryOperator::Remainder => "remainder_expression",
            BinaryOperator::Add => "add_expression",
            BinaryOperator::Subtract => "subtract_expression",
            BinaryOperator::LessThan => "less_than_expression",
            BinaryOperator::LessThanOrEqual => "less_than_or_equal_expression",
            BinaryOperator::GreaterThan => "greater_than_expression",
            BinaryOperator::GreaterThanOrEqual => "greater_than_or_equal_expression",
            BinaryOperator::Equal => "equal_expression",
            BinaryOperator::NotEqual => "not_equal_expression",
            BinaryOperator::Is => "is_expression",
            BinaryOperator::And => "and_expression",
            BinaryOperator::Or => "or_expression",
            BinaryOperator::Apply => "apply_expression",
        }
    }

    pub fn descriptor(&self) -> &'static OperatorDescriptor {
        // Every operator has an entry in the table
        &OPERATORS[*self as usize]
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Associativity {
    Left,
    Right,
}

/// Which sublanguage an operand is parsed in.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OperandGrammar {
    Expression,
    Pattern,
    Type,
}

#[derive(Debug, Clone, Copy)]
pub struct OperatorDescriptor {
    pub operator: BinaryOperator,
    pub symbol: &'static str,
    /// 1 to 12, higher binds tighter.
    pub precedence: u8,
    pub associativity: Associativity,
    pub left: OperandGrammar,
    pub right: OperandGrammar,
}

impl OperatorDescriptor {
    const fn new(
        operator: BinaryOperator,
        symbol: &'static str,
        precedence: u8,
        associativity: Associativity,
        right: OperandGrammar,
    ) -> Self {
        OperatorDescriptor {
            operator,
            symbol,
            precedence,
            associativity,
            left: OperandGrammar::Expression,
            right,
        }
    }

    /// Minimum precedence for the right operand.
    pub fn right_precedence(&self) -> u8 {
        match self.associativity {
            Associativity::Left => self.precedence + 1,
            Associativity::Right => self.precedence,
        }
    }
}

/// Ordered like [`BinaryOperator`].
pub static OPERATORS: [OperatorDescriptor; 20] = [
    OperatorDescriptor::new(BinaryOperator::Annotate, "::", 12, Associativity::Left, OperandGrammar::Type),
    OperatorDescriptor::new(BinaryOperator::As, "as", 11, Associativity::Left, OperandGrammar::Type),
    OperatorDescriptor::new(BinaryOperator::To, "to", 10, Associativity::Left, OperandGrammar::Expression),
    OperatorDescriptor::new(BinaryOperator::By, "by", 9, Associativity::Left, OperandGrammar::Expression),
    OperatorDescriptor::new(BinaryOperator::Power, "^", 8, Associativity::Right, OperandGrammar::Expression),
    OperatorDescriptor::new(BinaryOperator::Multiply, "*", 7, Associativity::Left, OperandGrammar::Expression),
    OperatorDescriptor::new(BinaryOperator::Divide, "/", 7, Associativity::Left, OperandGrammar::Expression),
    OperatorDescriptor::new(BinaryOperator::Remainder, "%", 7, Associativity::Left, OperandGrammar::Expression),
    OperatorDescriptor::new(BinaryOperator::Add, "+", 6, Associativity::Left, OperandGrammar::Expression),
    OperatorDescriptor::new(BinaryOperator::Subtract, "-", 6, Associativity::Left, OperandGrammar::Expression),
    OperatorDescriptor::new(BinaryOperator::LessThan, "<", 5, Associativity::Left, OperandGrammar::Expression),
    OperatorDescriptor::new(BinaryOperator::LessThanOrEqual, "<=", 5, Associativity::Left, OperandGrammar::Expression),
    OperatorDescriptor::new(BinaryOperator::GreaterThan, ">", 5, Associativity::Left, OperandGrammar::Expression),
    OperatorDescriptor::new(BinaryOperator::GreaterThanOrEqual, ">=", 5, Associativity::Left, OperandGrammar::Expression),
    OperatorDescriptor::new(BinaryOperator::Equal, "=", 5, Associativity::Left, OperandGrammar::Expression),
    OperatorDescriptor::new(BinaryOperator::NotEqual, "/=", 5, Associativity::Left, OperandGrammar::Expression),
    OperatorDescriptor::new(BinaryOperator::Is, "is", 4, Associativity::Left, OperandGrammar::Pattern),
    OperatorDescriptor::new(BinaryOperator::And, "and", 3, Associativity::Left, OperandGrammar::Expression),
    OperatorDescriptor::new(BinaryOperator::Or, "or", 2, Associativity::Left, OperandGrammar::Expression),
    OperatorDescriptor::new(BinaryOperator::Apply, ".", 1, Associativity::Left, OperandGrammar::Expression),
];

pub type NUDHandler<T> = fn(&mut Parser) -> Result<T, Error>;

// Lookup tables keyed by the first token of a construct
pub type OperatorLookup = HashMap<&'static str, &'static OperatorDescriptor>;
pub type NUDLookup<T> = HashMap<TokenKind, NUDHandler<T>>;

lazy_static! {
    pub static ref OPERATOR_LOOKUP: OperatorLookup = OPERATORS
        .iter()
        .map(|descriptor| (descriptor.symbol, descriptor))
        .collect();
    pub static ref SUBEXPRESSION_LOOKUP: NUDLookup<Expression> = create_subexpression_lookups();
    pub static ref SUBPATTERN_LOOKUP: NUDLookup<Pattern> = create_subpattern_lookups();
    pub static ref SUBTYPE_LOOKUP: NUDLookup<Type> = create_subtype_lookups();
}

/// The binary operator `token` spells, if any. Operator words only count
/// when lexed as lowercase names.
pub fn operator_for(token: &Token) -> Option<&'static OperatorDescriptor> {
    let symbol = match token.kind {
        TokenKind::LowercaseName if token.is_operator_word() => token.value.as_str(),
        TokenKind::LowercaseName => return None,
        kind => kind.symbol()?,
    };

    OPERATOR_LOOKUP.get(symbol).copied()
}

fn create_subexpression_lookups() -> NUDLookup<Expression> {
    let mut lookup: NUDLookup<Expression> = HashMap::new();

    lookup.insert(TokenKind::Underscore, parse_placeholder_expr);
    lookup.insert(TokenKind::LowercaseName, parse_variable_name_expr);
    lookup.insert(TokenKind::CapitalName, parse_type_name_expr);
    lookup.insert(TokenKind::Number, parse_number_expr);
    lookup.insert(TokenKind::Text, parse_text_expr);
    lookup.insert(TokenKind::OpenCurly, parse_braced_expr);
    lookup.insert(TokenKind::OpenParen, parse_parenthesized_expr);

    lookup
}

fn create_subpattern_lookups() -> NUDLookup<Pattern> {
    let mut lookup: NUDLookup<Pattern> = HashMap::new();

    lookup.insert(TokenKind::Underscore, parse_wildcard_pattern);
    lookup.insert(TokenKind::LowercaseName, parse_variable_pattern);
    lookup.insert(TokenKind::Number, parse_number_pattern);
    lookup.insert(TokenKind::Text, parse_text_pattern);
    lookup.insert(TokenKind::OpenCurly, parse_destructure_pattern);
    lookup.insert(TokenKind::OpenParen, parse_parenthesized_pattern);

    lookup
}

fn create_subtype_lookups() -> NUDLookup<Type> {
    let mut lookup: NUDLookup<Type> = HashMap::new();

    lookup.insert(TokenKind::Underscore, parse_placeholder_type);
    lookup.insert(TokenKind::LowercaseName, parse_parameter_type);
    lookup.insert(TokenKind::CapitalName, parse_named_type);
    lookup.insert(TokenKind::OpenCurly, parse_block_type);
    lookup.insert(TokenKind::OpenParen, parse_parenthesized_type);

    lookup
}

/// Whether `token` can begin a subexpression that continues an argument
/// list.
pub fn can_start_subexpression(token: &Token) -> bool {
    SUBEXPRESSION_LOOKUP.contains_key(&token.kind) && !token.is_operator_word()
}

pub fn can_start_subpattern(token: &Token) -> bool {
    SUBPATTERN_LOOKUP.contains_key(&token.kind) && !token.is_operator_word()
}

pub fn can_start_subtype(token: &Token) -> bool {
    SUBTYPE_LOOKUP.contains_key(&token.kind) && !token.is_operator_word()
}
