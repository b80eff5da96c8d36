//! Expression parsing implementation.
//!
//! Binary operators are parsed by precedence climbing over `OPERATORS`.
//! Operands are function literals, the keyword forms (`do`, `when`,
//! `intrinsic`), or a subexpression optionally followed by more
//! subexpressions, which makes it a call (or a formatted text when the head
//! is a text literal). Subexpressions are dispatched through
//! `SUBEXPRESSION_LOOKUP`.

use crate::{
    ast::{
        expressions::{
            Arm, BinaryExpression, BlockExpression, CallExpression, CollectionExpression,
            DoExpression, Expression, FormattedTextExpression, FunctionExpression,
            IntrinsicExpression, NumberExpression, Operand, PlaceholderExpression,
            StructureExpression, StructureExpressionField, TextExpression, TupleExpression,
            TypeNameExpression, UnitExpression, VariableNameExpression, WhenExpression,
        },
        patterns::Pattern,
        statements::{AssignmentStatement, Statement},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::{
        can_start_subexpression, can_start_subpattern, operator_for, OperandGrammar,
        SUBEXPRESSION_LOOKUP, SUBPATTERN_LOOKUP,
    },
    parser::{mixed_separators, Parenthesized, Parser},
    pattern::{parse_pattern, parse_pattern_operand, parse_subpattern},
    types::parse_type_element,
};

const SEPARATORS: [TokenKind; 2] = [TokenKind::Semicolon, TokenKind::Comma];

/// Builds the node for a `;` or `,` separated sequence. Inline and
/// parenthesized sequences both go through here, so they produce the same
/// node kinds.
pub fn make_sequence(separator: TokenKind, elements: Vec<Expression>, span: Span) -> Expression {
    match separator {
        TokenKind::Semicolon => Expression::Tuple(TupleExpression { elements, span }),
        _ => Expression::Collection(CollectionExpression { elements, span }),
    }
}

/// Parses an expression element, or an inline tuple `a ; b` or collection
/// `a , b`. A line break after `;` or `,` ends the expression.
pub fn parse_expression(parser: &mut Parser) -> Result<Expression, Error> {
    let start = parser.current_span();
    let first = parse_expression_element(parser)?;

    let separator = parser.current_token_kind();
    if !SEPARATORS.contains(&separator) {
        return Ok(first);
    }

    let mut elements = vec![first];
    while parser.current_token().is_one_of_many(&SEPARATORS) {
        if parser.current_token_kind() != separator {
            return Err(mixed_separators("sequence", parser.current_span()));
        }

        parser.advance();
        elements.push(parse_expression_element(parser)?);
    }

    Ok(make_sequence(separator, elements, parser.span_from(start)))
}

pub fn parse_expression_element(parser: &mut Parser) -> Result<Expression, Error> {
    parse_expr(parser, 0)
}

/// Precedence climbing: parses an operand, then every following binary
/// operator whose precedence is at least `min_precedence`.
pub fn parse_expr(parser: &mut Parser, min_precedence: u8) -> Result<Expression, Error> {
    parser.nested(|parser| parse_binary_expr(parser, min_precedence))
}

fn parse_binary_expr(parser: &mut Parser, min_precedence: u8) -> Result<Expression, Error> {
    let start = parser.current_span();

    if let Some(function) = parse_function_expr(parser)? {
        return Ok(function);
    }

    let mut left = parse_operand(parser)?;

    while let Some(descriptor) = operator_for(parser.current_token()) {
        if descriptor.precedence < min_precedence {
            break;
        }

        parser.advance();
        parser.skip_line_break();

        let right = match descriptor.right {
            OperandGrammar::Expression => Operand::Expression(Box::new(parse_expr(
                parser,
                descriptor.right_precedence(),
            )?)),
            OperandGrammar::Type => Operand::Type(Box::new(parse_type_element(parser)?)),
            OperandGrammar::Pattern => Operand::Pattern(Box::new(parse_pattern_operand(parser)?)),
        };

        left = Expression::Binary(BinaryExpression {
            operator: descriptor.operator,
            left: Box::new(left),
            right,
            span: parser.span_from(start),
        });
    }

    Ok(left)
}

/// Parses `input1 input2 ... -> output` if the upcoming tokens form one.
/// The output extends as far as possible.
fn parse_function_expr(parser: &mut Parser) -> Result<Option<Expression>, Error> {
    if !SUBPATTERN_LOOKUP.contains_key(&parser.current_token_kind()) || !arrow_ahead(parser) {
        return Ok(None);
    }

    let start = parser.current_span();
    let inputs = parser.speculate(|parser| {
        let mut inputs = vec![parse_subpattern(parser)?];
        while can_start_subpattern(parser.current_token()) {
            inputs.push(parse_subpattern(parser)?);
        }
        parser.expect(TokenKind::Arrow)?;
        Ok(inputs)
    });

    let Some(inputs) = inputs else {
        return Ok(None);
    };

    parser.skip_line_break();
    let output = parse_expr(parser, 0)?;

    Ok(Some(Expression::Function(FunctionExpression {
        inputs,
        output: Box::new(output),
        span: parser.span_from(start),
    })))
}

/// Whether an `->` follows a run of subpatterns on this line. Bracketed
/// tokens are skipped without being checked, so a match only means the
/// function literal is worth trying.
fn arrow_ahead(parser: &Parser) -> bool {
    let mut depth = 0usize;

    for (index, token) in parser.tokens_ahead().enumerate() {
        match token.kind {
            TokenKind::EOF => return false,
            TokenKind::OpenParen | TokenKind::OpenCurly => depth += 1,
            TokenKind::CloseParen | TokenKind::CloseCurly if depth > 0 => depth -= 1,
            _ if depth > 0 => {}
            TokenKind::Arrow => return true,
            _ if index == 0 || can_start_subpattern(token) => {}
            _ => return false,
        }
    }

    false
}

fn parse_operand(parser: &mut Parser) -> Result<Expression, Error> {
    let start = parser.current_span();

    match parser.current_token_kind() {
        TokenKind::Do => {
            parser.advance();
            let input = parse_subexpression(parser)?;
            Ok(Expression::Do(DoExpression {
                input: Box::new(input),
                span: parser.span_from(start),
            }))
        }
        TokenKind::When => parse_when_expr(parser),
        TokenKind::Intrinsic => {
            parser.advance();
            let name = parser.text()?;
            let inputs = parse_inputs(parser)?;
            Ok(Expression::Intrinsic(IntrinsicExpression {
                name,
                inputs,
                span: parser.span_from(start),
            }))
        }
        _ => {
            let text_head = parser.at(TokenKind::Text);
            let first = parse_subexpression(parser)?;

            if !can_start_subexpression(parser.current_token()) {
                return Ok(first);
            }
            let inputs = parse_inputs(parser)?;

            Ok(match first {
                Expression::Text(text) if text_head => {
                    Expression::FormattedText(FormattedTextExpression {
                        text: text.value,
                        inputs,
                        span: parser.span_from(start),
                    })
                }
                function => Expression::Call(CallExpression {
                    function: Box::new(function),
                    inputs,
                    span: parser.span_from(start),
                }),
            })
        }
    }
}

fn parse_inputs(parser: &mut Parser) -> Result<Vec<Expression>, Error> {
    let mut inputs = vec![];
    while can_start_subexpression(parser.current_token()) {
        inputs.push(parse_subexpression(parser)?);
    }
    Ok(inputs)
}

pub fn parse_subexpression(parser: &mut Parser) -> Result<Expression, Error> {
    match SUBEXPRESSION_LOOKUP.get(&parser.current_token_kind()) {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("expression")),
    }
}

fn parse_when_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let start = parser.expect(TokenKind::When)?.span;
    let input = parse_subexpression(parser)?;

    parser.expect(TokenKind::OpenCurly)?;
    let arms = parser.lines(TokenKind::CloseCurly, parse_arm)?;
    parser.expect(TokenKind::CloseCurly)?;

    Ok(Expression::When(WhenExpression {
        input: Box::new(input),
        arms,
        span: parser.span_from(start),
    }))
}

fn parse_arm(parser: &mut Parser) -> Result<Arm, Error> {
    let start = parser.current_span();
    let pattern = parse_pattern(parser)?;
    parser.expect(TokenKind::Arrow)?;
    parser.skip_line_break();
    let value = parse_expression(parser)?;

    Ok(Arm {
        pattern,
        value,
        span: parser.span_from(start),
    })
}

// SUBEXPRESSIONS

pub fn parse_placeholder_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.expect(TokenKind::Underscore)?;
    Ok(Expression::Placeholder(PlaceholderExpression { span: token.span }))
}

pub fn parse_variable_name_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let variable = parser.variable_name()?;
    Ok(Expression::VariableName(VariableNameExpression {
        span: variable.span,
        variable,
    }))
}

pub fn parse_type_name_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let type_name = parser.type_name()?;
    Ok(Expression::TypeName(TypeNameExpression {
        span: type_name.span,
        type_name,
    }))
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let value = parser.number()?;
    Ok(Expression::Number(NumberExpression {
        span: value.span,
        value,
    }))
}

pub fn parse_text_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let value = parser.text()?;
    Ok(Expression::Text(TextExpression {
        span: value.span,
        value,
    }))
}

/// Parses a structure expression if every line is a `name : value` field,
/// otherwise a block. The body is parsed once as statements; a field and an
/// assignment to a variable share the same grammar.
pub fn parse_braced_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span;
    let statements = parser.parse_statements(TokenKind::CloseCurly);
    parser.expect(TokenKind::CloseCurly)?;
    let span = parser.span_from(start);

    if !is_structure(&statements) {
        return Ok(Expression::Block(BlockExpression { statements, span }));
    }

    let fields = statements
        .into_iter()
        .filter_map(|statement| match statement {
            Statement::Assignment(AssignmentStatement {
                pattern: Pattern::Variable(pattern),
                value,
                span,
            }) => Some(StructureExpressionField {
                name: pattern.variable,
                value,
                span,
            }),
            _ => None,
        })
        .collect();

    Ok(Expression::Structure(StructureExpression { fields, span }))
}

fn is_structure(statements: &[Statement]) -> bool {
    !statements.is_empty()
        && statements.iter().all(|statement| {
            matches!(
                statement,
                Statement::Assignment(AssignmentStatement {
                    pattern: Pattern::Variable(_),
                    ..
                })
            )
        })
}

pub fn parse_parenthesized_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let start = parser.current_span();

    Ok(
        match parser.parenthesized(
            "sequence",
            &SEPARATORS,
            parse_expression_element,
        )? {
            Parenthesized::Unit => Expression::Unit(UnitExpression {
                span: parser.span_from(start),
            }),
            Parenthesized::Group(expression) => expression,
            Parenthesized::Sequence(separator, elements) => {
                make_sequence(separator, elements, parser.span_from(start))
            }
        },
    )
}
