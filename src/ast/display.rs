//! S-expression rendering of the syntax tree.
//!
//! Every node renders as `(kind child1 child2 ...)`, with leaf values written
//! inline, eg. `(add_expression (number_expression 2) (variable_name_expression x))`.
//! Two trees render identically exactly when they have the same shape and
//! the same leaf values.

use std::fmt::{self, Display, Formatter};

use super::{
    ast::{AttributeName, Comment, Node, Number, SourceFile, Text, TypeName, TypeParameterName, VariableName, VariantName},
    attributes::{Attribute, AttributeValue},
    expressions::{Arm, Expression, Operand, StructureExpressionField},
    patterns::{DestructurePatternField, Pattern},
    statements::{FieldDefinition, Statement, TypeRepresentation, VariantDefinition},
    types::{Constraint, Type, TypeAnnotation, TypeFunction, WhereClause},
};

fn children<T: Display>(f: &mut Formatter<'_>, nodes: &[T]) -> fmt::Result {
    for node in nodes {
        write!(f, " {}", node)?;
    }
    Ok(())
}

fn optional<T: Display>(f: &mut Formatter<'_>, node: &Option<T>) -> fmt::Result {
    if let Some(node) = node {
        write!(f, " {}", node)?;
    }
    Ok(())
}

macro_rules! display_name {
    ($($name:ident),*) => {
        $(
            impl Display for $name {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    write!(f, "({} {})", self.kind(), self.value)
                }
            }
        )*
    };
}

display_name!(TypeName, VariantName, VariableName, TypeParameterName, AttributeName, Number);

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(text {:?})", self.value)
    }
}

impl Display for Comment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(comment {:?})", self.value)
    }
}

impl Display for SourceFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(source_file")?;
        children(f, &self.statements)?;
        write!(f, ")")
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Name(node) => write!(f, "(name_attribute {})", node.name),
            Attribute::Assign(node) => {
                write!(f, "(assign_attribute {} {})", node.name, node.value)
            }
        }
    }
}

impl Display for AttributeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(text) => write!(f, "{}", text),
            AttributeValue::Number(number) => write!(f, "{}", number),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.kind())?;
        match self {
            Statement::TypeDefinition(node) => {
                children(f, &node.comments)?;
                children(f, &node.attributes)?;
                write!(f, " {}", node.name)?;
                optional(f, &node.type_function)?;
                optional(f, &node.representation)?;
            }
            Statement::TraitDefinition(node) => {
                children(f, &node.comments)?;
                children(f, &node.attributes)?;
                write!(f, " {}", node.name)?;
                optional(f, &node.type_function)?;
                optional(f, &node.r#type)?;
                optional(f, &node.where_clause)?;
            }
            Statement::ConstantDefinition(node) => {
                children(f, &node.comments)?;
                children(f, &node.attributes)?;
                write!(f, " {} {}", node.name, node.type_annotation)?;
            }
            Statement::InstanceDefinition(node) => {
                children(f, &node.comments)?;
                children(f, &node.attributes)?;
                write!(f, " {}", node.trait_name)?;
                children(f, &node.parameters)?;
                optional(f, &node.where_clause)?;
                optional(f, &node.value)?;
            }
            Statement::Assignment(node) => write!(f, " {} {}", node.pattern, node.value)?,
            Statement::Expression(node) => write!(f, " {}", node.expression)?,
            Statement::Error(_) => {}
        }
        write!(f, ")")
    }
}

impl Display for TypeRepresentation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.kind())?;
        match self {
            TypeRepresentation::Structure(node) => children(f, &node.fields)?,
            TypeRepresentation::Enumeration(node) => children(f, &node.variants)?,
        }
        write!(f, ")")
    }
}

impl Display for FieldDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(field_definition {} {})", self.name, self.type_annotation)
    }
}

impl Display for VariantDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(variant_definition {}", self.name)?;
        children(f, &self.elements)?;
        write!(f, ")")
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.kind())?;
        match self {
            Expression::Placeholder(_) | Expression::Unit(_) => {}
            Expression::VariableName(node) => write!(f, " {}", node.variable.value)?,
            Expression::TypeName(node) => write!(f, " {}", node.type_name.value)?,
            Expression::Number(node) => write!(f, " {}", node.value.value)?,
            Expression::Text(node) => write!(f, " {:?}", node.value.value)?,
            Expression::Structure(node) => children(f, &node.fields)?,
            Expression::Block(node) => children(f, &node.statements)?,
            Expression::FormattedText(node) => {
                write!(f, " {:?}", node.text.value)?;
                children(f, &node.inputs)?;
            }
            Expression::Call(node) => {
                write!(f, " {}", node.function)?;
                children(f, &node.inputs)?;
            }
            Expression::Do(node) => write!(f, " {}", node.input)?,
            Expression::When(node) => {
                write!(f, " {}", node.input)?;
                children(f, &node.arms)?;
            }
            Expression::Intrinsic(node) => {
                write!(f, " {:?}", node.name.value)?;
                children(f, &node.inputs)?;
            }
            Expression::Binary(node) => write!(f, " {} {}", node.left, node.right)?,
            Expression::Tuple(node) => children(f, &node.elements)?,
            Expression::Collection(node) => children(f, &node.elements)?,
            Expression::Function(node) => {
                children(f, &node.inputs)?;
                write!(f, " {}", node.output)?;
            }
        }
        write!(f, ")")
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Expression(expression) => write!(f, "{}", expression),
            Operand::Pattern(pattern) => write!(f, "{}", pattern),
            Operand::Type(r#type) => write!(f, "{}", r#type),
        }
    }
}

impl Display for StructureExpressionField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(structure_expression_field {} {})", self.name, self.value)
    }
}

impl Display for Arm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(arm {} {})", self.pattern, self.value)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.kind())?;
        match self {
            Pattern::Wildcard(_) | Pattern::Unit(_) => {}
            Pattern::Variable(node) => write!(f, " {}", node.variable.value)?,
            Pattern::Number(node) => write!(f, " {}", node.value.value)?,
            Pattern::Text(node) => write!(f, " {:?}", node.value.value)?,
            Pattern::Destructure(node) => children(f, &node.fields)?,
            Pattern::Tuple(node) => children(f, &node.elements)?,
            Pattern::Or(node) => write!(f, " {} {}", node.left, node.right)?,
            Pattern::Annotate(node) => write!(f, " {} {}", node.left, node.right)?,
            Pattern::Set(node) => write!(f, " {}", node.variable.value)?,
            Pattern::Variant(node) => {
                write!(f, " {}", node.variant.value)?;
                children(f, &node.elements)?;
            }
        }
        write!(f, ")")
    }
}

impl Display for DestructurePatternField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(destructure_pattern_field {} {})", self.name, self.value)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.kind())?;
        match self {
            Type::Placeholder(_) | Type::Unit(_) => {}
            Type::Parameter(node) => write!(f, " {}", node.name.value)?,
            Type::Named(node) => {
                write!(f, " {}", node.name.value)?;
                children(f, &node.parameters)?;
            }
            Type::Function(node) => {
                children(f, &node.inputs)?;
                write!(f, " {}", node.output)?;
            }
            Type::Block(node) => write!(f, " {}", node.output)?,
            Type::Tuple(node) => children(f, &node.elements)?,
        }
        write!(f, ")")
    }
}

/// Written inline: the type, followed by the where clause if there is one.
impl Display for TypeAnnotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.r#type)?;
        optional(f, &self.where_clause)
    }
}

impl Display for WhereClause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(where_clause")?;
        children(f, &self.constraints)?;
        write!(f, ")")
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.kind())?;
        match self {
            Constraint::Bound(node) => {
                write!(f, " {}", node.trait_name)?;
                children(f, &node.parameters)?;
            }
            Constraint::Infer(node) => write!(f, " {}", node.parameter)?,
            Constraint::Default(node) => write!(f, " {} {}", node.parameter, node.value)?,
        }
        write!(f, ")")
    }
}

impl Display for TypeFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(type_function")?;
        for parameter in &self.parameters {
            write!(f, " {}", parameter.name.value)?;
        }
        write!(f, ")")
    }
}

/// Breaks a rendered tree onto multiple lines, one node per line, indented
/// by depth.
pub fn pretty_print(string: &str) -> String {
    let mut result = String::new();
    let mut indent = 0;
    let mut in_text = false;
    let mut escaped = false;

    for c in string.chars() {
        if in_text {
            result.push(c);
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_text = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_text = true;
                result.push(c);
            }
            '(' => {
                if !result.is_empty() {
                    if result.ends_with(' ') {
                        result.pop();
                    }
                    result.push('\n');
                    result.push_str(&"  ".repeat(indent));
                }
                indent += 1;
                result.push(c);
            }
            ')' => {
                indent = indent.saturating_sub(1);
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}
