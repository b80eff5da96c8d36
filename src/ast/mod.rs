/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree
///
/// Submodules:
/// - ast: The `Node` trait, the source file root, names and literals
/// - attributes: Bracketed metadata on definitions
/// - expressions: Definitions for the expression forms
/// - patterns: Definitions for the pattern forms
/// - statements: Definitions for statements and type representations
/// - types: Definitions for types, annotations and constraints
/// - display: S-expression rendering of every node
pub mod ast;
pub mod attributes;
pub mod display;
pub mod expressions;
pub mod patterns;
pub mod statements;
pub mod types;
