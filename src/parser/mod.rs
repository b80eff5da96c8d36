//! Parser module for building the syntax tree.
//!
//! This module contains the parser that turns the token stream into a
//! [`SourceFile`](crate::ast::ast::SourceFile). It is a hand-written
//! recursive descent parser with precedence climbing for binary operators
//! and handles:
//!
//! - Statement parsing (definitions, assignments, expression statements)
//! - Expression parsing (operators, calls, function literals, sequences)
//! - Pattern and type parsing, including `where` clauses
//! - Error recovery at statement boundaries
//!
//! Where the grammar is ambiguous the parser tries the preferred reading
//! first and falls back through a checkpoint, so every input has exactly one
//! tree.

pub mod attributes;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod pattern;
pub mod stmt;
pub mod types;
