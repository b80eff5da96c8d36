//! Lexical analysis.
//!
//! The lexer converts source text into a stream of tokens using a table of
//! regex patterns. At each position the longest match wins. Trivia (comments
//! and line-break runs) is kept in the stream so the parser can decide where
//! it is significant.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
