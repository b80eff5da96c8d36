//! Error types and error reporting for the parser.
//!
//! Lexical and structural errors carry the source span they refer to and a
//! human-readable "expected X, found Y" message. They are collected rather
//! than thrown, so one parse can report several problems.

pub mod errors;

#[cfg(test)]
mod tests;
