//! Lexical analysis module.
//!
//! This module contains the lexer that turns source text into tokens on
//! demand. It handles:
//!
//! - Tokenization using anchored regex patterns, one token per pull
//! - Recognition of keywords, identifiers, integers and operators
//! - Token position tracking for error reporting
//! - Unrecognised characters, surfaced as `Illegal` tokens

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
