//! Diagnostic types for the parser.
//!
//! This module defines the non-fatal diagnostics recorded while parsing:
//!
//! - Error structures with source position information
//! - One variant per kind of recovered syntax error
//! - Short suggestions shown next to the message

pub mod errors;
