//! Tokenizer module.
//!
//! Splits raw markup into classified lexical units: whitespace runs,
//! identifiers, digit runs, and single-character punctuation, with `<` and
//! `</` told apart so the tree builder never has to look at characters.

/// Tokenizer state and classification loop.
#[allow(clippy::module_inception)]
pub mod tokenizer;
/// Character-level helpers for the tokenizer.
pub mod helpers;
/// Token types produced by the tokenizer.
pub mod token;

pub use tokenizer::Tokenizer;
pub use token::{Token, TokenKind};
