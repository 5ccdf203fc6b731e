//! Markup tokenizer and tree builder for the Hydrogen browser.
//!
//! # Scope
//!
//! This crate implements a small, forgiving parser for the handful of tags
//! found in early web pages (`header`, `title`, `h1`, `a`, `p`, `dl`, ...):
//! - **Tokenizer** - classifies characters into whitespace runs, identifiers,
//!   numbers, and punctuation, telling `<` and `</` apart
//! - **Tree Builder** - turns the tokens into an owned [`Forest`] of nodes,
//!   with attributes, inline text, and nested children
//!
//! Malformed markup is never an error: unterminated tags, mismatched close
//! tags, and mismatched quotes produce a best-effort tree and a [`ParseIssue`].
//! The only failure is not being able to read the input.
//!
//! # Not Supported
//!
//! - Character references (`&amp;` stays as written)
//! - Comments, CDATA, script and style contents
//! - Implicit closing of elements
//! - Encoding detection
//!
//! # Example
//! ```
//! use hydrogen_html::parse_str;
//!
//! let forest = parse_str(r#"<a href="WhatIs.html">What is it?</a>"#);
//! assert_eq!(forest.len(), 1);
//! assert_eq!(forest[0].attribute("href"), Some("WhatIs.html"));
//! assert_eq!(forest[0].content(), "What is it?");
//! ```

/// Reading documents from strings, streams, and files.
pub mod loader;
/// Tree construction from tokens.
pub mod parser;
/// Tokenizer for converting input into tokens.
pub mod tokenizer;

pub use hydrogen_dom::{Forest, Node};
pub use loader::{LoadError, parse_file, parse_reader, parse_str, read_file};
pub use parser::{ParseIssue, TreeBuilder};
pub use tokenizer::{Token, TokenKind, Tokenizer};
