//! Common utilities for the Hydrogen parser.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored terminal output for malformed markup

pub mod warning;
