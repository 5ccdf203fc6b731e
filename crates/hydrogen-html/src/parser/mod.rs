//! Tree builder module.

/// Tree builder implementation.
pub mod core;

pub use self::core::{ParseIssue, TreeBuilder};
