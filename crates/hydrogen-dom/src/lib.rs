//! Node tree for the Hydrogen parser.
//!
//! # Design
//!
//! Unlike a browser DOM, the tree is a plain owned value: every [`Node`]
//! exclusively owns its children, there are no parent or sibling links, and
//! nothing can be changed once the tree builder hands a node over. A parsed
//! document is a [`Forest`], since markup may have several top-level siblings.

mod node;
mod tag;

pub use node::{AttributesMap, Descendants, Forest, Node, NodeKind, TEXT_NODE_NAME};
pub use tag::TagCategory;
