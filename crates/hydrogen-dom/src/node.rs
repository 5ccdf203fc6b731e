use std::collections::HashMap;
use std::{fmt, mem};

use serde::Serialize;

use crate::TagCategory;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// The ordered top-level nodes of a parsed document.
pub type Forest = Vec<Node>;

/// Name given to every text node.
pub const TEXT_NODE_NAME: &str = "Text";

/// What a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "tag", rename_all = "lowercase")]
pub enum NodeKind {
    /// An element, classified against the tag table.
    Element(TagCategory),
    /// A run of text outside of any markup.
    Text,
}

/// An element or a text leaf.
///
/// Nodes are built once by the tree builder and never change afterwards;
/// there are accessors but no setters. Children are owned, so dropping a node
/// drops its whole subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    name: String,
    kind: NodeKind,
    attributes: AttributesMap,
    content: String,
    children: Vec<Node>,
}

impl Node {
    /// Create an element, classifying `name` against the tag table.
    #[must_use]
    pub fn element(
        name: String,
        attributes: AttributesMap,
        content: String,
        children: Vec<Self>,
    ) -> Self {
        let kind = NodeKind::Element(TagCategory::classify(&name));
        Self {
            name,
            kind,
            attributes,
            content,
            children,
        }
    }

    /// Create a text leaf holding `content`.
    #[must_use]
    pub fn text(content: String) -> Self {
        Self {
            name: TEXT_NODE_NAME.to_string(),
            kind: NodeKind::Text,
            attributes: AttributesMap::new(),
            content,
            children: Vec::new(),
        }
    }

    /// The tag identifier as written in the source, or `"Text"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element or text.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The tag category, or `None` for text nodes.
    #[must_use]
    pub const fn tag(&self) -> Option<TagCategory> {
        match self.kind {
            NodeKind::Element(tag) => Some(tag),
            NodeKind::Text => None,
        }
    }

    /// Returns true for text leaves.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text)
    }

    /// All attributes of the element.
    #[must_use]
    pub const fn attributes(&self) -> &AttributesMap {
        &self.attributes
    }

    /// Look up a single attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Inline text captured before the first nested element, or the text of a
    /// text leaf.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Child nodes in source order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Iterate over this node and every node below it, in pre-order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Concatenated content of this node and its subtree, in pre-order.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.descendants().map(Self::content).collect()
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);

        if self.is_text() {
            return writeln!(f, "{indent}\"{}\"", self.content);
        }

        write!(f, "{indent}<{}", self.name)?;
        let mut attributes: Vec<_> = self.attributes.iter().collect();
        attributes.sort_unstable();
        for (key, value) in attributes {
            write!(f, " {key}=\"{value}\"")?;
        }
        writeln!(f, ">")?;

        if !self.content.is_empty() {
            writeln!(f, "{indent}  {}", self.content)?;
        }
        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }

        writeln!(f, "{indent}</{}>", self.name)
    }
}

impl fmt::Display for Node {
    /// Pretty-print the subtree, one tag per line, two spaces per level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

impl Drop for Node {
    /// Tear the subtree down with an explicit stack so that dropping a very
    /// deep tree cannot overflow the call stack.
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Pre-order iterator over a subtree, see [`Node::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
