use std::str::FromStr;

use serde::{Serialize, Serializer};
use strum_macros::{Display, EnumIter, EnumString};

/// The fixed set of element names the renderer knows about.
///
/// This is the one place tag names are listed. The tree builder classifies
/// element names through [`TagCategory::classify`] and the tokenizer exposes
/// the same lookup for identifier tokens. Matching is ASCII case-insensitive,
/// so `<P>` and `<p>` are both [`TagCategory::Paragraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum TagCategory {
    /// `<header>`
    #[strum(serialize = "header")]
    Header,
    /// `<body>`
    #[strum(serialize = "body")]
    Body,
    /// `<title>`
    #[strum(serialize = "title")]
    Title,
    /// `<h1>`
    #[strum(serialize = "h1")]
    Heading1,
    /// `<nextid>`
    #[strum(serialize = "nextid")]
    NextId,
    /// `<a>`
    #[strum(serialize = "a")]
    Anchor,
    /// `<p>`
    #[strum(serialize = "p")]
    Paragraph,
    /// `<dl>`
    #[strum(serialize = "dl")]
    DefinitionList,
    /// `<dt>`
    #[strum(serialize = "dt")]
    DefinitionTerm,
    /// `<dd>`
    #[strum(serialize = "dd")]
    DefinitionDescription,
    /// Any other identifier.
    #[strum(serialize = "custom")]
    Custom,
}

impl TagCategory {
    /// Classify a raw tag identifier. Unknown names map to [`TagCategory::Custom`].
    #[must_use]
    pub fn classify(name: &str) -> Self {
        Self::from_str(name).unwrap_or(Self::Custom)
    }

    /// Returns true for [`TagCategory::Custom`].
    #[must_use]
    pub const fn is_custom(self) -> bool {
        matches!(self, Self::Custom)
    }
}

impl Serialize for TagCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_display_parses_back() {
        for category in TagCategory::iter() {
            assert_eq!(TagCategory::classify(&category.to_string()), category);
        }
    }

    #[test]
    fn test_classify_ignores_ascii_case() {
        assert_eq!(TagCategory::classify("NEXTID"), TagCategory::NextId);
        assert_eq!(TagCategory::classify("NextId"), TagCategory::NextId);
        assert_eq!(TagCategory::classify("H1"), TagCategory::Heading1);
    }

    #[test]
    fn test_unknown_is_custom() {
        assert_eq!(TagCategory::classify("div"), TagCategory::Custom);
        assert_eq!(TagCategory::classify("DIV"), TagCategory::Custom);
        assert_eq!(TagCategory::classify(""), TagCategory::Custom);
        assert!(TagCategory::classify("h2").is_custom());
    }
}
