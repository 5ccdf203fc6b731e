use hydrogen_dom::TagCategory;
use strum_macros::Display;

/// The closed set of token classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TokenKind {
    /// End of input. Returned forever once the input is exhausted.
    EndOfInput,
    /// A run of spaces, tabs, and newlines.
    Whitespace,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `/` when not part of `</`
    Slash,
    /// `-`
    Dash,
    /// `?`
    QuestionMark,
    /// `#`
    Hash,
    /// `=`
    Equals,
    /// `"`
    DoubleQuote,
    /// `'`
    SingleQuote,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `<` not followed by `/`
    TagOpenStart,
    /// `</`
    TagCloseStart,
    /// `>`
    TagEnd,
    /// A letter followed by letters and digits.
    Identifier,
    /// A run of decimal digits.
    Number,
    /// Any other single character.
    Unknown,
}

impl TokenKind {
    /// The kind for a single punctuation character, or [`TokenKind::Unknown`].
    ///
    /// `<` is not handled here since it needs a character of lookahead.
    #[must_use]
    pub const fn from_punctuation(c: char) -> Self {
        match c {
            '.' => Self::Dot,
            ',' => Self::Comma,
            '/' => Self::Slash,
            '-' => Self::Dash,
            '?' => Self::QuestionMark,
            '#' => Self::Hash,
            '=' => Self::Equals,
            '"' => Self::DoubleQuote,
            '\'' => Self::SingleQuote,
            '(' => Self::OpenParen,
            ')' => Self::CloseParen,
            '>' => Self::TagEnd,
            _ => Self::Unknown,
        }
    }

    /// Returns true for `"` and `'`.
    #[must_use]
    pub const fn is_quote(self) -> bool {
        matches!(self, Self::DoubleQuote | Self::SingleQuote)
    }

    /// Returns true for `<` and `</`.
    #[must_use]
    pub const fn is_tag_start(self) -> bool {
        matches!(self, Self::TagOpenStart | Self::TagCloseStart)
    }
}

/// A classified span of input: the kind plus the literal text it covered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The exact source text, case preserved. Empty for end of input.
    pub text: String,
}

impl Token {
    /// Create a token.
    #[must_use]
    pub const fn new(kind: TokenKind, text: String) -> Self {
        Self { kind, text }
    }

    /// The end-of-input token.
    #[must_use]
    pub const fn eof() -> Self {
        Self::new(TokenKind::EndOfInput, String::new())
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }

    /// For identifiers, the tag category the text names. `None` for every
    /// other kind of token.
    #[must_use]
    pub fn tag_category(&self) -> Option<TagCategory> {
        match self.kind {
            TokenKind::Identifier => Some(TagCategory::classify(&self.text)),
            _ => None,
        }
    }
}
