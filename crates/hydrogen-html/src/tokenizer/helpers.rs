//! Character-level helpers for the tokenizer.
//!
//! The tokenizer only ever needs one character of lookahead: `<` peeks at the
//! following character to tell `</` apart and hands it back with
//! [`Tokenizer::reconsume`] when it is not a `/`.

use super::tokenizer::Tokenizer;

impl Tokenizer {
    /// Returns the character at the current position and advances past it.
    /// Returns None at the end of input.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    /// Push the character returned by the last [`Self::consume`] back.
    pub(super) fn reconsume(&mut self, c: char) {
        debug_assert!(self.input[..self.current_pos].ends_with(c));
        self.current_pos -= c.len_utf8();
    }

    /// The next character, without consuming it.
    #[must_use]
    pub(super) fn peek(&self) -> Option<char> {
        self.input[self.current_pos..].chars().next()
    }

    /// Consume characters for as long as `predicate` holds.
    pub(super) fn skip_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.current_pos += c.len_utf8();
        }
    }

    /// Space, tab, line feed, or carriage return.
    pub(super) const fn is_whitespace_char(c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\r')
    }
}
