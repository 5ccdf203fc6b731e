use hydrogen_common::warning::warn_once;

use super::token::{Token, TokenKind};

/// Pull-based tokenizer over an input that has already been read in full.
///
/// Classification is first-match by category: whitespace, then identifiers
/// (letter start), then numbers (digit start), then punctuation, and finally
/// [`TokenKind::Unknown`]. Runs are always drained completely before a token
/// is returned, so a run is never split across two calls.
pub struct Tokenizer {
    pub(super) input: String,
    pub(super) current_pos: usize,
    pub(super) token_stream: Vec<Token>,
}

impl Tokenizer {
    /// Create a tokenizer positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: String) -> Self {
        Self {
            input,
            current_pos: 0,
            token_stream: Vec::new(),
        }
    }

    /// Produce the next token.
    ///
    /// Once the input is exhausted this keeps returning
    /// [`TokenKind::EndOfInput`].
    pub fn next_token(&mut self) -> Token {
        let start = self.current_pos;
        let Some(c) = self.consume() else {
            return Token::eof();
        };

        let kind = if Self::is_whitespace_char(c) {
            self.skip_while(Self::is_whitespace_char);
            TokenKind::Whitespace
        } else if c.is_ascii_alphabetic() {
            self.skip_while(|c| c.is_ascii_alphanumeric());
            TokenKind::Identifier
        } else if c.is_ascii_digit() {
            self.skip_while(|c| c.is_ascii_digit());
            TokenKind::Number
        } else if c == '<' {
            match self.consume() {
                Some('/') => TokenKind::TagCloseStart,
                Some(next) => {
                    self.reconsume(next);
                    TokenKind::TagOpenStart
                }
                None => TokenKind::TagOpenStart,
            }
        } else {
            let kind = TokenKind::from_punctuation(c);
            if kind == TokenKind::Unknown {
                warn_once("HTML Tokenizer", &format!("unrecognized character {c:?}"));
            }
            kind
        };

        Token::new(kind, self.input[start..self.current_pos].to_string())
    }

    /// Tokenize the whole input, keeping the tokens for [`Self::into_tokens`].
    ///
    /// The stream ends with exactly one [`TokenKind::EndOfInput`].
    pub fn run(&mut self) {
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            self.token_stream.push(token);
            if done {
                break;
            }
        }
    }

    /// Consume the tokenizer and return the tokens collected by [`Self::run`].
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.token_stream
    }
}
