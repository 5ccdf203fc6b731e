use std::mem;

use hydrogen_common::warning::warn_once;
use hydrogen_dom::{AttributesMap, Forest, Node};

use crate::tokenizer::{Token, TokenKind, Tokenizer};

/// Something malformed the builder recovered from.
///
/// Issues never abort a parse; they only explain why the tree looks the way
/// it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Human readable description.
    pub message: String,
    /// True when structure had to be guessed (unterminated tags, early end of
    /// input); false for looseness that was simply accepted, such as a close
    /// tag naming a different element.
    pub is_error: bool,
}

/// Where the builder is inside the element currently being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Between the tag name and the `>` of the start tag.
    Attributes,
    /// After the `>`: text, child elements, and the close tag.
    Body,
}

/// An element whose close tag has not been seen yet.
struct OpenElement {
    name: String,
    attributes: AttributesMap,
    content: String,
    children: Vec<Node>,
    phase: Phase,
    /// Set when a `<` showed up inside the start tag. The element ends as soon
    /// as that nested element does.
    close_after_child: bool,
}

impl OpenElement {
    fn new(name: String) -> Self {
        Self {
            name,
            attributes: AttributesMap::new(),
            content: String::new(),
            children: Vec::new(),
            phase: Phase::Attributes,
            close_after_child: false,
        }
    }

    fn finish(self) -> Node {
        Node::element(self.name, self.attributes, self.content, self.children)
    }
}

/// What the element loop should do after one token.
enum Step {
    /// Keep reading into the current element.
    Continue,
    /// A `<` was consumed: start a child element.
    Open,
    /// The current element is complete.
    Close,
}

/// Builds a [`Forest`] from the tokens of a [`Tokenizer`].
///
/// Elements are built with an explicit stack of open elements rather than
/// recursion, so deeply nested input cannot overflow the call stack. At most
/// one token is ever pushed back.
pub struct TreeBuilder {
    tokenizer: Tokenizer,
    /// The single token handed back by [`Self::unscan`].
    pushback: Option<Token>,
    issues: Vec<ParseIssue>,
}

impl TreeBuilder {
    /// Create a builder reading from `tokenizer`.
    #[must_use]
    pub const fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            pushback: None,
            issues: Vec::new(),
        }
    }

    /// Issues recorded so far.
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Parse the whole input into a forest of top-level nodes.
    #[must_use]
    pub fn run(self) -> Forest {
        self.run_with_issues().0
    }

    /// Like [`Self::run`], also returning the recorded issues.
    #[must_use]
    pub fn run_with_issues(mut self) -> (Forest, Vec<ParseIssue>) {
        let mut forest = Forest::new();
        while let Some(node) = self.parse_one() {
            forest.push(node);
        }
        (forest, self.issues)
    }

    /// Parse the next top-level node, or return `None` at end of input.
    ///
    /// A `<` starts an element that extends to its close tag (or to the end of
    /// input). Any other token becomes a text node on its own.
    pub fn parse_one(&mut self) -> Option<Node> {
        let token = self.scan_ignore_whitespace();
        match token.kind {
            TokenKind::EndOfInput => None,
            TokenKind::TagOpenStart => Some(self.parse_element()),
            _ => Some(Node::text(token.text)),
        }
    }

    /// Build the element whose `<` was just consumed, including everything
    /// nested inside it.
    fn parse_element(&mut self) -> Node {
        let mut current = self.open_element();
        let mut ancestors: Vec<OpenElement> = Vec::new();

        loop {
            match self.step(&mut current) {
                Step::Continue => {}
                Step::Open => {
                    let child = self.open_element();
                    ancestors.push(mem::replace(&mut current, child));
                }
                Step::Close => {
                    let mut node = current.finish();
                    loop {
                        let Some(mut parent) = ancestors.pop() else {
                            return node;
                        };
                        parent.children.push(node);
                        if parent.close_after_child {
                            node = parent.finish();
                        } else {
                            current = parent;
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Read the tag name following a `<`.
    fn open_element(&mut self) -> OpenElement {
        let token = self.scan_ignore_whitespace();
        if token.kind == TokenKind::Identifier {
            return OpenElement::new(token.text);
        }

        self.parse_error("start tag without a name".to_string());
        self.unscan(token);
        OpenElement::new(String::new())
    }

    fn step(&mut self, element: &mut OpenElement) -> Step {
        let token = self.scan_ignore_whitespace();
        match element.phase {
            Phase::Attributes => self.step_in_start_tag(element, token),
            Phase::Body => self.step_in_body(element, token),
        }
    }

    fn step_in_start_tag(&mut self, element: &mut OpenElement, token: Token) -> Step {
        match token.kind {
            TokenKind::Identifier => {
                let (name, value) = self.parse_attribute(token.text);
                let _ = element.attributes.insert(name, value);
                Step::Continue
            }
            TokenKind::TagEnd => {
                element.phase = Phase::Body;
                Step::Continue
            }
            // `<a/>`
            TokenKind::Slash => {
                let next = self.scan_ignore_whitespace();
                if next.kind == TokenKind::TagEnd {
                    return Step::Close;
                }
                self.unscan(next);
                Step::Continue
            }
            TokenKind::TagCloseStart => {
                self.consume_close_tag(element);
                Step::Close
            }
            TokenKind::TagOpenStart => {
                self.parse_error(format!("start tag <{}> is not terminated", element.name));
                element.close_after_child = true;
                Step::Open
            }
            TokenKind::EndOfInput => {
                self.unexpected_end_of_input(element);
                Step::Close
            }
            _ => {
                self.parse_warning(format!(
                    "ignored {} {:?} inside <{}>",
                    token.kind, token.text, element.name
                ));
                Step::Continue
            }
        }
    }

    fn step_in_body(&mut self, element: &mut OpenElement, token: Token) -> Step {
        match token.kind {
            TokenKind::TagOpenStart => Step::Open,
            TokenKind::TagCloseStart => {
                self.consume_close_tag(element);
                Step::Close
            }
            TokenKind::EndOfInput => {
                self.unexpected_end_of_input(element);
                Step::Close
            }
            _ => {
                self.unscan(token);
                let text = self.parse_text_run();
                if element.children.is_empty() {
                    element.content.push_str(&text);
                } else {
                    element.children.push(Node::text(text));
                }
                Step::Continue
            }
        }
    }

    /// Parse `name`, `name=value`, `name="value"` or `name='value'`, with the
    /// name already consumed.
    ///
    /// Quoted values run to the next quote of either kind, `>` and `<`
    /// included; the two quotes are not required to match.
    fn parse_attribute(&mut self, name: String) -> (String, String) {
        let equals = self.scan_ignore_whitespace();
        if equals.kind != TokenKind::Equals {
            self.unscan(equals);
            return (name, String::new());
        }

        let open = self.scan_ignore_whitespace();
        if !open.kind.is_quote() {
            self.unscan(open);
            let value = self.parse_unquoted_value();
            return (name, value);
        }

        let mut value = String::new();
        loop {
            let token = self.scan();
            match token.kind {
                kind if kind.is_quote() => {
                    if kind != open.kind {
                        self.parse_warning(format!("attribute {name} closed with a different quote"));
                    }
                    break;
                }
                TokenKind::EndOfInput => {
                    self.parse_error(format!("attribute {name} has an unterminated value"));
                    self.unscan(token);
                    break;
                }
                _ => value.push_str(&token.text),
            }
        }
        (name, value)
    }

    /// Tokens up to the next whitespace or the end of the start tag.
    fn parse_unquoted_value(&mut self) -> String {
        let mut value = String::new();
        loop {
            let token = self.scan();
            match token.kind {
                TokenKind::Whitespace => break,
                TokenKind::TagEnd
                | TokenKind::TagOpenStart
                | TokenKind::TagCloseStart
                | TokenKind::EndOfInput => {
                    self.unscan(token);
                    break;
                }
                _ => value.push_str(&token.text),
            }
        }
        value
    }

    /// Concatenate the literal text of every token up to the next `<` or `</`.
    fn parse_text_run(&mut self) -> String {
        let mut text = String::new();
        loop {
            let token = self.scan();
            if token.kind.is_tag_start() || token.is_eof() {
                self.unscan(token);
                return text;
            }
            text.push_str(&token.text);
        }
    }

    /// Consume the name and `>` after a `</`.
    ///
    /// The name is not required to match the element being closed.
    fn consume_close_tag(&mut self, element: &OpenElement) {
        let name = self.scan_ignore_whitespace();
        match name.kind {
            TokenKind::Identifier => {
                if !name.text.eq_ignore_ascii_case(&element.name) {
                    self.parse_warning(format!(
                        "</{}> closed <{}>",
                        name.text, element.name
                    ));
                }
                let end = self.scan_ignore_whitespace();
                if end.kind != TokenKind::TagEnd {
                    self.unscan(end);
                }
            }
            TokenKind::TagEnd => {}
            _ => self.unscan(name),
        }
    }

    fn unexpected_end_of_input(&mut self, element: &OpenElement) {
        self.parse_error(format!("end of input inside <{}>", element.name));
    }
}

// =============================================================================
// Token Helpers
// =============================================================================

impl TreeBuilder {
    /// The pushed back token if there is one, otherwise the next token.
    fn scan(&mut self) -> Token {
        self.pushback
            .take()
            .unwrap_or_else(|| self.tokenizer.next_token())
    }

    /// [`Self::scan`], skipping one leading whitespace token.
    fn scan_ignore_whitespace(&mut self) -> Token {
        let token = self.scan();
        if token.kind == TokenKind::Whitespace {
            return self.scan();
        }
        token
    }

    /// Hand `token` back to be returned by the next scan.
    fn unscan(&mut self, token: Token) {
        debug_assert!(
            self.pushback.is_none(),
            "only one token may be pushed back at a time"
        );
        self.pushback = Some(token);
    }
}

// =============================================================================
// Issue Reporting
// =============================================================================

impl TreeBuilder {
    fn parse_error(&mut self, message: String) {
        self.report(message, true);
    }

    fn parse_warning(&mut self, message: String) {
        self.report(message, false);
    }

    /// Logs via hydrogen-common's warning system and stores the issue.
    fn report(&mut self, message: String, is_error: bool) {
        warn_once("HTML Parser", &message);
        self.issues.push(ParseIssue { message, is_error });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(input: &str) -> TreeBuilder {
        TreeBuilder::new(Tokenizer::new(input.to_string()))
    }

    #[test]
    fn test_unscan_returns_same_token() {
        let mut builder = builder("abc def");
        let token = builder.scan();
        assert_eq!(token.text, "abc");
        builder.unscan(token);
        assert_eq!(builder.scan().text, "abc");
        assert_eq!(builder.scan_ignore_whitespace().text, "def");
        assert!(builder.scan().is_eof());
    }

    #[test]
    fn test_scan_ignore_whitespace_skips_one_token() {
        let mut builder = builder("  \n x");
        let token = builder.scan_ignore_whitespace();
        assert_eq!(token.kind, TokenKind::Identifier);
        assert!(builder.pushback.is_none());
    }

    #[test]
    fn test_parse_one_stops_at_end_of_input() {
        let mut builder = builder("<p>x</p>");
        assert!(builder.parse_one().is_some());
        assert!(builder.parse_one().is_none());
        assert!(builder.parse_one().is_none());
    }

    #[test]
    fn test_text_run_keeps_inner_whitespace() {
        let mut builder = builder("a  b, c.</p>");
        assert_eq!(builder.parse_text_run(), "a  b, c.");
        assert_eq!(builder.scan().kind, TokenKind::TagCloseStart);
    }
}
