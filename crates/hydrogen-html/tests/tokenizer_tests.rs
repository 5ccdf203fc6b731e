//! Integration tests for the tokenizer.

use hydrogen_dom::TagCategory;
use hydrogen_html::{Token, TokenKind, Tokenizer};

/// Helper to tokenize a string and return the tokens
fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(input.to_string());
    tokenizer.run();
    tokenizer.into_tokens()
}

/// Helper to get only the kinds
fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).iter().map(|t| t.kind).collect()
}

#[test]
fn test_empty_input() {
    let tokens = tokenize("");
    assert_eq!(tokens, vec![Token::eof()]);
}

#[test]
fn test_end_of_input_repeats() {
    let mut tokenizer = Tokenizer::new("x".to_string());
    assert_eq!(tokenizer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert!(tokenizer.next_token().is_eof());
    }
}

#[test]
fn test_whitespace_run_is_one_token() {
    let tokens = tokenize(" \t\n  \r\nx");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Whitespace);
    assert_eq!(tokens[0].text, " \t\n  \r\n");
    assert_eq!(tokens[1].text, "x");
}

#[test]
fn test_identifier_keeps_case_and_digits() {
    let tokens = tokenize("NextId h1 ab12cd");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text, "NextId");
    assert_eq!(tokens[2].text, "h1");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].text, "ab12cd");
}

#[test]
fn test_number_run() {
    let tokens = tokenize("55abc");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].text, "55");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text, "abc");
}

#[test]
fn test_open_and_close_tag_starts() {
    assert_eq!(
        kinds("<p></p>"),
        vec![
            TokenKind::TagOpenStart,
            TokenKind::Identifier,
            TokenKind::TagEnd,
            TokenKind::TagCloseStart,
            TokenKind::Identifier,
            TokenKind::TagEnd,
            TokenKind::EndOfInput,
        ]
    );

    let tokens = tokenize("</a>");
    assert_eq!(tokens[0].text, "</");
}

#[test]
fn test_open_tag_start_does_not_swallow_next_character() {
    let tokens = tokenize("<a");
    assert_eq!(tokens[0].kind, TokenKind::TagOpenStart);
    assert_eq!(tokens[0].text, "<");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text, "a");

    let tokens = tokenize("< ");
    assert_eq!(tokens[0].kind, TokenKind::TagOpenStart);
    assert_eq!(tokens[1].kind, TokenKind::Whitespace);
}

#[test]
fn test_lone_open_tag_start_at_end() {
    assert_eq!(kinds("<"), vec![TokenKind::TagOpenStart, TokenKind::EndOfInput]);
}

#[test]
fn test_punctuation() {
    assert_eq!(
        kinds(".,/-?#=\"'()>"),
        vec![
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Slash,
            TokenKind::Dash,
            TokenKind::QuestionMark,
            TokenKind::Hash,
            TokenKind::Equals,
            TokenKind::DoubleQuote,
            TokenKind::SingleQuote,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::TagEnd,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_unknown_characters() {
    let tokens = tokenize("&é!");
    assert_eq!(tokens.len(), 4);
    assert!(tokens[..3].iter().all(|t| t.kind == TokenKind::Unknown));
    assert_eq!(tokens[1].text, "é");
}

#[test]
fn test_start_tag_with_attribute() {
    let tokens = tokenize(r#"<NEXTID N="55">"#);
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["<", "NEXTID", " ", "N", "=", "\"", "55", "\"", ">", ""]);
}

#[test]
fn test_tokens_cover_input() {
    let input = "<A HREF=\"Summary.html\">Summary</A> of the project, (2 pages)?";
    let joined: String = tokenize(input).iter().map(|t| t.text.as_str()).collect();
    assert_eq!(joined, input);
}

#[test]
fn test_tag_category_lookup() {
    let tokens = tokenize("DL dd blink 12");
    assert_eq!(tokens[0].tag_category(), Some(TagCategory::DefinitionList));
    assert_eq!(tokens[2].tag_category(), Some(TagCategory::DefinitionDescription));
    assert_eq!(tokens[4].tag_category(), Some(TagCategory::Custom));
    assert_eq!(tokens[6].tag_category(), None);
}
