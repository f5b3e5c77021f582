//! Snapshot tests for the tokenizer over sample documents
//!
//! Token streams are rendered with the grammar-string notation
//! (`<token-name>`, data tokens as `<characters:text>`) so snapshots stay
//! deterministic and readable.

use ini::ini::lexing::{group_into_lines, tokenize};
use ini::Token;

/// Render a source's token stream as grammar notation
fn render_tokens(source: &str) -> String {
    tokenize(source)
        .into_iter()
        .map(|(token, _)| token.to_grammar_string())
        .collect()
}

/// Render a source's classified lines as grammar notation
fn render_lines(source: &str) -> String {
    group_into_lines(tokenize(source))
        .into_iter()
        .map(|line| line.line_type.to_grammar_string())
        .collect()
}

#[test]
fn test_assignment_tokenization() {
    insta::assert_snapshot!(
        render_tokens("x=1\n"),
        @"<characters:x><equals><characters:1><newline><end-of-file>"
    );
}

#[test]
fn test_section_header_tokenization() {
    insta::assert_snapshot!(
        render_tokens("[Section]\n"),
        @"<open-square-bracket><characters:Section><close-square-bracket><newline><end-of-file>"
    );
}

#[test]
fn test_spaced_assignment_with_comment_tokenization() {
    insta::assert_snapshot!(
        render_tokens("key = value ; note\n"),
        @"<characters:key><space><equals><space><characters:value><space><semi-colon><space><characters:note><newline><end-of-file>"
    );
}

#[test]
fn test_crlf_tokenization() {
    insta::assert_snapshot!(
        render_tokens("a=1\r\n"),
        @"<characters:a><equals><characters:1><carriage-return><newline><end-of-file>"
    );
}

#[test]
fn test_empty_input_tokenization() {
    insta::assert_snapshot!(render_tokens(""), @"<end-of-file>");
}

#[test]
fn test_small_document_line_classification() {
    insta::assert_snapshot!(
        render_lines("[A]\nx=1\n\n; comment\ny = 2\n"),
        @"<section-header-line><key-value-line><blank-line><comment-line><key-value-line>"
    );
}

#[test]
fn test_unrecognized_line_classification() {
    insta::assert_snapshot!(
        render_lines("[A]\nstray words\n"),
        @"<section-header-line><unrecognized-line>"
    );
}

#[test]
fn test_characters_capture_exact_text() {
    let tokens: Vec<Token> = tokenize("Port=8080")
        .into_iter()
        .map(|(token, _)| token)
        .collect();

    assert_eq!(
        tokens,
        vec![
            Token::Characters("Port".to_string()),
            Token::Equals,
            Token::Characters("8080".to_string()),
            Token::EndOfFile,
        ]
    );
}
