//! Base tokenization implementation for the ini lexer
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become token streams.
//!
//! The token table is total: the fixed single-byte tokens and the catch-all
//! `Characters` pattern are byte-disjoint and together cover every possible
//! input, so tokenization cannot fail. After the input is consumed, one
//! synthetic `EndOfFile` token with a zero-width span at the end of input is
//! appended. Every token stream therefore ends with exactly one EndOfFile.

use crate::ini::token::Token;
use logos::Logos;

/// Tokenize source code with location information
///
/// This function performs raw tokenization using the logos lexer, returning
/// tokens paired with their source byte ranges, terminated by a single
/// `EndOfFile` token spanning `len..len`.
///
/// The line grouping stage should operate on the token stream produced by
/// this function; callers that only need raw tokens (e.g. round-trip tests)
/// can use it directly.
pub fn tokenize(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens.push((Token::EndOfFile, source.len()..source.len()));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes_assignment() {
        let tokens = tokenize("key=value");
        assert_eq!(tokens.len(), 4);

        assert_eq!(tokens[0].0, Token::Characters("key".to_string()));
        assert_eq!(tokens[1].0, Token::Equals);
        assert_eq!(tokens[2].0, Token::Characters("value".to_string()));
        assert_eq!(tokens[3].0, Token::EndOfFile);
    }

    #[test]
    fn test_empty_input_yields_only_eof() {
        let tokens = tokenize("");
        assert_eq!(tokens, vec![(Token::EndOfFile, 0..0)]);
    }

    #[test]
    fn test_eof_is_always_last_and_unique() {
        let tokens = tokenize("[A]\nx=1\n");
        let eof_count = tokens
            .iter()
            .filter(|(t, _)| matches!(t, Token::EndOfFile))
            .count();
        assert_eq!(eof_count, 1);
        assert_eq!(tokens.last().map(|(t, _)| t.clone()), Some(Token::EndOfFile));
    }

    #[test]
    fn test_complex_tokenization() {
        let tokens = tokenize("[Section]\nkey = 42 ; answer\n");

        assert_eq!(tokens[0].0, Token::OpenSquareBracket);
        assert_eq!(tokens[1].0, Token::Characters("Section".to_string()));
        assert_eq!(tokens[2].0, Token::CloseSquareBracket);
        assert_eq!(tokens[3].0, Token::Newline);
        assert_eq!(tokens[4].0, Token::Characters("key".to_string()));
        assert_eq!(tokens[5].0, Token::Space);
        assert_eq!(tokens[6].0, Token::Equals);
        assert_eq!(tokens[7].0, Token::Space);
        assert_eq!(tokens[8].0, Token::Characters("42".to_string()));
        assert_eq!(tokens[9].0, Token::Space);
        assert_eq!(tokens[10].0, Token::SemiColon);
        assert_eq!(tokens[11].0, Token::Space);
        assert_eq!(tokens[12].0, Token::Characters("answer".to_string()));
        assert_eq!(tokens[13].0, Token::Newline);
        assert_eq!(tokens[14].0, Token::EndOfFile);
    }

    #[test]
    fn test_crlf_produces_both_terminators() {
        let tokens = tokenize("a=1\r\n");
        assert_eq!(tokens[3].0, Token::CarriageReturn);
        assert_eq!(tokens[4].0, Token::Newline);
    }

    #[test]
    fn test_spans_tile_the_source() {
        let source = "[A]\nkey = value ; note\n";
        let tokens = tokenize(source);

        let mut expected_start = 0;
        for (token, span) in &tokens {
            if matches!(token, Token::EndOfFile) {
                assert_eq!(*span, source.len()..source.len());
                continue;
            }
            assert_eq!(span.start, expected_start);
            assert!(span.end > span.start);
            expected_start = span.end;
        }
        assert_eq!(expected_start, source.len());
    }

    #[test]
    fn test_whitespace_only() {
        let tokens = tokenize("   ");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].0, Token::Space);
        assert_eq!(tokens[1].0, Token::Space);
        assert_eq!(tokens[2].0, Token::Space);
        assert_eq!(tokens[3].0, Token::EndOfFile);
    }
}
