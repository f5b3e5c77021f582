//! Line Grouping
//!
//! Groups flat tokens into classified LineTokens.
//! This module contains the core grouping logic that calls the classifier
//! and creates LineToken structures.
//!
//! A line ends at a Newline token, or at a CarriageReturn that is not
//! immediately followed by a Newline (so a CRLF pair terminates the line
//! once, at the Newline, and counts as one physical line). The synthetic
//! EndOfFile token flushes the final line without joining it.

use crate::ini::lexing::line_classification::classify_line_tokens;
use crate::ini::token::{LineToken, Token};
use std::ops::Range as ByteRange;

/// Group flat tokens into classified LineTokens.
///
/// - Groups consecutive tokens into lines (terminated by Newline or a lone
///   CarriageReturn)
/// - Classifies each line by type
/// - Tags each line with its 1-based physical line number
pub fn group_into_lines(tokens: Vec<(Token, ByteRange<usize>)>) -> Vec<LineToken> {
    let mut line_tokens = Vec::new();
    let mut current_line: Vec<(Token, ByteRange<usize>)> = Vec::new();
    let mut line = 1;

    let mut iter = tokens.into_iter().peekable();
    while let Some((token, span)) = iter.next() {
        match token {
            Token::EndOfFile => {
                if !current_line.is_empty() {
                    line_tokens.push(classify_and_create_line_token(current_line, line));
                    current_line = Vec::new();
                }
            }
            Token::Newline => {
                current_line.push((token, span));
                line_tokens.push(classify_and_create_line_token(current_line, line));
                current_line = Vec::new();
                line += 1;
            }
            Token::CarriageReturn => {
                let terminates = !matches!(iter.peek(), Some((Token::Newline, _)));
                current_line.push((token, span));
                if terminates {
                    line_tokens.push(classify_and_create_line_token(current_line, line));
                    current_line = Vec::new();
                    line += 1;
                }
            }
            _ => current_line.push((token, span)),
        }
    }

    line_tokens
}

/// Classify tokens and create a LineToken with the appropriate LineType.
fn classify_and_create_line_token(
    token_tuples: Vec<(Token, ByteRange<usize>)>,
    line: usize,
) -> LineToken {
    let (source_tokens, token_spans): (Vec<_>, Vec<_>) = token_tuples.into_iter().unzip();
    let line_type = classify_line_tokens(&source_tokens);
    LineToken {
        source_tokens,
        token_spans,
        line_type,
        line,
    }
}
