//! Line Classification
//!
//! Core classification logic for determining line types based on token
//! patterns. The checks run in order of significance and the first match
//! wins: blank, then comment, then section header, then assignment. The
//! ordering matters: `;key=value` is a comment, not an assignment, and
//! `[key=value]` is a section header, not an assignment.

use crate::ini::token::{LineType, Token};

/// Determine the type of a line based on its tokens.
pub fn classify_line_tokens(tokens: &[Token]) -> LineType {
    if is_blank_line(tokens) {
        return LineType::BlankLine;
    }
    match first_content_token(tokens) {
        Some(Token::SemiColon) => return LineType::CommentLine,
        Some(Token::OpenSquareBracket) => return LineType::SectionHeaderLine,
        _ => {}
    }
    if has_assignment(tokens) {
        return LineType::KeyValueLine;
    }
    LineType::UnrecognizedLine
}

/// Check if line is blank (empty, or only whitespace and terminators)
fn is_blank_line(tokens: &[Token]) -> bool {
    tokens
        .iter()
        .all(|t| t.is_whitespace() || matches!(t, Token::EndOfFile))
}

/// First token that is not whitespace, a terminator, or end of file
fn first_content_token(tokens: &[Token]) -> Option<&Token> {
    tokens
        .iter()
        .find(|t| !t.is_whitespace() && !matches!(t, Token::EndOfFile))
}

/// Check if an `=` appears before any `;` on the line.
///
/// A `;` starts a comment that runs to end of line, so an `=` after it
/// belongs to discarded comment text and does not make an assignment.
fn has_assignment(tokens: &[Token]) -> bool {
    for token in tokens {
        match token {
            Token::Equals => return true,
            Token::SemiColon => return false,
            _ => {}
        }
    }
    false
}
