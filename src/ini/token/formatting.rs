//! Detokenizer for the INI format
//!
//! This module provides functionality to convert a stream of tokens back into
//! a string.
//!
//! The detokenizer works at the token level, converting token streams back to
//! source text. This is useful for:
//!
//! - Round-trip testing (source -> tokens -> source)
//! - Debugging and visualization of token streams
//!
//! Every byte of the source belongs to exactly one token, so concatenating
//! the literal of each token in stream order reconstructs the source exactly.
//! The synthetic `EndOfFile` token renders as the empty string.

use super::core::Token;

/// Trait for converting a token to its string representation
pub trait ToIniString {
    fn to_ini_string(&self) -> String;
}

impl ToIniString for Token {
    fn to_ini_string(&self) -> String {
        match self {
            Token::CarriageReturn => "\r".to_string(),
            Token::Newline => "\n".to_string(),
            Token::Space => " ".to_string(),
            Token::Characters(text) => text.clone(),
            Token::Equals => "=".to_string(),
            Token::CloseSquareBracket => "]".to_string(),
            Token::OpenSquareBracket => "[".to_string(),
            Token::SemiColon => ";".to_string(),
            // Synthetic token, not part of the detokenized output
            Token::EndOfFile => String::new(),
        }
    }
}

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    let mut result = String::new();
    for token in tokens {
        result.push_str(&token.to_ini_string());
    }
    result
}
