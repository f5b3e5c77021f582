//! Token definitions for the INI format
//!
//! This module defines all the tokens that can be produced by the ini lexer.
//! The tokens are defined using the logos derive macro for efficient
//! tokenization. The declaration order mirrors the precedence of the token
//! table: every structural token is a fixed single-byte literal, and
//! `Characters` is the catch-all that greedily consumes the maximal run of
//! bytes no fixed literal matches. The two sets are byte-disjoint, so every
//! byte of any input lands in exactly one token and tokenization cannot fail.
//!
//! `EndOfFile` is synthetic: it is never produced by logos and is appended
//! once by the tokenization entry point, after all content tokens.

use logos::Logos;

/// All possible tokens in the INI format
#[derive(Logos, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Token {
    // Line terminators
    #[token("\r")]
    CarriageReturn,
    #[token("\n")]
    Newline,

    // Whitespace (the space byte only; tabs are ordinary characters)
    #[token(" ")]
    Space,

    // Text content (catch-all for everything no structural token matches)
    #[regex(r"[^\r\n =\[\];]+", |lex| lex.slice().to_string())]
    Characters(String),

    // Structural markers
    #[token("=")]
    Equals,
    #[token("]")]
    CloseSquareBracket,
    #[token("[")]
    OpenSquareBracket,
    #[token(";")]
    SemiColon,

    /// Synthetic end-of-file marker appended by the tokenizer entry point
    EndOfFile,
}

impl Token {
    /// Check if this token is whitespace (spaces and line terminators)
    pub fn is_whitespace(&self) -> bool {
        matches!(
            self,
            Token::Space | Token::CarriageReturn | Token::Newline
        )
    }

    /// Check if this token terminates a line
    pub fn is_line_terminator(&self) -> bool {
        matches!(self, Token::CarriageReturn | Token::Newline)
    }

    /// Check if this token is captured text content
    pub fn is_characters(&self) -> bool {
        matches!(self, Token::Characters(_))
    }

    /// Get the captured text if this token carries data
    pub fn as_characters(&self) -> Option<&str> {
        match self {
            Token::Characters(text) => Some(text),
            _ => None,
        }
    }

    /// Format token as grammar notation: `<token-name>` (data tokens include
    /// their capture, e.g. `<characters:port>`)
    ///
    /// Used by snapshot tests to render token streams deterministically.
    pub fn to_grammar_string(&self) -> String {
        match self {
            Token::CarriageReturn => "<carriage-return>".to_string(),
            Token::Newline => "<newline>".to_string(),
            Token::Space => "<space>".to_string(),
            Token::Characters(text) => format!("<characters:{}>", text),
            Token::Equals => "<equals>".to_string(),
            Token::CloseSquareBracket => "<close-square-bracket>".to_string(),
            Token::OpenSquareBracket => "<open-square-bracket>".to_string(),
            Token::SemiColon => "<semi-colon>".to_string(),
            Token::EndOfFile => "<end-of-file>".to_string(),
        }
    }
}
