//! Line-based token types for the lexer pipeline
//!
//!     This module contains token types specific to the line-based pipeline.
//!     Being line based, all the grammar needs in order to parse an ini
//!     document is the category of each physical line: a line is blank, a
//!     comment, a section header, or an assignment. Anything else is
//!     unrecognized and becomes a parse error downstream.
//!
//!     Since categorization happens in the lexing stage, each line must be
//!     tokenized into exactly one category, and the order of categorization
//!     is crucial to getting the right result (a `;` line must win over the
//!     assignment check, a `[` line must win over both).
//!
//! Line Types
//!
//!     These are the line tokens:
//!
//!         - BlankLine: empty or whitespace only
//!         - CommentLine: first content token is `;`
//!         - SectionHeaderLine: first content token is `[`
//!         - KeyValueLine: an `=` appears before any `;`
//!         - UnrecognizedLine: any other content line
//!
//!     See [classify_line_tokens](crate::ini::lexing::line_classification::classify_line_tokens)
//!     for the classification logic and ordering.

use std::fmt;

use super::core::Token;

/// A line token represents one physical line created from grouped raw tokens.
///
/// Line tokens are produced by the line grouping transformation, which groups
/// raw tokens into line units. Each line token stores:
/// - The original raw tokens that created it (for value extraction)
/// - The byte range in source for each token (for diagnostics)
/// - The type of this line
/// - The 1-based physical line number
///
/// By preserving raw tokens and their individual spans, the parser can
/// extract keys, values, and section names byte-accurately and report
/// line/column coordinates without re-scanning the source.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineToken {
    /// The original raw tokens that comprise this line
    pub source_tokens: Vec<Token>,

    /// The byte range in source code for each token
    /// Must be the same length as source_tokens
    pub token_spans: Vec<std::ops::Range<usize>>,

    /// The type/classification of this line
    pub line_type: LineType,

    /// The 1-based physical line number of this line in the source
    pub line: usize,
}

impl LineToken {
    /// Get source tokens as (Token, Range<usize>) pairs.
    pub fn source_token_pairs(&self) -> Vec<(Token, std::ops::Range<usize>)> {
        self.source_tokens
            .iter()
            .zip(self.token_spans.iter())
            .map(|(token, span)| (token.clone(), span.clone()))
            .collect()
    }
}

/// The classification of a line token
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineType {
    /// Blank line (empty or whitespace only)
    BlankLine,

    /// Comment line: `;` to end of line with nothing before it
    CommentLine,

    /// Section header line: `[Name]` with optional trailing comment
    SectionHeaderLine,

    /// Assignment line: `key=value` with optional trailing comment
    KeyValueLine,

    /// Any other content line (cannot be parsed; reported as an error)
    UnrecognizedLine,
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineType::BlankLine => "BLANK_LINE",
            LineType::CommentLine => "COMMENT_LINE",
            LineType::SectionHeaderLine => "SECTION_HEADER_LINE",
            LineType::KeyValueLine => "KEY_VALUE_LINE",
            LineType::UnrecognizedLine => "UNRECOGNIZED_LINE",
        };
        write!(f, "{}", name)
    }
}

impl LineType {
    /// Format line type as grammar notation: `<line-name>`
    ///
    /// Examples:
    /// - BlankLine -> `<blank-line>`
    /// - SectionHeaderLine -> `<section-header-line>`
    pub fn to_grammar_string(&self) -> String {
        let name = match self {
            LineType::BlankLine => "blank-line",
            LineType::CommentLine => "comment-line",
            LineType::SectionHeaderLine => "section-header-line",
            LineType::KeyValueLine => "key-value-line",
            LineType::UnrecognizedLine => "unrecognized-line",
        };
        format!("<{}>", name)
    }
}
