//! Lexer
//!
//!     This module orchestrates the tokenization pipeline for the INI format.
//!
//!     The pipeline consists of:
//!         1. Core tokenization using the logos lexer. See
//!            [base_tokenization](base_tokenization). Every byte of the
//!            source lands in exactly one token, and a synthetic EndOfFile
//!            token is appended after all content tokens.
//!
//!         2. Line Grouping. See [line_grouping](line_grouping).
//!            Here we split tokens by line terminators into groups of tokens.
//!            Each group is a Line token and which category is determined by
//!            the tokens inside. See
//!            [line_classification](line_classification).
//!
//!     At this point lexing is complete. We have a sequence of classified
//!     line tokens carrying their raw tokens, spans, and physical line
//!     numbers, ready for the structural parser.
//!
//! Source Token Preservation
//!
//!     Logos tokens carry the byte range of their source text. This
//!     information is used for line/column diagnostics only, but it has to be
//!     perfectly preserved through grouping: at every step the spans keep
//!     pointing into the original source.

pub mod base_tokenization;
pub mod line_classification;
pub mod line_grouping;

pub use base_tokenization::tokenize;
pub use line_classification::classify_line_tokens;
pub use line_grouping::group_into_lines;
