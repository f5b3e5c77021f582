//! Structural parser engine
//!
//! The engine folds classified line tokens into sections. It keeps one piece
//! of state while folding: the name of the section currently open. Blank and
//! comment lines are skipped; a header line opens or re-opens a section; an
//! assignment line adds a pair to the open section.
//!
//! Trimming policy: section names, keys, and values are trimmed of leading
//! and trailing space characters only. The space byte is the only
//! whitespace the token table recognizes, so tabs inside captured text are
//! preserved.

use std::fmt;

use crate::ini::parsing::sections::Sections;
use crate::ini::token::{LineToken, LineType, Token, ToIniString};
use crate::ini::value::Value;

/// Errors that can occur during structural parsing
///
/// All coordinates are 1-based: `line` is the physical source line, `column`
/// the byte offset within that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `[` was opened but the line ended before the matching `]`
    UnterminatedSectionHeader { line: usize, column: usize },
    /// A header's name trims to the empty string
    EmptySectionName { line: usize, column: usize },
    /// An `=` with nothing but spaces before it
    MissingKey { line: usize, column: usize },
    /// A key/value pair before any `[section]` header
    KeyValueOutsideSection { line: usize, column: usize },
    /// A content line that is neither a header, an assignment, nor a comment
    UnexpectedContent { line: usize, column: usize },
    /// `parse` was called on a document that already completed parsing
    AlreadyParsed,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnterminatedSectionHeader { line, column } => {
                write!(f, "Unterminated section header at line {}, column {}", line, column)
            }
            ParseError::EmptySectionName { line, column } => {
                write!(f, "Empty section name at line {}, column {}", line, column)
            }
            ParseError::MissingKey { line, column } => {
                write!(f, "Assignment with no key at line {}, column {}", line, column)
            }
            ParseError::KeyValueOutsideSection { line, column } => {
                write!(
                    f,
                    "Key/value pair outside of any section at line {}, column {}",
                    line, column
                )
            }
            ParseError::UnexpectedContent { line, column } => {
                write!(f, "Unexpected content at line {}, column {}", line, column)
            }
            ParseError::AlreadyParsed => {
                write!(f, "Document was already parsed")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// The structural parser: folds classified lines into sections
pub struct TokenParser<'a> {
    sections: &'a mut Sections,
    current_section: Option<String>,
}

impl<'a> TokenParser<'a> {
    /// Create a parser writing into the given sections collection
    pub fn new(sections: &'a mut Sections) -> Self {
        TokenParser {
            sections,
            current_section: None,
        }
    }

    /// Fold the given lines into the sections collection.
    ///
    /// Fails on the first malformed line; the sections collection may then
    /// hold a partial fold and must be discarded by the caller.
    pub fn parse(&mut self, lines: &[LineToken]) -> Result<(), ParseError> {
        for line in lines {
            match line.line_type {
                LineType::BlankLine | LineType::CommentLine => {}
                LineType::SectionHeaderLine => self.parse_section_header(line)?,
                LineType::KeyValueLine => self.parse_key_value(line)?,
                LineType::UnrecognizedLine => {
                    let column = first_content_column(line);
                    return Err(ParseError::UnexpectedContent {
                        line: line.line,
                        column,
                    });
                }
            }
        }
        Ok(())
    }

    /// Parse `[Name]`, with optional surrounding spaces and trailing comment
    fn parse_section_header(&mut self, line: &LineToken) -> Result<(), ParseError> {
        let tokens = &line.source_tokens;
        let open_index = tokens
            .iter()
            .position(|t| matches!(t, Token::OpenSquareBracket))
            .ok_or(ParseError::UnterminatedSectionHeader {
                line: line.line,
                column: 1,
            })?;

        let mut name = String::new();
        let mut close_index = None;
        for (index, token) in tokens.iter().enumerate().skip(open_index + 1) {
            match token {
                Token::Characters(text) => name.push_str(text),
                Token::Space => name.push(' '),
                Token::CloseSquareBracket => {
                    close_index = Some(index);
                    break;
                }
                Token::CarriageReturn | Token::Newline | Token::EndOfFile => break,
                // '=' or ';' or a second '[' inside the bracket span
                _ => {
                    return Err(ParseError::UnexpectedContent {
                        line: line.line,
                        column: column_at(line, index),
                    });
                }
            }
        }

        let close_index = close_index.ok_or(ParseError::UnterminatedSectionHeader {
            line: line.line,
            column: column_at(line, open_index),
        })?;

        let name = name.trim_matches(' ');
        if name.is_empty() {
            return Err(ParseError::EmptySectionName {
                line: line.line,
                column: column_at(line, open_index),
            });
        }

        // Only spaces or a comment may follow the closing bracket
        for (index, token) in tokens.iter().enumerate().skip(close_index + 1) {
            match token {
                Token::Space | Token::CarriageReturn | Token::Newline | Token::EndOfFile => {}
                Token::SemiColon => break,
                _ => {
                    return Err(ParseError::UnexpectedContent {
                        line: line.line,
                        column: column_at(line, index),
                    });
                }
            }
        }

        self.sections.open(name);
        self.current_section = Some(name.to_string());
        Ok(())
    }

    /// Parse `key=value`, with optional trailing comment
    fn parse_key_value(&mut self, line: &LineToken) -> Result<(), ParseError> {
        let tokens = &line.source_tokens;
        let equals_index = tokens
            .iter()
            .position(|t| matches!(t, Token::Equals))
            .ok_or(ParseError::MissingKey {
                line: line.line,
                column: 1,
            })?;

        let mut key = String::new();
        for token in &tokens[..equals_index] {
            key.push_str(&token.to_ini_string());
        }
        let key = key.trim_matches(' ');
        if key.is_empty() {
            return Err(ParseError::MissingKey {
                line: line.line,
                column: column_at(line, equals_index),
            });
        }

        let section_name = match &self.current_section {
            Some(name) => name.clone(),
            None => {
                return Err(ParseError::KeyValueOutsideSection {
                    line: line.line,
                    column: first_content_column(line),
                });
            }
        };

        // The raw value runs from just after '=' to the comment or terminator
        let mut raw = String::new();
        for token in &tokens[equals_index + 1..] {
            match token {
                Token::SemiColon | Token::CarriageReturn | Token::Newline | Token::EndOfFile => {
                    break;
                }
                _ => raw.push_str(&token.to_ini_string()),
            }
        }
        let raw = raw.trim_matches(' ');

        self.sections.open(section_name).set(key, Value::new(raw));
        Ok(())
    }
}

/// 1-based byte column of the token at `index` within its line
fn column_at(line: &LineToken, index: usize) -> usize {
    let line_start = line.token_spans.first().map(|span| span.start).unwrap_or(0);
    line.token_spans
        .get(index)
        .map(|span| span.start - line_start + 1)
        .unwrap_or(1)
}

/// Column of the first token that is not whitespace
fn first_content_column(line: &LineToken) -> usize {
    let index = line
        .source_tokens
        .iter()
        .position(|t| !t.is_whitespace() && !matches!(t, Token::EndOfFile))
        .unwrap_or(0);
    column_at(line, index)
}
