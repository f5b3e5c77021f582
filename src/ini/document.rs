//! Document facade
//!
//!     The document owns the parsed sections and the completion flag, and
//!     exposes the whole query surface. Accessors come in two explicit forms
//!     per type instead of a can-throw flag:
//!
//!         - a defaulting form (`get_*_or`) that is total: on any miss
//!           (parsing incomplete, section or key absent, or the value not
//!           interpretable as the requested type) it returns the supplied
//!           default and never fails;
//!
//!         - a fallible form (`get_*`) that reports exactly which miss
//!           happened: NotYetParsed, ValueNotFound, or TypeMismatch.
//!
//!     Absence of a section or key is never an error for `get_value`; only
//!     querying before `parse` completed distinguishes the two forms there.
//!
//!     `parse` is one-shot: it either completes fully or leaves the document
//!     empty and incomplete. No partial parse is ever observable, and a
//!     completed document never mutates again, so shared references returned
//!     by `get_value` stay valid for the document's lifetime.

use std::fmt;

use crate::ini::lexing::{group_into_lines, tokenize};
use crate::ini::parsing::{ParseError, Section, Sections, TokenParser};
use crate::ini::value::Value;

/// The type requested from a typed accessor, used in mismatch reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ValueType {
    String,
    Int64,
    Float,
    Bool,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::String => "String",
            ValueType::Int64 => "Int64",
            ValueType::Float => "Float",
            ValueType::Bool => "Bool",
        };
        write!(f, "{}", name)
    }
}

/// Errors that can occur when querying a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetError {
    /// An accessor was called before parsing completed
    NotYetParsed,
    /// The section or the key does not exist
    ValueNotFound { section: String, key: String },
    /// The value exists but cannot be interpreted as the requested type
    TypeMismatch {
        section: String,
        key: String,
        expected: ValueType,
    },
}

impl fmt::Display for GetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetError::NotYetParsed => {
                write!(f, "Accessor called before parsing completed")
            }
            GetError::ValueNotFound { section, key } => {
                write!(f, "No value for key '{}' in section '{}'", key, section)
            }
            GetError::TypeMismatch {
                section,
                key,
                expected,
            } => {
                write!(
                    f,
                    "Value for key '{}' in section '{}' cannot be interpreted as '{}'",
                    key, section, expected
                )
            }
        }
    }
}

impl std::error::Error for GetError {}

/// A parsed INI document
///
/// Lifecycle: constructed empty, `parse` invoked exactly once, then queried
/// through the accessor surface. The completion flag is monotonic: it flips
/// to true on a successful parse and never reverts.
#[derive(Debug, Default)]
pub struct Document {
    sections: Sections,
    complete: bool,
}

impl Document {
    /// Create an empty, unparsed document
    pub fn new() -> Self {
        Document::default()
    }

    /// Parse the given source text into this document.
    ///
    /// On failure the document stays empty and incomplete. Calling `parse`
    /// on an already-complete document fails with
    /// [ParseError::AlreadyParsed].
    pub fn parse(&mut self, source: &str) -> Result<(), ParseError> {
        if self.complete {
            return Err(ParseError::AlreadyParsed);
        }

        let lines = group_into_lines(tokenize(source));
        let mut sections = Sections::new();
        TokenParser::new(&mut sections).parse(&lines)?;

        self.sections = sections;
        self.complete = true;
        Ok(())
    }

    /// Whether parsing has completed successfully
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The parsed sections, in declaration order
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// Look up a value; total form.
    ///
    /// Returns `None` when parsing is incomplete or when the section or key
    /// is absent.
    pub fn get_value(&self, section: &str, key: &str) -> Option<&Value> {
        if !self.complete {
            return None;
        }
        self.sections.get(section)?.get(key)
    }

    /// Look up a value; fallible form.
    ///
    /// Distinguishes querying too early (`NotYetParsed`) from genuine
    /// absence (`ValueNotFound`).
    pub fn try_get_value(&self, section: &str, key: &str) -> Result<&Value, GetError> {
        if !self.complete {
            return Err(GetError::NotYetParsed);
        }
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .ok_or_else(|| GetError::ValueNotFound {
                section: section.to_string(),
                key: key.to_string(),
            })
    }

    /// Get a string value, or the default on any miss
    pub fn get_string_or<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        match self.get_value(section, key) {
            Some(value) => value.as_string(),
            None => default,
        }
    }

    /// Get a string value, failing on absence
    ///
    /// Any captured text is a valid string, so this form never reports a
    /// type mismatch.
    pub fn get_string(&self, section: &str, key: &str) -> Result<&str, GetError> {
        Ok(self.try_get_value(section, key)?.as_string())
    }

    /// Get an i64 value, or the default on any miss or mismatch
    pub fn get_int64_or(&self, section: &str, key: &str, default: i64) -> i64 {
        self.get_value(section, key)
            .and_then(Value::as_int64)
            .unwrap_or(default)
    }

    /// Get an i64 value, failing on absence or mismatch
    pub fn get_int64(&self, section: &str, key: &str) -> Result<i64, GetError> {
        let value = self.try_get_value(section, key)?;
        value
            .as_int64()
            .ok_or_else(|| self.type_mismatch(section, key, ValueType::Int64))
    }

    /// Get an f64 value, or the default on any miss or mismatch
    pub fn get_float_or(&self, section: &str, key: &str, default: f64) -> f64 {
        self.get_value(section, key)
            .and_then(Value::as_float)
            .unwrap_or(default)
    }

    /// Get an f64 value, failing on absence or mismatch
    pub fn get_float(&self, section: &str, key: &str) -> Result<f64, GetError> {
        let value = self.try_get_value(section, key)?;
        value
            .as_float()
            .ok_or_else(|| self.type_mismatch(section, key, ValueType::Float))
    }

    /// Get a bool value, or the default on any miss or mismatch
    pub fn get_bool_or(&self, section: &str, key: &str, default: bool) -> bool {
        self.get_value(section, key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    /// Get a bool value, failing on absence or mismatch
    pub fn get_bool(&self, section: &str, key: &str) -> Result<bool, GetError> {
        let value = self.try_get_value(section, key)?;
        value
            .as_bool()
            .ok_or_else(|| self.type_mismatch(section, key, ValueType::Bool))
    }

    /// List a section's key/value pairs in insertion order.
    ///
    /// An absent section (or an unparsed document) yields a valid empty
    /// handle.
    pub fn get_list(&self, section: &str) -> List<'_> {
        if !self.complete {
            return List { section: None };
        }
        List {
            section: self.sections.get(section),
        }
    }

    /// Alias of [get_list](Self::get_list); no additional ordering is
    /// applied. Kept for parity with the original accessor surface.
    pub fn get_ordered_list(&self, section: &str) -> List<'_> {
        self.get_list(section)
    }

    fn type_mismatch(&self, section: &str, key: &str, expected: ValueType) -> GetError {
        GetError::TypeMismatch {
            section: section.to_string(),
            key: key.to_string(),
            expected,
        }
    }
}

/// A handle over one section's key/value pairs in insertion order.
///
/// A list over an absent section holds no backing section and iterates as
/// empty.
#[derive(Debug, Clone, Copy)]
pub struct List<'a> {
    section: Option<&'a Section>,
}

impl<'a> List<'a> {
    /// Iterate the pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> {
        self.section.into_iter().flat_map(Section::iter)
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.section.map_or(0, Section::len)
    }

    /// Check if the list has no pairs
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
