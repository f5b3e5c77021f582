//! Value coercion
//!
//!     A value stores the raw text captured between `=` and the end of its
//!     line, and interprets it lazily. The four validity predicates are pure
//!     and side-effect free, so callers can probe a value without triggering
//!     a conversion failure; all error signaling lives in the document
//!     accessors.
//!
//!     Interpretation rules:
//!
//!         - string: always valid, the raw text itself
//!         - int64:  optional sign, non-empty ASCII digit run, within i64
//!         - float:  optional sign, digits with an optional single `.`,
//!           optional exponent ("inf"/"nan" spellings are not accepted)
//!         - bool:   case-insensitive `true` or `false`

use once_cell::sync::Lazy;
use regex::Regex;

/// Base-10 floating literal: optional sign, digits with an optional single
/// dot, optional exponent. Anchored so partial matches don't count.
static FLOAT_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("float literal regex is valid")
});

/// A raw captured value with lazy typed interpretation.
///
/// Values are owned copies of the captured source text; the parsed document
/// does not borrow the input buffer. A value never mutates after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Value {
    raw: String,
}

impl Value {
    /// Create a value from its raw captured text
    pub fn new<S: Into<String>>(raw: S) -> Self {
        Value { raw: raw.into() }
    }

    /// The raw captured text
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Always true: any captured text is a valid string
    pub fn is_valid_string(&self) -> bool {
        true
    }

    /// True iff the raw text is an optionally signed ASCII digit run that
    /// fits in an i64
    pub fn is_valid_int64(&self) -> bool {
        self.raw.parse::<i64>().is_ok()
    }

    /// True iff the raw text is a base-10 floating literal
    pub fn is_valid_float(&self) -> bool {
        FLOAT_LITERAL.is_match(&self.raw)
    }

    /// True iff the raw text is `true` or `false`, case-insensitively
    pub fn is_valid_bool(&self) -> bool {
        self.raw.eq_ignore_ascii_case("true") || self.raw.eq_ignore_ascii_case("false")
    }

    /// The raw text, unmodified
    pub fn as_string(&self) -> &str {
        &self.raw
    }

    /// The value as an i64, if [is_valid_int64](Self::is_valid_int64) holds
    pub fn as_int64(&self) -> Option<i64> {
        self.raw.parse::<i64>().ok()
    }

    /// The value as an f64, if [is_valid_float](Self::is_valid_float) holds
    pub fn as_float(&self) -> Option<f64> {
        if self.is_valid_float() {
            self.raw.parse::<f64>().ok()
        } else {
            None
        }
    }

    /// The value as a bool, if [is_valid_bool](Self::is_valid_bool) holds
    pub fn as_bool(&self) -> Option<bool> {
        if self.raw.eq_ignore_ascii_case("true") {
            Some(true)
        } else if self.raw.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}
