//! Structural parsing
//!
//!     The structural parser consumes classified line tokens and folds them
//!     into an ordered collection of sections. Parsing is line oriented:
//!     blank and comment lines are skipped, a section header line opens (or
//!     re-opens) a section, and an assignment line adds a key/value pair to
//!     the section currently open.
//!
//!     Malformed lines fail the whole parse with a [ParseError](ParseError)
//!     carrying 1-based line/column coordinates. There is no recovery and no
//!     partial result; the caller only observes sections from a parse that
//!     completed.

pub mod engine;
pub mod sections;

pub use engine::{ParseError, TokenParser};
pub use sections::{Section, Sections};
