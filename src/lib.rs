//! # ini
//!
//! A parser for the INI configuration format.
//!
//! The crate is organized as a single format module. Lexing turns source text
//! into a flat token stream, line grouping folds that stream into classified
//! line tokens, and parsing folds the lines into ordered sections of
//! key/value pairs. Values are interpreted lazily at query time.
//!
//! For testing guidelines see the inline test modules and the integration
//! suites under `tests/`.

pub mod ini;

pub use ini::document::{Document, GetError, List, ValueType};
pub use ini::loader::{DocumentLoader, LoaderError};
pub use ini::parsing::{ParseError, Section, Sections};
pub use ini::token::Token;
pub use ini::value::Value;
