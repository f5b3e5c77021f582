//! Document loading utilities
//!
//! This module provides `DocumentLoader` - a utility for loading source text
//! from files or strings and parsing it into a [Document](crate::Document).
//! This is the crate's file-input surface: a file is read fully into memory
//! and then parsed exactly like an in-memory string.

use std::fs;
use std::path::Path;

use crate::ini::document::Document;
use crate::ini::parsing::ParseError;

/// Error that can occur when loading documents
#[derive(Debug, Clone, PartialEq)]
pub enum LoaderError {
    /// IO error when reading a file
    Io(String),
    /// Structural parse error
    Parse(ParseError),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::Io(msg) => write!(f, "IO error: {}", msg),
            LoaderError::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

impl From<ParseError> for LoaderError {
    fn from(err: ParseError) -> Self {
        LoaderError::Parse(err)
    }
}

/// Loader for ini source text
///
/// `DocumentLoader` provides a convenient API for loading source text from a
/// file or a string and parsing it into a `Document`.
#[derive(Debug)]
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path, reading the entire file into memory
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(DocumentLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Parse the source into a completed `Document`
    pub fn parse(&self) -> Result<Document, LoaderError> {
        let mut document = Document::new();
        document.parse(&self.source)?;
        Ok(document)
    }

    /// Get the raw source string
    pub fn source(&self) -> String {
        self.source.clone()
    }

    /// Get a reference to the raw source string
    ///
    /// Use this when you don't need an owned copy.
    pub fn source_ref(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let loader = DocumentLoader::from_string("[A]\nx=1\n");
        assert_eq!(loader.source_ref(), "[A]\nx=1\n");
    }

    #[test]
    fn test_parse_from_string() {
        let loader = DocumentLoader::from_string("[A]\nx=1\n");
        let document = loader.parse().unwrap();
        assert!(document.is_complete());
        assert_eq!(document.get_int64_or("A", "x", 0), 1);
    }

    #[test]
    fn test_parse_error_is_wrapped() {
        let loader = DocumentLoader::from_string("orphan=1\n");
        match loader.parse() {
            Err(LoaderError::Parse(_)) => {}
            other => panic!("Expected LoaderError::Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_from_path_nonexistent() {
        let result = DocumentLoader::from_path("nonexistent.ini");
        match result {
            Err(LoaderError::Io(_)) => {}
            other => panic!("Expected LoaderError::Io, got {:?}", other),
        }
    }

    #[test]
    fn test_from_path_round_trip_through_disk() {
        let path = std::env::temp_dir().join("ini-loader-test.ini");
        fs::write(&path, "[Server]\nport=8080\n").unwrap();

        let document = DocumentLoader::from_path(&path).unwrap().parse().unwrap();
        assert_eq!(document.get_int64_or("Server", "port", 0), 8080);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_loader_is_reusable() {
        let loader = DocumentLoader::from_string("[A]\nx=1\n");
        let first = loader.parse().unwrap();
        let second = loader.parse().unwrap();
        assert_eq!(
            first.get_int64_or("A", "x", 0),
            second.get_int64_or("A", "x", 0)
        );
    }
}
