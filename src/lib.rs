//! Typed delimited-text record reader
//!
//! A library for parsing delimited text (CSV and its relatives) into records
//! of typed values against a fixed, positionally ordered schema.
//!
//! This library provides tools for:
//! - Quote/escape-aware tokenization of raw lines into field substrings
//! - Strict, type-directed conversion of fields (text, integer, float)
//! - Lazy, single-pass record production over any buffered source
//! - Parse errors carrying 1-based line and column coordinates
//!
//! ## Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use typedcsv::config::ParserConfig;
//! use typedcsv::parser::{FieldType, RecordReader, Schema};
//!
//! # fn example() -> typedcsv::Result<()> {
//! let schema = Schema::new(vec![FieldType::Text, FieldType::Integer]);
//! let source = Cursor::new("a,1\nb,2\n");
//! let reader = RecordReader::new(source, schema, ParserConfig::default())?;
//!
//! for record in reader {
//!     println!("{}", record?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod parser;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::ParserConfig;
pub use parser::{FieldType, ParseError, ParseErrorKind, Record, RecordReader, Schema, Value};

/// Result type alias for the reader
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for delimited-text processing
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A record failed to tokenize, assemble, or convert
    #[error("parse error: {0}")]
    Parse(#[from] parser::ParseError),

    /// A raw line was not valid UTF-8
    #[error("invalid UTF-8 in line {line}")]
    Encoding { line: usize },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an encoding error for a 1-based line number
    pub fn encoding(line: usize) -> Self {
        Self::Encoding { line }
    }
}

// Automatic conversion from bare I/O errors
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
