//! Typed record parsing for delimited text
//!
//! This module turns raw delimited lines into fixed-arity records of typed
//! values, with every failure reported against a 1-based line and column.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`tokenizer`] - Quote/escape-aware splitting of raw lines into fields
//! - [`convert`] - Strict, type-directed field conversion
//! - [`record`] - Record assembly and arity validation
//! - [`reader`] - Lazy, single-pass record production with line tracking
//! - [`schema`] - Field-type lists and the typed values they produce
//! - [`error`] - Positioned parse errors
//!
//! ## Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use typedcsv::config::ParserConfig;
//! use typedcsv::parser::{FieldType, RecordReader, Schema, Value};
//!
//! # fn example() -> typedcsv::Result<()> {
//! let schema = Schema::new(vec![FieldType::Text, FieldType::Float]);
//! let mut reader = RecordReader::new(
//!     Cursor::new("temp,21.5\n"),
//!     schema,
//!     ParserConfig::default(),
//! )?;
//!
//! let record = reader.next().expect("one record")?;
//! assert_eq!(record.get(1), Some(&Value::Float(21.5)));
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod error;
pub mod record;
pub mod reader;
pub mod schema;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use error::{ParseError, ParseErrorKind};
pub use record::{Record, assemble};
pub use reader::RecordReader;
pub use schema::{FieldType, Schema, Value};
pub use tokenizer::tokenize;
