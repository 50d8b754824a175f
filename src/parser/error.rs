//! Positioned parse errors.
//!
//! Every rejection of a record carries the 1-based line on which it occurred
//! and the 1-based index of the offending field, so the failure can be
//! located in the source text unambiguously.

use thiserror::Error;

/// The distinct ways a record can fail to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Raw field count differs from the schema arity
    #[error("incorrect number of fields: expected {expected}, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A quoted field was never closed before the end of the line
    #[error("unclosed escape character")]
    UnclosedEscape,

    /// Non-whitespace content between a closing quote and the next delimiter
    #[error("unexpected character '{found}' after closing escape character")]
    TrailingAfterEscape { found: char },

    /// A field's content did not fully parse as its declared type
    #[error("failed to parse field '{raw}'")]
    Conversion { raw: String },
}

/// A parse failure with line and column coordinates.
///
/// `line` is 1-based and counts data lines only, starting after any
/// configured skip. `column` is the 1-based index of the field being
/// processed when the failure occurred, or 0 when the error is not
/// attributable to a single field (field-count mismatches).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}, column {column}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }
}
