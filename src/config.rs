//! Parser configuration and validation.
//!
//! Provides the immutable configuration consumed by the record reader:
//! skip count, row and field delimiters, and the escape character, with
//! validation of delimiter choices.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Configuration for a delimited-text reader.
///
/// All settings default to conventional CSV values and are fixed for the
/// lifetime of the reader constructed from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Number of leading raw lines to discard before parsing begins
    pub skip_lines: usize,

    /// Character separating records in the source
    pub row_delimiter: char,

    /// Character separating fields within one record
    pub field_delimiter: char,

    /// Character that opens and closes a quoted field; doubled inside a
    /// quoted field it stands for one literal occurrence of itself
    pub escape_char: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            skip_lines: 0,
            row_delimiter: '\n',
            field_delimiter: ',',
            escape_char: '"',
        }
    }
}

impl ParserConfig {
    /// Validate delimiter choices.
    ///
    /// Raw lines are read byte-wise up to the row delimiter, so all three
    /// control characters must be ASCII. They must also be pairwise distinct
    /// or the tokenizer cannot tell field boundaries from content.
    pub fn validate(&self) -> Result<()> {
        for (name, c) in [
            ("row_delimiter", self.row_delimiter),
            ("field_delimiter", self.field_delimiter),
            ("escape_char", self.escape_char),
        ] {
            if !c.is_ascii() {
                return Err(Error::configuration(format!(
                    "{} must be an ASCII character, got {:?}",
                    name, c
                )));
            }
        }

        if self.field_delimiter == self.row_delimiter {
            return Err(Error::configuration(
                "field_delimiter must differ from row_delimiter",
            ));
        }
        if self.escape_char == self.field_delimiter || self.escape_char == self.row_delimiter {
            return Err(Error::configuration(
                "escape_char must differ from both delimiters",
            ));
        }

        debug!(
            "parser configuration validated: skip_lines={}, row={:?}, field={:?}, escape={:?}",
            self.skip_lines, self.row_delimiter, self.field_delimiter, self.escape_char
        );
        Ok(())
    }
}
