//! Command-line argument definitions for the typedcsv reader
//!
//! This module defines the CLI interface using the clap derive API. The
//! delimiter options mirror the library defaults and are applied when the
//! parser configuration is built.

use clap::Parser;
use std::path::PathBuf;

use crate::config::ParserConfig;

/// CLI arguments for the typed delimited-text reader
///
/// Parses a delimited text file against a fixed field-type list and prints
/// each record as a tuple, or reports the first malformed record with its
/// line and column.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "typedcsv",
    version,
    about = "Parse delimited text into typed records with positioned error reporting",
    long_about = "Reads a delimited text file (CSV by default) against an ordered list of field \
                  types and prints one typed record per line. Malformed records are reported \
                  with 1-based line and column coordinates so they can be located in the source \
                  unambiguously."
)]
pub struct Args {
    /// Input file to parse
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Comma-separated field types, one per column
    ///
    /// Accepted names: text/string, int/integer, float/real. The list fixes
    /// the exact number of fields every record must have.
    #[arg(
        short = 't',
        long = "types",
        value_name = "LIST",
        help = "Field types per column, e.g. \"text,int,float\""
    )]
    pub types: String,

    /// Number of leading lines to discard before parsing begins
    #[arg(
        short = 's',
        long = "skip",
        value_name = "N",
        default_value_t = 0,
        help = "Number of leading lines to skip"
    )]
    pub skip_lines: usize,

    /// Record delimiter character
    ///
    /// If not specified, defaults to newline.
    #[arg(long = "row-delimiter", value_name = "CHAR")]
    pub row_delimiter: Option<char>,

    /// Field delimiter character
    ///
    /// If not specified, defaults to comma.
    #[arg(short = 'd', long = "field-delimiter", value_name = "CHAR")]
    pub field_delimiter: Option<char>,

    /// Quote/escape character
    ///
    /// Opens and closes a quoted field; doubled inside a quoted field it
    /// stands for itself. If not specified, defaults to a double quote.
    #[arg(short = 'e', long = "escape", value_name = "CHAR")]
    pub escape_char: Option<char>,

    /// Keep parsing after a malformed record instead of stopping at the
    /// first error
    ///
    /// Rejected records are reported on stderr and the run still exits
    /// with status 0; only I/O and configuration failures are fatal.
    #[arg(
        long = "lenient",
        help = "Report bad records and continue (still exits 0)"
    )]
    pub lenient: bool,

    /// Logging verbosity (error, warn, info, debug, trace)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Logging verbosity"
    )]
    pub log_level: String,
}

impl Args {
    /// Build the parser configuration, applying defaults for unset options
    pub fn parser_config(&self) -> ParserConfig {
        let defaults = ParserConfig::default();
        ParserConfig {
            skip_lines: self.skip_lines,
            row_delimiter: self.row_delimiter.unwrap_or(defaults.row_delimiter),
            field_delimiter: self.field_delimiter.unwrap_or(defaults.field_delimiter),
            escape_char: self.escape_char.unwrap_or(defaults.escape_char),
        }
    }
}
