//! Test utilities and shared fixtures for parser testing
//!
//! This module provides common helpers used across the component test
//! modules: canonical configurations and schema builders.

use crate::config::ParserConfig;
use crate::parser::schema::{FieldType, Schema};


/// Default CSV configuration (newline rows, comma fields, double-quote
/// escape)
pub fn csv_config() -> ParserConfig {
    ParserConfig::default()
}

/// Semicolon-delimited configuration with single-quote escaping
pub fn semicolon_config() -> ParserConfig {
    ParserConfig {
        skip_lines: 0,
        row_delimiter: '\n',
        field_delimiter: ';',
        escape_char: '\'',
    }
}

/// Two-field schema: (text, integer)
pub fn text_int_schema() -> Schema {
    Schema::new(vec![FieldType::Text, FieldType::Integer])
}

/// Three-field schema: (text, integer, float)
pub fn text_int_float_schema() -> Schema {
    Schema::new(vec![FieldType::Text, FieldType::Integer, FieldType::Float])
}
