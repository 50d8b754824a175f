//! Type-directed conversion of raw field substrings.
//!
//! One conversion per supported target type, dispatched over the schema's
//! closed type tags with proper error attribution.

use tracing::debug;

use super::error::{ParseError, ParseErrorKind};
use super::schema::{FieldType, Value};

/// Convert one raw field substring into its declared target type.
///
/// Text conversion is the identity: no trimming and no unescaping beyond
/// what the tokenizer already performed. Numeric conversions are strict; the
/// entire substring must be consumed, so surrounding whitespace or leftover
/// characters fail the field.
pub fn convert_field(
    raw: &str,
    target: FieldType,
    line_number: usize,
    column: usize,
) -> Result<Value, ParseError> {
    match target {
        FieldType::Text => Ok(Value::Text(raw.to_string())),
        FieldType::Integer => raw
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| conversion_error(raw, target, line_number, column)),
        FieldType::Float => raw
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| conversion_error(raw, target, line_number, column)),
    }
}

fn conversion_error(
    raw: &str,
    target: FieldType,
    line_number: usize,
    column: usize,
) -> ParseError {
    debug!(
        "failed to convert field '{}' to {} at line {}, column {}",
        raw, target, line_number, column
    );
    ParseError::new(
        ParseErrorKind::Conversion {
            raw: raw.to_string(),
        },
        line_number,
        column,
    )
}
