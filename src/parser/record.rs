//! Typed records and their assembly from raw field sequences.

use std::fmt;

use super::convert::convert_field;
use super::error::{ParseError, ParseErrorKind};
use super::schema::{Schema, Value};

/// One fully converted record: an ordered, fixed-arity list of typed values.
///
/// Records are immutable once produced and only come out of [`assemble`], so
/// a `Record` always has exactly the schema's arity with every position
/// converted.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    values: Vec<Value>,
}

impl Record {
    /// Converted values, in positional order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Value at a 0-based position
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the record, yielding its values
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl fmt::Display for Record {
    /// Renders as a tuple, e.g. `(a, 1, 2.5)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}

/// Assemble one typed record from the raw fields of one line.
///
/// The field count must equal the schema arity; a mismatch is a structural
/// error at column 0. Conversion then runs per position in declared order
/// and the first failure aborts the record, so no partially converted record
/// is ever exposed.
pub fn assemble(fields: &[String], schema: &Schema, line_number: usize) -> Result<Record, ParseError> {
    if fields.len() != schema.arity() {
        return Err(ParseError::new(
            ParseErrorKind::FieldCount {
                expected: schema.arity(),
                found: fields.len(),
            },
            line_number,
            0,
        ));
    }

    let mut values = Vec::with_capacity(schema.arity());
    for (index, (raw, &target)) in fields.iter().zip(schema.types()).enumerate() {
        values.push(convert_field(raw, target, line_number, index + 1)?);
    }

    Ok(Record { values })
}
