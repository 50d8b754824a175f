//! Field-type schemas and the typed values they produce.
//!
//! A schema is an ordered, fixed-arity list of target types known at
//! construction time. It defines the exact number of fields every record
//! must have and which conversion runs at each position. Conversion is
//! polymorphic only over this closed set of types, so values are a tagged
//! variant rather than trait objects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Target type of one field position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// The raw substring, unchanged
    Text,
    /// A 64-bit signed integer, parsed strictly
    Integer,
    /// A 64-bit float, parsed strictly
    Float,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => write!(f, "text"),
            FieldType::Integer => write!(f, "integer"),
            FieldType::Float => write!(f, "float"),
        }
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "string" | "str" => Ok(FieldType::Text),
            "int" | "integer" => Ok(FieldType::Integer),
            "float" | "real" => Ok(FieldType::Float),
            other => Err(Error::configuration(format!(
                "unknown field type '{}' (expected text, int, or float)",
                other
            ))),
        }
    }
}

/// Ordered, fixed-arity list of target field types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    types: Vec<FieldType>,
}

impl Schema {
    /// Create a schema from an ordered type list
    pub fn new(types: Vec<FieldType>) -> Self {
        Self { types }
    }

    /// Parse a comma-separated type list, e.g. `text,int,float`
    pub fn parse_list(spec: &str) -> Result<Self> {
        let types = spec
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<FieldType>>>()?;
        Ok(Self { types })
    }

    /// Number of fields every record must have
    pub fn arity(&self) -> usize {
        self.types.len()
    }

    /// Declared types, in positional order
    pub fn types(&self) -> &[FieldType] {
        &self.types
    }
}

/// One converted field value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Value {
    /// The type tag this value was converted under
    pub fn field_type(&self) -> FieldType {
        match self {
            Value::Text(_) => FieldType::Text,
            Value::Integer(_) => FieldType::Integer,
            Value::Float(_) => FieldType::Float,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}
