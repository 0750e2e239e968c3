//! Typed access to store result rows.
//!
//! Rows arrive from the store as field-name → value mappings. This wrapper
//! gives the engine layers typed accessors with precise errors, so record
//! mapping happens exactly once, at the gateway boundary.

use crate::StoreError;
use serde_json::{Map, Value};

/// One result row: a mapping from returned field name to scalar or nested
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct Row(Map<String, Value>);

impl Row {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a row from a decoded JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, StoreError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(StoreError::Decode(format!(
                "expected an object row, got {other}"
            ))),
        }
    }

    /// Raw access to a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    fn require(&self, field: &str) -> Result<&Value, StoreError> {
        self.0
            .get(field)
            .ok_or_else(|| StoreError::MissingField(field.to_owned()))
    }

    /// A required string field.
    pub fn string(&self, field: &str) -> Result<String, StoreError> {
        match self.require(field)? {
            Value::String(s) => Ok(s.clone()),
            _ => Err(StoreError::FieldType {
                field: field.to_owned(),
                expected: "string",
            }),
        }
    }

    /// An optional string field: `None` when the field is absent or null.
    pub fn opt_string(&self, field: &str) -> Option<String> {
        match self.0.get(field) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    /// A required integer field.
    pub fn int(&self, field: &str) -> Result<i64, StoreError> {
        self.require(field)?
            .as_i64()
            .ok_or_else(|| StoreError::FieldType {
                field: field.to_owned(),
                expected: "integer",
            })
    }

    /// A required float field. Integers widen to floats, since the store
    /// does not distinguish `1` from `1.0` reliably.
    pub fn float(&self, field: &str) -> Result<f64, StoreError> {
        self.require(field)?
            .as_f64()
            .ok_or_else(|| StoreError::FieldType {
                field: field.to_owned(),
                expected: "float",
            })
    }

    /// An optional float field: `None` when absent, null, or non-numeric.
    pub fn opt_float(&self, field: &str) -> Option<f64> {
        self.0.get(field).and_then(Value::as_f64)
    }

    /// A required boolean field.
    pub fn boolean(&self, field: &str) -> Result<bool, StoreError> {
        self.require(field)?
            .as_bool()
            .ok_or_else(|| StoreError::FieldType {
                field: field.to_owned(),
                expected: "boolean",
            })
    }

    /// A required list-of-strings field, e.g. from `collect(DISTINCT ...)`.
    pub fn strings(&self, field: &str) -> Result<Vec<String>, StoreError> {
        let items = self
            .require(field)?
            .as_array()
            .ok_or_else(|| StoreError::FieldType {
                field: field.to_owned(),
                expected: "list of strings",
            })?;
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| StoreError::FieldType {
                        field: field.to_owned(),
                        expected: "list of strings",
                    })
            })
            .collect()
    }

    /// A required list-of-mappings field, e.g. from `collect({...})`.
    pub fn rows(&self, field: &str) -> Result<Vec<Row>, StoreError> {
        let items = self
            .require(field)?
            .as_array()
            .ok_or_else(|| StoreError::FieldType {
                field: field.to_owned(),
                expected: "list of mappings",
            })?;
        items
            .iter()
            .map(|item| Row::from_value(item.clone()))
            .collect()
    }
}
