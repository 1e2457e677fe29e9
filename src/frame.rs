//! Columnar input batches as handed over by the dashboard host.
//! A batch carries named, index-aligned columns; builders locate the
//! columns they need by name and tolerate anything that is missing.

use serde::{Deserialize, Serialize};

/// Name of the epoch column.
pub const EPOCH_FIELD: &str = "epoch";
/// Name of the value column consumed by the percent and status grids.
pub const VALUE_FIELD: &str = "_value";
/// Name of the fill-status column consumed by the proposer grid.
pub const FILLED_FIELD: &str = "filled";
/// Name of the proposer-address column consumed by the proposer grid.
pub const PROPOSER_FIELD: &str = "proposer";

/// One query result: a list of named columns aligned by row index.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub fields: Vec<Field>,
}

/// A single named column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub values: FieldValues,
}

/// Column payload. Hosts send numbers for epoch/value/fill columns and
/// text for proposer addresses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValues {
    Numbers(Vec<f64>),
    Text(Vec<String>),
}

impl Frame {
    /// Look up a column by name; first match wins.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Numeric column by name, or `None` when absent or non-numeric.
    pub fn numbers(&self, name: &str) -> Option<&[f64]> {
        match &self.field(name)?.values {
            FieldValues::Numbers(values) => Some(values),
            FieldValues::Text(_) => None,
        }
    }

    /// Text column by name, or `None` when absent or non-text.
    pub fn text(&self, name: &str) -> Option<&[String]> {
        match &self.field(name)?.values {
            FieldValues::Text(values) => Some(values),
            FieldValues::Numbers(_) => None,
        }
    }
}

impl Field {
    /// Build a numeric column.
    pub fn numbers(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values: FieldValues::Numbers(values),
        }
    }

    /// Build a text column.
    pub fn text(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values: FieldValues::Text(values),
        }
    }
}

impl FieldValues {
    /// Number of rows in the column.
    pub fn len(&self) -> usize {
        match self {
            FieldValues::Numbers(values) => values.len(),
            FieldValues::Text(values) => values.len(),
        }
    }

    /// True when the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
