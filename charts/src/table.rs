//! Tabular query results as returned alongside a generated SQL query.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell value.
///
/// Deserialized untagged so the JSON produced by the SQL service maps
/// directly: `null`, booleans, integers, floats and strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Numeric value for JSON numbers only. Strings are not coerced.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Numeric value for plotting: numbers as-is, numeric strings parsed.
    #[must_use]
    pub fn as_plot_value(&self) -> Option<f64> {
        match self {
            Self::Text(s) => match s.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Some(v),
                _ => None,
            },
            other => other.as_number(),
        }
    }

    /// Whether this is a JSON number.
    #[must_use]
    pub fn is_number(&self) -> bool {
        self.as_number().is_some()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Column names plus row-major cell values.
///
/// Well-formed sets have every row exactly as long as `columns`; readers
/// tolerate ragged rows by treating missing cells as absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Scalar>>,
}

impl ResultSet {
    #[must_use]
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Scalar>>) -> Self {
        Self { columns, rows }
    }

    /// No columns or no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.rows.is_empty()
    }

    /// Every row has exactly one cell per column.
    #[must_use]
    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|row| row.len() == self.columns.len())
    }

    /// Cell at `(row, col)`, if present.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Scalar> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Column name at `col`, or an empty string when out of range.
    #[must_use]
    pub fn column_name(&self, col: usize) -> &str {
        self.columns.get(col).map_or("", String::as_str)
    }

    /// Index of the first column whose value in the first row is a number.
    #[must_use]
    pub fn first_numeric_column(&self) -> Option<usize> {
        self.rows.first()?.iter().position(Scalar::is_number)
    }
}
