use std::collections::BTreeMap;
use std::fmt;

use crate::error::DataError;

// ---------------------------------------------------------------------------
// CellValue – a single CSV cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, inferred from the raw CSV text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl CellValue {
    /// Infer the narrowest type for a raw cell: integer, float, bool, text.
    pub fn infer(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(raw.to_string())
    }

    /// Numeric view of the cell. Empty cells are NaN; text and bools have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Null => Some(f64::NAN),
            CellValue::Bool(_) | CellValue::String(_) => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

// ---------------------------------------------------------------------------
// Row – one record of the CSV file
// ---------------------------------------------------------------------------

/// A single data row: column_name → value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The parsed table. Never mutated after loading; sorting produces a new view.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Header names in file order.
    pub column_names: Vec<String>,
    /// All rows in file order.
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(column_names: Vec<String>, rows: Vec<Row>) -> Self {
        Dataset { column_names, rows }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_names.iter().any(|c| c == column)
    }

    /// Whether every cell of `column` parsed as an integer. Such a column is
    /// reported with integer literals; a single float or empty cell widens it.
    pub fn is_integer_column(&self, column: &str) -> bool {
        self.rows
            .iter()
            .all(|row| matches!(row.get(column), Some(CellValue::Integer(_))))
    }

    /// Extract a column as `f64`, one entry per row.
    ///
    /// Empty cells become NaN. Any other non-numeric cell is an error naming
    /// the 0-based data row.
    pub fn numeric_column(&self, column: &str) -> Result<Vec<f64>, DataError> {
        if !self.has_column(column) {
            return Err(DataError::MissingColumn {
                column: column.to_string(),
                available: self.column_names.clone(),
            });
        }

        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let cell = row.get(column).unwrap_or(&CellValue::Null);
                cell.as_f64().ok_or_else(|| DataError::NonNumeric {
                    row: i,
                    column: column.to_string(),
                    value: cell.to_string(),
                })
            })
            .collect()
    }
}
