// ============================================================
// PARSED DATASET
// ============================================================
// The normalized table handed back to callers after ingestion

use serde::{Deserialize, Serialize};

use super::{CellValue, Record};

/// Result of a successful ingestion.
///
/// `numeric_columns` and `categorical_columns` partition `headers`. Every
/// record holds one value per header: numbers for numeric columns, strings
/// for categorical ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDataset {
    /// Column names in source order
    pub headers: Vec<String>,

    /// Coerced rows in source order
    pub rows: Vec<Record>,

    /// Columns classified as numeric
    pub numeric_columns: Vec<String>,

    /// Columns classified as categorical
    pub categorical_columns: Vec<String>,
}

impl ParsedDataset {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_numeric_column(&self, column: &str) -> bool {
        self.numeric_columns.iter().any(|c| c == column)
    }

    pub fn is_categorical_column(&self, column: &str) -> bool {
        self.categorical_columns.iter().any(|c| c == column)
    }

    /// Numbers held by `column`, in row order. Empty for categorical columns.
    pub fn numeric_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = f64> + 'a {
        self.rows
            .iter()
            .filter_map(move |row| row.get(column).and_then(CellValue::as_number))
    }

    /// Whether any numeric column holds a value below zero.
    pub fn has_negative_values(&self) -> bool {
        self.numeric_columns
            .iter()
            .any(|col| self.numeric_values(col).any(|v| v < 0.0))
    }
}
