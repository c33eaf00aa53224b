// ============================================================
// COLUMN CLASSIFIER
// ============================================================
// Decide numeric vs categorical per column, then coerce cells

use tracing::{debug, warn};

use crate::domain::dataset::{
    format_number, CellValue, IngestConfig, ParsedDataset, RawCell, RawTable, Record,
};
use crate::infrastructure::tabular::parse_currency;

/// Numeric/categorical split of a table's headers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnClassification {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
}

impl ColumnClassification {
    pub fn is_numeric(&self, column: &str) -> bool {
        self.numeric.iter().any(|c| c == column)
    }
}

/// Numeric value of a raw cell, if it has one.
pub fn numeric_value(cell: &RawCell) -> Option<f64> {
    match cell {
        RawCell::Num(n) => Some(*n),
        RawCell::Text(s) => parse_currency(s),
    }
}

/// Majority-vote column classifier
pub struct ColumnClassifier {
    numeric_threshold: f64,
    fallback_number: f64,
}

impl ColumnClassifier {
    pub fn new(config: &IngestConfig) -> Self {
        Self {
            numeric_threshold: config.numeric_threshold,
            fallback_number: config.fallback_number,
        }
    }

    /// Classify every header.
    ///
    /// A column is numeric when at least `numeric_threshold` of its cells
    /// parse as numbers. A table with no rows classifies every column as
    /// numeric, since `0 >= threshold * 0`.
    pub fn classify(&self, table: &RawTable) -> ColumnClassification {
        let total = table.rows.len();
        let mut classification = ColumnClassification::default();

        for header in &table.headers {
            let numeric_count = table
                .rows
                .iter()
                .filter_map(|row| row.get(header))
                .filter(|cell| numeric_value(cell).is_some())
                .count();

            if numeric_count as f64 >= total as f64 * self.numeric_threshold {
                classification.numeric.push(header.clone());
            } else {
                classification.categorical.push(header.clone());
            }
        }

        classification
    }

    /// Rewrite every cell according to its column's classification.
    /// Unparseable cells in numeric columns become the fallback number.
    pub fn coerce(&self, table: &RawTable, classification: &ColumnClassification) -> Vec<Record> {
        let mut fallbacks = 0usize;

        let rows: Vec<Record> = table
            .rows
            .iter()
            .map(|row| {
                table
                    .headers
                    .iter()
                    .map(|header| {
                        let raw = row.get(header).cloned().unwrap_or_default();
                        let value = if classification.is_numeric(header) {
                            match numeric_value(&raw) {
                                Some(n) => CellValue::Number(n),
                                None => {
                                    fallbacks += 1;
                                    CellValue::Number(self.fallback_number)
                                }
                            }
                        } else {
                            match raw {
                                RawCell::Num(n) => CellValue::Text(format_number(n)),
                                RawCell::Text(s) => CellValue::Text(s),
                            }
                        };
                        (header.clone(), value)
                    })
                    .collect::<Record>()
            })
            .collect();

        if fallbacks > 0 {
            warn!(
                cells = fallbacks,
                fallback = self.fallback_number,
                "Unparseable cells in numeric columns replaced with fallback"
            );
        }

        rows
    }

    /// Classify and coerce in one go, producing the final dataset.
    pub fn analyze(&self, table: RawTable) -> ParsedDataset {
        let classification = self.classify(&table);
        let rows = self.coerce(&table, &classification);

        debug!(
            numeric = ?classification.numeric,
            categorical = ?classification.categorical,
            "Columns classified"
        );

        ParsedDataset {
            headers: table.headers,
            rows,
            numeric_columns: classification.numeric,
            categorical_columns: classification.categorical,
        }
    }
}

impl Default for ColumnClassifier {
    fn default() -> Self {
        Self::new(&IngestConfig::default())
    }
}
