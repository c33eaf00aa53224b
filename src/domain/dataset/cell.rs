// ============================================================
// CELL VALUES
// ============================================================
// Raw cells as extracted from a source file, and the coerced
// values a finished dataset carries

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell as read from the source format.
///
/// CSV always yields `Text`; workbooks yield `Num` for numeric cells when
/// read in typed mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    Num(f64),
    Text(String),
}

impl RawCell {
    pub fn text(value: impl Into<String>) -> Self {
        RawCell::Text(value.into())
    }

    pub fn empty() -> Self {
        RawCell::Text(String::new())
    }
}

impl Default for RawCell {
    fn default() -> Self {
        Self::empty()
    }
}

/// A cell after its column has been classified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Number(_) => None,
            CellValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", format_number(*n)),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Plain decimal rendering of a number, without locale grouping.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // covers -0.0
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    value.to_string()
}

/// One source row keyed by header name, in header order.
pub type RawRecord = IndexMap<String, RawCell>;

/// One dataset row keyed by header name, in header order.
pub type Record = IndexMap<String, CellValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_uses_plain_decimals() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(1234.5), "1234.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-45.25), "-45.25");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_cell_value_serializes_untagged() {
        let json = serde_json::to_string(&vec![
            CellValue::Number(1.5),
            CellValue::Text("Widget".to_string()),
        ])
        .unwrap();
        assert_eq!(json, r#"[1.5,"Widget"]"#);
    }
}
