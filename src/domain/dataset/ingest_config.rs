// ============================================================
// INGESTION CONFIGURATION
// ============================================================
// Tunables for column classification and value coercion

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How workbook cells are surfaced to the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExcelCellMode {
    /// Numeric cells arrive as native numbers
    #[default]
    Typed,

    /// Every cell arrives as its display string
    Text,
}

/// Configuration for file ingestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Share of numeric cells needed to classify a column as numeric (default: 0.5)
    /// Ties go to numeric
    pub numeric_threshold: f64,

    /// Value substituted for unparseable cells in numeric columns (default: 0)
    pub fallback_number: f64,

    /// Workbook cell representation (default: typed)
    pub excel_cell_mode: ExcelCellMode,

    /// Padding fraction applied around the Y-axis domain (default: 0.05)
    pub y_axis_padding: f64,

    /// Where saved chart state lives, if anywhere
    pub state_file: Option<PathBuf>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            numeric_threshold: 0.5,
            fallback_number: 0.0,
            excel_cell_mode: ExcelCellMode::Typed,
            y_axis_padding: 0.05,
            state_file: None,
        }
    }
}

impl IngestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.numeric_threshold) {
            return Err("numeric_threshold must be between 0.0 and 1.0".to_string());
        }
        if !self.fallback_number.is_finite() {
            return Err("fallback_number must be a finite number".to_string());
        }
        if !(0.0..=1.0).contains(&self.y_axis_padding) {
            return Err("y_axis_padding must be between 0.0 and 1.0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = IngestConfig::default();
        assert_eq!(config.numeric_threshold, 0.5);
        assert_eq!(config.excel_cell_mode, ExcelCellMode::Typed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let config = IngestConfig {
            numeric_threshold: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = IngestConfig {
            fallback_number: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
