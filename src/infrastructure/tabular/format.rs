use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

/// Spreadsheet formats accepted for ingestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Csv,
    Xlsx,
    Xls,
}

impl FileFormat {
    /// Detect the format from the last `.`-delimited segment of a file name.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .ok_or_else(AppError::unsupported_format)?;

        match extension.as_str() {
            "csv" => Ok(FileFormat::Csv),
            "xlsx" => Ok(FileFormat::Xlsx),
            "xls" => Ok(FileFormat::Xls),
            _ => Err(AppError::unsupported_format()),
        }
    }

    pub fn is_workbook(&self) -> bool {
        matches!(self, FileFormat::Xlsx | FileFormat::Xls)
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileFormat::Csv => write!(f, "csv"),
            FileFormat::Xlsx => write!(f, "xlsx"),
            FileFormat::Xls => write!(f, "xls"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_known_extensions_case_insensitively() {
        assert_eq!(FileFormat::from_file_name("sales.csv").unwrap(), FileFormat::Csv);
        assert_eq!(FileFormat::from_file_name("Q3.Report.XLSX").unwrap(), FileFormat::Xlsx);
        assert_eq!(FileFormat::from_file_name("/tmp/legacy.xls").unwrap(), FileFormat::Xls);
    }

    #[test]
    fn test_rejects_unknown_or_missing_extension() {
        for name in ["notes.txt", "archive.csv.gz", "README", "trailing.", ""] {
            let err = FileFormat::from_file_name(name).unwrap_err();
            assert!(matches!(err, AppError::UnsupportedFormat(_)), "{name}");
        }
    }
}
