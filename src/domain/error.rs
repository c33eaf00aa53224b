use serde::{Deserialize, Serialize};
use std::fmt;

pub const UNSUPPORTED_FORMAT_MESSAGE: &str =
    "Unsupported file format. Please use CSV or Excel files.";
pub const CSV_TOO_SHORT_MESSAGE: &str =
    "CSV file must have at least a header row and one data row.";
pub const EMPTY_WORKBOOK_MESSAGE: &str = "File is empty or has no valid data.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppError {
    UnsupportedFormat(String),
    EmptyOrInvalidFile(String),
    IoError(String),
    ConfigError(String),
    StorageError(String),
}

impl AppError {
    pub fn unsupported_format() -> Self {
        AppError::UnsupportedFormat(UNSUPPORTED_FORMAT_MESSAGE.to_string())
    }

    /// Message meant to be shown to the end user as-is.
    pub fn message(&self) -> &str {
        match self {
            AppError::UnsupportedFormat(msg)
            | AppError::EmptyOrInvalidFile(msg)
            | AppError::IoError(msg)
            | AppError::ConfigError(msg)
            | AppError::StorageError(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Ingestion failures are displayed verbatim to end users
            AppError::UnsupportedFormat(msg) => write!(f, "{}", msg),
            AppError::EmptyOrInvalidFile(msg) => write!(f, "{}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingestion_errors_display_verbatim() {
        let err = AppError::unsupported_format();
        assert_eq!(err.to_string(), UNSUPPORTED_FORMAT_MESSAGE);

        let err = AppError::EmptyOrInvalidFile(CSV_TOO_SHORT_MESSAGE.to_string());
        assert_eq!(err.to_string(), CSV_TOO_SHORT_MESSAGE);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::IoError(_)));
        assert_eq!(err.message(), "missing.csv");
    }
}
