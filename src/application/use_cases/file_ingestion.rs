// ============================================================
// FILE INGESTION USE CASE
// ============================================================
// Orchestrate format detection, row extraction, column
// classification and value coercion

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::application::use_cases::column_classifier::ColumnClassifier;
use crate::domain::dataset::{IngestConfig, ParsedDataset, RawTable};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::tabular::{CsvReader, FileFormat, WorkbookReader};

/// Turns an uploaded spreadsheet into a `ParsedDataset`.
///
/// Holds no state between calls; concurrent calls on different inputs do
/// not interact.
pub struct FileIngestionUseCase {
    config: IngestConfig,
}

impl Default for FileIngestionUseCase {
    fn default() -> Self {
        Self::new(IngestConfig::default())
    }
}

impl FileIngestionUseCase {
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Parse an in-memory file. `file_name` is only used for its extension.
    pub fn parse_bytes(&self, file_name: &str, bytes: Vec<u8>) -> Result<ParsedDataset> {
        self.validate_config()?;
        let format = FileFormat::from_file_name(file_name).map_err(|e| {
            warn!(file_name, "Rejected file with unsupported extension");
            e
        })?;

        self.run(file_name, format, bytes)
    }

    /// Parse a file from any reader, consuming it once.
    pub fn parse_reader<R: Read>(&self, file_name: &str, mut reader: R) -> Result<ParsedDataset> {
        self.validate_config()?;
        let format = FileFormat::from_file_name(file_name)?;

        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(|e| {
            AppError::IoError(format!("Failed to read {}: {}", file_name, e))
        })?;

        self.run(file_name, format, bytes)
    }

    /// Read a file from disk, then parse it. The read is the only await point.
    pub async fn parse_path(&self, path: &Path) -> Result<ParsedDataset> {
        self.validate_config()?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let format = FileFormat::from_file_name(&file_name)?;

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AppError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        self.run(&file_name, format, bytes)
    }

    /// Extract header names and raw rows for a known format.
    pub fn extract(&self, format: FileFormat, bytes: Vec<u8>) -> Result<RawTable> {
        match format {
            FileFormat::Csv => CsvReader::new().read_bytes(&bytes),
            FileFormat::Xlsx | FileFormat::Xls => {
                WorkbookReader::new(self.config.excel_cell_mode).read_bytes(format, bytes)
            }
        }
    }

    fn run(&self, file_name: &str, format: FileFormat, bytes: Vec<u8>) -> Result<ParsedDataset> {
        let start = Instant::now();
        debug!(file_name, %format, size = bytes.len(), "Ingesting file");

        let table = self.extract(format, bytes).map_err(|e| {
            warn!(file_name, %format, error = %e, "File rejected");
            e
        })?;

        let dataset = ColumnClassifier::new(&self.config).analyze(table);

        info!(
            file_name,
            %format,
            rows = dataset.row_count(),
            numeric = dataset.numeric_columns.len(),
            categorical = dataset.categorical_columns.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "File ingested"
        );

        Ok(dataset)
    }

    fn validate_config(&self) -> Result<()> {
        self.config
            .validate()
            .map_err(|e| AppError::ConfigError(format!("Invalid ingestion config: {}", e)))
    }
}
