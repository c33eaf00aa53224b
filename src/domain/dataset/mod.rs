// ============================================================
// DATASET DOMAIN LAYER
// ============================================================
// Core types for tabular ingestion
// No I/O, no async

mod cell;
mod ingest_config;
mod parsed_dataset;

pub use cell::{format_number, CellValue, RawCell, RawRecord, Record};
pub use ingest_config::{ExcelCellMode, IngestConfig};
pub use parsed_dataset::ParsedDataset;

/// Header names plus raw rows, as produced by a format reader
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRecord>,
}
