// ============================================================
// CSV WRITER
// ============================================================
// Export a normalized dataset back to CSV

use std::io::Write;

use csv::WriterBuilder;

use crate::domain::dataset::ParsedDataset;
use crate::domain::error::{AppError, Result};

/// Write `dataset` as CSV: one header line, then one line per row with
/// numbers in plain decimal form.
pub fn write_dataset<W: Write>(dataset: &ParsedDataset, writer: W) -> Result<()> {
    let mut out = WriterBuilder::new().from_writer(writer);

    out.write_record(&dataset.headers)
        .map_err(|e| AppError::IoError(format!("Failed to write CSV header: {}", e)))?;

    for (index, row) in dataset.rows.iter().enumerate() {
        let record = dataset.headers.iter().map(|header| {
            row.get(header)
                .map(|value| value.to_string())
                .unwrap_or_default()
        });

        out.write_record(record).map_err(|e| {
            AppError::IoError(format!("Failed to write CSV row {}: {}", index + 1, e))
        })?;
    }

    out.flush()
        .map_err(|e| AppError::IoError(format!("Failed to flush CSV output: {}", e)))
}
