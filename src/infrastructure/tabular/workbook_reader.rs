// ============================================================
// WORKBOOK READER
// ============================================================
// Read the first sheet of an xlsx/xls workbook into raw rows

use std::io::Cursor;

use calamine::{Data, Range, Reader, Xls, Xlsx};
use tracing::{debug, warn};

use crate::domain::dataset::{format_number, ExcelCellMode, RawCell, RawRecord, RawTable};
use crate::domain::error::{AppError, Result, EMPTY_WORKBOOK_MESSAGE};

use super::FileFormat;

/// Reads spreadsheet workbooks held in memory
pub struct WorkbookReader {
    mode: ExcelCellMode,
}

impl Default for WorkbookReader {
    fn default() -> Self {
        Self::new(ExcelCellMode::default())
    }
}

impl WorkbookReader {
    pub fn new(mode: ExcelCellMode) -> Self {
        Self { mode }
    }

    pub fn read_bytes(&self, format: FileFormat, bytes: Vec<u8>) -> Result<RawTable> {
        let range = match format {
            FileFormat::Xlsx => first_sheet::<Xlsx<Cursor<Vec<u8>>>>(bytes)?,
            FileFormat::Xls => first_sheet::<Xls<Cursor<Vec<u8>>>>(bytes)?,
            FileFormat::Csv => return Err(AppError::unsupported_format()),
        };

        self.read_range(&range)
    }

    /// Turn a sheet range into records keyed by the first row's labels.
    ///
    /// Rows whose cells are all empty are skipped; a sheet without any
    /// remaining rows is rejected.
    pub fn read_range(&self, range: &Range<Data>) -> Result<RawTable> {
        let mut rows = range.rows();

        let Some(header_row) = rows.next() else {
            return Err(empty_workbook());
        };
        let headers = header_names(header_row);

        let records: Vec<RawRecord> = rows
            .filter(|row| !row.iter().all(is_blank))
            .map(|row| {
                headers
                    .iter()
                    .enumerate()
                    .map(|(idx, header)| {
                        let cell = row.get(idx).map(|c| self.raw_cell(c)).unwrap_or_default();
                        (header.clone(), cell)
                    })
                    .collect::<RawRecord>()
            })
            .collect();

        if records.is_empty() {
            return Err(empty_workbook());
        }

        debug!(columns = headers.len(), rows = records.len(), "Workbook sheet read");

        Ok(RawTable {
            headers,
            rows: records,
        })
    }

    fn raw_cell(&self, cell: &Data) -> RawCell {
        match (self.mode, cell) {
            (ExcelCellMode::Typed, Data::Int(i)) => RawCell::Num(*i as f64),
            (ExcelCellMode::Typed, Data::Float(f)) => RawCell::Num(*f),
            (ExcelCellMode::Text, Data::Int(i)) => RawCell::Text(i.to_string()),
            (ExcelCellMode::Text, Data::Float(f)) => RawCell::Text(format_number(*f)),
            (_, Data::String(s)) => RawCell::Text(s.clone()),
            (_, Data::Bool(b)) => RawCell::text(if *b { "TRUE" } else { "FALSE" }),
            (_, Data::Empty) => RawCell::empty(),
            (_, other) => RawCell::Text(other.to_string()),
        }
    }
}

fn first_sheet<R>(bytes: Vec<u8>) -> Result<Range<Data>>
where
    R: Reader<Cursor<Vec<u8>>>,
    R::Error: std::fmt::Display,
{
    let mut workbook = R::new(Cursor::new(bytes)).map_err(|e| {
        warn!(error = %e, "Failed to open workbook");
        empty_workbook()
    })?;

    workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            warn!("Workbook has no worksheets");
            empty_workbook()
        })?
        .map_err(|e| {
            warn!(error = %e, "Failed to read first worksheet");
            empty_workbook()
        })
}

/// Header labels for the first row. Blank labels become `__EMPTY`,
/// `__EMPTY_1`, ... in column order; duplicates are left as they are.
fn header_names(row: &[Data]) -> Vec<String> {
    let mut blank_count = 0usize;

    row.iter()
        .map(|cell| {
            let label = match cell {
                Data::Int(i) => i.to_string(),
                Data::Float(f) => format_number(*f),
                Data::Empty => String::new(),
                other => other.to_string(),
            };

            if !label.trim().is_empty() {
                return label;
            }

            let name = if blank_count == 0 {
                "__EMPTY".to_string()
            } else {
                format!("__EMPTY_{}", blank_count)
            };
            blank_count += 1;
            name
        })
        .collect()
}

fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    }
}

fn empty_workbook() -> AppError {
    AppError::EmptyOrInvalidFile(EMPTY_WORKBOOK_MESSAGE.to_string())
}
