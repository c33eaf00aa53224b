// ============================================================
// TABULAR INFRASTRUCTURE LAYER
// ============================================================
// Format detection, CSV and workbook readers, currency parsing

mod csv_reader;
mod currency;
mod csv_writer;
mod format;
mod workbook_reader;

pub use csv_reader::CsvReader;
pub use csv_writer::write_dataset;
pub use currency::{is_numeric, parse_currency, CURRENCY_SYMBOLS};
pub use format::FileFormat;
pub use workbook_reader::WorkbookReader;
