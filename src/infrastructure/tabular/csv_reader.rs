// ============================================================
// CSV READER
// ============================================================
// Decode CSV bytes and split them into header names and raw rows

use encoding_rs::{UTF_8, WINDOWS_1252};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::domain::dataset::{RawCell, RawRecord, RawTable};
use crate::domain::error::{AppError, Result, CSV_TOO_SHORT_MESSAGE};

use super::currency::symbol_class;

// Leading part of a number whose thousands separator was taken as a delimiter
static GROUP_HEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^[(+\-]?\s*[{}]?\s*[0-9]{{1,3}}(?:,[0-9]{{3}})*$",
        symbol_class()
    ))
    .unwrap()
});

static GROUP_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}(?:\.[0-9]*)?\)?$").unwrap());

/// Line-oriented CSV reader.
///
/// Each physical line is one record. Double quotes toggle quoting so a
/// quoted field may contain the delimiter; quotes themselves are dropped and
/// every field is trimmed.
pub struct CsvReader {
    /// Delimiter character (default: comma)
    delimiter: char,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl CsvReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Decode bytes as UTF-8 (BOM stripped), falling back to Windows-1252.
    pub fn decode(bytes: &[u8]) -> String {
        let (text, _, had_errors) = UTF_8.decode(bytes);
        if !had_errors {
            return text.into_owned();
        }

        debug!("CSV input is not valid UTF-8, decoding as Windows-1252");
        let (text, _, _) = WINDOWS_1252.decode(bytes);
        text.into_owned()
    }

    pub fn read_bytes(&self, bytes: &[u8]) -> Result<RawTable> {
        self.read_str(&Self::decode(bytes))
    }

    /// Parse CSV text. Needs a header line and at least one data line.
    pub fn read_str(&self, content: &str) -> Result<RawTable> {
        let lines: Vec<&str> = content
            .trim()
            .split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .collect();

        if lines.len() < 2 {
            return Err(AppError::EmptyOrInvalidFile(
                CSV_TOO_SHORT_MESSAGE.to_string(),
            ));
        }

        let headers = self.parse_line(lines[0]);
        let rows = lines[1..]
            .iter()
            .map(|line| self.parse_record(&headers, line))
            .collect::<Vec<_>>();

        debug!(columns = headers.len(), rows = rows.len(), "CSV lines split");

        Ok(RawTable { headers, rows })
    }

    /// Split one line into trimmed fields.
    pub fn parse_line(&self, line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;

        for ch in line.chars() {
            if ch == '"' {
                in_quotes = !in_quotes;
            } else if ch == self.delimiter && !in_quotes {
                fields.push(current.trim().to_string());
                current.clear();
            } else {
                current.push(ch);
            }
        }

        fields.push(current.trim().to_string());
        fields
    }

    // Short rows default to empty text; extra fields are dropped.
    // Duplicate header names keep the last column's value.
    fn parse_record(&self, headers: &[String], line: &str) -> RawRecord {
        let mut values = self.parse_line(line);
        if values.len() > headers.len() && self.delimiter == ',' {
            rejoin_split_numbers(&mut values, headers.len());
        }

        headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = values.get(idx).cloned().unwrap_or_default();
                (header.clone(), RawCell::Text(value))
            })
            .collect()
    }
}

/// Rejoin unquoted numbers like `$1,234.56` that were split at their
/// thousands separators, while the row still has surplus fields.
fn rejoin_split_numbers(values: &mut Vec<String>, expected: usize) {
    while values.len() > expected {
        let Some(idx) = (0..values.len() - 1)
            .find(|&i| GROUP_HEAD.is_match(&values[i]) && GROUP_TAIL.is_match(&values[i + 1]))
        else {
            return;
        };

        let tail = values.remove(idx + 1);
        values[idx] = format!("{},{}", values[idx], tail);
    }
}
