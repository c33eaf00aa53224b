use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::chart::ChartSettings;
use crate::domain::dataset::ParsedDataset;
use crate::domain::error::{AppError, Result};

/// Dataset and chart settings persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredState {
    pub parsed_data: Option<ParsedDataset>,
    pub chart_settings: ChartSettings,
}

pub fn save_state(path: &Path, state: &StoredState) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let json = serde_json::to_vec(state)?;
    fs::write(path, json).map_err(|e| {
        AppError::StorageError(format!("Failed to save state to {}: {}", path.display(), e))
    })?;

    debug!(path = %path.display(), "Chart state saved");
    Ok(())
}

/// Load saved state. A missing or unreadable file yields `None`.
pub fn load_state(path: &Path) -> Option<StoredState> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load saved state");
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(state) => Some(state),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Saved state is not valid JSON");
            None
        }
    }
}

pub fn clear_state(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(AppError::StorageError(format!(
            "Failed to clear state at {}: {}",
            path.display(),
            e
        ))),
    }
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{ChartType, ChartVariant};
    use crate::domain::dataset::{CellValue, Record};

    fn state() -> StoredState {
        StoredState {
            parsed_data: Some(ParsedDataset {
                headers: vec!["month".to_string(), "sales".to_string()],
                rows: vec![Record::from([
                    ("month".to_string(), CellValue::Text("Jan".to_string())),
                    ("sales".to_string(), CellValue::Number(120.0)),
                ])],
                numeric_columns: vec!["sales".to_string()],
                categorical_columns: vec!["month".to_string()],
            }),
            chart_settings: ChartSettings {
                chart_type: ChartType::Area,
                variant: ChartVariant::Stacked,
                category_column: "month".to_string(),
                value_columns: vec!["sales".to_string()],
            },
        }
    }

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("charter_state.json");

        save_state(&path, &state()).unwrap();
        assert_eq!(load_state(&path), Some(state()));

        clear_state(&path).unwrap();
        assert_eq!(load_state(&path), None);
        clear_state(&path).unwrap();
    }

    #[test]
    fn test_corrupt_state_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charter_state.json");
        fs::write(&path, b"{not json").unwrap();
        assert_eq!(load_state(&path), None);
    }
}
