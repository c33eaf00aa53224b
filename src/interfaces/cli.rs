//! Command-line front end
//!
//! Parses one spreadsheet and prints the normalized dataset, optionally with
//! the chart setup the web app would start from.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;

use crate::application::use_cases::chart_setup::{available_chart_types, default_settings};
use crate::application::use_cases::chart_utils::calculate_y_axis_domain;
use crate::application::FileIngestionUseCase;
use crate::domain::chart::{column_color, ChartSettings, ChartType};
use crate::domain::dataset::{IngestConfig, ParsedDataset};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::{ConfigService, DEFAULT_CONFIG_FILE};
use crate::infrastructure::storage::{save_state, StoredState};
use crate::infrastructure::tabular::write_dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "charter", about = "Parse a CSV or Excel file into a chart-ready dataset")]
pub struct CliArgs {
    /// File to ingest (.csv, .xlsx or .xls)
    pub file: PathBuf,

    /// Configuration file
    #[arg(long, env = "CHARTER_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Output format for the dataset
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// Include default chart settings, available chart types and Y-axis domain
    #[arg(long)]
    pub chart: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Save the dataset and default chart settings to the configured state file
    #[arg(long)]
    pub save_state: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartReport {
    pub settings: ChartSettings,
    pub available_types: Vec<ChartType>,
    pub y_axis_domain: (f64, f64),
    /// Series color per value column, in `settings.value_columns` order
    pub colors: Vec<String>,
}

impl ChartReport {
    pub fn for_dataset(dataset: &ParsedDataset, padding: f64) -> Self {
        let settings = default_settings(dataset);
        let y_axis_domain =
            calculate_y_axis_domain(&dataset.rows, &settings.value_columns, padding);
        let overrides = HashMap::new();
        let colors = settings
            .value_columns
            .iter()
            .enumerate()
            .map(|(idx, column)| column_color(column, idx, &overrides).to_string())
            .collect();

        Self {
            available_types: available_chart_types(dataset),
            settings,
            y_axis_domain,
            colors,
        }
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    dataset: &'a ParsedDataset,
    chart: ChartReport,
}

/// Run one invocation and return what should go to stdout.
pub async fn execute(args: &CliArgs) -> Result<String> {
    let config = ConfigService::new(&args.config).load()?;
    execute_with_config(args, config).await
}

pub async fn execute_with_config(args: &CliArgs, config: IngestConfig) -> Result<String> {
    let padding = config.y_axis_padding;
    let state_file = config.state_file.clone();

    let dataset = FileIngestionUseCase::new(config)
        .parse_path(&args.file)
        .await?;

    if args.save_state {
        let path = state_file.ok_or_else(|| {
            AppError::ConfigError("--save-state needs `state_file` to be configured".to_string())
        })?;
        let state = StoredState {
            chart_settings: default_settings(&dataset),
            parsed_data: Some(dataset.clone()),
        };
        save_state(&path, &state)?;
        info!(path = %path.display(), "Saved chart state");
    }

    match args.output {
        OutputFormat::Csv => {
            let mut buffer = Vec::new();
            write_dataset(&dataset, &mut buffer)?;
            String::from_utf8(buffer).map_err(|e| AppError::IoError(e.to_string()))
        }
        OutputFormat::Json if args.chart => {
            let report = Report {
                chart: ChartReport::for_dataset(&dataset, padding),
                dataset: &dataset,
            };
            to_json(&report, args.pretty)
        }
        OutputFormat::Json => to_json(&dataset, args.pretty),
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(|e| AppError::IoError(format!("Failed to encode output: {}", e)))
}
