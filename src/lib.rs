pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

mod app;

pub use crate::app::run;
pub use crate::application::use_cases::chart_setup::{
    available_chart_types, category_options, default_settings, is_chart_type_available,
};
pub use crate::application::use_cases::chart_utils::{calculate_y_axis_domain, pie_slices};
pub use crate::application::{ColumnClassification, ColumnClassifier, FileIngestionUseCase};
pub use crate::domain::chart::{ChartSettings, ChartType, ChartVariant};
pub use crate::domain::dataset::{CellValue, IngestConfig, ParsedDataset, Record};
pub use crate::domain::error::{AppError, Result};
pub use crate::infrastructure::tabular::{is_numeric, parse_currency};
