pub mod chart_setup;
pub mod chart_utils;
pub mod column_classifier;
pub mod file_ingestion;
