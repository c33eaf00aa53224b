pub mod use_cases;

pub use use_cases::column_classifier::{ColumnClassification, ColumnClassifier};
pub use use_cases::file_ingestion::FileIngestionUseCase;
