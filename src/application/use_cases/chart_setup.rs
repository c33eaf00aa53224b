// ============================================================
// CHART SETUP
// ============================================================
// Initial chart settings and chart-type availability for a dataset

use crate::domain::chart::{ChartSettings, ChartType, ChartVariant};
use crate::domain::dataset::ParsedDataset;

/// Settings a freshly ingested dataset starts with: a default bar chart of
/// the first numeric column against the first categorical column.
pub fn default_settings(dataset: &ParsedDataset) -> ChartSettings {
    let category_column = dataset
        .categorical_columns
        .first()
        .or_else(|| dataset.headers.first())
        .cloned()
        .unwrap_or_default();

    let value_columns = dataset.numeric_columns.first().cloned().into_iter().collect();

    ChartSettings {
        chart_type: ChartType::Bar,
        variant: ChartVariant::Default,
        category_column,
        value_columns,
    }
}

pub fn is_chart_type_available(dataset: &ParsedDataset, chart_type: ChartType) -> bool {
    let requirements = chart_type.requirements();
    let meets_requirements = dataset.numeric_columns.len() >= requirements.min_numeric_columns
        && dataset.row_count() >= requirements.min_rows;

    if !chart_type.allows_negative_values() && dataset.has_negative_values() {
        return false;
    }

    meets_requirements
}

pub fn available_chart_types(dataset: &ParsedDataset) -> Vec<ChartType> {
    ChartType::ALL
        .into_iter()
        .filter(|chart_type| is_chart_type_available(dataset, *chart_type))
        .collect()
}

/// Categorical columns first, then every other header, without repeats.
pub fn category_options(dataset: &ParsedDataset) -> Vec<String> {
    let mut options: Vec<String> = Vec::with_capacity(dataset.headers.len());
    for column in dataset
        .categorical_columns
        .iter()
        .chain(dataset.headers.iter())
    {
        if !options.contains(column) {
            options.push(column.clone());
        }
    }
    options
}

impl ChartSettings {
    /// Switch chart type, keeping the variant when the new type supports it.
    pub fn with_chart_type(mut self, chart_type: ChartType) -> Self {
        if !chart_type.supports(self.variant) {
            self.variant = chart_type.variants()[0];
        }
        self.chart_type = chart_type;
        self
    }

    /// Add or remove a value column. Removing the last one is refused.
    pub fn toggle_value_column(&mut self, column: &str) -> bool {
        if let Some(pos) = self.value_columns.iter().position(|c| c == column) {
            if self.value_columns.len() == 1 {
                return false;
            }
            self.value_columns.remove(pos);
        } else {
            self.value_columns.push(column.to_string());
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::{CellValue, Record};

    fn dataset(numeric: &[&str], categorical: &[&str], rows: Vec<Record>) -> ParsedDataset {
        let numeric: Vec<String> = numeric.iter().map(|s| s.to_string()).collect();
        let categorical: Vec<String> = categorical.iter().map(|s| s.to_string()).collect();
        ParsedDataset {
            headers: categorical.iter().chain(numeric.iter()).cloned().collect(),
            rows,
            numeric_columns: numeric,
            categorical_columns: categorical,
        }
    }

    fn row(values: &[(&str, f64)]) -> Record {
        values
            .iter()
            .map(|(k, v)| (k.to_string(), CellValue::Number(*v)))
            .collect()
    }

    #[test]
    fn test_default_settings_pick_first_columns() {
        let data = dataset(&["sales", "cost"], &["month", "region"], vec![]);
        let settings = default_settings(&data);
        assert_eq!(settings.chart_type, ChartType::Bar);
        assert_eq!(settings.category_column, "month");
        assert_eq!(settings.value_columns, vec!["sales"]);
    }

    #[test]
    fn test_default_settings_without_categorical_or_numeric() {
        let data = dataset(&["a", "b"], &[], vec![]);
        assert_eq!(default_settings(&data).category_column, "a");

        let data = dataset(&[], &["label"], vec![]);
        assert!(default_settings(&data).value_columns.is_empty());
    }

    #[test]
    fn test_availability_follows_requirements() {
        let data = dataset(&["x"], &["label"], vec![row(&[("x", 1.0)])]);
        assert_eq!(
            available_chart_types(&data),
            vec![ChartType::Bar, ChartType::Pie, ChartType::Radial]
        );

        let data = dataset(
            &["a", "b", "c"],
            &[],
            vec![row(&[("a", 1.0)]), row(&[("b", 2.0)])],
        );
        assert_eq!(available_chart_types(&data), ChartType::ALL.to_vec());
    }

    #[test]
    fn test_negative_values_disable_pie_and_radial() {
        let data = dataset(&["x"], &[], vec![row(&[("x", -1.0)])]);
        assert!(!is_chart_type_available(&data, ChartType::Radial));
        assert!(!is_chart_type_available(&data, ChartType::Pie));
        assert!(is_chart_type_available(&data, ChartType::Bar));
    }

    #[test]
    fn test_category_options_deduplicate() {
        let data = dataset(&["n"], &["b", "a"], vec![]);
        assert_eq!(category_options(&data), vec!["b", "a", "n"]);
    }

    #[test]
    fn test_chart_type_switch_and_value_toggle() {
        let mut settings = ChartSettings {
            chart_type: ChartType::Bar,
            variant: ChartVariant::Horizontal,
            category_column: "m".to_string(),
            value_columns: vec!["a".to_string()],
        };

        assert!(!settings.toggle_value_column("a"));
        assert!(settings.toggle_value_column("b"));
        assert!(settings.toggle_value_column("a"));
        assert_eq!(settings.value_columns, vec!["b"]);

        let settings = settings.with_chart_type(ChartType::Line);
        assert_eq!(settings.variant, ChartVariant::Default);
        let settings = settings.with_chart_type(ChartType::Radar);
        assert_eq!(settings.chart_type, ChartType::Radar);
    }
}
