use charter_lib::{
    available_chart_types, calculate_y_axis_domain, default_settings, AppError, CellValue,
    ChartType, FileIngestionUseCase,
};

fn ingest(file_name: &str, content: &str) -> charter_lib::Result<charter_lib::ParsedDataset> {
    FileIngestionUseCase::default().parse_bytes(file_name, content.as_bytes().to_vec())
}

#[test]
fn every_data_line_becomes_a_row() {
    let dataset = ingest("sales.csv", "month,sales\nJan,1\nFeb,2\nMar,3\nApr,4\n").unwrap();
    assert_eq!(dataset.row_count(), 4);
    for row in &dataset.rows {
        assert_eq!(row.len(), dataset.headers.len());
    }
}

#[test]
fn columns_are_partitioned_in_header_order() {
    let dataset = ingest("mixed.csv", "a,b,c,d\nx,1,y,2\nz,3,w,4\n").unwrap();
    assert_eq!(dataset.numeric_columns, vec!["b", "d"]);
    assert_eq!(dataset.categorical_columns, vec!["a", "c"]);
}

#[test]
fn unsupported_extension_is_rejected() {
    let err = ingest("report.pdf", "anything").unwrap_err();
    assert!(matches!(err, AppError::UnsupportedFormat(_)));
    assert_eq!(
        err.to_string(),
        "Unsupported file format. Please use CSV or Excel files."
    );
}

#[test]
fn header_only_csv_is_rejected() {
    for content in ["", "a,b"] {
        let err = ingest("t.csv", content).unwrap_err();
        assert_eq!(
            err.to_string(),
            "CSV file must have at least a header row and one data row."
        );
    }
}

#[test]
fn version_strings_are_not_numbers() {
    assert_eq!(charter_lib::parse_currency("v2.3"), None);
    assert!(!charter_lib::is_numeric("v2.3"));
    assert_eq!(charter_lib::parse_currency("€ 12"), Some(12.0));
}

#[test]
fn majority_numeric_column_coerces_outliers_to_zero() {
    let csv = "id,score\na,10\nb,20\nc,N/A\nd,30\ne,N/A\nf,40\n";
    let dataset = ingest("scores.csv", csv).unwrap();

    assert!(dataset.is_numeric_column("score"));
    let scores: Vec<f64> = dataset.numeric_values("score").collect();
    assert_eq!(scores, vec![10.0, 20.0, 0.0, 30.0, 0.0, 40.0]);
}

#[test]
fn free_text_column_is_categorical() {
    let csv = "note,qty\nhello,1\nworld,2\n12,3\n";
    let dataset = ingest("notes.csv", csv).unwrap();

    assert_eq!(dataset.categorical_columns, vec!["note"]);
    assert_eq!(dataset.rows[2]["note"], CellValue::Text("12".to_string()));
}

#[test]
fn currency_report_is_chart_ready() {
    let csv = "name,amount\nWidget,$1,234.56\nGadget,(45.00)\n";
    let dataset = ingest("report.csv", csv).unwrap();

    assert_eq!(dataset.rows[0]["amount"], CellValue::Number(1234.56));
    assert_eq!(dataset.rows[1]["amount"], CellValue::Number(-45.0));

    let settings = default_settings(&dataset);
    assert_eq!(settings.category_column, "name");
    assert_eq!(settings.value_columns, vec!["amount"]);

    // negative amount rules out the pie and radial charts
    let types = available_chart_types(&dataset);
    assert!(types.contains(&ChartType::Bar));
    assert!(!types.contains(&ChartType::Pie));
    assert!(!types.contains(&ChartType::Radial));

    let (min, max) = calculate_y_axis_domain(&dataset.rows, &settings.value_columns, 0.05);
    assert!(min <= -45.0 && max >= 1234.56);
}

#[test]
fn dataset_serializes_with_camel_case_keys() {
    let dataset = ingest("s.csv", "city,pop\nOslo,700\n").unwrap();
    let json = serde_json::to_value(&dataset).unwrap();

    assert_eq!(json["headers"], serde_json::json!(["city", "pop"]));
    assert_eq!(json["numericColumns"], serde_json::json!(["pop"]));
    assert_eq!(json["categoricalColumns"], serde_json::json!(["city"]));
    assert_eq!(json["rows"][0]["pop"], 700.0);
    assert_eq!(json["rows"][0]["city"], "Oslo");
}
