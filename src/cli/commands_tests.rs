use super::*;
use crate::config::InspectConfig;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn text(s: &str) -> Option<CellValue> {
    Some(CellValue::Text(s.to_string()))
}

// =========================================================================
// Number Rendering Tests
// =========================================================================

fn number(n: f64) -> String {
    render_cell(&DisplayCell::Value(CellValue::Number(n)))
}

#[test]
fn test_render_number_whole_values() {
    assert_eq!(number(100.0), "100");
    assert_eq!(number(0.0), "0");
    assert_eq!(number(-50.0), "-50");
    assert_eq!(number(1_500_000.0), "1500000");
}

#[test]
fn test_render_number_keeps_full_precision() {
    assert_eq!(number(1.23456789), "1.23456789");
    assert_eq!(number(-1e-7), "-0.0000001");
    assert_eq!(number(0.1 + 0.2), "0.30000000000000004");
}

#[test]
fn test_render_number_large_finite_value() {
    let rendered = number(1e303);
    assert_eq!(rendered, format!("1{}", "0".repeat(303)));
    assert_eq!(rendered.parse::<f64>().unwrap(), 1e303);
}

// =========================================================================
// Rendering Tests
// =========================================================================

#[test]
fn test_render_cell_kinds() {
    assert_eq!(render_cell(&DisplayCell::Empty), "-");
    assert_eq!(
        render_cell(&DisplayCell::Value(CellValue::Text("NO".to_string()))),
        "\"NO\""
    );
    assert_eq!(
        render_cell(&DisplayCell::Value(CellValue::Number(12.0))),
        "12"
    );
    assert_eq!(
        render_cell(&DisplayCell::Value(CellValue::Bool(true))),
        "true"
    );
    assert_eq!(
        render_cell(&DisplayCell::Value(CellValue::DateTime(
            "2025-01-31".to_string()
        ))),
        "2025-01-31"
    );
    assert_eq!(
        render_cell(&DisplayCell::Value(CellValue::Error("#DIV/0!".to_string()))),
        "#DIV/0!"
    );
    assert_eq!(
        render_cell(&DisplayCell::Truncated {
            prefix: "abc".to_string(),
            original_len: 9
        }),
        "\"abc...\""
    );
}

#[test]
fn test_render_row_format() {
    let record = RowRecord::new(5, vec![text("BAGIAN"), text(":"), None, Some(CellValue::Number(3.0))]);
    assert_eq!(render_row(&record, 50), "Row   5: [\"BAGIAN\", \":\", -, 3]");
}

#[test]
fn test_render_row_truncates_long_text() {
    let long = "A".repeat(60);
    let record = RowRecord::new(12, vec![Some(CellValue::Text(long))]);
    let expected = format!("Row  12: [\"{}...\"]", "A".repeat(50));
    assert_eq!(render_row(&record, 50), expected);
}

#[test]
fn test_render_row_keeps_text_at_limit() {
    let exact = "B".repeat(50);
    let record = RowRecord::new(1, vec![Some(CellValue::Text(exact.clone()))]);
    assert_eq!(render_row(&record, 50), format!("Row   1: [\"{}\"]", exact));
}

#[test]
fn test_render_text_one_line_per_row() {
    let rows = vec![
        RowRecord::new(2, vec![text("a")]),
        RowRecord::new(5, vec![text("b")]),
        RowRecord::new(40, vec![text("c")]),
    ];
    let output = render_text(&rows, 50);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec!["Row   2: [\"a\"]", "Row   5: [\"b\"]", "Row  40: [\"c\"]"]
    );
}

#[test]
fn test_render_json_document() {
    let config = InspectConfig::default();
    let rows = vec![RowRecord::new(11, vec![text("NO"), None])];

    let json = render_json(&config, &rows).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["sheet"], "DKKB 2025");
    assert_eq!(value["window"]["max_row"], 50);
    assert_eq!(value["window"]["max_col"], 19);
    assert_eq!(value["rows"][0]["row"], 11);
    assert_eq!(value["rows"][0]["cells"][0]["kind"], "value");
    assert_eq!(value["rows"][0]["cells"][0]["value"]["type"], "text");
    assert_eq!(value["rows"][0]["cells"][0]["value"]["value"], "NO");
    assert_eq!(value["rows"][0]["cells"][1]["kind"], "empty");
}

// =========================================================================
// Command Tests
// =========================================================================

#[test]
fn test_inspect_nonexistent_file() {
    let config = InspectConfig {
        workbook: PathBuf::from("nonexistent.xlsx"),
        ..Default::default()
    };
    assert!(inspect(config, OutputFormat::Text, false).is_err());
}

#[test]
fn test_inspect_rejects_invalid_config() {
    let config = InspectConfig {
        max_col: 0,
        ..Default::default()
    };
    let result = inspect(config, OutputFormat::Text, false);
    assert!(matches!(result, Err(crate::DkkbError::Config(_))));
}

#[test]
fn test_template_then_inspect() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("DKKB DAN REALISASI.xlsx");

    template(output.clone(), true).unwrap();
    assert!(output.exists());

    let config = InspectConfig {
        workbook: output.clone(),
        sheet: TEMPLATE_SHEET_NAME.to_string(),
        ..Default::default()
    };
    assert!(inspect(config.clone(), OutputFormat::Text, false).is_ok());
    assert!(inspect(config, OutputFormat::Json, false).is_ok());
    assert!(sheets(output).is_ok());
}

#[test]
fn test_inspect_missing_sheet() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("template.xlsx");
    template(output.clone(), false).unwrap();

    let config = InspectConfig {
        workbook: output,
        sheet: "DKKB 2025".to_string(),
        ..Default::default()
    };
    match inspect(config, OutputFormat::Text, false) {
        Err(crate::DkkbError::SheetNotFound { sheet, available }) => {
            assert_eq!(sheet, "DKKB 2025");
            assert_eq!(available, vec!["REALISASI".to_string()]);
        }
        other => panic!("Expected SheetNotFound, got {:?}", other),
    }
}
