use crate::config::InspectConfig;
use crate::error::DkkbResult;
use crate::excel::{TemplateGenerator, WorkbookInspector, COLUMN_HEADERS, TEMPLATE_SHEET_NAME};
use crate::types::{CellValue, DisplayCell, RowRecord, ScanWindow};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

/// Output format of the inspect command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per non-empty row
    #[default]
    Text,
    /// A single JSON document on stdout
    Json,
}

/// Render one display cell
fn render_cell(cell: &DisplayCell) -> String {
    match cell {
        DisplayCell::Empty => "-".to_string(),
        DisplayCell::Value(CellValue::Text(s)) => format!("{:?}", s),
        DisplayCell::Value(CellValue::Number(n)) => n.to_string(),
        DisplayCell::Value(CellValue::Bool(b)) => b.to_string(),
        DisplayCell::Value(CellValue::DateTime(s)) => s.clone(),
        DisplayCell::Value(CellValue::Error(e)) => e.clone(),
        DisplayCell::Truncated { prefix, .. } => format!("\"{}...\"", prefix.escape_debug()),
    }
}

/// Render one row as `Row   N: [a, b, ...]`
pub fn render_row(record: &RowRecord, limit: usize) -> String {
    let cells: Vec<String> = record.display(limit).iter().map(render_cell).collect();
    format!("Row {:>3}: [{}]", record.row, cells.join(", "))
}

/// Render all rows, one per line
pub fn render_text(rows: &[RowRecord], limit: usize) -> String {
    rows.iter()
        .map(|record| render_row(record, limit))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct InspectReport<'a> {
    workbook: String,
    sheet: &'a str,
    window: ScanWindow,
    rows: Vec<RowReport>,
}

#[derive(Serialize)]
struct RowReport {
    row: u32,
    cells: Vec<DisplayCell>,
}

/// Render the scan result as a pretty-printed JSON document
pub fn render_json(config: &InspectConfig, rows: &[RowRecord]) -> DkkbResult<String> {
    let report = InspectReport {
        workbook: config.workbook.display().to_string(),
        sheet: &config.sheet,
        window: config.window(),
        rows: rows
            .iter()
            .map(|record| RowReport {
                row: record.row,
                cells: record.display(config.truncate_at),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Execute the inspect command
pub fn inspect(config: InspectConfig, format: OutputFormat, verbose: bool) -> DkkbResult<()> {
    config.validate()?;

    if format == OutputFormat::Text {
        println!("{}", "📊 DKKB - Workbook Inspection".bold().green());
        println!("   Workbook: {}", config.workbook.display());
        println!("   Sheet:    {}", config.sheet.bright_blue());
        println!(
            "   Window:   rows 1-{}, columns 1-{}\n",
            config.max_row, config.max_col
        );
    }

    if verbose {
        eprintln!("{}", "📖 Reading Excel file...".cyan());
    }

    let inspector = WorkbookInspector::new(&config.workbook);
    let rows = inspector.scan(&config.sheet, config.window())?;

    match format {
        OutputFormat::Text => {
            if !rows.is_empty() {
                println!("{}", render_text(&rows, config.truncate_at));
            }
            println!(
                "\n{}",
                format!("✅ {} non-empty row(s)", rows.len()).bold().green()
            );
        }
        OutputFormat::Json => {
            println!("{}", render_json(&config, &rows)?);
        }
    }

    Ok(())
}

/// Execute the sheets command - list sheet names
pub fn sheets(file: PathBuf) -> DkkbResult<()> {
    let names = WorkbookInspector::new(&file).sheet_names()?;

    println!("{}", "📊 DKKB - Sheets".bold().green());
    println!("   Workbook: {}\n", file.display());
    for (idx, name) in names.iter().enumerate() {
        println!("   {}. {}", idx + 1, name.bright_blue());
    }

    Ok(())
}

/// Execute the template command
pub fn template(output: PathBuf, verbose: bool) -> DkkbResult<()> {
    if verbose {
        eprintln!("{}", "📝 Building REALISASI template...".cyan());
        eprintln!("   Sheet:   {}", TEMPLATE_SHEET_NAME);
        eprintln!("   Columns: {}", COLUMN_HEADERS.len());
        eprintln!("   Output:  {}\n", output.display());
    }

    TemplateGenerator::new().generate(&output)?;

    println!(
        "{} {}",
        "✅ Template Excel file created successfully at:".bold().green(),
        output.display()
    );

    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
