//! Workbook inspector - scans a window of a sheet for non-empty rows

use crate::error::{DkkbError, DkkbResult};
use crate::types::{CellValue, RowRecord, ScanWindow};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use chrono::NaiveTime;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Read-only view over an .xlsx workbook.
///
/// calamine only exposes the cached result of formula cells, so the scan sees
/// values exactly as Excel last computed them; nothing is re-evaluated.
pub struct WorkbookInspector {
    path: PathBuf,
}

impl WorkbookInspector {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// List sheet names in workbook order
    pub fn sheet_names(&self) -> DkkbResult<Vec<String>> {
        let workbook = self.open()?;
        Ok(workbook.sheet_names().to_vec())
    }

    /// Scan `window` of `sheet` and return the rows holding at least one
    /// non-empty cell, in ascending row order.
    pub fn scan(&self, sheet: &str, window: ScanWindow) -> DkkbResult<Vec<RowRecord>> {
        let mut workbook = self.open()?;

        let available = workbook.sheet_names().to_vec();
        if !available.iter().any(|name| name == sheet) {
            return Err(DkkbError::SheetNotFound {
                sheet: sheet.to_string(),
                available,
            });
        }

        let range = workbook
            .worksheet_range(sheet)
            .map_err(|e| DkkbError::Workbook(format!("Failed to read sheet '{}': {}", sheet, e)))?;

        debug!(
            sheet,
            start = ?range.start(),
            end = ?range.end(),
            "loaded sheet range"
        );

        Ok(scan_range(&range, window))
    }

    fn open(&self) -> DkkbResult<Xlsx<BufReader<File>>> {
        if !self.path.exists() {
            return Err(DkkbError::FileNotFound(self.path.clone()));
        }

        let workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| DkkbError::Workbook(format!("Failed to open Excel file: {}", e)))?;

        info!(path = %self.path.display(), "opened workbook");
        Ok(workbook)
    }
}

/// Scan an already loaded range.
///
/// Coordinates are absolute: a sheet whose used range starts at C4 still has
/// its row 1 at index 0. Cells outside the used range read as empty.
pub fn scan_range(range: &Range<Data>, window: ScanWindow) -> Vec<RowRecord> {
    let mut rows = Vec::new();

    for row in 1..=window.max_row {
        let cells: Vec<Option<CellValue>> = (1..=window.max_col)
            .map(|col| {
                range
                    .get_value((row - 1, u32::from(col) - 1))
                    .and_then(convert_cell)
            })
            .collect();

        let record = RowRecord::new(row, cells);
        if !record.is_empty() {
            rows.push(record);
        }
    }

    debug!(rows = rows.len(), "scan complete");
    rows
}

/// Convert a calamine cell. Empty cells and zero-length strings yield `None`.
fn convert_cell(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) if ndt.time() == NaiveTime::MIN => Some(CellValue::DateTime(
                ndt.date().format("%Y-%m-%d").to_string(),
            )),
            Some(ndt) => Some(CellValue::DateTime(
                ndt.format("%Y-%m-%dT%H:%M:%S").to_string(),
            )),
            None => Some(CellValue::Number(dt.as_f64())),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::DateTime(s.clone())),
        Data::Error(e) => Some(CellValue::Error(e.to_string())),
    }
}
