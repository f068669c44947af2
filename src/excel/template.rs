//! Realization report template generator

use crate::error::{DkkbError, DkkbResult};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, FormatAlign, Workbook};
use std::path::Path;
use tracing::{debug, info};

pub const TEMPLATE_SHEET_NAME: &str = "REALISASI";
pub const DEFAULT_TEMPLATE_OUTPUT: &str = "public/DKKB DAN REALISASI.xlsx";

/// 1-based row holding the column headers
pub const HEADER_ROW: u32 = 11;

pub const COLUMN_HEADERS: [&str; 20] = [
    "NO",
    "KODE REKENING",
    "URAIAN",
    "SEBELUM",
    "SETELAH",
    "JUMLAH",
    "PAPBD",
    "JAN",
    "FEB",
    "MAR",
    "APR",
    "MEI",
    "JUN",
    "JUL",
    "AGU",
    "SEP",
    "OKT",
    "NOV",
    "DES",
    "JUMLAH REALISASI",
];

/// Widths for columns A..T, in character units
pub const COLUMN_WIDTHS: [f64; 20] = [
    5.0, 15.0, 40.0, 12.0, 12.0, 12.0, 12.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0,
    10.0, 10.0, 10.0, 12.0,
];

const TITLE_ROWS: [&[&str]; 10] = [
    &["LAPORAN REALISASI ANGGARAN"],
    &[],
    &["TABEL 1 - SEKSI PENGEMBANGAN"],
    &[],
    &["BAGIAN", ":", "SEKSI PENGEMBANGAN"],
    &["SUMBER ANGGARAN", ":", "PAD MURNI"],
    &[
        "PROGRAM",
        ":",
        "PROGRAM PENUNJANG URUSAN PEMERINTAHAN DAERAH PROVINSI",
    ],
    &["Kegiatan", ":", ""],
    &["Sub Kegiatan", ":", ""],
    &[],
];

// Pinned so the saved package does not depend on the wall clock
const CREATED: (u16, u8, u8) = (2025, 1, 1);

/// The literal template rows, row 1 first. Row 11 is [`COLUMN_HEADERS`].
pub fn template_rows() -> Vec<Vec<&'static str>> {
    TITLE_ROWS
        .iter()
        .map(|row| row.to_vec())
        .chain(std::iter::once(COLUMN_HEADERS.to_vec()))
        .collect()
}

/// Builds the blank REALISASI report workbook.
#[derive(Debug, Default)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Format applied to every header cell
    pub fn header_format() -> Format {
        Format::new().set_bold().set_align(FormatAlign::Center)
    }

    /// Build the workbook in memory
    pub fn build(&self) -> DkkbResult<Workbook> {
        let mut workbook = Workbook::new();

        let (year, month, day) = CREATED;
        let created = ExcelDateTime::from_ymd(year, month, day)
            .map_err(|e| DkkbError::Export(format!("Invalid creation date: {}", e)))?;
        workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));

        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(TEMPLATE_SHEET_NAME)
            .map_err(|e| DkkbError::Export(format!("Failed to set worksheet name: {}", e)))?;

        let header_format = Self::header_format();

        for (row_idx, row) in template_rows().iter().enumerate() {
            // Worksheet API is 0-indexed
            let row_num = row_idx as u32;
            let is_header = row_num + 1 == HEADER_ROW;

            for (col_idx, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                let col_num = col_idx as u16;
                if is_header {
                    worksheet
                        .write_string_with_format(row_num, col_num, *value, &header_format)
                        .map_err(|e| DkkbError::Export(format!("Failed to write header: {}", e)))?;
                } else {
                    worksheet
                        .write_string(row_num, col_num, *value)
                        .map_err(|e| DkkbError::Export(format!("Failed to write cell: {}", e)))?;
                }
            }
        }

        for (col_idx, width) in COLUMN_WIDTHS.iter().enumerate() {
            worksheet
                .set_column_width(col_idx as u16, *width)
                .map_err(|e| DkkbError::Export(format!("Failed to set column width: {}", e)))?;
        }

        debug!(
            rows = HEADER_ROW,
            columns = COLUMN_HEADERS.len(),
            "built template worksheet"
        );
        Ok(workbook)
    }

    /// Build and serialize to xlsx bytes
    pub fn to_buffer(&self) -> DkkbResult<Vec<u8>> {
        let mut workbook = self.build()?;
        workbook
            .save_to_buffer()
            .map_err(|e| DkkbError::Export(format!("Failed to serialize workbook: {}", e)))
    }

    /// Build and save to `output`, replacing any existing file. The parent
    /// directory must already exist.
    pub fn generate(&self, output: &Path) -> DkkbResult<()> {
        let mut workbook = self.build()?;
        workbook
            .save(output)
            .map_err(|e| DkkbError::Export(format!("Failed to save Excel file: {}", e)))?;

        info!(path = %output.display(), "saved template");
        Ok(())
    }
}
