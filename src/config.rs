//! Inspector configuration
//!
//! Defaults reproduce the fixed DKKB workflow (`DKKB DAN REALISASI.xlsx`,
//! sheet `DKKB 2025`, rows 1-50, columns 1-19, 50-character display limit).
//! A YAML file may override any subset of fields; command-line flags override
//! the file.

use crate::error::{DkkbError, DkkbResult};
use crate::types::ScanWindow;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_WORKBOOK: &str = "DKKB DAN REALISASI.xlsx";
pub const DEFAULT_SHEET: &str = "DKKB 2025";
pub const DEFAULT_MAX_ROW: u32 = 50;
pub const DEFAULT_MAX_COL: u16 = 19;
pub const DEFAULT_TRUNCATE_AT: usize = 50;

/// Grid limits of the xlsx format
pub const EXCEL_MAX_ROWS: u32 = 1_048_576;
pub const EXCEL_MAX_COLS: u16 = 16_384;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InspectConfig {
    pub workbook: PathBuf,
    pub sheet: String,
    pub max_row: u32,
    pub max_col: u16,
    pub truncate_at: usize,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            workbook: PathBuf::from(DEFAULT_WORKBOOK),
            sheet: DEFAULT_SHEET.to_string(),
            max_row: DEFAULT_MAX_ROW,
            max_col: DEFAULT_MAX_COL,
            truncate_at: DEFAULT_TRUNCATE_AT,
        }
    }
}

impl InspectConfig {
    /// Load a config file. Missing keys keep their defaults.
    pub fn from_yaml_file(path: &Path) -> DkkbResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> DkkbResult<Self> {
        let config: InspectConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn window(&self) -> ScanWindow {
        ScanWindow::new(self.max_row, self.max_col)
    }

    pub fn validate(&self) -> DkkbResult<()> {
        if self.sheet.trim().is_empty() {
            return Err(DkkbError::Config("sheet name must not be empty".to_string()));
        }
        if self.max_row == 0 || self.max_row > EXCEL_MAX_ROWS {
            return Err(DkkbError::Config(format!(
                "max_row must be between 1 and {}, got {}",
                EXCEL_MAX_ROWS, self.max_row
            )));
        }
        if self.max_col == 0 || self.max_col > EXCEL_MAX_COLS {
            return Err(DkkbError::Config(format!(
                "max_col must be between 1 and {}, got {}",
                EXCEL_MAX_COLS, self.max_col
            )));
        }
        if self.truncate_at == 0 {
            return Err(DkkbError::Config(
                "truncate_at must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
