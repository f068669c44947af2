//! DKKB Realisasi - budget workbook inspection and report template generation
//!
//! Two independent operations over Excel .xlsx files:
//!
//! - **Inspect** an existing DKKB budget workbook: scan a window of a sheet
//!   and report every row holding at least one non-empty cell.
//! - **Generate** the blank realization (REALISASI) report template with its
//!   fixed header rows, column widths and header styling.
//!
//! # Example
//!
//! ```no_run
//! use dkkb_realisasi::config::InspectConfig;
//! use dkkb_realisasi::excel::{TemplateGenerator, WorkbookInspector};
//! use std::path::Path;
//!
//! TemplateGenerator::new().generate(Path::new("template.xlsx"))?;
//!
//! let config = InspectConfig::default();
//! let rows = WorkbookInspector::new("template.xlsx").scan("REALISASI", config.window())?;
//! for row in &rows {
//!     println!("{}: {} cells", row.row, row.cells.len());
//! }
//! # Ok::<(), dkkb_realisasi::error::DkkbError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod types;

// Re-export commonly used types
pub use error::{DkkbError, DkkbResult};
pub use types::{CellValue, DisplayCell, RowRecord, ScanWindow};
