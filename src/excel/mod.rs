//! Excel read/write for the DKKB workflow
//!
//! - Inspect: .xlsx → non-empty rows of a fixed window (calamine, cached values only)
//! - Template: literal REALISASI report layout → .xlsx (rust_xlsxwriter)

mod inspector;
mod template;

pub use inspector::{scan_range, WorkbookInspector};
pub use template::{
    template_rows, TemplateGenerator, COLUMN_HEADERS, COLUMN_WIDTHS, DEFAULT_TEMPLATE_OUTPUT,
    HEADER_ROW, TEMPLATE_SHEET_NAME,
};
