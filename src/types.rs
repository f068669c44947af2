use serde::Serialize;

//==============================================================================
// Cell values
//==============================================================================

/// A non-empty cell value as read from a worksheet.
///
/// Emptiness is modelled as `Option<CellValue>::None`, so every variant here
/// carries something worth printing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    /// Cached date/time value rendered as ISO-8601
    DateTime(String),
    /// Cached Excel error such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// How a single cell is shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DisplayCell {
    Empty,
    Value(CellValue),
    /// Text longer than the display limit. `prefix` holds the first
    /// `limit` characters.
    Truncated { prefix: String, original_len: usize },
}

impl DisplayCell {
    /// Classify a cell for display. Only text is ever truncated, and the limit
    /// counts characters rather than bytes.
    pub fn from_cell(cell: Option<&CellValue>, limit: usize) -> Self {
        match cell {
            None => DisplayCell::Empty,
            Some(CellValue::Text(s)) => {
                let len = s.chars().count();
                if len > limit {
                    DisplayCell::Truncated {
                        prefix: s.chars().take(limit).collect(),
                        original_len: len,
                    }
                } else {
                    DisplayCell::Value(CellValue::Text(s.clone()))
                }
            }
            Some(other) => DisplayCell::Value(other.clone()),
        }
    }
}

//==============================================================================
// Scan window and row records
//==============================================================================

/// Inclusive, 1-based bounds of the inspected area: rows `1..=max_row`,
/// columns `1..=max_col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanWindow {
    pub max_row: u32,
    pub max_col: u16,
}

impl ScanWindow {
    pub fn new(max_row: u32, max_col: u16) -> Self {
        Self { max_row, max_col }
    }
}

/// One scanned row: its 1-based index and one slot per scanned column.
#[derive(Debug, Clone, PartialEq)]
pub struct RowRecord {
    pub row: u32,
    pub cells: Vec<Option<CellValue>>,
}

impl RowRecord {
    pub fn new(row: u32, cells: Vec<Option<CellValue>>) -> Self {
        Self { row, cells }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Cell at a 1-based column index
    pub fn cell(&self, col: u16) -> Option<&CellValue> {
        let idx = usize::from(col).checked_sub(1)?;
        self.cells.get(idx).and_then(Option::as_ref)
    }

    pub fn display(&self, limit: usize) -> Vec<DisplayCell> {
        self.cells
            .iter()
            .map(|cell| DisplayCell::from_cell(cell.as_ref(), limit))
            .collect()
    }
}
