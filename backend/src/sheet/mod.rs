//! Spreadsheet import/export pipeline shared by the order, invoice and
//! order-preview services.
//!
//! The pipeline is a single synchronous pass over an uploaded workbook:
//!
//! 1. `read` decodes the first sheet of an `.xls`/`.xlsx` byte buffer into a
//!    [`Grid`] of typed cells (row 0 is the header row).
//! 2. `schema` checks the header row against the expected column list of the
//!    target record, positionally and case-insensitively. A single mismatch
//!    rejects the whole file.
//! 3. `map` converts every remaining non-blank row into one typed record.
//!    Blank or short rows are skipped silently; the first coercion failure
//!    aborts the entire import with zero records retained.
//! 4. `write` is the inverse path: it serializes a header template or a list
//!    of records back into an in-memory xlsx buffer for download.
//!
//! The grid and the mapped records are owned by the request that triggered
//! the import and are never persisted or shared.

pub mod error;
pub mod map;
pub mod read;
pub mod records;
pub mod schema;
pub mod write;

use chrono::NaiveDate;

pub use error::ImportError;
pub use map::{import_rows, SheetRecord};
pub use schema::ColumnSchema;

/// A decoded worksheet: ordered rows of ordered cells, header row included.
pub type Grid = Vec<Vec<CellValue>>;

/// A single cell, decided at read time so the row mapper works on a closed
/// set of cases instead of inspecting runtime types.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Empty,
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// The cell's string form: numbers drop a trailing `.0`, dates render as
    /// `YYYY-MM-DD`, empty cells become the empty string.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_cells_render_without_trailing_zero() {
        assert_eq!(CellValue::Number(42.0).as_text(), "42");
        assert_eq!(CellValue::Number(42.5).as_text(), "42.5");
    }

    #[test]
    fn date_cells_render_iso() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(CellValue::Date(d).as_text(), "2024-03-07");
    }

    #[test]
    fn empty_cell_renders_empty_string() {
        assert!(CellValue::Empty.is_empty());
        assert_eq!(CellValue::Empty.as_text(), "");
    }
}
