//! Row mapping: turns validated grid rows into typed records.
//!
//! The skip rule and the abort rule are deliberately asymmetric: a row that
//! is too short or entirely blank is dropped silently, while a coercion
//! failure in any row discards the whole batch. Partial imports are never
//! returned.

use chrono::NaiveDate;

use crate::sheet::{error::ImportError, CellValue, ColumnSchema, Grid};

/// A record type that can be mapped from and back to a worksheet row.
pub trait SheetRecord: Sized {
    /// The header schema this record type imports from and exports to.
    const SCHEMA: ColumnSchema;

    /// Positional extraction from one data row. The row is guaranteed to be
    /// at least `SCHEMA.columns.len()` cells wide and not entirely blank.
    /// An `Err` carries the user-facing reason and fails the whole import.
    fn from_row(row: &[CellValue]) -> Result<Self, String>;

    /// The inverse: the record as an ordered row of cells, in schema order.
    fn to_row(&self) -> Vec<CellValue>;
}

/// Maps every data row of a validated grid into a `T`.
///
/// Returns the records in original row order. An empty result is `Ok`: when
/// every data row was blank or short the import proceeds with zero records
/// and the caller decides how to report it.
pub fn import_rows<T: SheetRecord>(grid: &Grid) -> Result<Vec<T>, ImportError> {
    T::SCHEMA.validate(grid)?;

    let width = T::SCHEMA.columns.len();
    let mut records = Vec::new();

    for (idx, row) in grid.iter().enumerate().skip(1) {
        if row.len() < width || row.iter().all(CellValue::is_empty) {
            continue;
        }
        match T::from_row(row) {
            Ok(record) => records.push(record),
            // All-or-nothing: one bad row rejects everything mapped so far.
            Err(reason) => return Err(ImportError::Row { row: idx + 1, reason }),
        }
    }

    Ok(records)
}

/// String field: the cell's text form, empty string when the cell is blank.
pub fn text_field(row: &[CellValue], idx: usize) -> String {
    row.get(idx).map(CellValue::as_text).unwrap_or_default()
}

/// Nullable field: `None` when the cell is blank.
pub fn nullable_field(row: &[CellValue], idx: usize) -> Option<String> {
    match row.get(idx) {
        None | Some(CellValue::Empty) => None,
        Some(cell) => Some(cell.as_text()),
    }
}

/// Integer field: numeric cells are taken verbatim (truncating), textual
/// cells are parsed. Blank cells and unparseable text are errors.
pub fn int_field(row: &[CellValue], idx: usize, column: &str) -> Result<i64, String> {
    match row.get(idx) {
        Some(CellValue::Number(n)) => Ok(*n as i64),
        Some(CellValue::Text(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .or_else(|_| s.parse::<f64>().map(|f| f as i64))
                .map_err(|_| format!("'{}' is not a valid number for '{}'", s, column))
        }
        _ => Err(format!("'{}' is empty or not a number", column)),
    }
}

/// Decimal field, same rules as [`int_field`] without truncation.
pub fn float_field(row: &[CellValue], idx: usize, column: &str) -> Result<f64, String> {
    match row.get(idx) {
        Some(CellValue::Number(n)) => Ok(*n),
        Some(CellValue::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("'{}' is not a valid amount for '{}'", s.trim(), column)),
        _ => Err(format!("'{}' is empty or not a number", column)),
    }
}

/// Date field, normalized to `YYYY-MM-DD`. Spreadsheet date cells convert
/// directly; textual cells must parse as a calendar date. A blank cell maps
/// to the empty string, matching the text-field rule.
pub fn date_field(row: &[CellValue], idx: usize, column: &str) -> Result<String, String> {
    match row.get(idx) {
        None | Some(CellValue::Empty) => Ok(String::new()),
        Some(CellValue::Date(d)) => Ok(d.format("%Y-%m-%d").to_string()),
        Some(CellValue::Text(s)) => parse_date_text(s.trim())
            .map(|d| d.format("%Y-%m-%d").to_string())
            .ok_or_else(|| format!("'{}' is not a valid date for '{}'", s.trim(), column)),
        Some(CellValue::Number(n)) => Err(format!("'{}' is not a valid date for '{}'", n, column)),
    }
}

fn parse_date_text(s: &str) -> Option<NaiveDate> {
    for fmt in ["%Y-%m-%d", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y", "%d/%m/%Y"] {
        if fmt.contains('T') {
            if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, fmt) {
                return Some(dt.date());
            }
        } else if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn text_field_defaults_to_empty_string() {
        let row = vec![t("x"), CellValue::Empty];
        assert_eq!(text_field(&row, 0), "x");
        assert_eq!(text_field(&row, 1), "");
        assert_eq!(text_field(&row, 9), "");
    }

    #[test]
    fn nullable_field_yields_none_for_blank_cell() {
        let row = vec![CellValue::Empty, t("v")];
        assert_eq!(nullable_field(&row, 0), None);
        assert_eq!(nullable_field(&row, 1), Some("v".to_string()));
    }

    #[test]
    fn int_field_accepts_numeric_and_textual_cells() {
        let row = vec![CellValue::Number(42.0), t("42"), t("42.9")];
        assert_eq!(int_field(&row, 0, "n").unwrap(), 42);
        assert_eq!(int_field(&row, 1, "n").unwrap(), 42);
        assert_eq!(int_field(&row, 2, "n").unwrap(), 42);
    }

    #[test]
    fn int_field_rejects_garbage_and_blank() {
        let row = vec![t("abc"), CellValue::Empty];
        assert!(int_field(&row, 0, "n").is_err());
        assert!(int_field(&row, 1, "n").is_err());
    }

    #[test]
    fn float_field_parses_amounts() {
        let row = vec![CellValue::Number(12.5), t("12.5"), t("x")];
        assert_eq!(float_field(&row, 0, "montant").unwrap(), 12.5);
        assert_eq!(float_field(&row, 1, "montant").unwrap(), 12.5);
        assert!(float_field(&row, 2, "montant").is_err());
    }

    #[test]
    fn date_field_normalizes_cells_and_text() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
        let row = vec![CellValue::Date(d), t("2024-02-09"), CellValue::Empty, t("soon")];
        assert_eq!(date_field(&row, 0, "date").unwrap(), "2024-02-09");
        assert_eq!(date_field(&row, 1, "date").unwrap(), "2024-02-09");
        assert_eq!(date_field(&row, 2, "date").unwrap(), "");
        assert!(date_field(&row, 3, "date").is_err());
    }
}
