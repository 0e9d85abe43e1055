use crate::sheet::{error::ImportError, Grid};

/// The expected shape of one import kind: the worksheet name used on the
/// export path and the ordered list of column headers.
///
/// Validation is a strict positional contract: column count and
/// case-insensitive trimmed name must match index by index. No reordering,
/// no subset matching, no fuzzy matching.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSchema {
    pub sheet_name: &'static str,
    pub columns: &'static [&'static str],
}

impl ColumnSchema {
    /// The header list as shown to the user in mismatch messages,
    /// e.g. `N° | CENTRE MEDICAL | ...`.
    pub fn expected(&self) -> String {
        self.columns.join(" | ")
    }

    /// Checks the grid's header row against this schema.
    ///
    /// Fails with [`ImportError::Structure`] when the grid has fewer than two
    /// rows (header plus at least one data row), and with
    /// [`ImportError::HeaderMismatch`] when any position differs.
    pub fn validate(&self, grid: &Grid) -> Result<(), ImportError> {
        if grid.len() < 2 {
            return Err(ImportError::Structure);
        }

        let header = &grid[0];
        let matches = self.columns.iter().enumerate().all(|(idx, expected)| {
            header.get(idx).is_some_and(|cell| {
                !cell.is_empty()
                    && cell.as_text().trim().to_lowercase() == expected.to_lowercase()
            })
        });

        if matches {
            Ok(())
        } else {
            Err(ImportError::HeaderMismatch {
                expected: self.expected(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::CellValue;

    const ABC: ColumnSchema = ColumnSchema {
        sheet_name: "Abc",
        columns: &["A", "B", "C"],
    };

    fn text_row(cells: &[&str]) -> Vec<CellValue> {
        cells.iter().map(|s| CellValue::Text(s.to_string())).collect()
    }

    #[test]
    fn accepts_case_insensitive_trimmed_header() {
        let grid = vec![text_row(&["a", " B ", "c"]), text_row(&["1", "2", "3"])];
        assert!(ABC.validate(&grid).is_ok());
    }

    #[test]
    fn rejects_single_position_mismatch() {
        // C != D even though the first two columns line up.
        let grid = vec![text_row(&["a", " B ", "D"]), text_row(&["1", "2", "3"])];
        assert!(matches!(
            ABC.validate(&grid),
            Err(ImportError::HeaderMismatch { .. })
        ));
    }

    #[test]
    fn rejects_reordered_header() {
        let grid = vec![text_row(&["B", "A", "C"]), text_row(&["1", "2", "3"])];
        assert!(ABC.validate(&grid).is_err());
    }

    #[test]
    fn rejects_missing_column() {
        let grid = vec![text_row(&["A", "B"]), text_row(&["1", "2"])];
        assert!(matches!(
            ABC.validate(&grid),
            Err(ImportError::HeaderMismatch { .. })
        ));
    }

    #[test]
    fn rejects_empty_header_cell() {
        let grid = vec![
            vec![
                CellValue::Text("A".into()),
                CellValue::Empty,
                CellValue::Text("C".into()),
            ],
            text_row(&["1", "2", "3"]),
        ];
        assert!(ABC.validate(&grid).is_err());
    }

    #[test]
    fn rejects_grid_without_data_rows() {
        let grid = vec![text_row(&["A", "B", "C"])];
        assert!(matches!(ABC.validate(&grid), Err(ImportError::Structure)));
        assert!(matches!(ABC.validate(&vec![]), Err(ImportError::Structure)));
    }

    #[test]
    fn expected_string_lists_columns_in_order() {
        assert_eq!(ABC.expected(), "A | B | C");
    }
}
