//! Decodes an uploaded workbook into a [`Grid`].

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use crate::sheet::{error::ImportError, CellValue, Grid};

/// Reads the first sheet of an `.xls`/`.xlsx` byte buffer into a grid of
/// typed cells, row-major, header row included. Fully empty rows inside the
/// used range are kept; the row mapper is responsible for skipping them.
///
/// Rows come out ragged: calamine pads every row to the used range's width
/// with empty cells, which would make a row with one stray cell look as wide
/// as the header. Trailing empties are stripped so the mapper's short-row
/// skip sees the populated width.
pub fn read_grid(bytes: &[u8]) -> Result<Grid, ImportError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| ImportError::Decode(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ImportError::Decode("the workbook contains no sheets".to_string()))?
        .map_err(|e| ImportError::Decode(e.to_string()))?;

    Ok(range
        .rows()
        .map(|row| {
            let mut cells: Vec<CellValue> = row.iter().map(convert_cell).collect();
            while cells.last().is_some_and(CellValue::is_empty) {
                cells.pop();
            }
            cells
        })
        .collect())
}

/// Collapses calamine's cell type into the pipeline's closed set. Booleans
/// keep their text form; error cells degrade to empty.
fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => {
            if s.is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(s.clone())
            }
        }
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => CellValue::Date(ndt.date()),
            None => CellValue::Empty,
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}

#[cfg(test)]
mod tests {
    use rust_xlsxwriter::Workbook;

    use super::*;
    use crate::sheet::{import_rows, SheetRecord};
    use common::model::order::OrderDetailPayload;
    use common::model::order_preview::OrderPreviewDetailPayload;

    fn workbook_with_rows(schema: &crate::sheet::ColumnSchema, rows: &[&[&str]]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (col, name) in schema.columns.iter().enumerate() {
            worksheet.write_string(0, col as u16, *name).unwrap();
        }
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    worksheet.write_string((r + 1) as u32, c as u16, *value).unwrap();
                }
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn row_with_single_stray_cell_is_skipped_not_mapped() {
        let schema = <OrderPreviewDetailPayload as SheetRecord>::SCHEMA;
        let bytes = workbook_with_rows(
            &schema,
            &[&["x"], &["ClinicA", "Doe John", "Glucose"]],
        );

        let details: Vec<OrderPreviewDetailPayload> =
            import_rows(&read_grid(&bytes).unwrap()).unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].medical_center, "ClinicA");
    }

    #[test]
    fn stray_cell_in_numeric_column_does_not_abort_the_import() {
        let schema = <OrderDetailPayload as SheetRecord>::SCHEMA;
        let bytes = workbook_with_rows(
            &schema,
            &[
                &["1", "ClinicA", "P001", "Doe John", "A01", "Glucose", "G1"],
                &["note"],
            ],
        );

        let details: Vec<OrderDetailPayload> =
            import_rows(&read_grid(&bytes).unwrap()).unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].number, 1);
    }

    #[test]
    fn trailing_empty_cells_are_stripped_from_rows() {
        let schema = <OrderPreviewDetailPayload as SheetRecord>::SCHEMA;
        let bytes = workbook_with_rows(&schema, &[&["x"]]);

        let grid = read_grid(&bytes).unwrap();
        assert_eq!(grid[0].len(), schema.columns.len());
        assert_eq!(grid[1], vec![CellValue::Text("x".to_string())]);
    }
}
