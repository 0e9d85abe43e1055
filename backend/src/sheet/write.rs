//! Serializes records back into a downloadable xlsx buffer.

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::sheet::{CellValue, ColumnSchema, SheetRecord};

/// A blank import template: one sheet named per the schema, header row only,
/// columns verbatim in declared order.
pub fn template(schema: &ColumnSchema) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(schema.sheet_name)?;
    write_header(worksheet, schema)?;
    workbook.save_to_buffer()
}

/// A populated export: header row first, then one row per record in input
/// order. No reordering, no filtering.
pub fn with_records<T: SheetRecord>(records: &[T]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(T::SCHEMA.sheet_name)?;
    write_header(worksheet, &T::SCHEMA)?;

    for (idx, record) in records.iter().enumerate() {
        let row = (idx + 1) as u32;
        for (col, cell) in record.to_row().iter().enumerate() {
            write_cell(worksheet, row, col as u16, cell)?;
        }
    }

    workbook.save_to_buffer()
}

fn write_header(worksheet: &mut Worksheet, schema: &ColumnSchema) -> Result<(), XlsxError> {
    for (col, name) in schema.columns.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name)?;
    }
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
) -> Result<(), XlsxError> {
    match cell {
        CellValue::Text(s) => {
            worksheet.write_string(row, col, s)?;
        }
        CellValue::Number(n) => {
            worksheet.write_number(row, col, *n)?;
        }
        CellValue::Date(d) => {
            worksheet.write_string(row, col, d.format("%Y-%m-%d").to_string())?;
        }
        CellValue::Empty => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::read::read_grid;
    use common::model::order::OrderDetailPayload;

    #[test]
    fn blank_template_round_trips_through_the_reader() {
        let schema = <OrderDetailPayload as SheetRecord>::SCHEMA;
        let bytes = template(&schema).unwrap();

        let grid = read_grid(&bytes).unwrap();
        let header: Vec<String> = grid[0].iter().map(|c| c.as_text()).collect();
        assert_eq!(header, schema.columns);
    }

    #[test]
    fn populated_export_round_trips_records() {
        let details = vec![
            OrderDetailPayload {
                number: 1,
                centre_medical: "ClinicA".into(),
                ref_patient: "P001".into(),
                name_patient: "Doe John".into(),
                ref_analyze: "A01".into(),
                nomenclature_examen: "Glucose".into(),
                code: "G1".into(),
            },
            OrderDetailPayload {
                number: 2,
                centre_medical: "ClinicB".into(),
                ref_patient: "P002".into(),
                name_patient: "Roe Jane".into(),
                ref_analyze: "A02".into(),
                nomenclature_examen: "Hemogram".into(),
                code: "H1".into(),
            },
        ];

        let bytes = with_records(&details).unwrap();
        let reimported: Vec<OrderDetailPayload> =
            crate::sheet::import_rows(&read_grid(&bytes).unwrap()).unwrap();
        assert_eq!(reimported, details);
    }

    #[test]
    fn saved_workbook_opens_from_disk_with_declared_sheet_name() {
        use calamine::{open_workbook_auto, Reader};

        let schema = <OrderDetailPayload as SheetRecord>::SCHEMA;
        let bytes = template(&schema).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order_details_format.xlsx");
        std::fs::write(&path, &bytes).unwrap();

        let workbook = open_workbook_auto(&path).unwrap();
        assert_eq!(workbook.sheet_names(), vec![schema.sheet_name.to_string()]);
    }
}
