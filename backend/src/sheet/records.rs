//! The three import kinds of the console and their header schemas.

use common::model::invoice::InvoiceDetailPayload;
use common::model::order::OrderDetailPayload;
use common::model::order_preview::OrderPreviewDetailPayload;

use crate::sheet::map::{
    date_field, float_field, int_field, nullable_field, text_field, SheetRecord,
};
use crate::sheet::{CellValue, ColumnSchema};

impl SheetRecord for OrderDetailPayload {
    const SCHEMA: ColumnSchema = ColumnSchema {
        sheet_name: "OrderDetails",
        columns: &[
            "N°",
            "CENTRE MEDICAL",
            "REF PATIENT",
            "NOMS DU PATIENT",
            "REF ANALYSE",
            "NOMENCLATURE DE L'EXAMEN",
            "CODE",
        ],
    };

    fn from_row(row: &[CellValue]) -> Result<Self, String> {
        Ok(OrderDetailPayload {
            number: int_field(row, 0, "N°")?,
            centre_medical: text_field(row, 1),
            ref_patient: text_field(row, 2),
            name_patient: text_field(row, 3),
            ref_analyze: text_field(row, 4),
            nomenclature_examen: text_field(row, 5),
            code: text_field(row, 6),
        })
    }

    fn to_row(&self) -> Vec<CellValue> {
        vec![
            CellValue::Number(self.number as f64),
            CellValue::Text(self.centre_medical.clone()),
            CellValue::Text(self.ref_patient.clone()),
            CellValue::Text(self.name_patient.clone()),
            CellValue::Text(self.ref_analyze.clone()),
            CellValue::Text(self.nomenclature_examen.clone()),
            CellValue::Text(self.code.clone()),
        ]
    }
}

impl SheetRecord for InvoiceDetailPayload {
    const SCHEMA: ColumnSchema = ColumnSchema {
        sheet_name: "InvoiceDetails",
        columns: &[
            "demande",
            "name_patient",
            "date_prel",
            "ref_patient",
            "montant",
            "unknow",
        ],
    };

    fn from_row(row: &[CellValue]) -> Result<Self, String> {
        Ok(InvoiceDetailPayload {
            demande: text_field(row, 0),
            name_patient: text_field(row, 1),
            date_prel: date_field(row, 2, "date_prel")?,
            ref_patient: text_field(row, 3),
            montant: float_field(row, 4, "montant")?,
            unknow: nullable_field(row, 5),
        })
    }

    fn to_row(&self) -> Vec<CellValue> {
        vec![
            CellValue::Text(self.demande.clone()),
            CellValue::Text(self.name_patient.clone()),
            CellValue::Text(self.date_prel.clone()),
            CellValue::Text(self.ref_patient.clone()),
            CellValue::Number(self.montant),
            match &self.unknow {
                Some(v) => CellValue::Text(v.clone()),
                None => CellValue::Empty,
            },
        ]
    }
}

impl SheetRecord for OrderPreviewDetailPayload {
    const SCHEMA: ColumnSchema = ColumnSchema {
        sheet_name: "OrderDetails",
        columns: &["Centre medical", "Name Patient", "Nomenclature"],
    };

    fn from_row(row: &[CellValue]) -> Result<Self, String> {
        Ok(OrderPreviewDetailPayload {
            medical_center: text_field(row, 0),
            patient_name: text_field(row, 1),
            nomenclature: text_field(row, 2),
        })
    }

    fn to_row(&self) -> Vec<CellValue> {
        vec![
            CellValue::Text(self.medical_center.clone()),
            CellValue::Text(self.patient_name.clone()),
            CellValue::Text(self.nomenclature.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{import_rows, Grid, ImportError};

    fn t(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn order_header() -> Vec<CellValue> {
        OrderDetailPayload::SCHEMA
            .columns
            .iter()
            .map(|c| t(c))
            .collect()
    }

    fn order_row(n: f64, rest: [&str; 6]) -> Vec<CellValue> {
        let mut row = vec![CellValue::Number(n)];
        row.extend(rest.iter().map(|s| t(s)));
        row
    }

    #[test]
    fn order_import_maps_rows_and_skips_blank_ones() {
        let grid: Grid = vec![
            order_header(),
            order_row(1.0, ["ClinicA", "P001", "Doe John", "A01", "Glucose", "G1"]),
            vec![CellValue::Empty; 7],
        ];

        let details: Vec<OrderDetailPayload> = import_rows(&grid).unwrap();
        assert_eq!(
            details,
            vec![OrderDetailPayload {
                number: 1,
                centre_medical: "ClinicA".into(),
                ref_patient: "P001".into(),
                name_patient: "Doe John".into(),
                ref_analyze: "A01".into(),
                nomenclature_examen: "Glucose".into(),
                code: "G1".into(),
            }]
        );
    }

    #[test]
    fn short_rows_are_skipped_silently() {
        let grid: Grid = vec![
            order_header(),
            vec![t("x")],
            order_row(2.0, ["C", "P", "N", "A", "E", "K"]),
        ];
        let details: Vec<OrderDetailPayload> = import_rows(&grid).unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].number, 2);
    }

    #[test]
    fn one_bad_row_discards_the_whole_batch() {
        let mut grid: Grid = vec![order_header()];
        for i in 1..=4 {
            grid.push(order_row(i as f64, ["C", "P", "N", "A", "E", "K"]));
        }
        // Row 5 has a non-numeric N°; rows 1-4 must not survive.
        let mut bad = order_row(0.0, ["C", "P", "N", "A", "E", "K"]);
        bad[0] = t("not-a-number");
        grid.push(bad);

        let result: Result<Vec<OrderDetailPayload>, _> = import_rows(&grid);
        assert!(matches!(result, Err(ImportError::Row { row: 6, .. })));
    }

    #[test]
    fn output_preserves_input_row_order() {
        let mut grid: Grid = vec![order_header()];
        for i in [3.0, 1.0, 2.0] {
            grid.push(order_row(i, ["C", "P", "N", "A", "E", "K"]));
        }
        let details: Vec<OrderDetailPayload> = import_rows(&grid).unwrap();
        let numbers: Vec<i64> = details.iter().map(|d| d.number).collect();
        assert_eq!(numbers, vec![3, 1, 2]);
    }

    #[test]
    fn valid_header_with_only_blank_rows_yields_empty_ok() {
        let grid: Grid = vec![order_header(), vec![CellValue::Empty; 7]];
        let details: Vec<OrderDetailPayload> = import_rows(&grid).unwrap();
        assert!(details.is_empty());
    }

    #[test]
    fn invoice_import_coerces_dates_and_amounts() {
        let grid: Grid = vec![
            InvoiceDetailPayload::SCHEMA.columns.iter().map(|c| t(c)).collect(),
            vec![
                t("D-12"),
                t("Doe John"),
                CellValue::Date(chrono::NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()),
                t("P001"),
                CellValue::Number(150.75),
                CellValue::Empty,
            ],
        ];

        let details: Vec<InvoiceDetailPayload> = import_rows(&grid).unwrap();
        assert_eq!(
            details,
            vec![InvoiceDetailPayload {
                demande: "D-12".into(),
                name_patient: "Doe John".into(),
                date_prel: "2024-05-02".into(),
                ref_patient: "P001".into(),
                montant: 150.75,
                unknow: None,
            }]
        );
    }

    #[test]
    fn preview_import_maps_three_columns() {
        let grid: Grid = vec![
            vec![t("centre medical"), t("name patient"), t("NOMENCLATURE")],
            vec![t("ClinicB"), t("Roe Jane"), t("Hemogram")],
        ];
        let details: Vec<OrderPreviewDetailPayload> = import_rows(&grid).unwrap();
        assert_eq!(details[0].medical_center, "ClinicB");
        assert_eq!(details[0].patient_name, "Roe Jane");
        assert_eq!(details[0].nomenclature, "Hemogram");
    }
}
