//! HTTP services of the console, one module per entity. Each module wires
//! its routes with a `configure_routes() -> Scope` and keeps one file per
//! endpoint, with a thin `process` handler delegating to a fallible
//! function.

use actix_multipart::Multipart;
use actix_web::HttpResponse;
use futures_util::StreamExt;

pub mod invoices;
pub mod order_previews;
pub mod orders;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// One uploaded workbook, read fully into memory.
pub(crate) struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Drains a multipart payload expecting exactly one `file` field holding an
/// `.xls`/`.xlsx` workbook. Zero or several files is a client error; the UI
/// enforces single-select but the boundary is checked here regardless.
pub(crate) async fn read_upload(mut payload: Multipart) -> Result<Upload, String> {
    let mut upload: Option<Upload> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| e.to_string())?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        if name.as_deref() != Some("file") {
            continue;
        }
        if upload.is_some() {
            return Err("Only one file can be uploaded at a time.".to_string());
        }

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();

        if !(file_name.ends_with(".xlsx") || file_name.ends_with(".xls")) {
            return Err("The file must be an Excel workbook (.xlsx or .xls).".to_string());
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk.map_err(|e| e.to_string())?);
        }

        upload = Some(Upload { file_name, bytes });
    }

    upload.ok_or_else(|| "An Excel file is required.".to_string())
}

/// Wraps export bytes in a download response with a fixed file name.
pub(crate) fn xlsx_attachment(file_name: &str, bytes: Vec<u8>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(XLSX_MIME)
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", file_name),
        ))
        .body(bytes)
}

#[cfg(test)]
mod tests {
    use common::model::order::OrderDetailPayload;
    use common::model::order_preview::CreateOrderPreviewPayload;
    use common::model::ImportReport;

    #[test]
    fn import_report_omits_warning_when_none() {
        let report: ImportReport<OrderDetailPayload> = ImportReport {
            message: "File processed successfully.".to_string(),
            upload_file: "orders.xlsx".to_string(),
            details: vec![],
            warning: None,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("warning").is_none());
        assert_eq!(json["upload_file"], "orders.xlsx");
    }

    #[test]
    fn import_report_carries_warning_when_set() {
        let report: ImportReport<OrderDetailPayload> = ImportReport {
            message: "File processed successfully.".to_string(),
            upload_file: "orders.xlsx".to_string(),
            details: vec![],
            warning: Some("No valid data found in the Excel file after the header.".to_string()),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["warning"],
            "No valid data found in the Excel file after the header."
        );
    }

    #[test]
    fn preview_create_payload_uses_camel_case_details_key() {
        let payload = CreateOrderPreviewPayload {
            date: "2024-03-07".to_string(),
            description: "week 1".to_string(),
            year: 2024,
            month: 3,
            week: 1,
            order_details: vec![],
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("orderDetails").is_some());
        assert!(json.get("order_details").is_none());
    }
}
