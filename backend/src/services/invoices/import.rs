use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::model::invoice::InvoiceDetailPayload;
use common::model::{ApiMessage, ImportReport};
use log::{info, warn};

use crate::services::read_upload;
use crate::sheet;

/// Actix handler for `POST /api/invoices/import`. The invoice schema is the
/// one import with a date column: spreadsheet date cells in `date_prel` are
/// normalized to `YYYY-MM-DD` during mapping.
pub async fn process(payload: Multipart) -> impl Responder {
    match import_details(payload).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(message) => HttpResponse::BadRequest().json(ApiMessage { message }),
    }
}

async fn import_details(payload: Multipart) -> Result<ImportReport<InvoiceDetailPayload>, String> {
    let upload = read_upload(payload).await?;
    let file_name = upload.file_name;

    let details = web::block(move || {
        let grid = sheet::read::read_grid(&upload.bytes)?;
        sheet::import_rows::<InvoiceDetailPayload>(&grid)
    })
    .await
    .map_err(|e| e.to_string())?
    .map_err(|e| e.to_string())?;

    let warning = if details.is_empty() {
        warn!("invoice import '{}' yielded no usable rows", file_name);
        Some("No valid data found in the Excel file after the header.".to_string())
    } else {
        info!(
            "invoice import '{}': {} details loaded",
            file_name,
            details.len()
        );
        None
    };

    Ok(ImportReport {
        message: format!("{} details loaded from Excel.", details.len()),
        upload_file: file_name,
        details,
        warning,
    })
}
