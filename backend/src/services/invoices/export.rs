use actix_web::{web, HttpResponse, Responder};
use common::model::invoice::InvoiceDetailPayload;
use common::model::ApiMessage;

use crate::services::xlsx_attachment;
use crate::sheet::{self, SheetRecord};

/// Actix handler for `GET /api/invoices/format`: the blank import template,
/// `invoice_details_format.xlsx`, sheet `InvoiceDetails`.
pub async fn format() -> impl Responder {
    match sheet::write::template(&<InvoiceDetailPayload as SheetRecord>::SCHEMA) {
        Ok(bytes) => xlsx_attachment("invoice_details_format.xlsx", bytes),
        Err(e) => {
            HttpResponse::InternalServerError().body(format!("Error building template: {}", e))
        }
    }
}

/// Actix handler for `GET /api/invoices/{invoice_id}/export`.
pub async fn details(invoice_id: web::Path<String>) -> impl Responder {
    match export_details(&invoice_id).await {
        Ok(bytes) => xlsx_attachment(&format!("invoice_details_{}.xlsx", invoice_id), bytes),
        Err(message) => HttpResponse::NotFound().json(ApiMessage { message }),
    }
}

async fn export_details(invoice_id: &str) -> Result<Vec<u8>, String> {
    let rows = super::get::fetch_details(invoice_id).await?;
    if rows.is_empty() {
        return Err("No invoice details to download.".to_string());
    }

    let records: Vec<InvoiceDetailPayload> = rows
        .into_iter()
        .map(|d| InvoiceDetailPayload {
            demande: d.demande,
            name_patient: d.name_patient,
            date_prel: d.date_prel,
            ref_patient: d.ref_patient,
            montant: d.montant,
            unknow: d.unknow,
        })
        .collect();

    sheet::write::with_records(&records).map_err(|e| e.to_string())
}
