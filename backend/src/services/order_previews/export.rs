use actix_web::{web, HttpResponse, Responder};
use common::model::order_preview::OrderPreviewDetailPayload;
use common::model::ApiMessage;

use crate::services::xlsx_attachment;
use crate::sheet::{self, SheetRecord};

/// Actix handler for `GET /api/order-previews/format`: the blank 3-column
/// template, `order_details_format.xlsx`.
pub async fn format() -> impl Responder {
    match sheet::write::template(&<OrderPreviewDetailPayload as SheetRecord>::SCHEMA) {
        Ok(bytes) => xlsx_attachment("order_details_format.xlsx", bytes),
        Err(e) => {
            HttpResponse::InternalServerError().body(format!("Error building template: {}", e))
        }
    }
}

/// Actix handler for `GET /api/order-previews/{order_id}/export`.
pub async fn details(order_id: web::Path<String>) -> impl Responder {
    match export_details(&order_id).await {
        Ok(bytes) => xlsx_attachment(&format!("order_details_{}.xlsx", order_id), bytes),
        Err(message) => HttpResponse::NotFound().json(ApiMessage { message }),
    }
}

async fn export_details(order_id: &str) -> Result<Vec<u8>, String> {
    let rows = super::get::fetch_details(order_id).await?;
    if rows.is_empty() {
        return Err("No order details to download.".to_string());
    }

    let records: Vec<OrderPreviewDetailPayload> = rows
        .into_iter()
        .map(|d| OrderPreviewDetailPayload {
            medical_center: d.medical_center,
            patient_name: d.patient_name,
            nomenclature: d.nomenclature,
        })
        .collect();

    sheet::write::with_records(&records).map_err(|e| e.to_string())
}
