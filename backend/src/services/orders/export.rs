use actix_web::{web, HttpResponse, Responder};
use common::model::order::OrderDetailPayload;
use common::model::ApiMessage;

use crate::services::xlsx_attachment;
use crate::sheet::{self, SheetRecord};

/// Actix handler for `GET /api/orders/format`: the blank 7-column import
/// template, `order_details_format.xlsx`.
pub async fn format() -> impl Responder {
    match sheet::write::template(&<OrderDetailPayload as SheetRecord>::SCHEMA) {
        Ok(bytes) => xlsx_attachment("order_details_format.xlsx", bytes),
        Err(e) => {
            HttpResponse::InternalServerError().body(format!("Error building template: {}", e))
        }
    }
}

/// Actix handler for `GET /api/orders/{order_id}/export`: the order's
/// detail rows as `order_details_<id>.xlsx`, in stored order.
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

    let records: Vec<OrderDetailPayload> = rows
        .into_iter()
        .map(|d| OrderDetailPayload {
            number: d.number,
            centre_medical: d.centre_medical,
            ref_patient: d.ref_patient,
            name_patient: d.name_patient,
            ref_analyze: d.ref_analyze,
            nomenclature_examen: d.nomenclature_examen,
            code: d.code,
        })
        .collect();

    sheet::write::with_records(&records).map_err(|e| e.to_string())
}
