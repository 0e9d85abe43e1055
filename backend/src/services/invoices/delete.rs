use actix_web::{web, HttpResponse, Responder};
use common::model::ApiMessage;
use log::info;
use rusqlite::{params, Connection};

use crate::db;

/// Soft delete: the invoice stays queryable for audit but is marked
/// inactive together with its details.
pub async fn process(invoice_id: web::Path<String>) -> impl Responder {
    match deactivate_invoice(&invoice_id).await {
        Ok(true) => HttpResponse::Ok().json(ApiMessage {
            message: "Invoice marked as inactive successfully.".to_string(),
        }),
        Ok(false) => HttpResponse::NotFound().json(ApiMessage {
            message: "Invoice not found.".to_string(),
        }),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error deleting invoice: {}", e)),
    }
}

async fn deactivate_invoice(invoice_id: &str) -> Result<bool, String> {
    let conn = Connection::open(db::DB_PATH).map_err(|e| e.to_string())?;
    let now = db::now();

    let updated = conn
        .execute(
            "UPDATE invoices SET is_active = 0, updated_at = ?1
             WHERE invoice_id = ?2 AND is_active = 1",
            params![now, invoice_id],
        )
        .map_err(|e| e.to_string())?;

    if updated == 0 {
        return Ok(false);
    }

    conn.execute(
        "UPDATE invoice_details SET is_active = 0, updated_at = ?1 WHERE invoice_id = ?2",
        params![now, invoice_id],
    )
    .map_err(|e| e.to_string())?;

    info!("invoice {} deactivated", invoice_id);
    Ok(true)
}
