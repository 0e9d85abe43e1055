use actix_web::{web, HttpResponse, Responder};
use common::model::invoice::UpdatePaidStatus;
use log::info;
use rusqlite::{params, Connection};

use crate::db;

/// Actix handler for `PATCH /api/invoices/{invoice_id}/payment`. Flips the
/// paid flag and returns the updated invoice so the client can replace its
/// row in place.
pub async fn process(
    invoice_id: web::Path<String>,
    payload: web::Json<UpdatePaidStatus>,
) -> impl Responder {
    match update_paid_status(&invoice_id, payload.is_payed).await {
        Ok(invoice) => HttpResponse::Ok().json(invoice),
        Err(e) => HttpResponse::NotFound().body(format!("Error updating paid status: {}", e)),
    }
}

async fn update_paid_status(
    invoice_id: &str,
    is_payed: bool,
) -> Result<common::model::invoice::Invoice, String> {
    let conn = Connection::open(db::DB_PATH).map_err(|e| e.to_string())?;

    let updated = conn
        .execute(
            "UPDATE invoices SET is_payed = ?1, updated_at = ?2
             WHERE invoice_id = ?3 AND is_active = 1",
            params![is_payed, db::now(), invoice_id],
        )
        .map_err(|e| e.to_string())?;

    if updated == 0 {
        return Err("Invoice not found".to_string());
    }

    info!("invoice {} marked is_payed={}", invoice_id, is_payed);
    super::get::fetch_invoice(invoice_id).await
}
