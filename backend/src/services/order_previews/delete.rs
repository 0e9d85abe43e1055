use actix_web::{web, HttpResponse, Responder};
use common::model::ApiMessage;
use log::info;
use rusqlite::{params, Connection};

use crate::db;

pub async fn process(order_id: web::Path<String>) -> impl Responder {
    match deactivate_preview(&order_id).await {
        Ok(true) => HttpResponse::Ok().json(ApiMessage {
            message: "Order preview deactivated successfully.".to_string(),
        }),
        Ok(false) => HttpResponse::NotFound().json(ApiMessage {
            message: "Order preview not found.".to_string(),
        }),
        Err(e) => {
            HttpResponse::ServiceUnavailable().body(format!("Error deleting preview: {}", e))
        }
    }
}

async fn deactivate_preview(order_id: &str) -> Result<bool, String> {
    let conn = Connection::open(db::DB_PATH).map_err(|e| e.to_string())?;
    let now = db::now();

    let updated = conn
        .execute(
            "UPDATE order_previews SET is_active = 0, updated_at = ?1
             WHERE order_id = ?2 AND is_active = 1",
            params![now, order_id],
        )
        .map_err(|e| e.to_string())?;

    if updated == 0 {
        return Ok(false);
    }

    conn.execute(
        "UPDATE order_preview_details SET is_active = 0, updated_at = ?1 WHERE order_id = ?2",
        params![now, order_id],
    )
    .map_err(|e| e.to_string())?;

    info!("order preview {} deactivated", order_id);
    Ok(true)
}
