use actix_web::{web, HttpResponse, Responder};
use common::model::ApiMessage;
use rusqlite::{params, Connection};
use log::info;

use crate::db;

/// Actix handler for `DELETE /api/orders/{order_id}`. Deletes are soft: the
/// order and its details are marked inactive and disappear from listings.
pub async fn process(order_id: web::Path<String>) -> impl Responder {
    match deactivate_order(&order_id).await {
        Ok(true) => HttpResponse::Ok().json(ApiMessage {
            message: "Order deleted successfully.".to_string(),
        }),
        Ok(false) => HttpResponse::NotFound().json(ApiMessage {
            message: "Order not found.".to_string(),
        }),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error deleting order: {}", e)),
    }
}

async fn deactivate_order(order_id: &str) -> Result<bool, String> {
    let conn = Connection::open(db::DB_PATH).map_err(|e| e.to_string())?;
    let now = db::now();

    let updated = conn
        .execute(
            "UPDATE orders SET is_active = 0, updated_at = ?1
             WHERE order_id = ?2 AND is_active = 1",
            params![now, order_id],
        )
        .map_err(|e| e.to_string())?;

    if updated == 0 {
        return Ok(false);
    }

    conn.execute(
        "UPDATE order_details SET is_active = 0, updated_at = ?1 WHERE order_id = ?2",
        params![now, order_id],
    )
    .map_err(|e| e.to_string())?;

    info!("order {} deactivated", order_id);
    Ok(true)
}
