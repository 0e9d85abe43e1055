use actix_web::{web, HttpResponse, Responder};
use common::model::order::{Order, OrderDetail};
use common::model::ApiMessage;
use rusqlite::{params, Connection};

use crate::db;

/// Actix handler for `GET /api/orders`. An empty table is a 404 with a
/// message, which the console renders as "no data" rather than an error.
pub async fn list() -> impl Responder {
    match fetch_orders().await {
        Ok(orders) if orders.is_empty() => HttpResponse::NotFound().json(ApiMessage {
            message: "No orders found.".to_string(),
        }),
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error retrieving orders: {}", e)),
    }
}

/// Actix handler for `GET /api/orders/{order_id}/details`.
pub async fn details(order_id: web::Path<String>) -> impl Responder {
    match fetch_details(&order_id).await {
        Ok(details) => HttpResponse::Ok().json(details),
        Err(e) => {
            HttpResponse::ServiceUnavailable().body(format!("Error retrieving order details: {}", e))
        }
    }
}

async fn fetch_orders() -> Result<Vec<Order>, String> {
    let conn = Connection::open(db::DB_PATH).map_err(|e| e.to_string())?;

    let mut stmt = conn
        .prepare(
            "SELECT order_id, date, description, upload_file, created_at, updated_at, is_active
             FROM orders WHERE is_active = 1 ORDER BY created_at DESC",
        )
        .map_err(|e| e.to_string())?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Order {
                order_id: row.get(0)?,
                date: row.get(1)?,
                description: row.get(2)?,
                upload_file: row.get(3)?,
                created_at: row.get(4)?,
                updated_at: row.get(5)?,
                is_active: row.get(6)?,
            })
        })
        .map_err(|e| e.to_string())?;

    Ok(rows.filter_map(Result::ok).collect())
}

pub(super) async fn fetch_details(order_id: &str) -> Result<Vec<OrderDetail>, String> {
    let conn = Connection::open(db::DB_PATH).map_err(|e| e.to_string())?;

    let mut stmt = conn
        .prepare(
            "SELECT orderdetail_id, order_id, number, centre_medical, ref_patient,
                    name_patient, ref_analyze, nomenclature_examen, code,
                    created_at, updated_at, is_active
             FROM order_details WHERE order_id = ?1 AND is_active = 1",
        )
        .map_err(|e| e.to_string())?;

    let rows = stmt
        .query_map(params![order_id], |row| {
            Ok(OrderDetail {
                orderdetail_id: row.get(0)?,
                order_id: row.get(1)?,
                number: row.get(2)?,
                centre_medical: row.get(3)?,
                ref_patient: row.get(4)?,
                name_patient: row.get(5)?,
                ref_analyze: row.get(6)?,
                nomenclature_examen: row.get(7)?,
                code: row.get(8)?,
                created_at: row.get(9)?,
                updated_at: row.get(10)?,
                is_active: row.get(11)?,
            })
        })
        .map_err(|e| e.to_string())?;

    Ok(rows.filter_map(Result::ok).collect())
}
