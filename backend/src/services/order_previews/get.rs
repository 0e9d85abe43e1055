use actix_web::{web, HttpResponse, Responder};
use common::model::order_preview::{OrderPreview, OrderPreviewDetail};
use common::model::ApiMessage;
use rusqlite::{params, Connection};
use serde::Deserialize;

use crate::db;

/// Query parameters of the preview list: previews are always browsed one
/// planning week at a time.
#[derive(Debug, Deserialize)]
pub struct ListFilter {
    pub year: i32,
    pub month: i32,
    #[serde(default = "default_week")]
    pub week: i32,
}

fn default_week() -> i32 {
    1
}

/// Actix handler for `GET /api/order-previews?year=&month=&week=`.
pub async fn list(filter: web::Query<ListFilter>) -> impl Responder {
    match fetch_previews(&filter).await {
        Ok(previews) if previews.is_empty() => HttpResponse::NotFound().json(ApiMessage {
            message: "No order previews found.".to_string(),
        }),
        Ok(previews) => HttpResponse::Ok().json(previews),
        Err(e) => {
            HttpResponse::ServiceUnavailable().body(format!("Error retrieving previews: {}", e))
        }
    }
}

pub async fn details(order_id: web::Path<String>) -> impl Responder {
    match fetch_details(&order_id).await {
        Ok(details) => HttpResponse::Ok().json(details),
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Error retrieving preview details: {}", e)),
    }
}

async fn fetch_previews(filter: &ListFilter) -> Result<Vec<OrderPreview>, String> {
    let conn = Connection::open(db::DB_PATH).map_err(|e| e.to_string())?;

    let mut stmt = conn
        .prepare(
            "SELECT order_id, date, description, year_number, month_number, week_number,
                    created_at, updated_at, is_active
             FROM order_previews
             WHERE is_active = 1 AND year_number = ?1 AND month_number = ?2 AND week_number = ?3
             ORDER BY created_at DESC",
        )
        .map_err(|e| e.to_string())?;

    let rows = stmt
        .query_map(params![filter.year, filter.month, filter.week], |row| {
            Ok(OrderPreview {
                order_id: row.get(0)?,
                date: row.get(1)?,
                description: row.get(2)?,
                year_number: row.get(3)?,
                month_number: row.get(4)?,
                week_number: row.get(5)?,
                created_at: row.get(6)?,
                updated_at: row.get(7)?,
                is_active: row.get(8)?,
            })
        })
        .map_err(|e| e.to_string())?;

    Ok(rows.filter_map(Result::ok).collect())
}

pub(super) async fn fetch_details(order_id: &str) -> Result<Vec<OrderPreviewDetail>, String> {
    let conn = Connection::open(db::DB_PATH).map_err(|e| e.to_string())?;

    let mut stmt = conn
        .prepare(
            "SELECT orderdetail_id, order_id, medical_center, patient_name, nomenclature,
                    created_at, updated_at, is_active
             FROM order_preview_details WHERE order_id = ?1 AND is_active = 1",
        )
        .map_err(|e| e.to_string())?;

    let rows = stmt
        .query_map(params![order_id], |row| {
            Ok(OrderPreviewDetail {
                orderdetail_id: row.get(0)?,
                order_id: row.get(1)?,
                medical_center: row.get(2)?,
                patient_name: row.get(3)?,
                nomenclature: row.get(4)?,
                created_at: row.get(5)?,
                updated_at: row.get(6)?,
                is_active: row.get(7)?,
            })
        })
        .map_err(|e| e.to_string())?;

    Ok(rows.filter_map(Result::ok).collect())
}
