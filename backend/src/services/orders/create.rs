use actix_web::{web, HttpResponse, Responder};
use common::model::order::{
    CreateOrderPayload, CreateOrderResponse, CreatedOrderRef, OrderDetail,
};
use common::model::ApiMessage;
use log::info;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db;

/// Actix handler for `POST /api/orders`.
///
/// Persists an order and its detail rows in one transaction: a failure
/// anywhere leaves nothing behind, matching the all-or-nothing policy of
/// the import that produced the details.
pub async fn process(payload: web::Json<CreateOrderPayload>) -> impl Responder {
    match create_order(payload.into_inner()).await {
        Ok(response) => HttpResponse::Created().json(response),
        Err(message) => HttpResponse::BadRequest().json(ApiMessage { message }),
    }
}

async fn create_order(payload: CreateOrderPayload) -> Result<CreateOrderResponse, String> {
    if payload.date.trim().is_empty() {
        return Err("Date is required.".to_string());
    }
    if payload.description.trim().is_empty() {
        return Err("Description is required.".to_string());
    }
    if payload.upload_file.trim().is_empty() {
        return Err("An Excel file must be uploaded.".to_string());
    }
    if payload.details.is_empty() {
        return Err(
            "The Excel file contains no valid details or has not been uploaded.".to_string(),
        );
    }

    let mut conn = Connection::open(db::DB_PATH).map_err(|e| e.to_string())?;
    let tx = conn.transaction().map_err(|e| e.to_string())?;

    let order_id = Uuid::new_v4().to_string();
    let created_at = db::now();

    tx.execute(
        "INSERT INTO orders (order_id, date, description, upload_file, created_at, is_active)
         VALUES (?1, ?2, ?3, ?4, ?5, 1)",
        params![
            order_id,
            payload.date,
            payload.description,
            payload.upload_file,
            created_at
        ],
    )
    .map_err(|e| e.to_string())?;

    let mut details = Vec::with_capacity(payload.details.len());
    for d in &payload.details {
        let detail = OrderDetail {
            orderdetail_id: Uuid::new_v4().to_string(),
            order_id: order_id.clone(),
            number: d.number,
            centre_medical: d.centre_medical.clone(),
            ref_patient: d.ref_patient.clone(),
            name_patient: d.name_patient.clone(),
            ref_analyze: d.ref_analyze.clone(),
            nomenclature_examen: d.nomenclature_examen.clone(),
            code: d.code.clone(),
            created_at: created_at.clone(),
            updated_at: None,
            is_active: true,
        };
        tx.execute(
            "INSERT INTO order_details (orderdetail_id, order_id, number, centre_medical,
                 ref_patient, name_patient, ref_analyze, nomenclature_examen, code,
                 created_at, is_active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, 1)",
            params![
                detail.orderdetail_id,
                detail.order_id,
                detail.number,
                detail.centre_medical,
                detail.ref_patient,
                detail.name_patient,
                detail.ref_analyze,
                detail.nomenclature_examen,
                detail.code,
                detail.created_at
            ],
        )
        .map_err(|e| e.to_string())?;
        details.push(detail);
    }

    tx.commit().map_err(|e| e.to_string())?;
    info!("order {} created with {} details", order_id, details.len());

    Ok(CreateOrderResponse {
        message: "Order created successfully.".to_string(),
        order: CreatedOrderRef { order_id },
        details,
    })
}
