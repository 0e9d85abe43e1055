use actix_web::{web, HttpResponse, Responder};
use common::model::order_preview::{
    CreateOrderPreviewPayload, CreateOrderPreviewResponse, CreatedOrderPreviewRef,
    OrderPreviewDetail,
};
use common::model::ApiMessage;
use log::info;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db;

pub async fn process(payload: web::Json<CreateOrderPreviewPayload>) -> impl Responder {
    match create_preview(payload.into_inner()).await {
        Ok(response) => HttpResponse::Created().json(response),
        Err(message) => HttpResponse::BadRequest().json(ApiMessage { message }),
    }
}

async fn create_preview(
    payload: CreateOrderPreviewPayload,
) -> Result<CreateOrderPreviewResponse, String> {
    if payload.date.trim().is_empty() || payload.description.trim().is_empty() {
        return Err("Please fill all required fields and upload a valid Excel file.".to_string());
    }
    if !(1..=12).contains(&payload.month) || !(1..=5).contains(&payload.week) {
        return Err("Month must be 1-12 and week 1-5.".to_string());
    }
    if payload.order_details.is_empty() {
        return Err(
            "The Excel file contains no valid details or has not been uploaded.".to_string(),
        );
    }

    let mut conn = Connection::open(db::DB_PATH).map_err(|e| e.to_string())?;
    let tx = conn.transaction().map_err(|e| e.to_string())?;

    let order_id = Uuid::new_v4().to_string();
    let created_at = db::now();

    tx.execute(
        "INSERT INTO order_previews (order_id, date, description, year_number,
             month_number, week_number, created_at, is_active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 1)",
        params![
            order_id,
            payload.date,
            payload.description,
            payload.year,
            payload.month,
            payload.week,
            created_at
        ],
    )
    .map_err(|e| e.to_string())?;

    let mut details = Vec::with_capacity(payload.order_details.len());
    for d in &payload.order_details {
        let detail = OrderPreviewDetail {
            orderdetail_id: Uuid::new_v4().to_string(),
            order_id: order_id.clone(),
            medical_center: d.medical_center.clone(),
            patient_name: d.patient_name.clone(),
            nomenclature: d.nomenclature.clone(),
            created_at: created_at.clone(),
            updated_at: None,
            is_active: true,
        };
        tx.execute(
            "INSERT INTO order_preview_details (orderdetail_id, order_id, medical_center,
                 patient_name, nomenclature, created_at, is_active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1)",
            params![
                detail.orderdetail_id,
                detail.order_id,
                detail.medical_center,
                detail.patient_name,
                detail.nomenclature,
                detail.created_at
            ],
        )
        .map_err(|e| e.to_string())?;
        details.push(detail);
    }

    tx.commit().map_err(|e| e.to_string())?;
    info!(
        "order preview {} created with {} details",
        order_id,
        details.len()
    );

    Ok(CreateOrderPreviewResponse {
        message: "Order preview created successfully.".to_string(),
        order: CreatedOrderPreviewRef { order_id },
        details,
    })
}
