use actix_web::{web, HttpResponse, Responder};
use common::model::invoice::{
    CreateInvoicePayload, CreateInvoiceResponse, CreatedInvoiceRef, InvoiceDetail,
};
use common::model::ApiMessage;
use log::info;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db;

pub async fn process(payload: web::Json<CreateInvoicePayload>) -> impl Responder {
    match create_invoice(payload.into_inner()).await {
        Ok(response) => HttpResponse::Created().json(response),
        Err(message) => HttpResponse::BadRequest().json(ApiMessage { message }),
    }
}

async fn create_invoice(payload: CreateInvoicePayload) -> Result<CreateInvoiceResponse, String> {
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

    let invoice_id = Uuid::new_v4().to_string();
    let created_at = db::now();

    tx.execute(
        "INSERT INTO invoices (invoice_id, date, description, is_payed, upload_file,
             created_at, is_active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1)",
        params![
            invoice_id,
            payload.date,
            payload.description,
            payload.is_payed,
            payload.upload_file,
            created_at
        ],
    )
    .map_err(|e| e.to_string())?;

    let mut details = Vec::with_capacity(payload.details.len());
    for d in &payload.details {
        let detail = InvoiceDetail {
            invoicedetail_id: Uuid::new_v4().to_string(),
            invoice_id: invoice_id.clone(),
            demande: d.demande.clone(),
            name_patient: d.name_patient.clone(),
            date_prel: d.date_prel.clone(),
            ref_patient: d.ref_patient.clone(),
            montant: d.montant,
            unknow: d.unknow.clone(),
            created_at: created_at.clone(),
            updated_at: None,
            is_active: true,
        };
        tx.execute(
            "INSERT INTO invoice_details (invoicedetail_id, invoice_id, demande, name_patient,
                 date_prel, ref_patient, montant, unknow, created_at, is_active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, 1)",
            params![
                detail.invoicedetail_id,
                detail.invoice_id,
                detail.demande,
                detail.name_patient,
                detail.date_prel,
                detail.ref_patient,
                detail.montant,
                detail.unknow,
                detail.created_at
            ],
        )
        .map_err(|e| e.to_string())?;
        details.push(detail);
    }

    tx.commit().map_err(|e| e.to_string())?;
    info!(
        "invoice {} created with {} details",
        invoice_id,
        details.len()
    );

    Ok(CreateInvoiceResponse {
        message: "Invoice created successfully.".to_string(),
        invoice: CreatedInvoiceRef { invoice_id },
        details,
    })
}
