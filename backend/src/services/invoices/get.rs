use actix_web::{web, HttpResponse, Responder};
use common::model::invoice::{Invoice, InvoiceDetail};
use common::model::ApiMessage;
use rusqlite::{params, Connection};

use crate::db;

pub async fn list() -> impl Responder {
    match fetch_invoices().await {
        Ok(invoices) if invoices.is_empty() => HttpResponse::NotFound().json(ApiMessage {
            message: "No invoices found.".to_string(),
        }),
        Ok(invoices) => HttpResponse::Ok().json(invoices),
        Err(e) => {
            HttpResponse::ServiceUnavailable().body(format!("Error retrieving invoices: {}", e))
        }
    }
}

pub async fn details(invoice_id: web::Path<String>) -> impl Responder {
    match fetch_details(&invoice_id).await {
        Ok(details) => HttpResponse::Ok().json(details),
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Error retrieving invoice details: {}", e)),
    }
}

async fn fetch_invoices() -> Result<Vec<Invoice>, String> {
    let conn = Connection::open(db::DB_PATH).map_err(|e| e.to_string())?;

    let mut stmt = conn
        .prepare(
            "SELECT invoice_id, date, description, is_payed, upload_file,
                    created_at, updated_at, is_active
             FROM invoices WHERE is_active = 1 ORDER BY created_at DESC",
        )
        .map_err(|e| e.to_string())?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Invoice {
                invoice_id: row.get(0)?,
                date: row.get(1)?,
                description: row.get(2)?,
                is_payed: row.get(3)?,
                upload_file: row.get(4)?,
                created_at: row.get(5)?,
                updated_at: row.get(6)?,
                is_active: row.get(7)?,
            })
        })
        .map_err(|e| e.to_string())?;

    Ok(rows.filter_map(Result::ok).collect())
}

pub(super) async fn fetch_details(invoice_id: &str) -> Result<Vec<InvoiceDetail>, String> {
    let conn = Connection::open(db::DB_PATH).map_err(|e| e.to_string())?;

    let mut stmt = conn
        .prepare(
            "SELECT invoicedetail_id, invoice_id, demande, name_patient, date_prel,
                    ref_patient, montant, unknow, created_at, updated_at, is_active
             FROM invoice_details WHERE invoice_id = ?1 AND is_active = 1",
        )
        .map_err(|e| e.to_string())?;

    let rows = stmt
        .query_map(params![invoice_id], |row| {
            Ok(InvoiceDetail {
                invoicedetail_id: row.get(0)?,
                invoice_id: row.get(1)?,
                demande: row.get(2)?,
                name_patient: row.get(3)?,
                date_prel: row.get(4)?,
                ref_patient: row.get(5)?,
                montant: row.get(6)?,
                unknow: row.get(7)?,
                created_at: row.get(8)?,
                updated_at: row.get(9)?,
                is_active: row.get(10)?,
            })
        })
        .map_err(|e| e.to_string())?;

    Ok(rows.filter_map(Result::ok).collect())
}

/// Fetches one invoice by id, used by the payment toggle to return the
/// updated row.
pub(super) async fn fetch_invoice(invoice_id: &str) -> Result<Invoice, String> {
    let conn = Connection::open(db::DB_PATH).map_err(|e| e.to_string())?;

    conn.query_row(
        "SELECT invoice_id, date, description, is_payed, upload_file,
                created_at, updated_at, is_active
         FROM invoices WHERE invoice_id = ?1",
        params![invoice_id],
        |row| {
            Ok(Invoice {
                invoice_id: row.get(0)?,
                date: row.get(1)?,
                description: row.get(2)?,
                is_payed: row.get(3)?,
                upload_file: row.get(4)?,
                created_at: row.get(5)?,
                updated_at: row.get(6)?,
                is_active: row.get(7)?,
            })
        },
    )
    .map_err(|_| "Invoice not found".to_string())
}
