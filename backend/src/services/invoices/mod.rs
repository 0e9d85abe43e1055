//! Invoice endpoints under `/api/invoices`. Same surface as the order
//! service (list, create, import, format/export, soft delete) plus a
//! `PATCH /{invoice_id}/payment` toggle that returns the updated invoice.

mod create;
mod delete;
mod export;
mod get;
mod import;
mod payment;

use actix_web::web::{delete, get, patch, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/invoices";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::list))
        .route("", post().to(create::process))
        .route("/import", post().to(import::process))
        .route("/format", get().to(export::format))
        .route("/{invoice_id}/details", get().to(get::details))
        .route("/{invoice_id}/export", get().to(export::details))
        .route("/{invoice_id}/payment", patch().to(payment::process))
        .route("/{invoice_id}", delete().to(delete::process))
}
