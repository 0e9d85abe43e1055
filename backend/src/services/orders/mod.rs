//! # Order Service Module
//!
//! Aggregates the API endpoints for laboratory orders under `/api/orders`.
//!
//! ## Registered Routes:
//!
//! *   **`GET /`**: lists active orders.
//! *   **`POST /`**: creates an order together with its detail rows, as
//!     previously mapped from a spreadsheet by the import endpoint.
//! *   **`POST /import`**: multipart upload of one Excel workbook; runs the
//!     read → validate → map pipeline and returns the typed detail rows
//!     without persisting anything.
//! *   **`GET /format`**: downloads the blank 7-column import template.
//! *   **`GET /{order_id}/details`**: lists the detail rows of one order.
//! *   **`GET /{order_id}/export`**: downloads the order's details as an
//!     Excel workbook (`order_details_<id>.xlsx`).
//! *   **`DELETE /{order_id}`**: soft-deletes an order and its details.

mod create;
mod delete;
mod export;
mod get;
mod import;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/orders";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::list))
        .route("", post().to(create::process))
        .route("/import", post().to(import::process))
        .route("/format", get().to(export::format))
        .route("/{order_id}/details", get().to(get::details))
        .route("/{order_id}/export", get().to(export::details))
        .route("/{order_id}", delete().to(delete::process))
}
