//! Order preview endpoints under `/api/order-previews`. Previews are the
//! weekly planning variant of orders: the list is filtered by `year`,
//! `month` and `week` query parameters and the import uses the reduced
//! 3-column schema.

mod create;
mod delete;
mod export;
mod get;
mod import;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/order-previews";

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
