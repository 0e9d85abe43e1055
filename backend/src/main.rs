mod config;
mod db;
mod services;
mod sheet;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let server = config::ServerConfig::from_env();

    db::init().map_err(std::io::Error::other)?;

    info!("Server running at http://{}:{}", server.host, server.port);

    HttpServer::new(|| {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .service(services::orders::configure_routes())
            .service(services::invoices::configure_routes())
            .service(services::order_previews::configure_routes())
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
