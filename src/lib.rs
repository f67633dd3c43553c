use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use crate::db::DbGateway;
use crate::models::config::ServerConfig;
use crate::routes::advocates::{list_advocates, list_all_advocates};
use crate::routes::seed::seed_advocates;

pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod search;
pub mod seed;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    if server_config.database_url.is_none() {
        log::info!("database_url is not set; read endpoints will serve the seed dataset");
    }

    let gateway = DbGateway::from_config(
        server_config.database_url.as_deref(),
        server_config.cache_connections,
    )
    .map_err(|e| std::io::Error::other(format!("Failed to establish database connection: {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .service(list_advocates)
                    .service(list_all_advocates)
                    .service(seed_advocates),
            )
            .app_data(web::Data::new(gateway.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
