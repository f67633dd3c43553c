use actix_web::{HttpResponse, Responder, post, web};
use log::error;

use crate::db::DbGateway;
use crate::dto::advocates::{ErrorResponse, SeedResponse};
use crate::repository::advocate::DieselRepository;
use crate::services::advocates as advocate_service;

/// Bulk-loads the embedded seed dataset into the database. A write path:
/// there is no seed fallback, and repeated calls duplicate rows.
#[post("/v1/seed")]
pub async fn seed_advocates(gateway: web::Data<DbGateway>) -> impl Responder {
    let pool = match gateway.pool() {
        None => {
            error!("Cannot seed advocates: no database configured");
            return HttpResponse::InternalServerError().json(ErrorResponse::seed_failed());
        }
        Some(Ok(pool)) => pool,
        Some(Err(e)) => {
            error!("Failed to establish database connection: {e}");
            return HttpResponse::InternalServerError().json(ErrorResponse::seed_failed());
        }
    };

    let repo = DieselRepository::new(pool);
    match advocate_service::seed_advocates(&repo) {
        Ok(advocates) => HttpResponse::Ok().json(SeedResponse { advocates }),
        Err(e) => {
            error!("Failed to seed the advocates table: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse::seed_failed())
        }
    }
}
