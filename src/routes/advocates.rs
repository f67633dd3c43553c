use std::time::Instant;

use actix_web::{HttpResponse, Responder, get, web};
use log::{error, info};

use crate::db::DbGateway;
use crate::dto::advocates::{
    AdvocateListResponse, AdvocatesAllResponse, AdvocatesQueryParams, DATABASE_QUERY_FAILED,
    DataSource, ErrorResponse,
};
use crate::repository::advocate::DieselRepository;
use crate::repository::seed::SeedRepository;
use crate::routes::DURATION_HEADER;
use crate::services::advocates as advocate_service;

#[get("/v1/advocates")]
pub async fn list_advocates(
    params: web::Query<AdvocatesQueryParams>,
    gateway: web::Data<DbGateway>,
) -> impl Responder {
    let filter = params.to_filter();

    let pool = match gateway.pool() {
        None => {
            info!("No database configured; answering from the seed dataset");
            let repo = SeedRepository::new();
            return match advocate_service::list_advocates(&repo, &filter) {
                Ok(page) => HttpResponse::Ok()
                    .insert_header((DURATION_HEADER, "seed"))
                    .json(AdvocateListResponse::new(
                        page,
                        &filter,
                        DataSource::Seed,
                        None,
                    )),
                Err(e) => {
                    error!("Failed to list seed advocates: {e}");
                    HttpResponse::InternalServerError().json(ErrorResponse::database_query_failed())
                }
            };
        }
        Some(Ok(pool)) => pool,
        Some(Err(e)) => {
            // A configured database that cannot answer is surfaced, never
            // masked with seed data.
            error!("Failed to establish database connection: {e}");
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::database_query_failed());
        }
    };

    let repo = DieselRepository::new(pool);
    let started = Instant::now();

    match advocate_service::list_advocates(&repo, &filter) {
        Ok(page) => {
            let duration_ms = started.elapsed().as_secs_f64() * 1000.0;
            HttpResponse::Ok()
                .insert_header((DURATION_HEADER, format!("{duration_ms:.2}ms")))
                .json(AdvocateListResponse::new(
                    page,
                    &filter,
                    DataSource::Database,
                    Some(duration_ms),
                ))
        }
        Err(e) => {
            error!("Failed to query the advocates table: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse::database_query_failed())
        }
    }
}

fn all_from_seed(error: Option<&'static str>) -> HttpResponse {
    let repo = SeedRepository::new();
    match advocate_service::list_all_advocates(&repo) {
        Ok(data) => HttpResponse::Ok().json(AdvocatesAllResponse {
            data,
            source: DataSource::Seed,
            error,
        }),
        Err(e) => {
            error!("Failed to list seed advocates: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse::database_query_failed())
        }
    }
}

#[get("/v1/advocates/all")]
pub async fn list_all_advocates(gateway: web::Data<DbGateway>) -> impl Responder {
    let pool = match gateway.pool() {
        None => return all_from_seed(None),
        Some(Ok(pool)) => pool,
        Some(Err(e)) => {
            error!("Failed to establish database connection: {e}");
            return all_from_seed(Some(DATABASE_QUERY_FAILED));
        }
    };

    let repo = DieselRepository::new(pool);
    match advocate_service::list_all_advocates(&repo) {
        Ok(data) => HttpResponse::Ok().json(AdvocatesAllResponse {
            data,
            source: DataSource::Database,
            error: None,
        }),
        Err(e) => {
            // The read-all view stays usable on seed data, annotated so
            // the client can surface the failure.
            error!("Failed to query the advocates table: {e}");
            all_from_seed(Some(DATABASE_QUERY_FAILED))
        }
    }
}
