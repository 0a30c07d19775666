//! HTTP handlers and route configuration.

mod api;
mod health;
mod polls;


use actix_web::{HttpResponse, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::NotFound(err.to_string()).into()
    }))
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/questions", web::get().to(api::latest_questions)),
    )
    .route("/", web::get().to(polls::index))
    .route(r"/{id:\d+}/", web::get().to(polls::detail))
    .route(r"/{id:\d+}/results/", web::get().to(polls::results))
    .route(r"/{id:\d+}/votes/", web::post().to(polls::vote))
    .default_service(web::to(not_found));
}

async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("No page matches this address".to_string()))
}
