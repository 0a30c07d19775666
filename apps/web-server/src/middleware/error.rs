//! Error handling - maps failures to HTML error pages.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use agora_core::error::DomainError;

use crate::templates;

/// Application-level error type rendered as an HTML error page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let html = match self {
            AppError::NotFound(detail) => {
                templates::error_page(status.as_u16(), "Not Found", Some(detail.as_str()))
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                templates::error_page(status.as_u16(), "Internal Server Error", None)
            }
        };

        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(html)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Validation(msg) | DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
