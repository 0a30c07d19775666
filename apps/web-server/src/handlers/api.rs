//! JSON views of the poll pages.

use actix_web::{HttpResponse, web};

use agora_shared::{ApiResponse, IndexContext};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/questions - the index context as JSON.
pub async fn latest_questions(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let questions = state.polls.latest_questions().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(IndexContext::new(questions))))
}
