//! Poll pages: index, detail, results and the vote action.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, web};

use agora_core::services::VoteOutcome;
use agora_shared::{DetailContext, IndexContext, ResultsContext, VoteForm};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::templates;

/// GET /
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let questions = state.polls.latest_questions().await?;
    let context = IndexContext::new(questions);

    Ok(html(templates::index(&context)))
}

/// GET /{id}/
pub async fn detail(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let poll = state.polls.question_detail(path.into_inner()).await?;

    Ok(html(templates::detail(&DetailContext::new(poll))))
}

/// GET /{id}/results/
pub async fn results(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let poll = state.polls.question_results(path.into_inner()).await?;

    Ok(html(templates::results(&ResultsContext::new(poll))))
}

/// POST /{id}/votes/
///
/// A body that is missing or does not decode is handled like an absent
/// `choice` field. The body is read as raw pairs so a repeated `choice`
/// resolves to its last value.
pub async fn vote(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: Option<web::Form<Vec<(String, String)>>>,
) -> AppResult<HttpResponse> {
    let question_id = path.into_inner();
    let choice = form.and_then(|f| VoteForm::from_pairs(f.into_inner()).choice);

    match state.polls.cast_vote(question_id, choice.as_deref()).await? {
        VoteOutcome::Recorded {
            question_id,
            choice_id,
        } => {
            tracing::info!(question_id, choice_id, "Vote recorded");
            Ok(HttpResponse::Found()
                .insert_header((header::LOCATION, templates::results_path(question_id)))
                .finish())
        }
        VoteOutcome::Rejected {
            poll,
            error_message,
        } => {
            tracing::debug!(question_id, choice = ?choice, "Vote rejected");
            let context = DetailContext::new(poll).with_error(error_message);
            Ok(html(templates::detail(&context)))
        }
    }
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}
