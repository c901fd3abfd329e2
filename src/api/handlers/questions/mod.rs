//! Question handlers: list, fetch by id, create.
//!
//! Listing returns the 20 newest questions joined with author identity.
//! Creation validates title/body presence, normalizes tag input at the
//! boundary, and substitutes the anonymous placeholder author when no user id
//! is supplied.

mod storage;
pub mod types;

use crate::api::error::{ApiError, ErrorResponse};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use self::types::{
    CreateQuestionRequest, ListQuestionsResponse, QuestionResponse, ANONYMOUS_USER_ID,
};

#[utoipa::path(
    get,
    path= "/questions",
    responses (
        (status = 200, description = "Newest questions with their authors", body = ListQuestionsResponse, content_type = "application/json"),
    ),
    tag= "questions"
)]
#[instrument(skip_all)]
pub async fn list(pool: Extension<PgPool>) -> Result<Json<ListQuestionsResponse>, ApiError> {
    let questions = storage::list_recent(&pool).await?;
    let total = questions.len();

    Ok(Json(ListQuestionsResponse {
        success: true,
        questions,
        total,
    }))
}

#[utoipa::path(
    get,
    path= "/questions/{id}",
    params(
        ("id" = String, Path, description = "Question identifier"),
    ),
    responses (
        (status = 200, description = "The question", body = QuestionResponse, content_type = "application/json"),
        (status = 404, description = "No such question", body = ErrorResponse),
    ),
    tag= "questions"
)]
#[instrument(skip_all)]
pub async fn get_by_id(
    pool: Extension<PgPool>,
    Path(id): Path<String>,
) -> Result<Json<QuestionResponse>, ApiError> {
    debug!("question: {id}");

    // A malformed id cannot match any row; report it like a missing one.
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound("Question not found"))?;

    let question = storage::find_by_id(&pool, id)
        .await?
        .ok_or(ApiError::NotFound("Question not found"))?;

    Ok(Json(QuestionResponse {
        success: true,
        question,
    }))
}

#[utoipa::path(
    post,
    path= "/questions",
    request_body = CreateQuestionRequest,
    responses (
        (status = 201, description = "Question created", body = QuestionResponse, content_type = "application/json"),
        (status = 400, description = "Missing title or body", body = ErrorResponse),
    ),
    tag= "questions"
)]
#[instrument(skip_all)]
pub async fn create(
    pool: Extension<PgPool>,
    payload: Option<Json<CreateQuestionRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(Json(request)) = payload else {
        return Err(ApiError::Validation(
            "Title and body are required".to_string(),
        ));
    };

    let CreateQuestionRequest {
        title,
        body,
        tags,
        user_id,
    } = request;

    let (Some(title), Some(body)) = (
        title.filter(|title| !title.is_empty()),
        body.filter(|body| !body.is_empty()),
    ) else {
        return Err(ApiError::Validation(
            "Title and body are required".to_string(),
        ));
    };

    let tags = tags.unwrap_or_default().normalize();
    let author = user_id.unwrap_or(ANONYMOUS_USER_ID);

    debug!(%author, tags = tags.len(), "creating question");

    let question = storage::insert(&pool, &title, &body, &tags, author).await?;

    Ok((
        StatusCode::CREATED,
        Json(QuestionResponse {
            success: true,
            question,
        }),
    ))
}
