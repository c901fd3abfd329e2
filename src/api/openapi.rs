//! OpenAPI document for the HTTP API, served as plain JSON.

use axum::response::Json;
use utoipa::OpenApi;

use super::error::ErrorResponse;
use super::handlers::auth::types::{AuthResponse, LoginRequest, PublicUser, RegisterRequest};
use super::handlers::health::Health;
use super::handlers::questions::types::{
    CreateQuestionRequest, ListQuestionsResponse, Question, QuestionResponse, TagInput,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health::health,
        crate::api::handlers::questions::list,
        crate::api::handlers::questions::get_by_id,
        crate::api::handlers::questions::create,
        crate::api::handlers::auth::register,
        crate::api::handlers::auth::login,
    ),
    components(schemas(
        Health,
        Question,
        TagInput,
        CreateQuestionRequest,
        ListQuestionsResponse,
        QuestionResponse,
        RegisterRequest,
        LoginRequest,
        PublicUser,
        AuthResponse,
        ErrorResponse,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "questions", description = "Question listing and submission"),
        (name = "auth", description = "User registration and login"),
    ),
    info(title = "quesito", description = "Developer Q&A platform API")
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_all_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/health",
            "/questions",
            "/questions/{id}",
            "/auth/register",
            "/auth/login",
        ] {
            assert!(
                paths.iter().any(|path| *path == expected),
                "missing path {expected}, got {paths:?}"
            );
        }
    }

    #[test]
    fn document_serializes() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_string(&doc).expect("OpenAPI document should serialize");
        assert!(json.contains("quesito"));
    }
}
