//! Error taxonomy and the uniform JSON error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Envelope used for every error response.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    /// Missing resource.
    #[error("{0}")]
    NotFound(&'static str),

    /// Bad credentials. One message for every failing factor.
    #[error("Invalid credentials")]
    Authentication,

    /// Store or primitive failure. Detail stays server-side.
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Authentication => StatusCode::UNAUTHORIZED,
            Self::Internal(err) => {
                error!("Internal error: {err:?}");

                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        serde_json::from_slice(&bytes).expect("response body is not JSON")
    }

    #[tokio::test]
    async fn validation_maps_to_400() {
        let response = ApiError::Validation("Title and body are required".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let value = body_json(response).await;
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Title and body are required");
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let response = ApiError::NotFound("Question not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let value = body_json(response).await;
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Question not found");
    }

    #[tokio::test]
    async fn authentication_maps_to_401_with_fixed_message() {
        let response = ApiError::Authentication.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let value = body_json(response).await;
        assert_eq!(value["error"], "Invalid credentials");
    }

    #[tokio::test]
    async fn internal_hides_detail() {
        let response = ApiError::Internal(anyhow!("connection reset by peer")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let value = body_json(response).await;
        assert_eq!(value["error"], "Internal server error");
    }
}
