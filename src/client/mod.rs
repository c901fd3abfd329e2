//! Typed HTTP client for the Quesito API.
//!
//! One method per logical operation, a predictable timeout policy, and no
//! retry, caching, or offline queuing. Each call either returns the parsed
//! JSON body or surfaces a [`ClientError`] for the caller's UI layer.

use crate::api::error::ErrorResponse;
use crate::api::handlers::auth::types::{AuthResponse, LoginRequest, RegisterRequest};
use crate::api::handlers::health::Health;
use crate::api::handlers::questions::types::{
    CreateQuestionRequest, ListQuestionsResponse, QuestionResponse,
};
use crate::APP_USER_AGENT;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Request timeout applied to every call.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum number of error body characters surfaced to the caller.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success response; `message` carries the server's envelope error
    /// when it could be parsed.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client against the given API base URL.
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(APP_USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub async fn health(&self) -> Result<Health, ClientError> {
        self.get("health").await
    }

    pub async fn questions(&self) -> Result<ListQuestionsResponse, ClientError> {
        self.get("questions").await
    }

    pub async fn question(&self, id: Uuid) -> Result<QuestionResponse, ClientError> {
        self.get(&format!("questions/{id}")).await
    }

    pub async fn create_question(
        &self,
        request: &CreateQuestionRequest,
    ) -> Result<QuestionResponse, ClientError> {
        self.post("questions", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        self.post("auth/register", request).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        self.post("auth/login", request).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).send().await?;

        handle_json_response(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;

        handle_json_response(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

async fn handle_json_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        Ok(response.json::<T>().await?)
    } else {
        let body = response.text().await.unwrap_or_default();

        Err(ClientError::Api {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

/// Prefer the envelope's error field; fall back to the raw body, truncated.
fn error_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorResponse>(body) {
        return envelope.error;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:5001").unwrap();
        assert_eq!(client.url("questions"), "http://localhost:5001/questions");
        assert_eq!(client.url("/questions"), "http://localhost:5001/questions");
    }

    #[test]
    fn url_trims_trailing_slash_on_base() {
        let client = ApiClient::new("http://localhost:5001/ ").unwrap();
        assert_eq!(client.url("health"), "http://localhost:5001/health");
    }

    #[test]
    fn error_message_prefers_envelope() {
        let message = error_message(r#"{"success":false,"error":"Question not found"}"#);
        assert_eq!(message, "Question not found");
    }

    #[test]
    fn error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message("   "), "Request failed.");
    }

    #[test]
    fn error_message_truncates_long_bodies() {
        let body = "x".repeat(1000);
        assert_eq!(error_message(&body).len(), MAX_ERROR_CHARS);
    }
}
