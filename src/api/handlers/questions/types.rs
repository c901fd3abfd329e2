//! Request/response types for question endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Author substituted when a submission carries no user id. Seeded by the
/// schema migration as the `anonymous` user.
pub const ANONYMOUS_USER_ID: Uuid = Uuid::from_u128(1);

/// A stored question joined with its author's public identity. The author
/// fields stay null when the join finds nothing, so a question is always
/// displayable.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Question {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub user_id: Uuid,
    pub vote_count: i32,
    pub answer_count: i32,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Raw tag input at the boundary: either an already-split sequence, stored
/// verbatim, or a single comma-separated string.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum TagInput {
    List(Vec<String>),
    Csv(String),
}

impl TagInput {
    /// Canonical sequence form. Comma-separated input is split, each segment
    /// trimmed, and empty segments discarded.
    #[must_use]
    pub fn normalize(self) -> Vec<String> {
        match self {
            Self::List(tags) => tags,
            Self::Csv(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl Default for TagInput {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct CreateQuestionRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<TagInput>,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ListQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total: usize,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct QuestionResponse {
    pub success: bool,
    pub question: Question,
}
