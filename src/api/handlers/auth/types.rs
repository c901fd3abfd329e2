//! Request/response types for auth endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public user fields. The password hash never leaves the store layer.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone)]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub user: PublicUser,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, Result};

    #[test]
    fn register_request_round_trips() -> Result<()> {
        let request = RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "hunter22".to_string(),
        };
        let value = serde_json::to_value(&request)?;
        let email = value
            .get("email")
            .and_then(serde_json::Value::as_str)
            .context("missing email")?;
        assert_eq!(email, "alice@example.com");
        let decoded: RegisterRequest = serde_json::from_value(value)?;
        assert_eq!(decoded.username, "alice");
        Ok(())
    }

    #[test]
    fn auth_response_never_carries_a_hash() -> Result<()> {
        let response = AuthResponse {
            user: PublicUser {
                id: Uuid::nil(),
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
            },
            token: "signed".to_string(),
        };
        let value = serde_json::to_value(&response)?;
        assert!(value.get("user").is_some());
        assert!(value["user"].get("password_hash").is_none());
        assert!(value["user"].get("password").is_none());
        Ok(())
    }
}
