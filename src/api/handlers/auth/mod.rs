//! Auth handlers: registration and login.
//!
//! Registration hashes the password with bcrypt before it is stored and never
//! returns hash material. Login reports a missing user and a wrong password
//! with the same error so callers cannot tell which factor failed. Both
//! operations issue a signed token with a 7-day validity window.

mod storage;
pub mod token;
pub mod types;

use crate::api::error::{ApiError, ErrorResponse};
use crate::api::handlers::valid_email;
use crate::cli::globals::GlobalArgs;
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use sqlx::PgPool;
use tracing::{debug, instrument};

use self::storage::InsertOutcome;
use self::types::{AuthResponse, LoginRequest, RegisterRequest};

#[utoipa::path(
    post,
    path= "/auth/register",
    request_body = RegisterRequest,
    responses (
        (status = 201, description = "Registration successful", body = AuthResponse, content_type = "application/json"),
        (status = 400, description = "Missing fields or already registered", body = ErrorResponse),
    ),
    tag= "auth"
)]
#[instrument(skip_all)]
pub async fn register(
    pool: Extension<PgPool>,
    globals: Extension<GlobalArgs>,
    payload: Option<Json<RegisterRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(Json(request)) = payload else {
        return Err(ApiError::Validation(
            "Username, email and password are required".to_string(),
        ));
    };

    if request.username.is_empty() || request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation(
            "Username, email and password are required".to_string(),
        ));
    }

    if !valid_email(&request.email) {
        return Err(ApiError::Validation("Invalid email".to_string()));
    }

    // Hashing is CPU-bound; keep it off the async workers.
    let password = request.password;
    let password_hash =
        tokio::task::spawn_blocking(move || bcrypt::hash(&password, bcrypt::DEFAULT_COST))
            .await
            .map_err(|err| ApiError::Internal(err.into()))?
            .map_err(|err| ApiError::Internal(err.into()))?;

    let user = match storage::insert_user(&pool, &request.username, &request.email, &password_hash)
        .await?
    {
        InsertOutcome::Created(user) => user,
        InsertOutcome::Conflict => {
            debug!("Duplicate username or email");

            return Err(ApiError::Validation("Registration failed".to_string()));
        }
    };

    let token = token::issue(user.id, &globals.jwt_secret)
        .map_err(|err| ApiError::Internal(err.into()))?;

    Ok((StatusCode::CREATED, Json(AuthResponse { user, token })))
}

#[utoipa::path(
    post,
    path= "/auth/login",
    request_body = LoginRequest,
    responses (
        (status = 200, description = "Login successful", body = AuthResponse, content_type = "application/json"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    tag= "auth"
)]
#[instrument(skip_all)]
pub async fn login(
    pool: Extension<PgPool>,
    globals: Extension<GlobalArgs>,
    payload: Option<Json<LoginRequest>>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Some(Json(request)) = payload else {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    };

    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let Some(record) = storage::find_user_by_email(&pool, &request.email).await? else {
        debug!("Unknown email");

        return Err(ApiError::Authentication);
    };

    let password = request.password;
    let stored_hash = record.password_hash.clone();
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(&password, &stored_hash))
        .await
        .map_err(|err| ApiError::Internal(err.into()))?
        // An undecodable stored hash counts as a mismatch so the error stays
        // indistinguishable from a wrong password.
        .unwrap_or_else(|err| {
            debug!("Password verification failed: {err}");

            false
        });

    if !matches {
        debug!("Password mismatch");

        return Err(ApiError::Authentication);
    }

    let token = token::issue(record.id, &globals.jwt_secret)
        .map_err(|err| ApiError::Internal(err.into()))?;

    Ok(Json(AuthResponse {
        user: record.into_public(),
        token,
    }))
}
