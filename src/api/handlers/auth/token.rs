//! Signed session tokens carrying a user identifier and expiry.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validity window for issued tokens.
pub const TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier.
    pub sub: Uuid,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

/// Issue a signed token for the user.
pub fn issue(user_id: Uuid, secret: &SecretString) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();

    let claims = Claims {
        sub: user_id,
        iat: now.timestamp(),
        exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
}

/// Verify a token's signature and expiry, returning its claims.
pub fn verify(token: &str, secret: &SecretString) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &Validation::default(),
    )?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> SecretString {
        SecretString::from("test-secret".to_string())
    }

    #[test]
    fn test_issue_and_verify() {
        let user_id = Uuid::new_v4();
        let token = issue(user_id, &secret()).unwrap();
        assert!(!token.is_empty());

        let claims = verify(&token, &secret()).unwrap();
        assert_eq!(claims.sub, user_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expiry_is_seven_days() {
        let token = issue(Uuid::new_v4(), &secret()).unwrap();
        let claims = verify(&token, &secret()).unwrap();
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_DAYS * 24 * 60 * 60);
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(verify("invalid.token.here", &secret()).is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = issue(Uuid::new_v4(), &secret()).unwrap();
        let other = SecretString::from("other-secret".to_string());
        assert!(verify(&token, &other).is_err());
    }
}
