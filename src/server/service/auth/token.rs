//! Bearer token issuance and verification.
//!
//! Tokens are HS256 JWTs signed with the application secret, carrying the
//! subject's user id and username. Verification distinguishes expiry from
//! every other failure so clients can prompt for re-login instead of
//! treating the token as forged.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// Token lifetime from issuance to expiry.
const TOKEN_LIFETIME_HOURS: i64 = 24;

/// Claims carried by every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject user's primary key.
    pub sub: i32,
    /// Subject's username at issuance time.
    pub username: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Signs and verifies the application's bearer tokens.
///
/// Cheap to clone; the derived keys are shared behind `Arc`.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: Arc<EncodingKey>,
    decoding_key: Arc<DecodingKey>,
}

impl TokenService {
    /// Creates a token service from the application secret.
    ///
    /// # Arguments
    /// - `secret` - The shared HMAC secret from configuration
    ///
    /// # Returns
    /// - `TokenService` - Service with derived signing and verification keys
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding_key: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    /// Issues a token for an authenticated user.
    ///
    /// # Arguments
    /// - `user_id` - The subject's primary key
    /// - `username` - The subject's username
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token valid for the configured lifetime
    /// - `Err(AppError::InternalError)` - Signing failed
    pub fn issue(&self, user_id: i32, username: &str) -> Result<String, AppError> {
        let now = chrono::Utc::now().timestamp();

        let claims = Claims {
            sub: user_id,
            username: username.to_string(),
            iat: now,
            exp: now + TOKEN_LIFETIME_HOURS * 3600,
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|err| AppError::InternalError(format!("Failed to sign token: {err}")))
    }

    /// Verifies a bearer token's signature and expiry.
    ///
    /// # Arguments
    /// - `token` - The raw token from the Authorization header
    ///
    /// # Returns
    /// - `Ok(Claims)` - Verified claims
    /// - `Err(AuthError::TokenExpired)` - Signature valid but expired
    /// - `Err(AuthError::InvalidToken)` - Any other verification failure
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|err| match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn issued_tokens_verify_round_trip() {
        let tokens = TokenService::new("test-secret");

        let token = tokens.issue(42, "resident").unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.username, "resident");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = TokenService::new("one-secret").issue(1, "user").unwrap();

        let err = TokenService::new("other-secret").verify(&token).unwrap_err();

        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn reports_expiry_distinctly() {
        let tokens = TokenService::new("test-secret");
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            username: "user".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let expired = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let err = tokens.verify(&expired).unwrap_err();

        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn rejects_garbage_tokens() {
        let tokens = TokenService::new("test-secret");

        assert!(matches!(
            tokens.verify("not-a-token").unwrap_err(),
            AuthError::InvalidToken
        ));
    }
}
