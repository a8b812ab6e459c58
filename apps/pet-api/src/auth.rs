//! Bearer token authentication.
//!
//! The middleware only needs `verify(token) -> subject`; [`IdentityProvider`]
//! is that seam. [`JwtIdentityProvider`] implements it with HS256 JWTs.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Authentication errors. All of them end up as 401.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Authorization header required")]
    MissingHeader,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Identity provider error: {0}")]
    Internal(String),
}

/// Identity of the caller, stored in request extensions once verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Subject identifier issued by the identity provider.
    pub subject: String,
}

/// Verifies bearer tokens.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the verified subject id for `token`.
    async fn verify(&self, token: &str) -> Result<String, AuthError>;
}

/// JWT claims structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration (Unix timestamp)
    pub exp: i64,

    /// Issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Audience
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}

/// HS256 JWT identity provider.
pub struct JwtIdentityProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: Option<String>,
    audience: Option<String>,
}

impl JwtIdentityProvider {
    /// Create a provider for the given shared secret.
    pub fn new(secret: &str) -> Self {
        JwtIdentityProvider {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: None,
            audience: None,
        }
    }

    /// Require and stamp this `iss` claim.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Require and stamp this `aud` claim.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Mint a token for `subject` valid for `ttl`.
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, AuthError> {
        let now = Utc::now();

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to generate token: {}", e)))
    }

    /// Validate and decode a token.
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        let mut required = vec!["exp"];
        match &self.audience {
            Some(aud) => {
                validation.set_audience(&[aud]);
                required.push("aud");
            }
            None => validation.validate_aud = false,
        }
        if let Some(iss) = &self.issuer {
            validation.set_issuer(&[iss]);
            required.push("iss");
        }
        // A configured claim must be present, not just match when present
        validation.set_required_spec_claims(&required);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(token_data.claims)
    }
}

#[async_trait]
impl IdentityProvider for JwtIdentityProvider {
    async fn verify(&self, token: &str) -> Result<String, AuthError> {
        let claims = self.validate_token(token)?;
        if claims.sub.is_empty() {
            return Err(AuthError::InvalidToken("empty subject".to_string()));
        }
        Ok(claims.sub)
    }
}

/// Extract the token from an `Authorization` header value.
///
/// A leading `Bearer ` is stripped when present; otherwise the whole value is
/// taken as the token.
pub fn extract_bearer_token(auth_header: &str) -> &str {
    auth_header.strip_prefix("Bearer ").unwrap_or(auth_header)
}
