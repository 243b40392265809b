//! Authentication middleware
//!
//! Tokens are issued elsewhere; this service only verifies them. The `sub`
//! claim is the key under which submissions are recorded.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{constants::BEARER_PREFIX, error::AppError, error::AppResult, state::AppState};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

/// Authenticated user extracted from JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Verify an HS256 token and extract its claims
pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;

    Ok(token_data.claims)
}

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let Some(auth_header) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        debug!(path = %path, "Auth failed: No Authorization header");
        return Err(AppError::Unauthorized);
    };

    let Some(token) = auth_header.strip_prefix(BEARER_PREFIX) else {
        debug!(path = %path, "Auth failed: expected 'Bearer <token>'");
        return Err(AppError::Unauthorized);
    };

    let claims = verify_token(token, &state.config().jwt.secret).map_err(|e| {
        debug!(path = %path, error = ?e, "Auth failed: Token verification failed");
        e
    })?;

    if claims.sub.trim().is_empty() {
        debug!(path = %path, "Auth failed: empty subject");
        return Err(AppError::InvalidToken);
    }

    debug!(path = %path, user_id = %claims.sub, "User authenticated");
    request
        .extensions_mut()
        .insert(AuthenticatedUser { id: claims.sub });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token(sub: &str, exp: i64, secret: &str) -> String {
        encode(
            &Header::default(),
            &Claims {
                sub: sub.to_string(),
                exp,
            },
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_valid_token() {
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let claims = verify_token(&token("alice", exp, "secret"), "secret").unwrap();
        assert_eq!(claims.sub, "alice");
    }

    #[test]
    fn test_verify_wrong_secret() {
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        assert!(matches!(
            verify_token(&token("alice", exp, "secret"), "other"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_verify_expired_token() {
        let exp = (Utc::now() - Duration::hours(1)).timestamp();
        assert!(matches!(
            verify_token(&token("alice", exp, "secret"), "secret"),
            Err(AppError::TokenExpired)
        ));
    }

    #[test]
    fn test_verify_garbage() {
        assert!(matches!(
            verify_token("not-a-jwt", "secret"),
            Err(AppError::InvalidToken)
        ));
    }
}
