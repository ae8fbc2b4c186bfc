/// JWT Token Generation and Validation
///
/// Access and refresh tokens are HS256 JWTs signed with separate secrets,
/// so a token of one kind never validates as the other.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{de::DeserializeOwned, Serialize};

use crate::auth::claims::{AccessClaims, RefreshClaims};
use crate::configuration::JwtSettings;
use crate::error::{AppError, AuthError};
use crate::user_store::UserRecord;

fn sign<T: Serialize>(claims: &T, secret: &str) -> Result<String, AppError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
}

fn verify<T: DeserializeOwned>(token: &str, secret: &str) -> Result<T, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is exact: a 30s token is dead at T+30s.
    validation.leeway = 0;

    decode::<T>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::warn!("JWT validation error: {}", e);
        AppError::Auth(AuthError::InvalidToken)
    })
}

/// Issue an access token carrying the user's email and role
///
/// # Errors
/// Returns error if token generation fails
pub fn generate_access_token(user: &UserRecord, config: &JwtSettings) -> Result<String, AppError> {
    let claims = AccessClaims::new(
        user.email.clone(),
        user.role.clone(),
        config.access_token_expiry,
    );
    sign(&claims, &config.access_token_secret)
}

/// Issue a refresh token carrying only the user's email
pub fn generate_refresh_token(email: &str, config: &JwtSettings) -> Result<String, AppError> {
    let claims = RefreshClaims::new(email.to_string(), config.refresh_token_expiry);
    sign(&claims, &config.refresh_token_secret)
}

/// Validate and extract claims from an access token
///
/// # Errors
/// `AuthError::InvalidToken` if the token is malformed, tampered with,
/// signed with another key, or expired
pub fn validate_access_token(token: &str, config: &JwtSettings) -> Result<AccessClaims, AppError> {
    verify(token, &config.access_token_secret)
}

/// Validate and extract claims from a refresh token
pub fn validate_refresh_token(token: &str, config: &JwtSettings) -> Result<RefreshClaims, AppError> {
    verify(token, &config.refresh_token_secret)
}
