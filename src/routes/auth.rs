/// Authentication Routes
///
/// Login issues an access token in the body and a refresh token in the
/// `rtToken` cookie. Refresh trades that cookie for a new access token.
/// Logout clears the cookie. Nothing is stored server-side.

use actix_web::cookie::{time::Duration, Cookie};
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::auth::{
    generate_access_token, generate_refresh_token, validate_refresh_token, verify_password,
};
use crate::configuration::JwtSettings;
use crate::error::{AppError, AuthError, NotFoundError, ValidationError};
use crate::user_store::UserStore;

/// Name of the HTTP-only cookie holding the refresh token
pub const REFRESH_COOKIE_NAME: &str = "rtToken";

/// User login request
///
/// Fields are optional so that absent and empty values get the same
/// "All fields are required!" answer.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    fn credentials(self) -> Result<(String, String), ValidationError> {
        match (self.email, self.password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Ok((email, password))
            }
            _ => Err(ValidationError::MissingFields),
        }
    }
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn refresh_cookie(token: String, config: &JwtSettings) -> Cookie<'static> {
    Cookie::build(REFRESH_COOKIE_NAME, token)
        .path("/")
        .http_only(true)
        .secure(false)
        .max_age(Duration::seconds(config.refresh_token_expiry))
        .finish()
}

fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(REFRESH_COOKIE_NAME, "")
        .path("/")
        .http_only(true)
        .secure(false)
        .finish();
    cookie.make_removal();
    cookie
}

/// Refresh token from the request cookie; empty values count as absent
fn refresh_token_from(req: &HttpRequest) -> Option<String> {
    req.cookie(REFRESH_COOKIE_NAME)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

/// POST /auth/login
///
/// # Errors
/// - 400: missing email/password, unknown email, or wrong password
/// - 5xx: user store or hashing failure
pub async fn login(
    form: web::Json<LoginRequest>,
    store: web::Data<dyn UserStore>,
    jwt_config: web::Data<JwtSettings>,
) -> Result<HttpResponse, AppError> {
    let (email, password) = form.into_inner().credentials()?;

    let user = store
        .find_by_email(&email)
        .await?
        .ok_or(NotFoundError::LoginUser)?;

    if !verify_password(&password, &user.password_hash).await? {
        return Err(AuthError::WrongPassword.into());
    }

    let access_token = generate_access_token(&user, jwt_config.get_ref())?;
    let refresh_token = generate_refresh_token(&user.email, jwt_config.get_ref())?;

    tracing::info!(email = %user.email, "User logged in successfully");

    Ok(HttpResponse::Ok()
        .cookie(refresh_cookie(refresh_token, jwt_config.get_ref()))
        .json(TokenResponse {
            token: access_token,
        }))
}

/// GET /auth/refresh
///
/// Exchanges the `rtToken` cookie for a fresh access token. The refresh
/// token itself is not rotated.
///
/// # Errors
/// - 400: cookie missing, token invalid or expired, or user no longer exists
pub async fn refresh(
    req: HttpRequest,
    store: web::Data<dyn UserStore>,
    jwt_config: web::Data<JwtSettings>,
) -> Result<HttpResponse, AppError> {
    let token = refresh_token_from(&req).ok_or(AuthError::MissingRefreshToken)?;

    let claims = validate_refresh_token(&token, jwt_config.get_ref())?;

    let user = store
        .find_by_email(&claims.email)
        .await?
        .ok_or(NotFoundError::TokenUser)?;

    let access_token = generate_access_token(&user, jwt_config.get_ref())?;

    tracing::info!(email = %user.email, "Access token refreshed");

    Ok(HttpResponse::Ok().json(TokenResponse {
        token: access_token,
    }))
}

/// GET /auth/logout
///
/// Clears the refresh cookie. The token itself stays valid until it
/// expires; there is no server-side revocation.
pub async fn logout(req: HttpRequest) -> Result<HttpResponse, AppError> {
    if refresh_token_from(&req).is_none() {
        return Err(AuthError::CookieNotFound.into());
    }

    tracing::info!("User logged out");

    Ok(HttpResponse::Ok()
        .cookie(removal_cookie())
        .json(MessageResponse {
            message: "User Logged Out!".to_string(),
        }))
}
