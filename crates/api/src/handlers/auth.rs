//! Handlers for signup, login and logout.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utalii_core::error::CoreError;
use utalii_core::validation::{from_validation_errors, required};
use utalii_db::models::user::CreateUser;
use utalii_db::repositories::{RevokedTokenRepo, UserRepo};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /signup`. Every field is required.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    pub name: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /signup
///
/// Register a new user. Email and phone number must both be unused.
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<SignupRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    input.validate().map_err(from_validation_errors)?;

    let name = required(input.name, "name")?;
    let email = required(input.email, "email")?;
    let phone_number = required(input.phone_number, "phone_number")?;
    let password = required(input.password, "password")?;

    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "User already exists!".into(),
        )));
    }
    if UserRepo::find_by_phone_number(&state.pool, &phone_number)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Phone number already registered!".into(),
        )));
    }

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // The unique indexes still guard against a concurrent signup racing past
    // the checks above; that surfaces as a 409 from the database error.
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name,
            email,
            phone_number,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully!")),
    ))
}

/// POST /login
///
/// Authenticate with email + password. Returns an access token.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let email = required(input.email, "email")?;
    let password = required(input.password, "password")?;

    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid email or password!".into()));

    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&password, &user.password)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::info!(user_id = user.id, "Login rejected: wrong password");
        return Err(invalid());
    }

    let access_token = generate_access_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse { access_token }))
}

/// POST /logout
///
/// Revoke the presented token. Later requests carrying it get 401.
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<MessageResponse>> {
    RevokedTokenRepo::revoke(
        &state.pool,
        &auth_user.jti,
        auth_user.user_id,
        auth_user.expires_at,
    )
    .await?;

    let purged =
        RevokedTokenRepo::purge_expired(&state.pool, chrono::Utc::now().timestamp()).await?;

    tracing::info!(user_id = auth_user.user_id, purged, "User logged out");

    Ok(Json(MessageResponse::new("Successfully logged out!")))
}
