use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use bcrypt::verify;
use tracing::{info, warn};
use validator::Validate;

use crate::dtos::auth_dtos::{LoginRequest, RefreshRequest, TokenResponse};
use crate::errors::{AppError, Result};
use crate::models::user::User;
use crate::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>> {
    let Json(payload) = payload?;
    payload.validate()?;

    let user = sqlx::query_as::<_, User>("SELECT username, password FROM users WHERE username = $1")
        .bind(&payload.username)
        .fetch_optional(state.ledger.pool())
        .await?;

    // Unknown users and bad passwords get the same answer.
    let Some(user) = user else {
        warn!("Login attempt for unknown user");
        return Err(AppError::WrongPassword);
    };

    if !verify(&payload.password, &user.password).unwrap_or(false) {
        warn!("Wrong password for {}", user.username);
        return Err(AppError::WrongPassword);
    }

    let tokens = state.tokens.issue(&user.username)?;
    info!("Issued tokens for {}", user.username);

    Ok(Json(tokens.into()))
}

pub async fn refresh_token(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RefreshRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>> {
    let Json(payload) = payload?;
    payload.validate()?;

    let tokens = state.tokens.refresh(&payload.refresh_token)?;
    Ok(Json(tokens.into()))
}
