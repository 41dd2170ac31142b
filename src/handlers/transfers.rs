use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    Extension,
};
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

use crate::dtos::transfer_dtos::{MessageResponse, RefundRequest};
use crate::errors::{AppError, Result};
use crate::models::transaction::TransferRequest;
use crate::models::user::Claims;
use crate::state::AppState;

/// `POST /transactions`: refunds a booking to the contact that paid for it.
pub async fn refund_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: std::result::Result<Json<RefundRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(payload) = payload?;
    payload.validate()?;

    let phone = state
        .ledger
        .contact_for_booking(&payload.booking_number)
        .await?
        .ok_or_else(|| AppError::not_found("Booking number hasn't been found"))?;

    let transfer = TransferRequest {
        local_id: Uuid::new_v4().to_string(),
        service: String::new(),
        phone,
        amount: payload.amount.to_string(),
        note: payload.booking_number.clone(),
        api_key: state.config.gateway_api_key.clone(),
    };

    state.gateway.send_transfer(&transfer).await.map_err(|e| {
        error!("Refund for {} failed: {}", payload.booking_number, e);
        AppError::upstream(format!("error in sending refund: {}", e))
    })?;

    info!(
        "Refund of {} for {} requested by {}",
        payload.amount, payload.booking_number, claims.username
    );

    Ok(Json(MessageResponse {
        message: "Successfully refunded".to_string(),
    }))
}
