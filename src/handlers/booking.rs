use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::models::booking::CheckBookingResponse;
use crate::state::AppState;

/// `GET /check/:booking_number`. Always 200; upstream trouble shows up in
/// the verdict messages.
pub async fn check_booking(
    State(state): State<AppState>,
    Path(booking_number): Path<String>,
) -> Json<CheckBookingResponse> {
    Json(state.reconciliation.check_booking(&booking_number).await)
}
