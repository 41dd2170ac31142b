use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::Json,
};
use tracing::{info, warn};

use crate::dtos::ledger_dtos::{CreateRangeRequest, CreatedResponse, RangeListResponse};
use crate::errors::{AppError, Result};
use crate::models::pagination::{Page, PaginationParams};
use crate::state::AppState;

pub async fn create_range(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateRangeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let Json(payload) = payload?;
    let (api_key, range) = payload.into_new_range()?;

    let client = state.ledger.resolve_client(&api_key).await?.ok_or_else(|| {
        warn!("Range rejected: unknown api key");
        AppError::InvalidApiKey
    })?;

    let uuid = state.ledger.insert_range(&client, &range).await?;
    info!("Saved range {} for {}", uuid, client);

    Ok((StatusCode::CREATED, Json(CreatedResponse::saved(uuid))))
}

pub async fn list_ranges(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<RangeListResponse>> {
    let page = Page::from_params(&params, state.config.default_page_size);
    let (ranges, total) = state.ledger.range_report(page).await?;

    Ok(Json(RangeListResponse { ranges, total }))
}
