use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::dtos::ledger_dtos::{CashListResponse, CashResponse, CreateCashRequest, CreatedResponse};
use crate::errors::{AppError, Result};
use crate::models::cash::CashFilter;
use crate::models::pagination::Page;
use crate::state::AppState;

/// `POST /cashes`, gated by the `api_key` in the body.
pub async fn create_cash(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateCashRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let Json(payload) = payload?;
    let (api_key, cash) = payload.into_new_cash()?;

    // Lookup and insert are separate statements; a key revoked in between
    // still gets its row written.
    let client = state.ledger.resolve_client(&api_key).await?.ok_or_else(|| {
        warn!("Cash rejected: unknown api key");
        AppError::InvalidApiKey
    })?;

    let uuid = state.ledger.insert_cash(&client, &cash).await?;
    info!("Saved cash {} for {} ({})", uuid, client, cash.amount);

    Ok((StatusCode::CREATED, Json(CreatedResponse::saved(uuid))))
}

/// `GET /cashes` with regex filters on uuid, client, contact, amount,
/// detail and note.
pub async fn list_cashes(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<CashListResponse>> {
    let page = Page::from_pairs(&pairs, state.config.default_page_size);
    let filter = CashFilter::from_query(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    let (cashes, total) = state.ledger.list_cashes(&filter, page).await?;

    Ok(Json(CashListResponse { cashes, total }))
}

pub async fn get_cash(
    State(state): State<AppState>,
    uuid: std::result::Result<Path<Uuid>, PathRejection>,
) -> Result<Json<CashResponse>> {
    let Path(uuid) = uuid?;

    let cash = state
        .ledger
        .find_cash(uuid)
        .await?
        .ok_or_else(|| AppError::not_found("Couldn't find the cash details"))?;

    Ok(Json(CashResponse { cash }))
}
