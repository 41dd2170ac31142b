use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::middleware::auth::auth_middleware;
use crate::state::AppState;

/// Writes authenticated by the `api_key` carried in the body.
pub fn api_key_routes() -> Router<AppState> {
    Router::new()
        .route("/cashes", post(crate::handlers::cashes::create_cash))
        .route("/ranges", post(crate::handlers::ranges::create_range))
}

/// Reads and refunds behind a bearer token.
pub fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/cashes", get(crate::handlers::cashes::list_cashes))
        .route("/cashes/:uuid", get(crate::handlers::cashes::get_cash))
        .route("/ranges", get(crate::handlers::ranges::list_ranges))
        .route(
            "/check/:booking_number",
            get(crate::handlers::booking::check_booking),
        )
        .route(
            "/transactions",
            post(crate::handlers::transfers::refund_booking),
        )
        .route_layer(from_fn_with_state(state, auth_middleware))
}
