use axum::{routing::post, Router};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(crate::handlers::auth::login))
        .route("/token", post(crate::handlers::auth::refresh_token))
}
