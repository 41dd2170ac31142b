//! Cash ledger backend: records deposits and reconciliation ranges per
//! client and checks bookings against an external payment gateway.

pub mod config;
pub mod database;
pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use routes::build_router;
pub use state::AppState;
