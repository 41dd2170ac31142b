pub mod booking_client;
pub mod gateway_client;
pub mod ledger;
pub mod reconciliation;
pub mod token_service;

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::errors::{AppError, Result};

/// Failure talking to one of the upstream HTTP services. The display text is
/// what ends up in a verdict message.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status: {0}")]
    Status(String),

    #[error("couldn't decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One client shared by the upstream integrations so they reuse connections.
pub fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("cashbook/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::configuration(format!("Failed to create HTTP client: {}", e)))
}
