// services/booking_client.rs
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::ClientError;
use crate::models::booking::BookingsResponse;

#[async_trait]
pub trait BookingSource: Send + Sync {
    async fn lookup(&self, ticket_number: &str) -> Result<BookingsResponse, ClientError>;
}

/// Reads bookings from `GET {base_url}{ticket_number}`.
#[derive(Debug, Clone)]
pub struct BookingClient {
    client: Client,
    base_url: String,
}

impl BookingClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        BookingClient {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl BookingSource for BookingClient {
    async fn lookup(&self, ticket_number: &str) -> Result<BookingsResponse, ClientError> {
        let url = format!("{}{}", self.base_url, ticket_number);
        debug!("Looking up booking {}", ticket_number);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            warn!("Bookings API answered {} for {}", status, ticket_number);
            return Err(ClientError::Status(status.to_string()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
