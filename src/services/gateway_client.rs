// services/gateway_client.rs
use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{error, info};

use super::ClientError;
use crate::models::transaction::{
    GatewayCredentials, GatewayToken, TransactionRecord, TransactionsResponse, TransferRequest,
};

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Fresh bearer token. Never cached; every caller logs in again.
    async fn login(&self) -> Result<String, ClientError>;

    async fn list_transactions(
        &self,
        token: &str,
        note: &str,
    ) -> Result<Vec<TransactionRecord>, ClientError>;

    async fn send_transfer(&self, transfer: &TransferRequest) -> Result<(), ClientError>;
}

#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
    login: String,
    password: String,
}

impl GatewayClient {
    /// `base_url` must end with `/`.
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        GatewayClient {
            client,
            base_url: base_url.into(),
            login: login.into(),
            password: password.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// The gateway signals success with exactly `200 OK`.
async fn ensure_ok(response: Response, action: &str) -> Result<Response, ClientError> {
    if response.status() == StatusCode::OK {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error!("Gateway {} failed: {} - {}", action, status, body);
    Err(ClientError::Status(status.to_string()))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl PaymentGateway for GatewayClient {
    async fn login(&self) -> Result<String, ClientError> {
        let credentials = GatewayCredentials {
            username: &self.login,
            password: &self.password,
        };

        let response = self
            .client
            .post(self.url("auth/login"))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&credentials)
            .send()
            .await?;

        let token: GatewayToken = decode(ensure_ok(response, "login").await?).await?;
        Ok(token.access_token)
    }

    async fn list_transactions(
        &self,
        token: &str,
        note: &str,
    ) -> Result<Vec<TransactionRecord>, ClientError> {
        let response = self
            .client
            .get(self.url("transactions"))
            .query(&[("note", note)])
            .bearer_auth(token)
            .send()
            .await?;

        let listing: TransactionsResponse =
            decode(ensure_ok(response, "transaction listing").await?).await?;
        Ok(listing.transactions)
    }

    async fn send_transfer(&self, transfer: &TransferRequest) -> Result<(), ClientError> {
        info!("Sending transfer for {} to gateway", transfer.note);

        let response = self
            .client
            .post(self.url("trnxs"))
            .header(header::CONTENT_TYPE, "application/json")
            .json(transfer)
            .send()
            .await?;

        ensure_ok(response, "transfer").await?;
        Ok(())
    }
}
