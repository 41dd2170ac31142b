// models/transaction.rs
//! Payment gateway payloads.
use serde::{Deserialize, Serialize};

/// Literal the gateway uses for a completed transfer.
pub const STATUS_SUCCESS: &str = "SUCCESS";

#[derive(Debug, Clone, Serialize)]
pub struct GatewayCredentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayToken {
    pub access_token: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransactionsResponse {
    #[serde(deserialize_with = "super::null_as_default")]
    pub transactions: Vec<TransactionRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionRecord {
    pub id: Option<serde_json::Value>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub local_id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub service: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub phone: String,
    pub amount: Option<serde_json::Value>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub note: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub result_status: String,
}

impl TransactionRecord {
    /// Both the gateway status and the result status report success.
    pub fn is_settled(&self) -> bool {
        self.status == STATUS_SUCCESS && self.result_status == STATUS_SUCCESS
    }
}

/// Refund instruction pushed to the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferRequest {
    pub local_id: String,
    pub service: String,
    pub phone: String,
    pub amount: String,
    pub note: String,
    pub api_key: String,
}
