use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::errors::{AppError, Result};
use crate::models::cash::{CashEntry, NewCash};
use crate::models::range::{NewRange, RangeReport};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCashRequest {
    #[validate(length(min = 1, message = "api_key is required"))]
    pub api_key: String,
    pub amount: f64,
    #[validate(length(min = 1, message = "contact is required"))]
    pub contact: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub note: String,
}

impl CreateCashRequest {
    pub fn into_new_cash(self) -> Result<(String, NewCash)> {
        self.validate()?;
        if self.amount == 0.0 || !self.amount.is_finite() {
            return Err(AppError::invalid_data("amount is required"));
        }

        Ok((
            self.api_key,
            NewCash {
                contact: self.contact,
                amount: self.amount,
                detail: self.detail,
                note: self.note,
            },
        ))
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRangeRequest {
    #[validate(length(min = 1, message = "api_key is required"))]
    pub api_key: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub note: String,
}

impl CreateRangeRequest {
    pub fn into_new_range(self) -> Result<(String, NewRange)> {
        self.validate()?;
        Ok((
            self.api_key,
            NewRange {
                detail: self.detail,
                note: self.note,
            },
        ))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub uuid: Uuid,
}

impl CreatedResponse {
    pub fn saved(uuid: Uuid) -> Self {
        CreatedResponse {
            message: "Successfully saved into database".to_string(),
            uuid,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CashListResponse {
    pub cashes: Vec<CashEntry>,
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct CashResponse {
    pub cash: CashEntry,
}

#[derive(Debug, Serialize)]
pub struct RangeListResponse {
    pub ranges: Vec<RangeReport>,
    pub total: i64,
}
