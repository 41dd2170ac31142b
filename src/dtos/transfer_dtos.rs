use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RefundRequest {
    #[validate(length(min = 1, message = "booking_number is required"))]
    pub booking_number: String,
    #[validate(range(min = 1, message = "amount must be positive"))]
    pub amount: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
