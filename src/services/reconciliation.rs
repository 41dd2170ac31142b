// services/reconciliation.rs
use std::sync::Arc;

use tracing::{info, warn};

use super::booking_client::BookingSource;
use super::gateway_client::PaymentGateway;
use super::ClientError;
use crate::models::booking::{CheckBookingResponse, Verdict};

pub const MSG_FOUND: &str = "found";
pub const MSG_NOT_FOUND: &str = "not found";
pub const MSG_SUCCESS: &str = "success";
pub const MSG_NOT_REFUNDED: &str = "not refunded";

/// Answers whether a booking exists and whether its money reached the
/// payer. Both halves are computed on every call and nothing is stored.
#[derive(Clone)]
pub struct ReconciliationService {
    bookings: Arc<dyn BookingSource>,
    gateway: Arc<dyn PaymentGateway>,
}

impl ReconciliationService {
    pub fn new(bookings: Arc<dyn BookingSource>, gateway: Arc<dyn PaymentGateway>) -> Self {
        ReconciliationService { bookings, gateway }
    }

    pub async fn check_booking(&self, booking_number: &str) -> CheckBookingResponse {
        let booking = self.lookup_booking(booking_number).await;
        let transaction = self.verify_transfer(booking_number).await;

        info!(
            booking_number,
            booking_found = booking.found,
            transaction_found = transaction.found,
            "Booking checked"
        );

        CheckBookingResponse {
            booking,
            transaction,
        }
    }

    /// Upstream failures degrade to "not found".
    pub async fn lookup_booking(&self, booking_number: &str) -> Verdict {
        match self.bookings.lookup(booking_number).await {
            Ok(response) if response.success => Verdict::found(MSG_FOUND),
            Ok(_) => Verdict::missing(MSG_NOT_FOUND),
            Err(e) => {
                warn!("Booking lookup for {} failed: {}", booking_number, e);
                Verdict::missing(MSG_NOT_FOUND)
            }
        }
    }

    /// Logs in to the gateway and inspects the first transaction whose note
    /// is the booking number. Failures are reported in the message.
    pub async fn verify_transfer(&self, booking_number: &str) -> Verdict {
        match self.first_transaction_settled(booking_number).await {
            Ok(Some(true)) => Verdict::found(MSG_SUCCESS),
            Ok(Some(false)) => Verdict::missing(MSG_NOT_REFUNDED),
            Ok(None) => Verdict::missing(MSG_NOT_FOUND),
            Err(e) => {
                warn!("Transfer check for {} failed: {}", booking_number, e);
                Verdict::missing(e.to_string())
            }
        }
    }

    async fn first_transaction_settled(
        &self,
        booking_number: &str,
    ) -> Result<Option<bool>, ClientError> {
        let token = self.gateway.login().await?;
        let transactions = self.gateway.list_transactions(&token, booking_number).await?;
        Ok(transactions.first().map(|t| t.is_settled()))
    }
}
