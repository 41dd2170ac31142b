// models/booking.rs
//! Envelope returned by the bookings API, plus the verdict the check
//! endpoint builds from it.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingsResponse {
    #[serde(deserialize_with = "super::null_as_default")]
    pub success: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub data: BookingData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingData {
    #[serde(deserialize_with = "super::null_as_default")]
    pub booking: Booking,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Booking {
    #[serde(deserialize_with = "super::null_as_default")]
    pub booking_number: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub main_contact: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub phone: String,
    pub email: Option<serde_json::Value>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub total_price: f64,
    pub expire_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub tickets: Vec<Ticket>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub payments: Vec<Payment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticket {
    #[serde(deserialize_with = "super::null_as_default")]
    pub qr_code: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub pdf_url: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub passenger: Passenger,
    #[serde(deserialize_with = "super::null_as_default")]
    pub pnrs: Vec<Pnr>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Passenger {
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub surname: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub dob: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub gender: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub identity_type: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub identity_number: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pnr {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub ticket_number: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub train_run_number: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub destination: String,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub service_type_title: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub wagon_type_title: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub wagon_number: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub seat_label: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub return_ticket: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub status: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub price_formation: Vec<PriceFormation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceFormation {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub amount: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
    #[serde(deserialize_with = "super::null_as_default")]
    pub payment_type: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub amount: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub receipt: String,
    pub payment_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub details: String,
}

/// One half of a booking check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub found: bool,
    pub message: String,
}

impl Verdict {
    pub fn found(message: impl Into<String>) -> Self {
        Verdict {
            found: true,
            message: message.into(),
        }
    }

    pub fn missing(message: impl Into<String>) -> Self {
        Verdict {
            found: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckBookingResponse {
    pub booking: Verdict,
    pub transaction: Verdict,
}
