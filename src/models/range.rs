// models/range.rs
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::currency::Currencies;

/// Start used for a client's first range, which has no predecessor.
pub fn window_sentinel() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2001, 12, 28, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// A checkpoint row from `ranges`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RangeRecord {
    pub uuid: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub client: String,
    pub detail: String,
    pub note: String,
}

#[derive(Debug, Clone)]
pub struct NewRange {
    pub detail: String,
    pub note: String,
}

/// Inclusive time window covered by a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Window {
    /// Window ending at `end` and starting at the previous range, or at the
    /// sentinel when there is none. `start` never exceeds `end`.
    pub fn ending_at(previous: Option<DateTime<Utc>>, end: DateTime<Utc>) -> Self {
        let start = previous.unwrap_or_else(window_sentinel).min(end);
        Window { start, end }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RangeReport {
    pub uuid: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub client: String,
    pub detail: String,
    pub note: String,
    pub total_amount: f64,
    pub currencies: Currencies,
}

impl RangeReport {
    pub fn new(range: RangeRecord, total_amount: f64, currencies: Currencies) -> Self {
        RangeReport {
            uuid: range.uuid,
            created_at: range.created_at,
            updated_at: range.updated_at,
            client: range.client,
            detail: range.detail,
            note: range.note,
            total_amount,
            currencies,
        }
    }
}
