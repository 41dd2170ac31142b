// models/currency.rs
use serde::{Deserialize, Serialize};

/// Banknote values cash entries are bucketed by in range reports.
pub const DENOMINATIONS: [u32; 6] = [1, 5, 10, 20, 50, 100];

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub total_amount: f64,
    /// Number of entries in the bucket.
    pub amount: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Currencies {
    pub one: Currency,
    pub five: Currency,
    pub ten: Currency,
    pub twenty: Currency,
    pub fifty: Currency,
    pub one_hundred: Currency,
}

impl Currencies {
    /// Stores `bucket` under `denomination`. Values outside
    /// [`DENOMINATIONS`] are ignored.
    pub fn set(&mut self, denomination: u32, bucket: Currency) {
        let slot = match denomination {
            1 => &mut self.one,
            5 => &mut self.five,
            10 => &mut self.ten,
            20 => &mut self.twenty,
            50 => &mut self.fifty,
            100 => &mut self.one_hundred,
            _ => return,
        };
        *slot = bucket;
    }
}
