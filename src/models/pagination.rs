// models/pagination.rs
use serde::Deserialize;

pub const MAX_PAGE_SIZE: i64 = 500;

/// Raw `offset`/`limit` query values. Kept as strings so a bad value falls
/// back to the default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub offset: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Page {
    pub fn from_params(params: &PaginationParams, default_limit: i64) -> Self {
        Self::parse(params.offset.as_deref(), params.limit.as_deref(), default_limit)
    }

    pub fn parse(offset: Option<&str>, limit: Option<&str>, default_limit: i64) -> Self {
        let offset = offset
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|offset| *offset >= 0)
            .unwrap_or(0);

        let limit = limit
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(default_limit)
            .min(MAX_PAGE_SIZE);

        Page { offset, limit }
    }

    /// Picks `offset`/`limit` out of raw query pairs.
    pub fn from_pairs(pairs: &[(String, String)], default_limit: i64) -> Self {
        let value = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };
        Self::parse(value("offset"), value("limit"), default_limit)
    }
}
