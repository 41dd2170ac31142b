use serde::{Deserialize, Serialize};

/// Operator account allowed to read the ledger.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub username: String,
    /// bcrypt hash.
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    pub username: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
