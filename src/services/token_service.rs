// services/token_service.rs
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::models::user::{Claims, TokenPair};

/// Issues and verifies HS256 access/refresh tokens bound to a username.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        TokenService {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.jwt_secret,
            Duration::seconds(config.access_token_timeout),
            Duration::minutes(config.refresh_token_timeout),
        )
    }

    pub fn issue(&self, username: &str) -> Result<TokenPair> {
        Ok(TokenPair {
            access_token: self.sign(username, self.access_ttl)?,
            refresh_token: self.sign(username, self.refresh_ttl)?,
        })
    }

    /// Verifies `refresh_token` and mints a new pair for its user. The old
    /// refresh token is not handed back.
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair> {
        let claims = self.verify(refresh_token)?;
        self.issue(&claims.username)
    }

    pub fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::TokenInvalid(e.to_string()),
            })
    }

    fn sign(&self, username: &str, ttl: Duration) -> Result<String> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::TokenIssue("token lifetime out of range".to_string()))?;
        let claims = Claims {
            username: username.to_string(),
            iat: now.timestamp().max(0) as usize,
            exp: expires_at.timestamp().max(0) as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::TokenIssue(e.to_string()))
    }
}
