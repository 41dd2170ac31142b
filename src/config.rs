// config.rs
use std::env;
use std::time::Duration;

use crate::errors::{AppError, Result};

/// Longest accepted token lifetime: ten years.
const MAX_TOKEN_LIFETIME_SECS: i64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    /// Access token lifetime, in seconds.
    pub access_token_timeout: i64,
    /// Refresh token lifetime, in minutes.
    pub refresh_token_timeout: i64,
    pub bookings_api_url: String,
    pub gateway_url: String,
    pub gateway_login: String,
    pub gateway_password: String,
    pub gateway_api_key: String,
    pub http_timeout: Duration,
    pub default_page_size: i64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| AppError::configuration(format!("{} must be set", key)))
        };

        let integer = |key: &str| -> Result<i64> {
            let raw = required(key)?;
            raw.trim().parse::<i64>().map_err(|e| {
                AppError::configuration(format!(
                    "couldn't convert {} to integer: {}",
                    key.to_lowercase(),
                    e
                ))
            })
        };

        // `unit_secs` converts one configured unit to seconds.
        let lifetime = |key: &str, unit_secs: i64| -> Result<i64> {
            let value = integer(key)?;
            if value <= 0 || value > MAX_TOKEN_LIFETIME_SECS / unit_secs {
                return Err(AppError::configuration(format!(
                    "{} must be between 1 and {}",
                    key.to_lowercase(),
                    MAX_TOKEN_LIFETIME_SECS / unit_secs
                )));
            }
            Ok(value)
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::configuration(format!("PORT must be a number: {}", e)))?,
            None => 8080,
        };

        let http_timeout = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.trim().parse::<u64>().map_err(|e| {
                AppError::configuration(format!("HTTP_TIMEOUT_SECS must be a number: {}", e))
            })?),
            None => Duration::from_secs(30),
        };

        let default_page_size = match lookup("DEFAULT_PAGE_SIZE") {
            Some(raw) => raw.trim().parse::<i64>().ok().filter(|size| *size > 0).ok_or_else(
                || AppError::configuration("DEFAULT_PAGE_SIZE must be a positive number"),
            )?,
            None => 20,
        };

        let mut gateway_url = required("GOTOLEG_URL")?;
        if !gateway_url.ends_with('/') {
            gateway_url.push('/');
        }

        Ok(AppConfig {
            database_url: required("DATABASE_URL")?,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            jwt_secret: required("JWT_SECRET")?,
            access_token_timeout: lifetime("ACCESS_TOKEN_TIMEOUT", 1)?,
            refresh_token_timeout: lifetime("REFRESH_TOKEN_TIMEOUT", 60)?,
            bookings_api_url: required("BOOKINGS_API_URL")?,
            gateway_url,
            gateway_login: required("GOTOLEG_LOGIN")?,
            gateway_password: required("GOTOLEG_PASS")?,
            gateway_api_key: lookup("GOTOLEG_API_KEY").unwrap_or_default(),
            http_timeout,
            default_page_size,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Summary safe to log: no secrets.
    pub fn get_config_info(&self) -> serde_json::Value {
        serde_json::json!({
            "host": self.host,
            "port": self.port,
            "access_token_timeout_secs": self.access_token_timeout,
            "refresh_token_timeout_mins": self.refresh_token_timeout,
            "bookings_api_url": self.bookings_api_url,
            "gateway_url": self.gateway_url,
            "gateway_api_key_set": !self.gateway_api_key.is_empty(),
            "http_timeout_secs": self.http_timeout.as_secs(),
            "default_page_size": self.default_page_size,
        })
    }
}
