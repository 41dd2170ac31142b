// src/errors.rs
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Client hasn't been found")]
    InvalidApiKey,

    #[error("Invalid password")]
    WrongPassword,

    #[error("Auth token is required")]
    TokenRequired,

    #[error("Invalid token")]
    TokenMalformed,

    #[error("Token expired")]
    TokenExpired,

    #[error("Couldn't parse token: {0}")]
    TokenInvalid(String),

    #[error("Couldn't create token: {0}")]
    TokenIssue(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            AppError::InvalidApiKey => (StatusCode::UNAUTHORIZED, "invalid_api_key"),
            AppError::WrongPassword => (StatusCode::BAD_REQUEST, "wrong_password"),
            AppError::TokenRequired => (StatusCode::UNAUTHORIZED, "token_required"),
            AppError::TokenMalformed => (StatusCode::BAD_REQUEST, "token_wrong"),
            AppError::TokenExpired => (StatusCode::FORBIDDEN, "token_expired"),
            AppError::TokenInvalid(_) => (StatusCode::FORBIDDEN, "invalid_token"),
            AppError::TokenIssue(_) => (StatusCode::INTERNAL_SERVER_ERROR, "token_issue"),
            AppError::Upstream(_) => (StatusCode::BAD_GATEWAY, "upstream_error"),
            AppError::ConfigurationError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error")
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status_and_code().0
    }

    pub fn code(&self) -> &'static str {
        self.status_and_code().1
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(json!({
            "error": code,
            "message": self.to_string(),
            "success": false,
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        AppError::ValidationError(err.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(err: PathRejection) -> Self {
        AppError::ValidationError(err.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

// Helper conversion functions
impl AppError {
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        AppError::Upstream(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::ConfigurationError(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
