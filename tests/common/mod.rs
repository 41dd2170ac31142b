//! Throwaway upstream servers for the bookings API and the payment gateway.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use cashbook::models::transaction::TransferRequest;
use cashbook::AppConfig;

pub const GATEWAY_LOGIN: &str = "operator";
pub const GATEWAY_PASSWORD: &str = "hunter2";
pub const GATEWAY_TOKEN: &str = "gw-token-1";
pub const JWT_SECRET: &str = "integration-secret";

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Address nothing is listening on.
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

// ===== Bookings API =====

#[derive(Clone, Default)]
pub struct FakeBookings {
    /// ticket number -> body to answer with; unknown numbers get `{"success": false}`.
    pub bookings: Arc<Mutex<HashMap<String, Value>>>,
    pub status: Arc<Mutex<Option<StatusCode>>>,
}

impl FakeBookings {
    pub fn with_booking(self, number: &str) -> Self {
        self.bookings.lock().unwrap().insert(
            number.to_string(),
            json!({
                "success": true,
                "data": {"booking": {
                    "booking_number": number,
                    "main_contact": "Aman",
                    "phone": "+99365123456",
                    "total_price": 150.0,
                    "tickets": [],
                    "payments": [{"payment_type": "cash", "amount": 150.0}]
                }}
            }),
        );
        self
    }

    pub fn failing_with(self, status: StatusCode) -> Self {
        *self.status.lock().unwrap() = Some(status);
        self
    }

    /// Base URL ending in `/bookings/`, ready for the ticket number.
    pub async fn start(self) -> String {
        let app = Router::new()
            .route("/bookings/:number", get(booking_by_number))
            .with_state(self);
        format!("{}/bookings/", serve(app).await)
    }
}

async fn booking_by_number(State(fake): State<FakeBookings>, Path(number): Path<String>) -> Response {
    if let Some(status) = *fake.status.lock().unwrap() {
        return (status, "upstream down").into_response();
    }
    let body = fake
        .bookings
        .lock()
        .unwrap()
        .get(&number)
        .cloned()
        .unwrap_or_else(|| json!({"success": false, "data": {"booking": {}}}));
    Json(body).into_response()
}

// ===== Payment gateway =====

#[derive(Clone, Default)]
pub struct FakeGateway {
    pub transactions: Arc<Mutex<Vec<Value>>>,
    pub transfers: Arc<Mutex<Vec<TransferRequest>>>,
    pub logins: Arc<Mutex<usize>>,
    pub listing_status: Arc<Mutex<Option<StatusCode>>>,
    pub transfer_status: Arc<Mutex<Option<StatusCode>>>,
    /// Answer for an accepted transfer; `200 OK` unless overridden.
    pub accepted_status: Arc<Mutex<Option<StatusCode>>>,
}

impl FakeGateway {
    pub fn with_transaction(self, note: &str, status: &str, result_status: &str) -> Self {
        let mut transactions = self.transactions.lock().unwrap();
        let id = transactions.len() + 1;
        transactions.push(json!({
            "id": id,
            "phone": "+99365123456",
            "amount": "150",
            "note": note,
            "status": status,
            "result_status": result_status,
        }));
        drop(transactions);
        self
    }

    pub fn listing_fails_with(self, status: StatusCode) -> Self {
        *self.listing_status.lock().unwrap() = Some(status);
        self
    }

    pub fn transfer_fails_with(self, status: StatusCode) -> Self {
        *self.transfer_status.lock().unwrap() = Some(status);
        self
    }

    pub fn accepting_with(self, status: StatusCode) -> Self {
        *self.accepted_status.lock().unwrap() = Some(status);
        self
    }

    pub fn login_count(&self) -> usize {
        *self.logins.lock().unwrap()
    }

    /// Base URL ending in `/`.
    pub async fn start(&self) -> String {
        let app = Router::new()
            .route("/api/auth/login", post(gateway_login))
            .route("/api/transactions", get(gateway_transactions))
            .route("/api/trnxs", post(gateway_transfer))
            .with_state(self.clone());
        format!("{}/api/", serve(app).await)
    }
}

async fn gateway_login(State(fake): State<FakeGateway>, Json(body): Json<Value>) -> Response {
    *fake.logins.lock().unwrap() += 1;
    if body["username"] == GATEWAY_LOGIN && body["password"] == GATEWAY_PASSWORD {
        Json(json!({"access_token": GATEWAY_TOKEN})).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"detail": "bad credentials"}))).into_response()
    }
}

async fn gateway_transactions(
    State(fake): State<FakeGateway>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let expected = format!("Bearer {}", GATEWAY_TOKEN);
    if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some(expected.as_str()) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if let Some(status) = *fake.listing_status.lock().unwrap() {
        return status.into_response();
    }

    let note = query.get("note").cloned().unwrap_or_default();
    let matching: Vec<Value> = fake
        .transactions
        .lock()
        .unwrap()
        .iter()
        .filter(|t| t["note"] == note.as_str())
        .cloned()
        .collect();
    Json(json!({"transactions": matching, "total": matching.len()})).into_response()
}

async fn gateway_transfer(
    State(fake): State<FakeGateway>,
    Json(transfer): Json<TransferRequest>,
) -> Response {
    if let Some(status) = *fake.transfer_status.lock().unwrap() {
        return status.into_response();
    }
    fake.transfers.lock().unwrap().push(transfer);
    let status = fake.accepted_status.lock().unwrap().unwrap_or(StatusCode::OK);
    (status, Json(json!({"status": "accepted"}))).into_response()
}

// ===== Config =====

pub fn test_config(bookings_url: &str, gateway_url: &str) -> AppConfig {
    let vars: HashMap<&str, String> = HashMap::from([
        ("DATABASE_URL", "postgres://cashbook@127.0.0.1:1/unused".to_string()),
        ("JWT_SECRET", JWT_SECRET.to_string()),
        ("ACCESS_TOKEN_TIMEOUT", "60".to_string()),
        ("REFRESH_TOKEN_TIMEOUT", "10".to_string()),
        ("BOOKINGS_API_URL", bookings_url.to_string()),
        ("GOTOLEG_URL", gateway_url.to_string()),
        ("GOTOLEG_LOGIN", GATEWAY_LOGIN.to_string()),
        ("GOTOLEG_PASS", GATEWAY_PASSWORD.to_string()),
        ("GOTOLEG_API_KEY", "gateway-api-key".to_string()),
        ("HTTP_TIMEOUT_SECS", "5".to_string()),
    ]);
    AppConfig::from_vars(|key| vars.get(key).cloned()).unwrap()
}
