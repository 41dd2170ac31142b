//! Booking and gateway clients, and the reconciliation flow built on them,
//! exercised over real HTTP against throwaway servers.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use cashbook::models::booking::Verdict;
use cashbook::models::transaction::TransferRequest;
use cashbook::services::booking_client::{BookingClient, BookingSource};
use cashbook::services::build_http_client;
use cashbook::services::gateway_client::{GatewayClient, PaymentGateway};
use cashbook::services::reconciliation::ReconciliationService;
use cashbook::services::ClientError;
use serde_json::json;

use common::{closed_url, FakeBookings, FakeGateway, GATEWAY_LOGIN, GATEWAY_PASSWORD, GATEWAY_TOKEN};

fn http() -> reqwest::Client {
    build_http_client(Duration::from_secs(5)).unwrap()
}

fn gateway_client(base_url: &str) -> GatewayClient {
    GatewayClient::new(http(), base_url, GATEWAY_LOGIN, GATEWAY_PASSWORD)
}

fn reconciliation(bookings_url: &str, gateway_url: &str) -> ReconciliationService {
    ReconciliationService::new(
        Arc::new(BookingClient::new(http(), bookings_url)),
        Arc::new(gateway_client(gateway_url)),
    )
}

// === Booking client ===

#[tokio::test]
async fn booking_lookup_parses_envelope() {
    let url = FakeBookings::default().with_booking("BK123").start().await;
    let client = BookingClient::new(http(), url);

    let response = client.lookup("BK123").await.unwrap();

    assert!(response.success);
    assert_eq!(response.data.booking.booking_number, "BK123");
    assert_eq!(response.data.booking.total_price, 150.0);
}

#[tokio::test]
async fn booking_lookup_reports_unknown_booking() {
    let url = FakeBookings::default().start().await;
    let response = BookingClient::new(http(), url).lookup("NOPE").await.unwrap();
    assert!(!response.success);
}

#[tokio::test]
async fn booking_lookup_non_2xx_is_an_error() {
    let url = FakeBookings::default()
        .failing_with(StatusCode::BAD_GATEWAY)
        .start()
        .await;
    let err = BookingClient::new(http(), url).lookup("BK123").await.unwrap_err();
    assert!(matches!(err, ClientError::Status(_)));
}

// === Gateway client ===

#[tokio::test]
async fn gateway_login_returns_bearer_token() {
    let fake = FakeGateway::default();
    let url = fake.start().await;

    let token = gateway_client(&url).login().await.unwrap();

    assert_eq!(token, GATEWAY_TOKEN);
    assert_eq!(fake.login_count(), 1);
}

#[tokio::test]
async fn gateway_login_with_bad_credentials_fails() {
    let url = FakeGateway::default().start().await;
    let client = GatewayClient::new(http(), url, GATEWAY_LOGIN, "wrong");

    let err = client.login().await.unwrap_err();

    assert_eq!(err.to_string(), "request failed with status: 401 Unauthorized");
}

#[tokio::test]
async fn gateway_lists_transactions_by_note() {
    let fake = FakeGateway::default()
        .with_transaction("BK123", "SUCCESS", "SUCCESS")
        .with_transaction("BK999", "FAILED", "FAILED");
    let url = fake.start().await;
    let client = gateway_client(&url);

    let token = client.login().await.unwrap();
    let transactions = client.list_transactions(&token, "BK123").await.unwrap();

    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].note, "BK123");
    assert!(transactions[0].is_settled());
}

#[tokio::test]
async fn gateway_listing_without_token_is_rejected() {
    let url = FakeGateway::default().start().await;
    let err = gateway_client(&url)
        .list_transactions("stale", "BK123")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Status(_)));
}

#[tokio::test]
async fn gateway_transfer_posts_payload() {
    let fake = FakeGateway::default();
    let url = fake.start().await;
    let transfer = TransferRequest {
        local_id: "local-1".into(),
        service: String::new(),
        phone: "+99365123456".into(),
        amount: "150".into(),
        note: "BK123".into(),
        api_key: "gateway-api-key".into(),
    };

    gateway_client(&url).send_transfer(&transfer).await.unwrap();

    assert_eq!(*fake.transfers.lock().unwrap(), vec![transfer]);
}

#[tokio::test]
async fn gateway_transfer_non_200_is_an_error() {
    let fake = FakeGateway::default().transfer_fails_with(StatusCode::INTERNAL_SERVER_ERROR);
    let url = fake.start().await;
    let transfer = TransferRequest {
        local_id: "local-1".into(),
        service: String::new(),
        phone: "+99365123456".into(),
        amount: "150".into(),
        note: "BK123".into(),
        api_key: String::new(),
    };

    let err = gateway_client(&url).send_transfer(&transfer).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "request failed with status: 500 Internal Server Error"
    );
}

#[tokio::test]
async fn gateway_transfer_answered_with_other_2xx_is_an_error() {
    let fake = FakeGateway::default().accepting_with(StatusCode::ACCEPTED);
    let url = fake.start().await;
    let transfer = TransferRequest {
        local_id: "local-1".into(),
        service: String::new(),
        phone: "+99365123456".into(),
        amount: "150".into(),
        note: "BK123".into(),
        api_key: String::new(),
    };

    let err = gateway_client(&url).send_transfer(&transfer).await.unwrap_err();

    assert_eq!(err.to_string(), "request failed with status: 202 Accepted");
}

// === Reconciliation ===

#[tokio::test]
async fn unknown_booking_with_settled_transaction() {
    let bookings = FakeBookings::default().start().await;
    let gateway = FakeGateway::default().with_transaction("BK123", "SUCCESS", "SUCCESS");
    let gateway_url = gateway.start().await;

    let result = reconciliation(&bookings, &gateway_url).check_booking("BK123").await;

    assert_eq!(result.booking, Verdict::missing("not found"));
    assert_eq!(result.transaction, Verdict::found("success"));
}

#[tokio::test]
async fn unreachable_bookings_api_still_checks_transaction() {
    let bookings = closed_url().await;
    let gateway = FakeGateway::default().with_transaction("BK123", "SUCCESS", "PENDING");
    let gateway_url = gateway.start().await;

    let result = reconciliation(&bookings, &gateway_url).check_booking("BK123").await;

    assert!(!result.booking.found);
    assert_eq!(result.transaction, Verdict::missing("not refunded"));
    assert_eq!(gateway.login_count(), 1);
}

#[tokio::test]
async fn no_matching_transactions_is_not_found() {
    let bookings = FakeBookings::default().with_booking("BK123").start().await;
    let gateway = FakeGateway::default().with_transaction("OTHER", "SUCCESS", "SUCCESS");
    let gateway_url = gateway.start().await;

    let result = reconciliation(&bookings, &gateway_url).check_booking("BK123").await;

    assert_eq!(result.booking, Verdict::found("found"));
    assert_eq!(result.transaction, Verdict::missing("not found"));
}

#[tokio::test]
async fn gateway_outage_is_reported_in_message() {
    let bookings = FakeBookings::default().with_booking("BK123").start().await;
    let gateway = FakeGateway::default().listing_fails_with(StatusCode::SERVICE_UNAVAILABLE);
    let gateway_url = gateway.start().await;

    let result = reconciliation(&bookings, &gateway_url).check_booking("BK123").await;

    assert!(result.booking.found);
    assert_eq!(
        result.transaction,
        Verdict::missing("request failed with status: 503 Service Unavailable")
    );
}

#[tokio::test]
async fn settled_transaction_with_null_fields_is_success() {
    let bookings = FakeBookings::default().with_booking("BK123").start().await;
    let gateway = FakeGateway::default();
    gateway.transactions.lock().unwrap().push(json!({
        "id": 1,
        "local_id": null,
        "service": null,
        "phone": null,
        "amount": "150",
        "note": "BK123",
        "status": "SUCCESS",
        "result_status": "SUCCESS",
    }));
    let gateway_url = gateway.start().await;

    let result = reconciliation(&bookings, &gateway_url).check_booking("BK123").await;

    assert_eq!(result.transaction, Verdict::found("success"));
}

#[tokio::test]
async fn every_check_logs_in_again() {
    let bookings = FakeBookings::default().start().await;
    let gateway = FakeGateway::default();
    let gateway_url = gateway.start().await;
    let service = reconciliation(&bookings, &gateway_url);

    service.check_booking("BK1").await;
    service.check_booking("BK2").await;

    assert_eq!(gateway.login_count(), 2);
}
