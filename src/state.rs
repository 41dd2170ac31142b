use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::booking_client::BookingClient;
use crate::services::build_http_client;
use crate::services::gateway_client::{GatewayClient, PaymentGateway};
use crate::services::ledger::LedgerStore;
use crate::services::reconciliation::ReconciliationService;
use crate::services::token_service::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub ledger: LedgerStore,
    pub tokens: Arc<TokenService>,
    pub gateway: Arc<dyn PaymentGateway>,
    pub reconciliation: Arc<ReconciliationService>,
}

impl AppState {
    /// Wires the production HTTP clients from `config`.
    pub fn new(config: AppConfig, db: PgPool) -> Result<Self> {
        let http = build_http_client(config.http_timeout)?;

        let bookings = Arc::new(BookingClient::new(http.clone(), config.bookings_api_url.clone()));
        let gateway: Arc<dyn PaymentGateway> = Arc::new(GatewayClient::new(
            http,
            config.gateway_url.clone(),
            config.gateway_login.clone(),
            config.gateway_password.clone(),
        ));

        let reconciliation = ReconciliationService::new(bookings, gateway.clone());

        Ok(AppState {
            tokens: Arc::new(TokenService::from_config(&config)),
            config: Arc::new(config),
            ledger: LedgerStore::new(db),
            gateway,
            reconciliation: Arc::new(reconciliation),
        })
    }
}
