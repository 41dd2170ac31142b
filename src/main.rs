use tracing_subscriber::EnvFilter;

use cashbook::database::{connection::get_db_pool, schema::ensure_schema};
use cashbook::{build_router, AppConfig, AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("✅ App config loaded: {}", config.get_config_info());

    if let Err(e) = run(config).await {
        tracing::error!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let db = get_db_pool(&config.database_url).await?;
    ensure_schema(&db).await?;

    let addr = config.bind_address();
    let app_state = AppState::new(config, db)?;
    let app = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Server starting on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
