// database/schema.rs
use sqlx::PgPool;

use crate::errors::Result;

const STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS clients (
        name TEXT NOT NULL,
        api_key TEXT NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS users (
        username TEXT PRIMARY KEY,
        password TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS cashes (
        uuid UUID PRIMARY KEY,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL,
        client TEXT NOT NULL,
        contact TEXT NOT NULL,
        amount DOUBLE PRECISION NOT NULL,
        detail TEXT NOT NULL DEFAULT '',
        note TEXT NOT NULL DEFAULT ''
    )",
    "CREATE TABLE IF NOT EXISTS ranges (
        uuid UUID PRIMARY KEY,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL,
        client TEXT NOT NULL,
        detail TEXT NOT NULL DEFAULT '',
        note TEXT NOT NULL DEFAULT ''
    )",
    "CREATE INDEX IF NOT EXISTS cashes_client_created_at_idx ON cashes (client, created_at)",
    "CREATE INDEX IF NOT EXISTS cashes_detail_idx ON cashes (detail)",
    "CREATE INDEX IF NOT EXISTS ranges_client_created_at_idx ON ranges (client, created_at)",
];

/// Creates the tables if they are missing. Safe to run on every start.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::info!("Schema ready ({} statements)", STATEMENTS.len());
    Ok(())
}
