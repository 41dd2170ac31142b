// services/ledger.rs
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::Result;
use crate::models::cash::{CashEntry, CashFilter, NewCash};
use crate::models::currency::{Currencies, Currency, DENOMINATIONS};
use crate::models::pagination::Page;
use crate::models::range::{NewRange, RangeRecord, RangeReport, Window};

const CASH_COLUMNS: &str = "uuid, amount, detail, note, client, contact, created_at";
const RANGE_COLUMNS: &str = "uuid, created_at, updated_at, client, detail, note";

/// Persistence for `cashes` and `ranges`, plus the per-range aggregates.
///
/// Statements run one at a time on the pool; nothing here opens a
/// transaction.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    pool: PgPool,
}

impl LedgerStore {
    pub fn new(pool: PgPool) -> Self {
        LedgerStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Name of the client owning `api_key`.
    pub async fn resolve_client(&self, api_key: &str) -> Result<Option<String>> {
        let name = sqlx::query_scalar::<_, String>("SELECT name FROM clients WHERE api_key = $1")
            .bind(api_key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(name)
    }

    pub async fn insert_cash(&self, client: &str, cash: &NewCash) -> Result<Uuid> {
        let uuid = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO cashes (uuid, created_at, updated_at, client, contact, amount, detail, note) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(uuid)
        .bind(now)
        .bind(now)
        .bind(client)
        .bind(&cash.contact)
        .bind(cash.amount)
        .bind(&cash.detail)
        .bind(&cash.note)
        .execute(&self.pool)
        .await?;

        Ok(uuid)
    }

    pub async fn insert_range(&self, client: &str, range: &NewRange) -> Result<Uuid> {
        let uuid = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO ranges (uuid, created_at, updated_at, client, detail, note) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(uuid)
        .bind(now)
        .bind(now)
        .bind(client)
        .bind(&range.detail)
        .bind(&range.note)
        .execute(&self.pool)
        .await?;

        Ok(uuid)
    }

    pub async fn find_cash(&self, uuid: Uuid) -> Result<Option<CashEntry>> {
        let sql = format!("SELECT {} FROM cashes WHERE uuid = $1", CASH_COLUMNS);
        let cash = sqlx::query_as::<_, CashEntry>(&sql)
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await?;
        Ok(cash)
    }

    /// Filtered page of cash entries, newest first, with the filtered total.
    pub async fn list_cashes(&self, filter: &CashFilter, page: Page) -> Result<(Vec<CashEntry>, i64)> {
        let binds = filter.binds();
        let where_clause = filter.where_clause(1);

        let sql = format!(
            "SELECT {} FROM cashes{} ORDER BY created_at DESC OFFSET ${} LIMIT ${}",
            CASH_COLUMNS,
            where_clause,
            binds.len() + 1,
            binds.len() + 2
        );
        debug!("cash listing: {}", sql);

        let mut query = sqlx::query_as::<_, CashEntry>(&sql);
        for pattern in &binds {
            query = query.bind(*pattern);
        }
        let cashes = query
            .bind(page.offset)
            .bind(page.limit)
            .fetch_all(&self.pool)
            .await?;

        let count_sql = format!("SELECT COUNT(*) FROM cashes{}", where_clause);
        let mut count = sqlx::query_scalar::<_, i64>(&count_sql);
        for pattern in &binds {
            count = count.bind(*pattern);
        }
        let total = count.fetch_one(&self.pool).await?;

        Ok((cashes, total))
    }

    pub async fn list_ranges(&self, page: Page) -> Result<(Vec<RangeRecord>, i64)> {
        let sql = format!(
            "SELECT {} FROM ranges ORDER BY created_at DESC OFFSET $1 LIMIT $2",
            RANGE_COLUMNS
        );
        let ranges = sqlx::query_as::<_, RangeRecord>(&sql)
            .bind(page.offset)
            .bind(page.limit)
            .fetch_all(&self.pool)
            .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM ranges")
            .fetch_one(&self.pool)
            .await?;

        Ok((ranges, total))
    }

    /// Timestamp of the client's latest range strictly before `before`.
    pub async fn previous_range_at(
        &self,
        client: &str,
        before: DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>> {
        let at = sqlx::query_scalar::<_, DateTime<Utc>>(
            "SELECT created_at FROM ranges WHERE created_at < $1 AND client = $2 \
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(before)
        .bind(client)
        .fetch_optional(&self.pool)
        .await?;
        Ok(at)
    }

    /// Sum of the client's cash inside `window`; zero when there is none.
    pub async fn window_total(&self, client: &str, window: Window) -> Result<f64> {
        let total = sqlx::query_scalar::<_, f64>(
            "SELECT COALESCE(SUM(amount), 0::float8) FROM cashes \
             WHERE created_at >= $1 AND created_at <= $2 AND client = $3",
        )
        .bind(window.start)
        .bind(window.end)
        .bind(client)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    pub async fn denomination_bucket(
        &self,
        client: &str,
        window: Window,
        denomination: u32,
    ) -> Result<Currency> {
        let (total_amount, amount) = sqlx::query_as::<_, (f64, i64)>(
            "SELECT COALESCE(SUM(amount), 0::float8), COUNT(amount) FROM cashes \
             WHERE created_at >= $1 AND created_at <= $2 AND client = $3 AND amount = $4",
        )
        .bind(window.start)
        .bind(window.end)
        .bind(client)
        .bind(f64::from(denomination))
        .fetch_one(&self.pool)
        .await?;

        Ok(Currency {
            total_amount,
            amount,
        })
    }

    // TODO: fold the per-denomination queries into one GROUP BY over the
    // window; currently 2 + DENOMINATIONS.len() round trips per range.
    pub async fn report_for(&self, range: RangeRecord) -> Result<RangeReport> {
        let previous = self.previous_range_at(&range.client, range.created_at).await?;
        let window = Window::ending_at(previous, range.created_at);

        let total_amount = self.window_total(&range.client, window).await?;

        let mut currencies = Currencies::default();
        for denomination in DENOMINATIONS {
            let bucket = self
                .denomination_bucket(&range.client, window, denomination)
                .await?;
            currencies.set(denomination, bucket);
        }

        Ok(RangeReport::new(range, total_amount, currencies))
    }

    /// Page of ranges, newest first, each with its window totals.
    pub async fn range_report(&self, page: Page) -> Result<(Vec<RangeReport>, i64)> {
        let (ranges, total) = self.list_ranges(page).await?;

        let mut reports = Vec::with_capacity(ranges.len());
        for range in ranges {
            reports.push(self.report_for(range).await?);
        }

        Ok((reports, total))
    }

    /// Payer contact recorded against a booking number (newest entry wins).
    pub async fn contact_for_booking(&self, booking_number: &str) -> Result<Option<String>> {
        let contact = sqlx::query_scalar::<_, String>(
            "SELECT contact FROM cashes WHERE detail = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(booking_number)
        .fetch_optional(&self.pool)
        .await?;
        Ok(contact)
    }
}
