use anyhow::Context as _;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
    DbBackend, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryTrait, Statement,
    TransactionTrait,
    sea_query::{Expr, OnConflict},
};
use sea_orm_migration::SchemaManager;
use tracing::{debug, warn};

use coupon_schema::{coupons, usage_logs};

use crate::config::DatabaseConfig;
use crate::domain::repository::{CouponRepository, StorageGateway};
use crate::domain::types::{CouponStats, GenerationEvent, StoredTable};
use crate::error::CouponServiceError;

/// Build a lazily-connecting pool. Nothing is dialed until the first request,
/// so an unreachable store does not prevent startup.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let url = config
        .connection_url()
        .map_err(|e| DbErr::Custom(format!("invalid database url: {e}")))?;
    let mut opts = ConnectOptions::new(url);
    opts.max_connections(config.max_connections)
        .min_connections(0)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.connect_timeout)
        .connect_lazy(true)
        .sqlx_logging(false);
    Database::connect(opts).await
}

// ── Gateway ───────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStorageGateway {
    /// `None` when the pool could not even be configured at startup.
    pub db: Option<DatabaseConnection>,
    /// Used only to label log lines.
    pub host: String,
}

impl DbStorageGateway {
    pub fn new(db: Option<DatabaseConnection>, host: impl Into<String>) -> Self {
        Self {
            db,
            host: host.into(),
        }
    }

    pub fn disconnected(host: impl Into<String>) -> Self {
        Self::new(None, host)
    }
}

impl StorageGateway for DbStorageGateway {
    type Repo = DbCouponRepository;

    async fn acquire(&self) -> Option<DbCouponRepository> {
        let Some(db) = &self.db else {
            warn!(host = %self.host, "no database pool configured");
            return None;
        };
        match db.ping().await {
            Ok(()) => {
                debug!(host = %self.host, "database connection acquired");
                Some(DbCouponRepository { db: db.clone() })
            }
            Err(e) => {
                warn!(host = %self.host, error = %e, "database connection unavailable");
                None
            }
        }
    }
}

/// Insert-if-absent for a coupon code; affects 0 rows when the code exists.
///
/// MySQL gets `INSERT IGNORE`: the `ON DUPLICATE KEY UPDATE` form counts a
/// duplicate as a matched row because sqlx always sets `CLIENT_FOUND_ROWS`.
pub fn insert_coupon_if_absent(backend: DbBackend, code: &str) -> Statement {
    match backend {
        DbBackend::MySql => Statement::from_sql_and_values(
            backend,
            "INSERT IGNORE INTO `coupons` (`coupon_code`) VALUES (?)",
            [code.into()],
        ),
        _ => coupons::Entity::insert(coupons::ActiveModel {
            coupon_code: Set(code.to_owned()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(coupons::Column::CouponCode)
                .do_nothing()
                .to_owned(),
        )
        .build(backend),
    }
}

// ── Coupon repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCouponRepository {
    pub db: DatabaseConnection,
}

impl CouponRepository for DbCouponRepository {
    async fn record_generation(&self, event: &GenerationEvent) -> Result<bool, CouponServiceError> {
        let txn = self.db.begin().await.context("begin generation txn")?;

        let inserted = txn
            .execute(insert_coupon_if_absent(
                txn.get_database_backend(),
                &event.coupon_code,
            ))
            .await
            .context("insert coupon")?
            .rows_affected();

        usage_logs::Entity::insert(usage_logs::ActiveModel {
            coupon_code: Set(event.coupon_code.clone()),
            ip_address: Set(Some(event.ip_address.clone())),
            ..Default::default()
        })
        .exec_without_returning(&txn)
        .await
        .context("insert usage log")?;

        txn.commit().await.context("commit generation txn")?;
        Ok(inserted > 0)
    }

    async fn coupon_stats(&self) -> Result<CouponStats, CouponServiceError> {
        let total = coupons::Entity::find()
            .count(&self.db)
            .await
            .context("count coupons")?;
        let used = coupons::Entity::find()
            .filter(coupons::Column::Used.eq(true))
            .count(&self.db)
            .await
            .context("count used coupons")?;
        // Compared on the store's own clock, not the application's.
        let today = coupons::Entity::find()
            .filter(Expr::cust("DATE(created_at) = CURRENT_DATE"))
            .count(&self.db)
            .await
            .context("count today's coupons")?;
        Ok(CouponStats { total, used, today })
    }

    async fn liveness_check(&self) -> Result<bool, CouponServiceError> {
        let backend = self.db.get_database_backend();
        let row = self
            .db
            .query_one(Statement::from_string(backend, "SELECT 1 AS test"))
            .await
            .context("run liveness query")?;
        let Some(row) = row else {
            return Ok(false);
        };
        let test: i64 = row.try_get("", "test").context("read liveness sentinel")?;
        Ok(test == 1)
    }

    async fn table_exists(&self, table: StoredTable) -> Result<bool, CouponServiceError> {
        let exists = SchemaManager::new(&self.db)
            .has_table(table.name())
            .await
            .with_context(|| format!("check table {}", table.name()))?;
        Ok(exists)
    }

    async fn count_rows(&self, table: StoredTable) -> Result<u64, CouponServiceError> {
        let count = match table {
            StoredTable::Coupons => coupons::Entity::find().count(&self.db).await,
            StoredTable::UsageLogs => usage_logs::Entity::find().count(&self.db).await,
        }
        .with_context(|| format!("count rows in {}", table.name()))?;
        Ok(count)
    }
}
