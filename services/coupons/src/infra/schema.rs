use anyhow::Context as _;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use coupon_migration::Migrator;

use crate::error::CouponServiceError;
use crate::infra::db::DbStorageGateway;

/// Create the service tables if they are absent. Runs once at startup.
pub async fn initialize(gateway: &DbStorageGateway) -> Result<(), CouponServiceError> {
    let db = gateway
        .db
        .as_ref()
        .ok_or(CouponServiceError::StorageUnavailable)?;
    Migrator::up(db, None)
        .await
        .context("create coupon tables")?;
    Ok(())
}

/// Like [`initialize`], but only logs the outcome: the service keeps serving
/// without persistence if the schema cannot be created.
pub async fn initialize_or_degrade(gateway: &DbStorageGateway) -> bool {
    info!(host = %gateway.host, "initializing database schema");
    match initialize(gateway).await {
        Ok(()) => {
            info!("database tables initialized");
            true
        }
        Err(e) => {
            error!(error = %e, kind = e.kind(), "database initialization failed, continuing without persistence");
            false
        }
    }
}
