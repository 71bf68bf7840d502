#![allow(async_fn_in_trait)]

use crate::domain::types::{CouponStats, GenerationEvent, StoredTable};
use crate::error::CouponServiceError;

/// Hands out a storage session for the duration of one request.
pub trait StorageGateway: Send + Sync {
    type Repo: CouponRepository;

    /// `None` means no connection could be established; callers degrade instead of failing.
    async fn acquire(&self) -> Option<Self::Repo>;
}

/// Statements issued against an acquired storage session.
pub trait CouponRepository: Send + Sync {
    /// Insert the coupon if its code is new and append a usage log row, in one commit.
    /// Returns `true` when the coupon row was inserted, `false` on a code collision.
    async fn record_generation(&self, event: &GenerationEvent) -> Result<bool, CouponServiceError>;

    async fn coupon_stats(&self) -> Result<CouponStats, CouponServiceError>;

    /// Run `SELECT 1 AS test`; `true` iff the sentinel came back.
    async fn liveness_check(&self) -> Result<bool, CouponServiceError>;

    async fn table_exists(&self, table: StoredTable) -> Result<bool, CouponServiceError>;

    async fn count_rows(&self, table: StoredTable) -> Result<u64, CouponServiceError>;
}
