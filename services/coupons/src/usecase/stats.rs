use tracing::error;

use crate::domain::repository::{CouponRepository, StorageGateway};
use crate::domain::types::{CouponStats, StorageOutcome};

pub struct GetCouponStatsUseCase<G: StorageGateway> {
    pub gateway: G,
}

impl<G: StorageGateway> GetCouponStatsUseCase<G> {
    pub async fn execute(&self) -> StorageOutcome<CouponStats> {
        let Some(repo) = self.gateway.acquire().await else {
            return StorageOutcome::Disconnected;
        };
        match repo.coupon_stats().await {
            Ok(stats) => StorageOutcome::Connected(stats),
            Err(e) => {
                error!(error = %e, kind = e.kind(), "failed to load coupon stats");
                StorageOutcome::Failed(e.to_string())
            }
        }
    }
}
