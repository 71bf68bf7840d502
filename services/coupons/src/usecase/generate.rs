use rand::RngExt;
use tracing::{error, info, warn};

use crate::domain::repository::{CouponRepository, StorageGateway};
use crate::domain::types::{COUPON_CHARSET, COUPON_CODE_LEN, DbStatus, GenerationEvent};

/// Draw a code of [`COUPON_CODE_LEN`] characters, each uniform over [`COUPON_CHARSET`].
/// Uniqueness is left to the store's unique key.
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..COUPON_CODE_LEN)
        .map(|_| COUPON_CHARSET[rng.random_range(0..COUPON_CHARSET.len())] as char)
        .collect()
}

pub struct GenerateCouponInput {
    pub ip_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCoupon {
    pub code: String,
    pub database: DbStatus,
}

pub struct GenerateCouponUseCase<G: StorageGateway> {
    pub gateway: G,
}

impl<G: StorageGateway> GenerateCouponUseCase<G> {
    /// Always yields a code; persistence failures only change `database`.
    pub async fn execute(&self, input: GenerateCouponInput) -> GeneratedCoupon {
        let code = generate_code();
        info!(coupon = %code, "generated coupon");

        let Some(repo) = self.gateway.acquire().await else {
            warn!(coupon = %code, "no database connection, coupon not stored");
            return GeneratedCoupon {
                code,
                database: DbStatus::Disconnected,
            };
        };

        let event = GenerationEvent {
            coupon_code: code.clone(),
            ip_address: input.ip_address,
        };
        let database = match repo.record_generation(&event).await {
            Ok(true) => {
                info!(coupon = %code, "coupon stored");
                DbStatus::Connected
            }
            Ok(false) => {
                // Collision: the existing row wins, the log row is still written.
                warn!(coupon = %code, "coupon code already existed, only usage logged");
                DbStatus::Connected
            }
            Err(e) => {
                error!(coupon = %code, error = %e, kind = e.kind(), "failed to store coupon");
                DbStatus::Error
            }
        };
        GeneratedCoupon { code, database }
    }
}
