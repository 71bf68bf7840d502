use tracing::error;

use crate::domain::repository::{CouponRepository, StorageGateway};
use crate::domain::types::{DbStatus, HealthReport};

pub struct CheckHealthUseCase<G: StorageGateway> {
    pub gateway: G,
}

impl<G: StorageGateway> CheckHealthUseCase<G> {
    pub async fn execute(&self) -> HealthReport {
        let Some(repo) = self.gateway.acquire().await else {
            return HealthReport {
                database: DbStatus::Disconnected,
                database_test: false,
            };
        };
        match repo.liveness_check().await {
            Ok(database_test) => HealthReport {
                database: DbStatus::Connected,
                database_test,
            },
            Err(e) => {
                error!(error = %e, "database liveness query failed");
                HealthReport {
                    database: DbStatus::Error,
                    database_test: false,
                }
            }
        }
    }
}
