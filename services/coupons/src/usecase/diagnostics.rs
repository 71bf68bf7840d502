use crate::domain::repository::{CouponRepository, StorageGateway};
use crate::domain::types::{StorageDiagnostics, StoredTable};
use crate::error::CouponServiceError;

pub struct InspectStorageUseCase<G: StorageGateway> {
    pub gateway: G,
}

impl<G: StorageGateway> InspectStorageUseCase<G> {
    /// Collects as much as it can; the first failing query stops collection and
    /// is reported in `query_error`.
    pub async fn execute(&self) -> StorageDiagnostics {
        let mut report = StorageDiagnostics::default();
        let Some(repo) = self.gateway.acquire().await else {
            return report;
        };
        report.connected = true;
        if let Err(e) = collect(&repo, &mut report).await {
            report.query_error = Some(e.to_string());
        }
        report
    }
}

async fn collect<R: CouponRepository>(
    repo: &R,
    report: &mut StorageDiagnostics,
) -> Result<(), CouponServiceError> {
    report.coupons_table = Some(repo.table_exists(StoredTable::Coupons).await?);
    report.usage_logs_table = Some(repo.table_exists(StoredTable::UsageLogs).await?);
    report.coupons_count = Some(repo.count_rows(StoredTable::Coupons).await?);
    report.usage_logs_count = Some(repo.count_rows(StoredTable::UsageLogs).await?);
    Ok(())
}
