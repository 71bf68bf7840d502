use coupon_service::domain::types::StorageDiagnostics;
use coupon_service::usecase::diagnostics::InspectStorageUseCase;

use crate::helpers::{MockCouponRepo, MockGateway, event};

#[tokio::test]
async fn should_collect_tables_and_counts() {
    let repo = MockCouponRepo::new();
    repo.coupons.lock().unwrap().push("QWER1234".to_owned());
    repo.logs
        .lock()
        .unwrap()
        .extend([event("QWER1234"), event("QWER1234")]);
    let uc = InspectStorageUseCase {
        gateway: MockGateway::connected(repo),
    };

    let diag = uc.execute().await;

    assert_eq!(
        diag,
        StorageDiagnostics {
            connected: true,
            coupons_table: Some(true),
            usage_logs_table: Some(true),
            coupons_count: Some(1),
            usage_logs_count: Some(2),
            query_error: None,
        }
    );
}

#[tokio::test]
async fn should_stop_at_first_failing_query() {
    let uc = InspectStorageUseCase {
        gateway: MockGateway::connected(MockCouponRepo::failing()),
    };

    let diag = uc.execute().await;

    assert!(diag.connected);
    assert_eq!(diag.coupons_table, Some(false));
    assert_eq!(diag.usage_logs_table, Some(false));
    assert_eq!(diag.coupons_count, None);
    assert!(
        diag.query_error
            .as_deref()
            .is_some_and(|e| e.starts_with("count rows in coupons"))
    );
}

#[tokio::test]
async fn should_report_nothing_but_disconnection_when_unreachable() {
    let uc = InspectStorageUseCase {
        gateway: MockGateway::unreachable(),
    };

    assert_eq!(uc.execute().await, StorageDiagnostics::default());
}
