use coupon_service::domain::types::DbStatus;
use coupon_service::usecase::health::CheckHealthUseCase;

use crate::helpers::{MockCouponRepo, MockGateway};

#[tokio::test]
async fn should_be_healthy_when_sentinel_returns() {
    let uc = CheckHealthUseCase {
        gateway: MockGateway::connected(MockCouponRepo::new()),
    };

    let report = uc.execute().await;

    assert_eq!(report.database, DbStatus::Connected);
    assert!(report.database_test);
    assert!(report.is_healthy());
}

#[tokio::test]
async fn should_be_unhealthy_when_sentinel_is_wrong() {
    let repo = MockCouponRepo {
        sentinel_ok: false,
        ..MockCouponRepo::new()
    };
    let uc = CheckHealthUseCase {
        gateway: MockGateway::connected(repo),
    };

    let report = uc.execute().await;

    assert_eq!(report.database, DbStatus::Connected);
    assert!(!report.is_healthy());
}

#[tokio::test]
async fn should_be_unhealthy_when_unreachable() {
    let uc = CheckHealthUseCase {
        gateway: MockGateway::unreachable(),
    };

    let report = uc.execute().await;

    assert_eq!(report.database, DbStatus::Disconnected);
    assert!(!report.database_test);
    assert!(!report.is_healthy());
}

#[tokio::test]
async fn should_report_error_when_probe_fails() {
    let uc = CheckHealthUseCase {
        gateway: MockGateway::connected(MockCouponRepo::failing()),
    };

    let report = uc.execute().await;

    assert_eq!(report.database, DbStatus::Error);
    assert!(!report.is_healthy());
}
