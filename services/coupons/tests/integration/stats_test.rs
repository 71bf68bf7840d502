use coupon_service::domain::types::{CouponStats, DbStatus, StorageOutcome};
use coupon_service::usecase::stats::GetCouponStatsUseCase;

use crate::helpers::{MockCouponRepo, MockGateway};

#[tokio::test]
async fn should_return_counts_when_connected() {
    let repo = MockCouponRepo {
        used: 1,
        ..MockCouponRepo::new()
    };
    repo.coupons
        .lock()
        .unwrap()
        .extend(["AAAA0000".to_owned(), "BBBB1111".to_owned()]);
    let uc = GetCouponStatsUseCase {
        gateway: MockGateway::connected(repo),
    };

    let outcome = uc.execute().await;

    assert_eq!(
        outcome,
        StorageOutcome::Connected(CouponStats {
            total: 2,
            used: 1,
            today: 2,
        })
    );
    if let StorageOutcome::Connected(stats) = outcome {
        assert_eq!(stats.available(), 1);
    }
}

#[tokio::test]
async fn should_degrade_when_unreachable() {
    let uc = GetCouponStatsUseCase {
        gateway: MockGateway::unreachable(),
    };

    let outcome = uc.execute().await;

    assert_eq!(outcome, StorageOutcome::Disconnected);
    assert_eq!(outcome.status(), DbStatus::Disconnected);
}

#[tokio::test]
async fn should_carry_message_when_query_fails() {
    let uc = GetCouponStatsUseCase {
        gateway: MockGateway::connected(MockCouponRepo::failing()),
    };

    let outcome = uc.execute().await;

    match outcome {
        StorageOutcome::Failed(message) => {
            assert!(message.starts_with("count coupons"), "got {message}");
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}
