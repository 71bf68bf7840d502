use std::time::Duration;

use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter, QuerySelect, sea_query::Expr,
};

use coupon_schema::{coupons, usage_logs};
use coupon_service::config::DatabaseConfig;
use coupon_service::domain::repository::{CouponRepository, StorageGateway};
use coupon_service::domain::types::{CouponStats, StoredTable};
use coupon_service::infra::db::{DbStorageGateway, connect};
use coupon_service::infra::schema;

use crate::helpers::{TEST_PASSWORD, empty_gateway, event, migrated_gateway};

#[tokio::test]
async fn should_initialize_schema_idempotently() {
    let gateway = migrated_gateway().await;
    schema::initialize(&gateway).await.unwrap();

    let repo = gateway.acquire().await.unwrap();
    assert!(repo.table_exists(StoredTable::Coupons).await.unwrap());
    assert!(repo.table_exists(StoredTable::UsageLogs).await.unwrap());
}

#[tokio::test]
async fn should_fail_schema_init_without_pool() {
    let gateway = DbStorageGateway::disconnected("nowhere");
    assert!(schema::initialize(&gateway).await.is_err());
    assert!(!schema::initialize_or_degrade(&gateway).await);
}

#[tokio::test]
async fn should_ignore_duplicate_code_but_keep_usage_log() {
    let gateway = migrated_gateway().await;
    let repo = gateway.acquire().await.unwrap();

    assert!(repo.record_generation(&event("DUPE0001")).await.unwrap());
    assert!(!repo.record_generation(&event("DUPE0001")).await.unwrap());

    assert_eq!(repo.count_rows(StoredTable::Coupons).await.unwrap(), 1);
    assert_eq!(repo.count_rows(StoredTable::UsageLogs).await.unwrap(), 2);
}

#[tokio::test]
async fn should_store_requester_ip_in_usage_log() {
    let gateway = migrated_gateway().await;
    let repo = gateway.acquire().await.unwrap();
    repo.record_generation(&event("IPLOG001")).await.unwrap();

    let ips: Vec<Option<String>> = usage_logs::Entity::find()
        .select_only()
        .column(usage_logs::Column::IpAddress)
        .into_tuple()
        .all(&repo.db)
        .await
        .unwrap();
    assert_eq!(ips, vec![Some("198.51.100.4".to_owned())]);
}

#[tokio::test]
async fn should_count_total_used_and_today() {
    let gateway = migrated_gateway().await;
    let repo = gateway.acquire().await.unwrap();
    for code in ["STAT0001", "STAT0002", "STAT0003"] {
        repo.record_generation(&event(code)).await.unwrap();
    }

    coupons::Entity::update_many()
        .col_expr(coupons::Column::Used, Expr::value(true))
        .filter(coupons::Column::CouponCode.eq("STAT0002"))
        .exec(&repo.db)
        .await
        .unwrap();

    coupons::Entity::insert(coupons::ActiveModel {
        coupon_code: Set("OLD00001".to_owned()),
        created_at: Set(Utc::now() - chrono::Duration::days(3)),
        ..Default::default()
    })
    .exec_without_returning(&repo.db)
    .await
    .unwrap();

    let stats = repo.coupon_stats().await.unwrap();
    assert_eq!(
        stats,
        CouponStats {
            total: 4,
            used: 1,
            today: 3,
        }
    );
    assert_eq!(stats.available(), 3);
}

#[tokio::test]
async fn should_pass_liveness_check() {
    let gateway = migrated_gateway().await;
    let repo = gateway.acquire().await.unwrap();
    assert!(repo.liveness_check().await.unwrap());
}

#[tokio::test]
async fn should_report_missing_tables_and_fail_counts() {
    let gateway = empty_gateway().await;
    let repo = gateway.acquire().await.unwrap();

    assert!(!repo.table_exists(StoredTable::Coupons).await.unwrap());
    assert!(repo.count_rows(StoredTable::Coupons).await.is_err());
    assert!(repo.coupon_stats().await.is_err());
    assert!(repo.record_generation(&event("NOTABLE1")).await.is_err());
}

#[tokio::test]
async fn should_not_acquire_without_pool() {
    let gateway = DbStorageGateway::disconnected("nowhere");
    assert!(gateway.acquire().await.is_none());
}

#[tokio::test]
async fn should_not_acquire_when_server_unreachable() {
    let config = DatabaseConfig {
        host: "127.0.0.1".to_owned(),
        port: 1,
        user: "admin".to_owned(),
        password: TEST_PASSWORD.to_owned(),
        name: "coupon-db".to_owned(),
        charset: "utf8mb4".to_owned(),
        connect_timeout: Duration::from_secs(1),
        max_connections: 1,
    };
    // The pool is lazy, so building it succeeds even though nothing listens.
    let db = connect(&config).await.unwrap();
    let gateway = DbStorageGateway::new(Some(db), config.host.clone());

    assert!(gateway.acquire().await.is_none());
}
