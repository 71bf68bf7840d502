use std::net::SocketAddr;

use tracing::{error, info};

use coupon_core::tracing::init_tracing;
use coupon_service::config::CouponsConfig;
use coupon_service::infra::db::{DbStorageGateway, connect};
use coupon_service::infra::schema::initialize_or_degrade;
use coupon_service::router::build_router;
use coupon_service::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = CouponsConfig::from_env();
    info!(
        host = %config.database.host,
        database = %config.database.name,
        "starting coupon service"
    );

    let db = match connect(&config.database).await {
        Ok(db) => Some(db),
        Err(e) => {
            error!(error = %e, "failed to configure database pool, serving without persistence");
            None
        }
    };
    let gateway = DbStorageGateway::new(db, config.database.host.clone());

    initialize_or_degrade(&gateway).await;

    let state = AppState {
        gateway,
        connection: config.database.public_summary(),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("coupon service listening on {addr}");
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("server error");
}
