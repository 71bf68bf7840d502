use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use coupon_core::error::not_found;
use coupon_core::health::healthz;
use coupon_core::middleware::{catch_panic_layer, propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    coupon::{generate_coupon, index},
    debug::debug_info,
    health::health,
    stats::get_stats,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router: Router<AppState> = Router::new()
        // Coupons
        .route("/", get(index))
        .route("/generate", get(generate_coupon))
        .route("/stats", get(get_stats))
        // Health
        .route("/health", get(health))
        .route("/healthz", get(healthz))
        // Diagnostics
        .route("/debug", get(debug_info))
        .fallback(not_found);
    with_middleware(router).with_state(state)
}

/// Request ids, tracing and the panic guard, outermost first.
pub fn with_middleware<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(propagate_request_id_layer())
            .layer(catch_panic_layer()),
    )
}
