use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::ConnectionSummary;
use crate::domain::types::StorageDiagnostics;
use crate::state::AppState;
use crate::usecase::diagnostics::InspectStorageUseCase;

/// Diagnostic snapshot. Never carries the database password: only
/// [`ConnectionSummary`] reaches this type.
#[derive(Debug, Serialize)]
pub struct DebugResponse {
    pub app: &'static str,
    pub version: &'static str,
    pub database_connection: &'static str,
    #[serde(serialize_with = "coupon_core::serde::to_rfc3339_ms")]
    pub timestamp: DateTime<Utc>,
    pub connection: ConnectionSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupons_table: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_logs_table: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupons_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_logs_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_query_error: Option<String>,
}

impl DebugResponse {
    pub fn new(connection: ConnectionSummary, diag: StorageDiagnostics) -> Self {
        Self {
            app: "running",
            version: env!("CARGO_PKG_VERSION"),
            database_connection: if diag.connected { "connected" } else { "failed" },
            timestamp: Utc::now(),
            connection,
            coupons_table: diag.coupons_table.map(presence),
            usage_logs_table: diag.usage_logs_table.map(presence),
            coupons_count: diag.coupons_count,
            usage_logs_count: diag.usage_logs_count,
            database_query_error: diag.query_error,
        }
    }
}

fn presence(exists: bool) -> &'static str {
    if exists { "exists" } else { "missing" }
}

// ── GET /debug ───────────────────────────────────────────────────────────────

pub async fn debug_info(State(state): State<AppState>) -> Json<DebugResponse> {
    let usecase = InspectStorageUseCase {
        gateway: state.gateway(),
    };
    let diag = usecase.execute().await;
    Json(DebugResponse::new(state.connection.clone(), diag))
}
