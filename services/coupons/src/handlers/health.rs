use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::types::{DbStatus, HealthReport};
use crate::state::AppState;
use crate::usecase::health::CheckHealthUseCase;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: DbStatus,
    pub database_test: bool,
    #[serde(serialize_with = "coupon_core::serde::to_rfc3339_ms")]
    pub timestamp: DateTime<Utc>,
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        Self {
            status: if report.is_healthy() {
                "healthy"
            } else {
                "unhealthy"
            },
            database: report.database,
            database_test: report.database_test,
            timestamp: Utc::now(),
        }
    }
}

// ── GET /health ──────────────────────────────────────────────────────────────

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let usecase = CheckHealthUseCase {
        gateway: state.gateway(),
    };
    Json(HealthResponse::from(usecase.execute().await))
}
