use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::types::{CouponStats, DbStatus, StorageOutcome};
use crate::state::AppState;
use crate::usecase::stats::GetCouponStatsUseCase;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_coupons: u64,
    pub used_coupons: u64,
    pub today_coupons: u64,
    pub available_coupons: u64,
    pub database_status: DbStatus,
}

impl StatsResponse {
    fn new(stats: CouponStats, database_status: DbStatus) -> Self {
        Self {
            total_coupons: stats.total,
            used_coupons: stats.used,
            today_coupons: stats.today,
            available_coupons: stats.available(),
            database_status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatsErrorResponse {
    pub error: String,
    pub database_status: DbStatus,
}

// ── GET /stats ───────────────────────────────────────────────────────────────

pub async fn get_stats(State(state): State<AppState>) -> Response {
    let usecase = GetCouponStatsUseCase {
        gateway: state.gateway(),
    };
    stats_response(usecase.execute().await)
}

/// Unreachable storage is a 200 with zero counts; a failing query is a 500.
pub fn stats_response(outcome: StorageOutcome<CouponStats>) -> Response {
    let database_status = outcome.status();
    match outcome {
        StorageOutcome::Connected(stats) => {
            Json(StatsResponse::new(stats, database_status)).into_response()
        }
        StorageOutcome::Disconnected => {
            Json(StatsResponse::new(CouponStats::default(), database_status)).into_response()
        }
        StorageOutcome::Failed(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(StatsErrorResponse {
                error,
                database_status,
            }),
        )
            .into_response(),
    }
}
