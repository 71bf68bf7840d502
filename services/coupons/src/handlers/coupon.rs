use axum::{Json, extract::State, response::Html};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::types::DbStatus;
use crate::extract::ClientIp;
use crate::state::AppState;
use crate::usecase::generate::{GenerateCouponInput, GenerateCouponUseCase, GeneratedCoupon};

const GENERATED: &str = "generated";

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct GenerateCouponResponse {
    pub coupon: String,
    pub status: &'static str,
    pub database: DbStatus,
    #[serde(serialize_with = "coupon_core::serde::to_rfc3339_ms")]
    pub timestamp: DateTime<Utc>,
}

async fn generate(state: &AppState, ip_address: String) -> GeneratedCoupon {
    let usecase = GenerateCouponUseCase {
        gateway: state.gateway(),
    };
    usecase.execute(GenerateCouponInput { ip_address }).await
}

// ── GET / ────────────────────────────────────────────────────────────────────

pub async fn index(State(state): State<AppState>, ClientIp(ip): ClientIp) -> Html<String> {
    let generated = generate(&state, ip).await;
    Html(render_index(&generated.code, generated.database))
}

// ── GET /generate ────────────────────────────────────────────────────────────

pub async fn generate_coupon(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
) -> Json<GenerateCouponResponse> {
    let generated = generate(&state, ip).await;
    Json(GenerateCouponResponse {
        coupon: generated.code,
        status: GENERATED,
        database: generated.database,
        timestamp: Utc::now(),
    })
}

/// Codes are `[A-Z0-9]` and the status is a fixed word, so nothing here needs escaping.
pub fn render_index(code: &str, database: DbStatus) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Coupon Generator</title>
  <style>
    body {{ font-family: sans-serif; text-align: center; margin-top: 4rem; }}
    .coupon {{ font-family: monospace; font-size: 2.5rem; letter-spacing: 0.3rem; }}
    .db-{database} {{ font-weight: bold; }}
  </style>
</head>
<body>
  <h1>Your coupon</h1>
  <p class="coupon">{code}</p>
  <p>Status: {status}</p>
  <p>Database: <span class="db-{database}">{database}</span></p>
  <p><a href="/">Generate another</a> &middot; <a href="/stats">Stats</a></p>
</body>
</html>
"#,
        code = code,
        status = GENERATED,
        database = database.as_str(),
    )
}
