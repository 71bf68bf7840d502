use serde::Serialize;

/// Coupon code length in characters.
pub const COUPON_CODE_LEN: usize = 8;

/// Alphabet coupon codes are drawn from (uppercase alphanumeric).
pub const COUPON_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Recorded in place of a source address the server could not determine.
pub const UNKNOWN_IP: &str = "unknown";

/// Tables owned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredTable {
    Coupons,
    UsageLogs,
}

impl StoredTable {
    pub fn name(self) -> &'static str {
        match self {
            Self::Coupons => "coupons",
            Self::UsageLogs => "usage_logs",
        }
    }
}

/// Storage availability as reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DbStatus {
    Connected,
    Disconnected,
    Error,
}

impl DbStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
            Self::Error => "error",
        }
    }
}

/// Result of a step that needed storage. Degraded outcomes are values, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageOutcome<T> {
    Connected(T),
    Disconnected,
    Failed(String),
}

impl<T> StorageOutcome<T> {
    pub fn status(&self) -> DbStatus {
        match self {
            Self::Connected(_) => DbStatus::Connected,
            Self::Disconnected => DbStatus::Disconnected,
            Self::Failed(_) => DbStatus::Error,
        }
    }
}

/// One generation request as it is written to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationEvent {
    pub coupon_code: String,
    pub ip_address: String,
}

/// Aggregate counts over the coupons table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CouponStats {
    pub total: u64,
    pub used: u64,
    /// Coupons whose `created_at` falls on the store's current calendar date.
    pub today: u64,
}

impl CouponStats {
    pub fn available(&self) -> u64 {
        self.total.saturating_sub(self.used)
    }
}

/// Outcome of the `/health` probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    pub database: DbStatus,
    /// `true` when the liveness query returned its sentinel value.
    pub database_test: bool,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.database == DbStatus::Connected && self.database_test
    }
}

/// Storage introspection gathered for `/debug`. Fields stay `None` past the
/// first failing query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageDiagnostics {
    pub connected: bool,
    pub coupons_table: Option<bool>,
    pub usage_logs_table: Option<bool>,
    pub coupons_count: Option<u64>,
    pub usage_logs_count: Option<u64>,
    pub query_error: Option<String>,
}
