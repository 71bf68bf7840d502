/// Coupon service error variants. Handlers turn these into status fields
/// rather than HTTP errors.
#[derive(Debug, thiserror::Error)]
pub enum CouponServiceError {
    #[error("database connection unavailable")]
    StorageUnavailable,
    #[error("{0:#}")]
    Storage(#[from] anyhow::Error),
}

impl CouponServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StorageUnavailable => "STORAGE_UNAVAILABLE",
            Self::Storage(_) => "STORAGE",
        }
    }
}
