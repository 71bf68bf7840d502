use crate::config::ConnectionSummary;
use crate::infra::db::DbStorageGateway;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub gateway: DbStorageGateway,
    /// Non-secret connection parameters, reported by `/debug`.
    pub connection: ConnectionSummary,
}

impl AppState {
    pub fn gateway(&self) -> DbStorageGateway {
        self.gateway.clone()
    }
}
