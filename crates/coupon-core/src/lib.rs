//! Shared HTTP plumbing for the coupon service: error bodies, liveness,
//! request-id and panic-guard middleware, timestamp serialization and tracing.

pub mod error;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
