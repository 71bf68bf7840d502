pub mod coupons;
pub mod usage_logs;
