pub mod coupon;
pub mod debug;
pub mod health;
pub mod stats;
