//! Statistics are always derived from the two report tables and never
//! stored. They are recomputed on every request.

pub mod entity;
pub use entity::{CategoryCount, DashboardStats};
