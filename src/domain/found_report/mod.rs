pub mod entity;
pub mod invariants;

pub use entity::{FoundReport, FoundStatus, NewFoundReport};
pub use invariants::validate_new_found_report;
