pub mod entity;
pub mod invariants;

pub use entity::{LostReport, LostStatus, NewLostReport};
pub use invariants::validate_new_lost_report;
