// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod category;
pub mod found_report;
pub mod inventory;
pub mod lost_report;
pub mod matching;
pub mod record_kind;
pub mod statistics;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use category::Category;

// Lost Report Domain
pub use lost_report::{validate_new_lost_report, LostReport, LostStatus, NewLostReport};

// Found Report Domain
pub use found_report::{validate_new_found_report, FoundReport, FoundStatus, NewFoundReport};

// Record kinds and their terminal statuses
pub use record_kind::{RecordKind, FOUND_TERMINAL_STATUS, LOST_TERMINAL_STATUS};

// Matching
pub use matching::RoomMatch;

// Inventory search
pub use inventory::{InventoryEntry, InventoryFilter};

// Statistics (derived data)
pub use statistics::{CategoryCount, DashboardStats};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown status '{value}' for {kind} item")]
    UnknownStatus { kind: &'static str, value: String },

    #[error("Invalid date '{0}'")]
    InvalidDate(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

/// Collapse empty optional text to `None`.
///
/// An empty room is "no room known" and never takes part in matching, so it
/// is stored as NULL. Any other text, whitespace included, is kept as given.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
