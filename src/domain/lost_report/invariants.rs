use super::entity::NewLostReport;
use crate::domain::{DomainError, DomainResult};

/// Validates a lost report submission
/// Only runs at creation; stored content is never re-validated
pub fn validate_new_lost_report(report: &NewLostReport) -> DomainResult<()> {
    validate_required("reporter name", &report.reporter_name)?;
    validate_required("item name", &report.item_name)?;
    Ok(())
}

pub(crate) fn validate_required(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Invariants that must hold true for Lost Reports:
///
/// 1. Reporter name and item name are non-empty at creation
/// 2. Identity (id) is assigned by the store and never reused
/// 3. Reported date never changes
/// 4. Status moves Pending -> Resolved at most once; no re-opening
/// 5. Only Pending reports with a known room are matchable
