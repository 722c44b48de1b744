use super::entity::NewFoundReport;
use crate::domain::lost_report::invariants::validate_required;
use crate::domain::DomainResult;

/// Validates a found report submission
/// Only the item name is required; the finder may stay anonymous
pub fn validate_new_found_report(report: &NewFoundReport) -> DomainResult<()> {
    validate_required("item name", &report.item_name)
}
