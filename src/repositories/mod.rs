// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO event emission
// - NO cross-repository calls
// - Explicit SQL only

pub mod found_report_repository;
pub mod lost_report_repository;
pub mod match_repository;

pub use found_report_repository::{FoundReportRepository, SqliteFoundReportRepository};
pub use lost_report_repository::{LostReportRepository, SqliteLostReportRepository};
pub use match_repository::{MatchRepository, SqliteMatchRepository};

#[cfg(test)]
pub use found_report_repository::MockFoundReportRepository;
#[cfg(test)]
pub use lost_report_repository::MockLostReportRepository;
#[cfg(test)]
pub use match_repository::MockMatchRepository;

/// Storage format of report dates
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build a LIKE pattern matching `term` anywhere, with `\` as the escape
/// character for literal `%` and `_`
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
