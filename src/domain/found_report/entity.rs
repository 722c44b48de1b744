use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{normalize_optional, Category, DomainError};

/// An item recovered on campus and held until claimed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundReport {
    /// Store-assigned identifier, never reused
    pub id: i64,

    pub finder_name: Option<String>,

    pub item_name: String,

    /// Room where the item was found (None = unknown)
    pub room: Option<String>,

    pub category: Category,

    /// Set at creation, immutable
    pub found_date: NaiveDate,

    pub status: FoundStatus,
}

/// Found report status
/// Available is the only matchable state; Claimed is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoundStatus {
    Available,
    Claimed,
}

/// A found report that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFoundReport {
    pub finder_name: Option<String>,
    pub item_name: String,
    pub room: Option<String>,
    pub category: Category,
    pub found_date: NaiveDate,
}

impl NewFoundReport {
    pub fn new(item_name: impl Into<String>) -> Self {
        Self {
            finder_name: None,
            item_name: item_name.into(),
            room: None,
            category: Category::Other,
            found_date: Local::now().date_naive(),
        }
    }

    pub fn with_finder(mut self, finder: Option<String>) -> Self {
        self.finder_name = normalize_optional(finder);
        self
    }

    pub fn with_room(mut self, room: Option<String>) -> Self {
        self.room = normalize_optional(room);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
}

impl FoundReport {
    pub fn is_matchable(&self) -> bool {
        self.status == FoundStatus::Available && self.room.is_some()
    }
}

impl FoundStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoundStatus::Available => "Available",
            FoundStatus::Claimed => "Claimed",
        }
    }
}

impl std::str::FromStr for FoundStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(FoundStatus::Available),
            "Claimed" => Ok(FoundStatus::Claimed),
            other => Err(DomainError::UnknownStatus {
                kind: "found",
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for FoundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_defaults() {
        let report = NewFoundReport::new("Steel Bottle");
        assert_eq!(report.finder_name, None);
        assert_eq!(report.category, Category::Other);
    }

    #[test]
    fn test_blank_finder_is_anonymous() {
        let report = NewFoundReport::new("Keys").with_finder(Some("".to_string()));
        assert_eq!(report.finder_name, None);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("Claimed".parse::<FoundStatus>().unwrap(), FoundStatus::Claimed);
        assert!("Resolved".parse::<FoundStatus>().is_err());
    }
}
