use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{normalize_optional, Category, DomainError};

/// An item a person reports missing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LostReport {
    /// Store-assigned identifier, never reused
    pub id: i64,

    pub reporter_name: String,

    /// Roll number or similar student identifier
    pub reporter_roll: Option<String>,

    pub item_name: String,

    /// Room where the item was last seen (None = unknown)
    pub room: Option<String>,

    pub category: Category,

    /// Set at creation, immutable
    pub reported_date: NaiveDate,

    pub status: LostStatus,
}

/// Lost report status
/// Pending is the only matchable state; Resolved is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LostStatus {
    Pending,
    Resolved,
}

/// A lost report that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLostReport {
    pub reporter_name: String,
    pub reporter_roll: Option<String>,
    pub item_name: String,
    pub room: Option<String>,
    pub category: Category,
    pub reported_date: NaiveDate,
}

impl NewLostReport {
    /// Start a submission dated today (local time) in category `Other`
    pub fn new(reporter_name: impl Into<String>, item_name: impl Into<String>) -> Self {
        Self {
            reporter_name: reporter_name.into(),
            reporter_roll: None,
            item_name: item_name.into(),
            room: None,
            category: Category::Other,
            reported_date: Local::now().date_naive(),
        }
    }

    pub fn with_roll(mut self, roll: Option<String>) -> Self {
        self.reporter_roll = normalize_optional(roll);
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

impl LostReport {
    /// Whether this report can take part in room matching
    pub fn is_matchable(&self) -> bool {
        self.status == LostStatus::Pending && self.room.is_some()
    }
}

impl LostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LostStatus::Pending => "Pending",
            LostStatus::Resolved => "Resolved",
        }
    }
}

impl std::str::FromStr for LostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(LostStatus::Pending),
            "Resolved" => Ok(LostStatus::Resolved),
            other => Err(DomainError::UnknownStatus {
                kind: "lost",
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for LostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
