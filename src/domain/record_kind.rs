use serde::{Deserialize, Serialize};

use crate::domain::{FoundStatus, LostStatus};

/// Status a lost report is driven to by an update. Fixed, not computed.
pub const LOST_TERMINAL_STATUS: LostStatus = LostStatus::Resolved;

/// Status a found report is driven to by an update. Fixed, not computed.
pub const FOUND_TERMINAL_STATUS: FoundStatus = FoundStatus::Claimed;

/// Which of the two tables a record lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Lost,
    Found,
}

impl RecordKind {
    /// Parse the kind path segment. Only the exact strings "lost" and
    /// "found" are accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "lost" => Some(RecordKind::Lost),
            "found" => Some(RecordKind::Found),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Lost => "lost",
            RecordKind::Found => "found",
        }
    }

    pub fn terminal_status(&self) -> &'static str {
        match self {
            RecordKind::Lost => LOST_TERMINAL_STATUS.as_str(),
            RecordKind::Found => FOUND_TERMINAL_STATUS.as_str(),
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
