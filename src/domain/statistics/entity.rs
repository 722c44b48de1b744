use serde::{Deserialize, Serialize};

use crate::domain::{Category, RoomMatch};

/// Dashboard overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Lost reports still Pending
    pub lost_count: u64,

    /// Found reports still Available
    pub found_count: u64,

    pub match_count: usize,

    pub matches: Vec<RoomMatch>,
}

impl DashboardStats {
    pub fn new(lost_count: u64, found_count: u64, matches: Vec<RoomMatch>) -> Self {
        Self {
            lost_count,
            found_count,
            match_count: matches.len(),
            matches,
        }
    }
}

/// Number of lost reports filed under one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: u64,
}
