// src/services/inventory_service.rs
//
// Inventory search across both report kinds.

use std::sync::Arc;

use crate::domain::{InventoryEntry, InventoryFilter, RecordKind};
use crate::error::AppResult;
use crate::repositories::{FoundReportRepository, LostReportRepository};

pub struct InventoryService {
    lost_repo: Arc<dyn LostReportRepository>,
    found_repo: Arc<dyn FoundReportRepository>,
}

impl InventoryService {
    pub fn new(
        lost_repo: Arc<dyn LostReportRepository>,
        found_repo: Arc<dyn FoundReportRepository>,
    ) -> Self {
        Self {
            lost_repo,
            found_repo,
        }
    }

    /// Substring search. Lost reports match on item or reporter name,
    /// found reports on item name only. Lost entries come first.
    pub fn search(&self, query: &str, filter: InventoryFilter) -> AppResult<Vec<InventoryEntry>> {
        let mut entries = Vec::new();

        if filter.includes(RecordKind::Lost) {
            entries.extend(self.lost_repo.search(query)?.into_iter().map(InventoryEntry::from));
        }

        if filter.includes(RecordKind::Found) {
            entries.extend(self.found_repo.search(query)?.into_iter().map(InventoryEntry::from));
        }

        Ok(entries)
    }
}
