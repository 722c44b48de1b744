use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{FoundReport, LostReport, RecordKind};

/// Which records an inventory search covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryFilter {
    #[default]
    All,
    Lost,
    Found,
}

impl InventoryFilter {
    /// Lenient parse for query strings; unknown values fall back to `All`
    pub fn from_input(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("lost") => InventoryFilter::Lost,
            Some("found") => InventoryFilter::Found,
            _ => InventoryFilter::All,
        }
    }

    pub fn includes(&self, kind: RecordKind) -> bool {
        match self {
            InventoryFilter::All => true,
            InventoryFilter::Lost => kind == RecordKind::Lost,
            InventoryFilter::Found => kind == RecordKind::Found,
        }
    }
}

/// One line of the inventory listing, either kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub kind: RecordKind,
    pub id: i64,
    pub item_name: String,
    /// Reporter for lost items, finder for found items
    pub person: Option<String>,
    pub date: NaiveDate,
    pub status: String,
}

impl From<LostReport> for InventoryEntry {
    fn from(report: LostReport) -> Self {
        Self {
            kind: RecordKind::Lost,
            id: report.id,
            item_name: report.item_name,
            person: Some(report.reporter_name),
            date: report.reported_date,
            status: report.status.to_string(),
        }
    }
}

impl From<FoundReport> for InventoryEntry {
    fn from(report: FoundReport) -> Self {
        Self {
            kind: RecordKind::Found,
            id: report.id,
            item_name: report.item_name,
            person: report.finder_name,
            date: report.found_date,
            status: report.status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parse() {
        assert_eq!(InventoryFilter::from_input(None), InventoryFilter::All);
        assert_eq!(InventoryFilter::from_input(Some("Lost")), InventoryFilter::Lost);
        assert_eq!(InventoryFilter::from_input(Some("found")), InventoryFilter::Found);
        assert_eq!(InventoryFilter::from_input(Some("bogus")), InventoryFilter::All);
    }

    #[test]
    fn test_filter_includes() {
        assert!(InventoryFilter::All.includes(RecordKind::Found));
        assert!(InventoryFilter::Lost.includes(RecordKind::Lost));
        assert!(!InventoryFilter::Lost.includes(RecordKind::Found));
    }
}
