// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs are the JSON shapes of the HTTP API
// - Field names follow the public API, not the domain
// - Conversion FROM domain entities for responses, INTO service
//   requests for bodies

use serde::{Deserialize, Serialize};

use crate::domain::{
    CategoryCount, DashboardStats, FoundReport, InventoryEntry, LostReport, RoomMatch,
};
use crate::repositories::DATE_FORMAT;
use crate::services::{CreateFoundReportRequest, CreateLostReportRequest};

// ============================================================================
// LOST REPORT DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LostReportDto {
    pub id: i64,
    pub name: String,
    pub roll: Option<String>,
    pub item: String,
    pub room: Option<String>,
    pub category: String,
    pub date: String,
    pub status: String,
}

impl From<LostReport> for LostReportDto {
    fn from(report: LostReport) -> Self {
        Self {
            id: report.id,
            name: report.reporter_name,
            roll: report.reporter_roll,
            item: report.item_name,
            room: report.room,
            category: report.category.to_string(),
            date: report.reported_date.format(DATE_FORMAT).to_string(),
            status: report.status.to_string(),
        }
    }
}

/// Missing fields deserialize as empty and are rejected by validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateLostDto {
    pub name: String,
    pub roll: Option<String>,
    pub item: String,
    pub room: Option<String>,
    pub category: Option<String>,
}

impl From<CreateLostDto> for CreateLostReportRequest {
    fn from(dto: CreateLostDto) -> Self {
        Self {
            reporter_name: dto.name,
            reporter_roll: dto.roll,
            item_name: dto.item,
            room: dto.room,
            category: dto.category,
        }
    }
}

// ============================================================================
// FOUND REPORT DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundReportDto {
    pub id: i64,
    pub finder: Option<String>,
    pub item: String,
    pub room: Option<String>,
    pub category: String,
    pub date: String,
    pub status: String,
}

impl From<FoundReport> for FoundReportDto {
    fn from(report: FoundReport) -> Self {
        Self {
            id: report.id,
            finder: report.finder_name,
            item: report.item_name,
            room: report.room,
            category: report.category.to_string(),
            date: report.found_date.format(DATE_FORMAT).to_string(),
            status: report.status.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateFoundDto {
    pub finder: Option<String>,
    pub item: String,
    pub room: Option<String>,
    pub category: Option<String>,
}

impl From<CreateFoundDto> for CreateFoundReportRequest {
    fn from(dto: CreateFoundDto) -> Self {
        Self {
            finder_name: dto.finder,
            item_name: dto.item,
            room: dto.room,
            category: dto.category,
        }
    }
}

/// Reply to a successful create
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedDto {
    pub success: bool,
    pub id: i64,
}

/// Reply to a successful update or delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckDto {
    pub success: bool,
}

impl AckDto {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Reply to a saved export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSavedDto {
    pub success: bool,
    pub path: String,
}

// ============================================================================
// STATISTICS DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDto {
    pub name: String,
    pub item: String,
    pub room: String,
}

impl From<RoomMatch> for MatchDto {
    fn from(m: RoomMatch) -> Self {
        Self {
            name: m.reporter_name,
            item: m.item_name,
            room: m.room,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsDto {
    pub success: bool,
    pub lost_count: u64,
    pub found_count: u64,
    pub match_count: usize,
    pub matches: Vec<MatchDto>,
}

impl From<DashboardStats> for StatsDto {
    fn from(stats: DashboardStats) -> Self {
        Self {
            success: true,
            lost_count: stats.lost_count,
            found_count: stats.found_count,
            match_count: stats.match_count,
            matches: stats.matches.into_iter().map(MatchDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCountDto {
    pub category: String,
    pub count: u64,
}

impl From<CategoryCount> for CategoryCountDto {
    fn from(c: CategoryCount) -> Self {
        Self {
            category: c.category.to_string(),
            count: c.count,
        }
    }
}

// ============================================================================
// SEARCH DTOs
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryEntryDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: i64,
    pub item: String,
    pub person: Option<String>,
    pub date: String,
    pub status: String,
}

impl From<InventoryEntry> for InventoryEntryDto {
    fn from(entry: InventoryEntry) -> Self {
        Self {
            kind: entry.kind.to_string(),
            id: entry.id,
            item: entry.item_name,
            person: entry.person,
            date: entry.date.format(DATE_FORMAT).to_string(),
            status: entry.status,
        }
    }
}
