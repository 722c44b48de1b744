// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod export_service;
pub mod inventory_service;
pub mod lifecycle_service;
pub mod match_service;
pub mod record_service;

#[cfg(test)]
mod record_service_tests;

// Re-export all services and their types
pub use export_service::{export_file_name, ExportService};

pub use inventory_service::InventoryService;

pub use lifecycle_service::LifecycleService;

pub use match_service::MatchService;

pub use record_service::{CreateFoundReportRequest, CreateLostReportRequest, RecordService};
