// src/lib.rs
// Lost & Found Register - campus lost-and-found record keeping
//
// Architecture:
// - Domain-centric: validation and status rules live in the domain
// - Event-driven: services emit an event after every mutation
// - Explicit: statuses are fixed constants, no computed transitions
// - Application layer: JSON over HTTP is the only outer surface

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    Category, CategoryCount, DashboardStats, DomainError, FoundReport, FoundStatus,
    InventoryEntry, InventoryFilter, LostReport, LostStatus, RecordKind, RoomMatch,
    FOUND_TERMINAL_STATUS, LOST_TERMINAL_STATUS,
};

// ============================================================================
// PUBLIC API - Error Types and Configuration
// ============================================================================

pub use config::AppConfig;
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, DomainEvent, EventBus, EventLogEntry, ReportClosed, ReportDeleted,
    ReportFiled,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, create_memory_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    FoundReportRepository, LostReportRepository, MatchRepository, SqliteFoundReportRepository,
    SqliteLostReportRepository, SqliteMatchRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    export_file_name, CreateFoundReportRequest, CreateLostReportRequest, ExportService,
    InventoryService, LifecycleService, MatchService, RecordService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{router, AppState};
