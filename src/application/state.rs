// src/application/state.rs

use std::path::PathBuf;
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::events::EventBus;
use crate::repositories::{
    SqliteFoundReportRepository, SqliteLostReportRepository, SqliteMatchRepository,
};
use crate::services::{
    ExportService, InventoryService, LifecycleService, MatchService, RecordService,
};

/// Application state shared by every handler.
/// All fields are Arc-wrapped; cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub record_service: Arc<RecordService>,
    pub lifecycle_service: Arc<LifecycleService>,
    pub match_service: Arc<MatchService>,
    pub inventory_service: Arc<InventoryService>,
    pub export_service: Arc<ExportService>,
    pub export_dir: Arc<PathBuf>,
}

impl AppState {
    /// Wire the SQLite repositories and services over one pool
    pub fn from_pool(
        pool: Arc<ConnectionPool>,
        event_bus: Arc<EventBus>,
        export_dir: PathBuf,
    ) -> Self {
        let lost_repo = Arc::new(SqliteLostReportRepository::new(pool.clone()));
        let found_repo = Arc::new(SqliteFoundReportRepository::new(pool.clone()));
        let match_repo = Arc::new(SqliteMatchRepository::new(pool));

        let record_service = Arc::new(RecordService::new(
            lost_repo.clone(),
            found_repo.clone(),
            event_bus.clone(),
        ));

        Self {
            lifecycle_service: Arc::new(LifecycleService::new(record_service.clone())),
            match_service: Arc::new(MatchService::new(
                match_repo,
                lost_repo.clone(),
                found_repo.clone(),
            )),
            inventory_service: Arc::new(InventoryService::new(
                lost_repo.clone(),
                found_repo.clone(),
            )),
            export_service: Arc::new(ExportService::new(lost_repo, found_repo)),
            export_dir: Arc::new(export_dir),
            record_service,
            event_bus,
        }
    }
}
