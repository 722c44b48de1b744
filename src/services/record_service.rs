// src/services/record_service.rs
//
// Record store: creation, listing and the two mutations (terminal status,
// hard delete) for both report kinds.

use std::sync::Arc;

use crate::domain::{
    validate_new_found_report, validate_new_lost_report, Category, FoundReport, LostReport,
    NewFoundReport, NewLostReport, RecordKind, FOUND_TERMINAL_STATUS, LOST_TERMINAL_STATUS,
};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, ReportClosed, ReportDeleted, ReportFiled};
use crate::repositories::{FoundReportRepository, LostReportRepository};

#[derive(Debug, Clone, Default)]
pub struct CreateLostReportRequest {
    pub reporter_name: String,
    pub reporter_roll: Option<String>,
    pub item_name: String,
    pub room: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateFoundReportRequest {
    pub finder_name: Option<String>,
    pub item_name: String,
    pub room: Option<String>,
    pub category: Option<String>,
}

pub struct RecordService {
    lost_repo: Arc<dyn LostReportRepository>,
    found_repo: Arc<dyn FoundReportRepository>,
    event_bus: Arc<EventBus>,
}

impl RecordService {
    pub fn new(
        lost_repo: Arc<dyn LostReportRepository>,
        found_repo: Arc<dyn FoundReportRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            lost_repo,
            found_repo,
            event_bus,
        }
    }

    /// Validate and store a lost report; nothing is written on failure
    pub fn create_lost(&self, request: CreateLostReportRequest) -> AppResult<i64> {
        let report = NewLostReport::new(request.reporter_name, request.item_name)
            .with_roll(request.reporter_roll)
            .with_room(request.room)
            .with_category(Category::from_input(request.category.as_deref()));

        validate_new_lost_report(&report).map_err(AppError::Domain)?;
        let id = self.lost_repo.insert(&report)?;

        log::debug!("Filed lost report #{} ({})", id, report.item_name);
        self.event_bus.emit(ReportFiled::new(RecordKind::Lost, id));

        Ok(id)
    }

    /// Validate and store a found report; nothing is written on failure
    pub fn create_found(&self, request: CreateFoundReportRequest) -> AppResult<i64> {
        let report = NewFoundReport::new(request.item_name)
            .with_finder(request.finder_name)
            .with_room(request.room)
            .with_category(Category::from_input(request.category.as_deref()));

        validate_new_found_report(&report).map_err(AppError::Domain)?;
        let id = self.found_repo.insert(&report)?;

        log::debug!("Filed found report #{} ({})", id, report.item_name);
        self.event_bus.emit(ReportFiled::new(RecordKind::Found, id));

        Ok(id)
    }

    pub fn get_lost(&self, id: i64) -> AppResult<Option<LostReport>> {
        self.lost_repo.get_by_id(id)
    }

    pub fn get_found(&self, id: i64) -> AppResult<Option<FoundReport>> {
        self.found_repo.get_by_id(id)
    }

    /// Most recent first
    pub fn list_lost(&self) -> AppResult<Vec<LostReport>> {
        self.lost_repo.list_newest_first()
    }

    /// Most recent first
    pub fn list_found(&self) -> AppResult<Vec<FoundReport>> {
        self.found_repo.list_newest_first()
    }

    /// Drive a record to its kind's terminal status (Resolved / Claimed).
    ///
    /// The target is fixed per kind and written unconditionally, so calling
    /// this twice is harmless. An unknown id is a no-op, not an error.
    pub fn set_status(&self, kind: RecordKind, id: i64) -> AppResult<()> {
        let rows = match kind {
            RecordKind::Lost => self.lost_repo.set_status(id, LOST_TERMINAL_STATUS)?,
            RecordKind::Found => self.found_repo.set_status(id, FOUND_TERMINAL_STATUS)?,
        };

        if rows == 0 {
            log::debug!("No {} report #{} to close", kind, id);
            return Ok(());
        }

        log::debug!("Closed {} report #{} as {}", kind, id, kind.terminal_status());
        self.event_bus
            .emit(ReportClosed::new(kind, id, kind.terminal_status()));
        Ok(())
    }

    /// Permanently remove a record. An unknown id is a no-op, not an error.
    pub fn delete(&self, kind: RecordKind, id: i64) -> AppResult<()> {
        let rows = match kind {
            RecordKind::Lost => self.lost_repo.delete(id)?,
            RecordKind::Found => self.found_repo.delete(id)?,
        };

        if rows == 0 {
            log::debug!("No {} report #{} to delete", kind, id);
            return Ok(());
        }

        log::debug!("Deleted {} report #{}", kind, id);
        self.event_bus.emit(ReportDeleted::new(kind, id));
        Ok(())
    }
}
