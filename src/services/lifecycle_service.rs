// src/services/lifecycle_service.rs
//
// Resolve / delete entry point for callers that name the record kind as
// text. The kind is checked before storage is touched.

use std::sync::Arc;

use crate::domain::RecordKind;
use crate::error::{AppError, AppResult};
use crate::services::RecordService;

pub struct LifecycleService {
    record_service: Arc<RecordService>,
}

impl LifecycleService {
    pub fn new(record_service: Arc<RecordService>) -> Self {
        Self { record_service }
    }

    /// Accepts exactly "lost" or "found"
    pub fn parse_kind(kind: &str) -> AppResult<RecordKind> {
        RecordKind::parse(kind).ok_or_else(|| AppError::InvalidKind(kind.to_string()))
    }

    /// Mark a lost report Resolved or a found report Claimed
    pub fn resolve(&self, kind: &str, id: i64) -> AppResult<()> {
        let kind = Self::parse_kind(kind)?;
        self.record_service.set_status(kind, id)
    }

    pub fn delete(&self, kind: &str, id: i64) -> AppResult<()> {
        let kind = Self::parse_kind(kind)?;
        self.record_service.delete(kind, id)
    }
}
