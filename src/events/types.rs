// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::RecordKind;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

/// Emitted after a lost or found report is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFiled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: RecordKind,
    pub record_id: i64,
}

impl ReportFiled {
    pub fn new(kind: RecordKind, record_id: i64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind,
            record_id,
        }
    }
}

impl DomainEvent for ReportFiled {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ReportFiled" }
}

/// Emitted after a report is driven to its terminal status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportClosed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: RecordKind,
    pub record_id: i64,
    pub status: String, // "Resolved" or "Claimed"
}

impl ReportClosed {
    pub fn new(kind: RecordKind, record_id: i64, status: &str) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind,
            record_id,
            status: status.to_string(),
        }
    }
}

impl DomainEvent for ReportClosed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ReportClosed" }
}

/// Emitted after a report is permanently removed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: RecordKind,
    pub record_id: i64,
}

impl ReportDeleted {
    pub fn new(kind: RecordKind, record_id: i64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind,
            record_id,
        }
    }
}

impl DomainEvent for ReportDeleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ReportDeleted" }
}
