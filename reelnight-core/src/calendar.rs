//! External calendar-store seam.
//!
//! The store is an injected collaborator passed explicitly into the facade,
//! never held as ambient global state. Implementations live outside the
//! engine (ICS export, gcalcli, a test double).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::recurrence::RecurrenceRule;

/// Opaque identifier handed back by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventId(pub String);

/// Payload for creating a movie-night event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRequest {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub notes: String,
    pub recurrence: Option<RecurrenceRule>,
    /// Reminder lead times, minutes before the start.
    pub reminder_lead_min: Vec<i64>,
}

/// A stored event, as listed back by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: EventId,
    pub title: String,
    pub start: NaiveDateTime,
}

/// Write-only external calendar collaborator.
///
/// Failures come back as `EngineError::Calendar` and are opaque to the
/// engine; retry and user notification belong to the caller.
pub trait CalendarStore {
    fn create_event(&mut self, request: &EventRequest) -> EngineResult<EventId>;
    fn update_start(&mut self, id: &EventId, new_start: NaiveDateTime) -> EngineResult<()>;
    fn delete_event(&mut self, id: &EventId) -> EngineResult<()>;
    fn upcoming(&self, limit: usize) -> EngineResult<Vec<EventSummary>>;
}
