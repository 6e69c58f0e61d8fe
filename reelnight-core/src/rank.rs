//! Scored suggestions and the ranking that orders them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Default cap on how many suggestions the facade returns.
pub const MAX_SUGGESTIONS: usize = 5;

/// A scored, ranked candidate viewing window. Ephemeral: produced fresh per
/// request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlotSuggestion {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub score: f64,
    pub rationale: String,
}

/// Sort descending by score and truncate to `limit`.
///
/// The sort is stable, so equally scored slots keep their generation order
/// (ascending hour); there is no secondary tie-break key. Empty input is a
/// normal "no suitable time today" outcome, not an error.
pub fn rank(mut suggestions: Vec<TimeSlotSuggestion>, limit: usize) -> Vec<TimeSlotSuggestion> {
    suggestions.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    suggestions.truncate(limit);
    suggestions
}
