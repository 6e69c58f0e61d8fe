//! Scheduling facade: suggestion pipeline plus the scheduled-date lifecycle.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::age::{resolve_policy, youngest_category, AgeCategory};
use crate::calendar::{CalendarStore, EventId, EventRequest};
use crate::day_type::DayType;
use crate::error::{EngineError, EngineResult};
use crate::movie::Movie;
use crate::rank::{rank, TimeSlotSuggestion, MAX_SUGGESTIONS};
use crate::recurrence::RecurrencePattern;
use crate::scoring::{rationale, score_slot};
use crate::slots::{candidate_starts, school_night_ok};

/// Default reminder lead times for pushed events, minutes before start.
pub const DEFAULT_REMINDER_LEAD_MIN: [i64; 2] = [60, 15];

/// Outcome of the local-write-then-calendar-write sequence.
///
/// The two steps are independent, not one transaction: the local schedule is
/// never rolled back when the calendar write fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleOutcome {
    pub scheduled_at: NaiveDateTime,
    pub calendar: CalendarSync,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalendarSync {
    Synced(EventId),
    Failed(String),
}

impl ScheduleOutcome {
    pub fn is_partial(&self) -> bool {
        matches!(self.calendar, CalendarSync::Failed(_))
    }
}

/// Propose ranked viewing windows for `movie` on `date`.
///
/// The household's youngest category picks the policy and drives scoring;
/// the movie's own category drives the duration estimate. An empty result is
/// a normal outcome: no slot fits that day.
pub fn suggest_slots(
    movie: &Movie,
    date: NaiveDate,
    household: &[AgeCategory],
) -> EngineResult<Vec<TimeSlotSuggestion>> {
    let policy = resolve_policy(household)?;
    let youngest = youngest_category(household)?;
    let day_type = DayType::classify(date);
    let duration_min = movie.age_category.viewing_block_min();

    let suggestions: Vec<TimeSlotSuggestion> = candidate_starts(date, &policy, duration_min)?
        .into_iter()
        .filter(|start| school_night_ok(*start, duration_min, &policy, day_type))
        .map(|start| {
            let end = start + Duration::minutes(duration_min);
            TimeSlotSuggestion {
                start,
                end,
                score: score_slot(start, youngest, day_type),
                rationale: rationale(start, end, youngest, day_type),
            }
        })
        .collect();

    Ok(rank(suggestions, MAX_SUGGESTIONS))
}

/// Set the movie's scheduled date. Local state only; any calendar write is a
/// separate step the caller drives.
pub fn confirm_schedule(movie: &mut Movie, at: NaiveDateTime) {
    movie.scheduled_date = Some(at);
}

/// Clear the movie's scheduled date.
pub fn unschedule(movie: &mut Movie) {
    movie.scheduled_date = None;
}

/// Confirm locally, then push to the calendar store.
///
/// A calendar failure is reported as a partial success next to the
/// already-applied local state; it is the caller's job to surface that
/// distinctly rather than collapsing it into pass/fail.
pub fn schedule_and_sync<C: CalendarStore>(
    movie: &mut Movie,
    at: NaiveDateTime,
    repeat: Option<RecurrencePattern>,
    store: &mut C,
) -> ScheduleOutcome {
    confirm_schedule(movie, at);

    let request = EventRequest {
        title: format!("Movie night: {}", movie.title),
        start: at,
        end: at + Duration::minutes(movie.age_category.viewing_block_min()),
        notes: format!("Family movie night for {}", movie.age_category.label()),
        recurrence: repeat.map(RecurrencePattern::describe),
        reminder_lead_min: DEFAULT_REMINDER_LEAD_MIN.to_vec(),
    };

    let calendar = match store.create_event(&request) {
        Ok(id) => CalendarSync::Synced(id),
        Err(EngineError::Calendar(reason)) => CalendarSync::Failed(reason),
        Err(other) => CalendarSync::Failed(other.to_string()),
    };

    ScheduleOutcome { scheduled_at: at, calendar }
}
