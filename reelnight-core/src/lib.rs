//! reelnight-core: the movie-night scheduling recommendation engine.
//!
//! Pure and synchronous: every operation here is a deterministic computation
//! over value inputs. The only mutable state the engine touches is a movie's
//! `scheduled_date`, owned by the catalog and reached through the facade.

pub mod age;
pub mod calendar;
pub mod day_type;
pub mod error;
pub mod facade;
pub mod intent;
pub mod movie;
pub mod rank;
pub mod recurrence;
pub mod scoring;
pub mod slots;

pub use age::{resolve_policy, youngest_category, AgeCategory, ViewingWindowPolicy, SETUP_BUFFER_MIN};
pub use calendar::{CalendarStore, EventId, EventRequest, EventSummary};
pub use day_type::DayType;
pub use error::{EngineError, EngineResult};
pub use facade::{
    confirm_schedule, schedule_and_sync, suggest_slots, unschedule, CalendarSync,
    ScheduleOutcome, DEFAULT_REMINDER_LEAD_MIN,
};
pub use intent::WatchIntent;
pub use movie::Movie;
pub use rank::{rank, TimeSlotSuggestion, MAX_SUGGESTIONS};
pub use recurrence::{RecurrencePattern, RecurrenceRule, RecurrenceUnit};
pub use scoring::{ideal_start_hour, rationale, score_slot};
pub use slots::{candidate_starts, school_night_ok};
