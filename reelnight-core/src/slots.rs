//! Candidate start-time generation for a movie night.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::age::ViewingWindowPolicy;
use crate::day_type::DayType;
use crate::error::{EngineError, EngineResult};

/// Enumerate whole-hour start times on `date` that fit the policy window.
///
/// A candidate at hour `h` is admitted when its end (start + duration) stays
/// on the same day and its end hour does not pass `latest_end_hour`. The
/// result is ascending by hour, finite, and may be empty when the window is
/// too narrow for the duration.
pub fn candidate_starts(
    date: NaiveDate,
    policy: &ViewingWindowPolicy,
    duration_min: i64,
) -> EngineResult<Vec<NaiveDateTime>> {
    if duration_min <= 0 {
        return Err(EngineError::InvalidArgument(format!(
            "non-positive duration: {duration_min} min"
        )));
    }

    let mut out = Vec::new();
    for hour in policy.earliest_start_hour..policy.latest_end_hour {
        let Some(start) = date.and_hms_opt(hour, 0, 0) else {
            continue;
        };
        let end = start + Duration::minutes(duration_min);
        if end.date() == date && end.hour() <= policy.latest_end_hour {
            out.push(start);
        }
    }
    Ok(out)
}

/// School-night sub-filter, layered on top of window admission.
///
/// On a restricted weeknight only a post-dinner slot survives: start at 18:00
/// or later, end hour no later than 20. Both this and the window check must
/// hold for a slot to be offered.
pub fn school_night_ok(
    start: NaiveDateTime,
    duration_min: i64,
    policy: &ViewingWindowPolicy,
    day_type: DayType,
) -> bool {
    if !policy.school_night_restricted || day_type.is_weekend() {
        return true;
    }
    let end = start + Duration::minutes(duration_min);
    start.hour() >= 18 && end.hour() <= 20
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age::AgeCategory;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn tween_saturday_window_yields_seven_candidates() {
        // 14:00-22:00 window, 150-minute block.
        let policy = AgeCategory::Tweens.policy();
        let starts = candidate_starts(d(2026, 3, 7), &policy, 150).unwrap();
        assert_eq!(starts.len(), 7);
        assert_eq!(starts.first().unwrap().hour(), 14);
        assert_eq!(starts.last().unwrap().hour(), 20);
    }

    #[test]
    fn candidates_stay_inside_the_window() {
        for cat in AgeCategory::ALL {
            let policy = cat.policy();
            let duration = cat.viewing_block_min();
            for start in candidate_starts(d(2026, 3, 7), &policy, duration).unwrap() {
                assert!(start.hour() >= policy.earliest_start_hour);
                let end = start + Duration::minutes(duration);
                assert!(end.hour() <= policy.latest_end_hour);
            }
        }
    }

    #[test]
    fn narrow_window_yields_no_candidates() {
        let policy = AgeCategory::Preschoolers.policy();
        let starts = candidate_starts(d(2026, 3, 7), &policy, 240).unwrap();
        assert!(starts.is_empty());
    }

    #[test]
    fn non_positive_duration_is_invalid() {
        let policy = AgeCategory::Tweens.policy();
        let err = candidate_starts(d(2026, 3, 7), &policy, 0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn school_night_filter_keeps_only_post_dinner_slot() {
        // Little kids on a Tuesday: 16:00-20:00 window, 120-minute block.
        let policy = AgeCategory::LittleKids.policy();
        let tuesday = d(2026, 3, 10);
        let starts = candidate_starts(tuesday, &policy, 120).unwrap();
        let surviving: Vec<_> = starts
            .into_iter()
            .filter(|s| school_night_ok(*s, 120, &policy, DayType::Weeknight))
            .collect();
        assert_eq!(surviving.len(), 1);
        assert_eq!(surviving[0].hour(), 18);
    }

    #[test]
    fn school_night_filter_is_inert_on_weekends() {
        let policy = AgeCategory::LittleKids.policy();
        let start = d(2026, 3, 7).and_hms_opt(16, 0, 0).unwrap();
        assert!(school_night_ok(start, 120, &policy, DayType::Weekend));
    }
}
