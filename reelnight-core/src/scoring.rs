//! Appropriateness scoring for candidate slots.
//!
//! Scores are pure functions of (start hour, age category, day type); the
//! generator has already filtered out anything the policy forbids.

use chrono::{NaiveDateTime, Timelike};

use crate::age::AgeCategory;
use crate::day_type::DayType;

const BASE_SCORE: f64 = 100.0;
const HOUR_DISTANCE_PENALTY: f64 = 10.0;
const WEEKEND_BONUS: f64 = 20.0;
// Flat bonus every policy-conformant slot receives. Kept for numeric
// compatibility with the historical scoring table.
const AGE_APPROPRIATE_BONUS: f64 = 10.0;

/// Ideal start hour for an age band on a given day type.
pub fn ideal_start_hour(age: AgeCategory, day_type: DayType) -> u32 {
    match (age, day_type) {
        (AgeCategory::Preschoolers, DayType::Weekend) => 16,
        (AgeCategory::Preschoolers, DayType::Weeknight) => 17,
        (AgeCategory::LittleKids, DayType::Weekend) => 15,
        (AgeCategory::LittleKids, DayType::Weeknight) => 18,
        (AgeCategory::BigKids | AgeCategory::Tweens, DayType::Weekend) => 14,
        (AgeCategory::BigKids | AgeCategory::Tweens, DayType::Weeknight) => 19,
    }
}

/// Score a candidate start. Deterministic; clamped to a minimum of 0.0.
pub fn score_slot(start: NaiveDateTime, age: AgeCategory, day_type: DayType) -> f64 {
    let ideal = ideal_start_hour(age, day_type) as f64;
    let distance = (start.hour() as f64 - ideal).abs();

    let mut score = BASE_SCORE - HOUR_DISTANCE_PENALTY * distance;
    if day_type.is_weekend() {
        score += WEEKEND_BONUS;
    }
    score += AGE_APPROPRIATE_BONUS;
    score.max(0.0)
}

/// Human-readable explanation for a suggestion. Presentation text only;
/// ranking never looks at it.
pub fn rationale(
    start: NaiveDateTime,
    end: NaiveDateTime,
    age: AgeCategory,
    day_type: DayType,
) -> String {
    let mut clauses = vec![format!(
        "{}\u{2013}{}",
        format_clock(start),
        format_clock(end)
    )];

    clauses.push(
        match day_type {
            DayType::Weekend => "Perfect for weekend family time",
            DayType::Weeknight => "Good for weeknight schedule",
        }
        .to_string(),
    );

    if start.hour() >= 18 {
        clauses.push("After dinner timing".to_string());
    } else if start.hour() >= 15 {
        clauses.push("Afternoon relaxation time".to_string());
    }

    clauses.push(format!("Great fit for {}", age.label()));
    clauses.join(" \u{b7} ")
}

fn format_clock(t: NaiveDateTime) -> String {
    t.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn ideal_weekend_tween_slot_scores_130() {
        // 100 base - 0 penalty + 20 weekend + 10 baseline.
        let start = at(2026, 3, 7, 14);
        let score = score_slot(start, AgeCategory::Tweens, DayType::Weekend);
        assert_eq!(score, 130.0);
    }

    #[test]
    fn penalty_grows_with_distance_from_ideal() {
        let near = score_slot(at(2026, 3, 7, 15), AgeCategory::Tweens, DayType::Weekend);
        let far = score_slot(at(2026, 3, 7, 18), AgeCategory::Tweens, DayType::Weekend);
        assert_eq!(near, 120.0);
        assert_eq!(far, 90.0);
        assert!(near > far);
    }

    #[test]
    fn score_is_deterministic() {
        let start = at(2026, 3, 10, 18);
        let a = score_slot(start, AgeCategory::LittleKids, DayType::Weeknight);
        let b = score_slot(start, AgeCategory::LittleKids, DayType::Weeknight);
        assert_eq!(a, b);
    }

    #[test]
    fn score_never_goes_negative() {
        // Midnight vs. a 19:00 ideal would be -80 unclamped.
        let start = at(2026, 3, 10, 0);
        let score = score_slot(start, AgeCategory::Tweens, DayType::Weeknight);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn rationale_mentions_day_type_and_timing() {
        let start = at(2026, 3, 10, 18);
        let end = at(2026, 3, 10, 20);
        let text = rationale(start, end, AgeCategory::LittleKids, DayType::Weeknight);
        assert!(text.contains("6:00 PM"));
        assert!(text.contains("Good for weeknight schedule"));
        assert!(text.contains("After dinner timing"));
        assert!(text.contains("little kids"));
    }

    #[test]
    fn afternoon_clause_applies_from_15() {
        let start = at(2026, 3, 7, 15);
        let end = at(2026, 3, 7, 17);
        let text = rationale(start, end, AgeCategory::BigKids, DayType::Weekend);
        assert!(text.contains("Afternoon relaxation time"));

        let early = rationale(
            at(2026, 3, 7, 14),
            at(2026, 3, 7, 16),
            AgeCategory::BigKids,
            DayType::Weekend,
        );
        assert!(!early.contains("Afternoon"));
        assert!(!early.contains("After dinner"));
    }
}
