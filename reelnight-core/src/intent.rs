//! Relative-day intents, resolved to concrete dates.
//!
//! Replaces string-driven option labels ("Tonight at 7 PM") with a tagged
//! variant mapped through a pure function. The caller supplies `today`; the
//! engine never consults a clock.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchIntent {
    Tonight,
    Tomorrow,
    ThisWeekend,
    Custom(NaiveDate),
}

impl WatchIntent {
    /// Map the intent to a concrete date relative to `today`.
    ///
    /// `ThisWeekend` means today when today already is Saturday or Sunday,
    /// otherwise the coming Saturday.
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            WatchIntent::Tonight => today,
            WatchIntent::Tomorrow => today + Duration::days(1),
            WatchIntent::ThisWeekend => match today.weekday() {
                Weekday::Sat | Weekday::Sun => today,
                wd => {
                    let until_sat = (Weekday::Sat.num_days_from_monday() + 7
                        - wd.num_days_from_monday())
                        % 7;
                    today + Duration::days(until_sat as i64)
                }
            },
            WatchIntent::Custom(date) => date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn tonight_and_tomorrow_are_relative_to_today() {
        let tue = d(2026, 3, 10);
        assert_eq!(WatchIntent::Tonight.resolve(tue), tue);
        assert_eq!(WatchIntent::Tomorrow.resolve(tue), d(2026, 3, 11));
    }

    #[test]
    fn weekend_resolves_to_coming_saturday() {
        assert_eq!(WatchIntent::ThisWeekend.resolve(d(2026, 3, 10)), d(2026, 3, 14));
        // Friday still points at the next day.
        assert_eq!(WatchIntent::ThisWeekend.resolve(d(2026, 3, 13)), d(2026, 3, 14));
    }

    #[test]
    fn weekend_on_a_weekend_is_today() {
        assert_eq!(WatchIntent::ThisWeekend.resolve(d(2026, 3, 14)), d(2026, 3, 14));
        assert_eq!(WatchIntent::ThisWeekend.resolve(d(2026, 3, 15)), d(2026, 3, 15));
    }

    #[test]
    fn custom_passes_through() {
        let date = d(2026, 4, 1);
        assert_eq!(WatchIntent::Custom(date).resolve(d(2026, 3, 10)), date);
    }
}
