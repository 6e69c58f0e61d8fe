//! Weeknight vs. weekend classification of calendar dates.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Classification of a date for scheduling purposes. Derived on demand from
/// the weekday, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Weeknight,
    Weekend,
}

impl DayType {
    pub fn classify(date: NaiveDate) -> DayType {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => DayType::Weekend,
            _ => DayType::Weeknight,
        }
    }

    pub fn is_weekend(self) -> bool {
        self == DayType::Weekend
    }
}
