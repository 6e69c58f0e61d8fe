//! Repeat-cadence descriptions for recurring movie nights.

use serde::{Deserialize, Serialize};

/// Repeat cadence a family can pick for a standing movie night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrencePattern {
    Weekly,
    Biweekly,
    Monthly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceUnit {
    Week,
    Month,
}

/// Repeat rule consumed by the calendar store.
///
/// Open-ended on purpose: no end date is ever set. Callers wanting bounded
/// recurrence must layer that on themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub unit: RecurrenceUnit,
    pub interval: u32,
}

impl RecurrencePattern {
    pub fn describe(self) -> RecurrenceRule {
        match self {
            RecurrencePattern::Weekly => RecurrenceRule {
                unit: RecurrenceUnit::Week,
                interval: 1,
            },
            RecurrencePattern::Biweekly => RecurrenceRule {
                unit: RecurrenceUnit::Week,
                interval: 2,
            },
            RecurrencePattern::Monthly => RecurrenceRule {
                unit: RecurrenceUnit::Month,
                interval: 1,
            },
        }
    }
}

impl RecurrenceRule {
    /// iCalendar RRULE value, the payload contract toward the calendar store.
    pub fn to_rrule(self) -> String {
        let freq = match self.unit {
            RecurrenceUnit::Week => "WEEKLY",
            RecurrenceUnit::Month => "MONTHLY",
        };
        format!("FREQ={};INTERVAL={}", freq, self.interval)
    }
}
