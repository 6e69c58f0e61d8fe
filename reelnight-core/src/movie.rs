//! Catalog record for a movie, as far as the scheduler needs it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::age::AgeCategory;

/// A catalog entry. The catalog owns persistence; the engine only reads the
/// age category and reads/writes `scheduled_date` through the facade.
///
/// `scheduled_date` is absent by default, set by a confirmed schedule, and
/// cleared by explicit unscheduling. A past value stays until cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub age_category: AgeCategory,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDateTime>,
}

impl Movie {
    pub fn new(id: impl Into<String>, title: impl Into<String>, age_category: AgeCategory) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            age_category,
            scheduled_date: None,
        }
    }

    pub fn with_scheduled_date(mut self, at: NaiveDateTime) -> Self {
        self.scheduled_date = Some(at);
        self
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled_date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn new_movie_is_unscheduled() {
        let m = Movie::new("m1", "The Iron Giant", AgeCategory::BigKids);
        assert!(!m.is_scheduled());
        assert_eq!(m.age_category, AgeCategory::BigKids);
    }

    #[test]
    fn scheduled_date_survives_serde() {
        let at = NaiveDate::from_ymd_opt(2026, 3, 7)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        let m = Movie::new("m2", "Spirited Away", AgeCategory::Tweens).with_scheduled_date(at);
        let json = serde_json::to_string(&m).unwrap();
        let back: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(back.scheduled_date, Some(at));
    }
}
