//! Age categories and the viewing-window policies they imply.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Minutes reserved around the movie for setup, snacks, and discussion.
pub const SETUP_BUFFER_MIN: i64 = 30;

/// Household child age bands, ordered youngest-first.
///
/// The ordering is load-bearing: the youngest category present in a household
/// picks the binding policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeCategory {
    Preschoolers,
    LittleKids,
    BigKids,
    Tweens,
}

impl AgeCategory {
    pub const ALL: [AgeCategory; 4] = [
        AgeCategory::Preschoolers,
        AgeCategory::LittleKids,
        AgeCategory::BigKids,
        AgeCategory::Tweens,
    ];

    /// Base runtime estimate in minutes for a movie aimed at this band.
    pub fn runtime_estimate_min(self) -> i64 {
        match self {
            AgeCategory::Preschoolers => 60,
            AgeCategory::LittleKids => 90,
            AgeCategory::BigKids => 105,
            AgeCategory::Tweens => 120,
        }
    }

    /// Full evening block: runtime estimate plus the setup/discussion buffer.
    ///
    /// Recomputed wherever needed; never persisted.
    pub fn viewing_block_min(self) -> i64 {
        self.runtime_estimate_min() + SETUP_BUFFER_MIN
    }

    /// Display label used in rationale text.
    pub fn label(self) -> &'static str {
        match self {
            AgeCategory::Preschoolers => "preschoolers",
            AgeCategory::LittleKids => "little kids",
            AgeCategory::BigKids => "big kids",
            AgeCategory::Tweens => "tweens",
        }
    }

    /// The fixed viewing-window policy for this band.
    pub fn policy(self) -> ViewingWindowPolicy {
        match self {
            AgeCategory::Preschoolers => ViewingWindowPolicy {
                earliest_start_hour: 16,
                latest_end_hour: 19,
                max_duration_min: 90,
                school_night_restricted: true,
            },
            AgeCategory::LittleKids => ViewingWindowPolicy {
                earliest_start_hour: 16,
                latest_end_hour: 20,
                max_duration_min: 120,
                school_night_restricted: true,
            },
            AgeCategory::BigKids => ViewingWindowPolicy {
                earliest_start_hour: 15,
                latest_end_hour: 21,
                max_duration_min: 150,
                school_night_restricted: false,
            },
            AgeCategory::Tweens => ViewingWindowPolicy {
                earliest_start_hour: 14,
                latest_end_hour: 22,
                max_duration_min: 180,
                school_night_restricted: false,
            },
        }
    }
}

/// Hours and limits governing permissible movie-night slots.
///
/// Invariant: `earliest_start_hour < latest_end_hour`, guaranteed by the
/// `AgeCategory::policy` table being the only constructor path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewingWindowPolicy {
    pub earliest_start_hour: u32,
    pub latest_end_hour: u32,
    pub max_duration_min: i64,
    pub school_night_restricted: bool,
}

/// Resolve a household's binding policy: the youngest category wins.
///
/// An empty household set is a contract violation, not a case to default.
pub fn resolve_policy(household: &[AgeCategory]) -> EngineResult<ViewingWindowPolicy> {
    let youngest = youngest_category(household)?;
    Ok(youngest.policy())
}

/// The minimum (youngest) category in a non-empty household set.
pub fn youngest_category(household: &[AgeCategory]) -> EngineResult<AgeCategory> {
    household
        .iter()
        .min()
        .copied()
        .ok_or_else(|| EngineError::InvalidArgument("household age set is empty".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youngest_category_wins() {
        let policy =
            resolve_policy(&[AgeCategory::Tweens, AgeCategory::Preschoolers]).unwrap();
        assert_eq!(policy, AgeCategory::Preschoolers.policy());
        assert_eq!(policy.earliest_start_hour, 16);
        assert_eq!(policy.latest_end_hour, 19);
        assert_eq!(policy.max_duration_min, 90);
        assert!(policy.school_night_restricted);
    }

    #[test]
    fn empty_household_is_invalid() {
        let err = resolve_policy(&[]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn policies_are_total_and_well_formed() {
        for cat in AgeCategory::ALL {
            let p = cat.policy();
            assert!(p.earliest_start_hour < p.latest_end_hour, "{cat:?}");
            assert!(p.latest_end_hour <= 23, "{cat:?}");
            assert!(p.max_duration_min > 0, "{cat:?}");
        }
    }

    #[test]
    fn adding_a_younger_child_never_widens_the_window() {
        // Subset with a younger minimum must be at least as restrictive.
        for older in AgeCategory::ALL {
            for younger in AgeCategory::ALL {
                if younger >= older {
                    continue;
                }
                let wide = resolve_policy(&[older]).unwrap();
                let tight = resolve_policy(&[younger, older]).unwrap();
                assert!(tight.earliest_start_hour >= wide.earliest_start_hour);
                assert!(tight.latest_end_hour <= wide.latest_end_hour);
                assert!(tight.max_duration_min <= wide.max_duration_min);
            }
        }
    }

    #[test]
    fn viewing_block_adds_buffer() {
        assert_eq!(AgeCategory::Preschoolers.viewing_block_min(), 90);
        assert_eq!(AgeCategory::LittleKids.viewing_block_min(), 120);
        assert_eq!(AgeCategory::BigKids.viewing_block_min(), 135);
        assert_eq!(AgeCategory::Tweens.viewing_block_min(), 150);
    }

    #[test]
    fn category_serde_is_snake_case() {
        let json = serde_json::to_string(&AgeCategory::LittleKids).unwrap();
        assert_eq!(json, "\"little_kids\"");
    }
}
