//! Level progression derived from accumulated experience.
//!
//! Reaching level `L` takes `50 * L * (L + 1)` experience in total, so the
//! level for a given experience value is the closed-form inverse of that
//! curve: `floor((sqrt(2500 + 200 * E) - 50) / 100)`.

use serde::{Deserialize, Serialize};

/// The derived pair (level, experience still needed for the next level).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leveling {
    pub level: i32,
    pub until_next_level: i32,
}

impl Leveling {
    /// Compute leveling for a non-negative experience value.
    pub fn from_experience(experience: i32) -> Self {
        let experience = i64::from(experience.max(0));
        let estimate = ((2500.0 + 200.0 * experience as f64).sqrt() - 50.0) / 100.0;
        let mut level = estimate.floor() as i64;

        // Correct any rounding drift of the float estimate against the exact curve.
        while total_for_level(level + 1) <= experience {
            level += 1;
        }
        while level > 0 && total_for_level(level) > experience {
            level -= 1;
        }

        let until_next_level = total_for_level(level + 1) - experience;
        Self {
            level: level as i32,
            until_next_level: until_next_level as i32,
        }
    }
}

/// Total experience required to reach `level`.
fn total_for_level(level: i64) -> i64 {
    50 * level * (level + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_experience_is_level_zero() {
        let leveling = Leveling::from_experience(0);
        assert_eq!(leveling.level, 0);
        assert_eq!(leveling.until_next_level, 100);
    }

    #[test]
    fn matches_closed_form_around_boundaries() {
        let cases = [
            (99, 0, 1),
            (100, 1, 200),
            (299, 1, 1),
            (300, 2, 300),
            (600, 3, 400),
            (750, 3, 250),
            (999, 3, 1),
            (1000, 4, 500),
        ];
        for (experience, level, until_next_level) in cases {
            assert_eq!(
                Leveling::from_experience(experience),
                Leveling {
                    level,
                    until_next_level
                },
                "experience {experience}"
            );
        }
    }

    #[test]
    fn maximum_experience_does_not_overflow() {
        let leveling = Leveling::from_experience(10_000_000);
        assert_eq!(leveling.level, 446);
        assert_eq!(leveling.until_next_level, 12_800);
    }

    #[test]
    fn until_next_level_is_always_positive() {
        for experience in (0..20_000).step_by(7) {
            let leveling = Leveling::from_experience(experience);
            assert!(leveling.until_next_level > 0);
            assert!(total_for_level(i64::from(leveling.level)) <= i64::from(experience));
        }
    }
}
