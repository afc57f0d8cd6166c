//! Engine configuration loading and management

mod io;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::progress::{NIGHT_OWL_HOUR, POINTS_PER_LEVEL, PointRewards};

/// Tunables for the progression engine
///
/// With the defaults every workout earns a flat 50 points and
/// `level == total_points / 1000 + 1`. Changing `completion_bonus` or
/// `points_per_level` replaces 50 or 1000 in those rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Points awarded for every completed workout
    pub completion_bonus: u64,

    /// Local hour from which a workout unlocks Night Owl
    pub night_owl_hour: u32,

    /// Points per level
    pub points_per_level: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            completion_bonus: PointRewards::WORKOUT_COMPLETED,
            night_owl_hour: NIGHT_OWL_HOUR,
            points_per_level: POINTS_PER_LEVEL,
        }
    }
}

impl EngineConfig {
    /// Check values that would break engine invariants
    pub fn validate(&self) -> Result<()> {
        if self.points_per_level == 0 {
            bail!("points_per_level must be greater than zero");
        }
        if self.night_owl_hour > 23 {
            bail!(
                "night_owl_hour must be within 0..=23, got {}",
                self.night_owl_hour
            );
        }
        Ok(())
    }
}
