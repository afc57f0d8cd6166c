//! Points and level system
//!
//! Levels are flat: every `points_per_level` points is one level, starting at 1.

use serde::Serialize;

/// Default points needed per level
pub const POINTS_PER_LEVEL: u64 = 1000;

/// Level for a point total
pub fn level_for_points(total_points: u64, points_per_level: u64) -> u32 {
    let per_level = points_per_level.max(1);
    let level = total_points / per_level + 1;
    u32::try_from(level).unwrap_or(u32::MAX)
}

/// Progress through the current level, for the points card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelProgress {
    pub level: u32,
    pub total_points: u64,
    /// Points earned inside the current level
    pub current_xp: u64,
    /// Point total at which the next level starts
    pub xp_for_next_level: u64,
    pub points_per_level: u64,
}

impl LevelProgress {
    pub fn new(total_points: u64, points_per_level: u64) -> Self {
        let per_level = points_per_level.max(1);
        let level = level_for_points(total_points, per_level);
        Self {
            level,
            total_points,
            current_xp: total_points % per_level,
            xp_for_next_level: u64::from(level) * per_level,
            points_per_level: per_level,
        }
    }

    /// Calculate progress fraction to next level (0.0 - 1.0)
    pub fn progress_to_next(&self) -> f32 {
        self.current_xp as f32 / self.points_per_level as f32
    }

    /// Points still needed for the next level
    pub fn points_to_next(&self) -> u64 {
        self.xp_for_next_level.saturating_sub(self.total_points)
    }
}

/// A level up event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
}

/// Point rewards for actions other than achievements
pub struct PointRewards;

impl PointRewards {
    /// Points for completing any workout
    pub const WORKOUT_COMPLETED: u64 = 50;
}
