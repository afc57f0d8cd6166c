//! Gamification rules: Achievements, Points, Levels and Streaks
//!
//! Everything here is pure. Time and external progress come in as explicit
//! inputs, and results come back as new values.
//!
//! # Usage
//!
//! ```ignore
//! let engine = ProgressionEngine::new(config);
//! let outcome = engine.record_workout(&stats, &history, &event, hour, &external)?;
//!
//! for unlock in &outcome.unlocks {
//!     notify(unlock);
//! }
//! store(outcome.stats);
//! ```

mod badges;
mod checker;
mod definitions;
mod engine;
mod levels;
mod streaks;

pub use badges::{AchievementProgress, BadgeState, achievement_progress, badge_state};
pub use checker::{EvaluationContext, ExternalProgress, NIGHT_OWL_HOUR, evaluate, progress_value};
pub use definitions::{
    ACHIEVEMENTS, Achievement, AchievementCategory, AchievementId, all_achievements, by_category,
    by_id,
};
pub use engine::{
    ProgressionEngine, ProgressionEvent, WorkoutOutcome, achievement_catalog, record_workout,
};
pub use levels::{LevelProgress, LevelUp, POINTS_PER_LEVEL, PointRewards, level_for_points};
pub use streaks::{StreakInfo, StreakOutcome, StreakUpdate, update_streak};
