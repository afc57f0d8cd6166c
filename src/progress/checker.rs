//! Achievement checking logic
//!
//! Walks the catalog in declared order and reports every definition that is
//! satisfied but not yet unlocked.

use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::definitions::{ACHIEVEMENTS, Achievement, AchievementCategory, AchievementId};
use crate::error::{ProgressError, ProgressResult};
use crate::models::{UnlockEvent, UserStats};

/// Default hour (local, 24h clock) from which a workout counts as a night workout
pub const NIGHT_OWL_HOUR: u32 = 21;

/// Progress values owned by collaborators outside the engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalProgress {
    /// Whole kilograms lost since the starting weight
    pub weight_lost_kg: Option<u32>,
    /// Steps walked today
    pub steps_today: Option<u32>,
}

/// Inputs for one evaluation pass
#[derive(Debug, Clone)]
pub struct EvaluationContext {
    /// Local hour of day, 0..=23
    pub current_hour: u32,
    pub night_owl_hour: u32,
    pub unlocked_at: DateTime<FixedOffset>,
    pub external: ExternalProgress,
}

impl EvaluationContext {
    pub fn new(current_hour: u32, unlocked_at: DateTime<FixedOffset>) -> Self {
        Self {
            current_hour,
            night_owl_hour: NIGHT_OWL_HOUR,
            unlocked_at,
            external: ExternalProgress::default(),
        }
    }

    pub fn with_external(mut self, external: ExternalProgress) -> Self {
        self.external = external;
        self
    }

    pub fn with_night_owl_hour(mut self, hour: u32) -> Self {
        self.night_owl_hour = hour;
        self
    }
}

/// Determine newly unlocked achievements.
///
/// Anything already in `unlocked` is skipped entirely, so calling this again
/// with the returned IDs added yields nothing.
pub fn evaluate(
    stats: &UserStats,
    unlocked: &BTreeSet<String>,
    ctx: &EvaluationContext,
) -> ProgressResult<Vec<UnlockEvent>> {
    if ctx.current_hour > 23 {
        return Err(ProgressError::invalid(
            "current_hour",
            format!("must be within 0..=23, got {}", ctx.current_hour),
        ));
    }

    let mut newly_unlocked = Vec::new();

    for achievement in ACHIEVEMENTS {
        if unlocked.contains(achievement.id.as_str()) {
            continue;
        }
        if let Some(progress) = satisfied_progress(achievement, stats, ctx) {
            debug!(
                achievement = achievement.id.as_str(),
                progress,
                requirement = achievement.requirement,
                "Achievement requirement met"
            );
            newly_unlocked.push(UnlockEvent {
                achievement_id: achievement.id.as_str().to_string(),
                awarded_points: achievement.points,
                unlocked_at: ctx.unlocked_at,
                progress,
            });
        }
    }

    Ok(newly_unlocked)
}

/// Current progress value for a definition, if any is known
pub fn progress_value(
    achievement: &Achievement,
    stats: &UserStats,
    external: &ExternalProgress,
) -> Option<u32> {
    match achievement.category {
        // Only ever satisfied at unlock time; no running count exists
        AchievementCategory::Workout if achievement.id == AchievementId::NightOwl => None,
        AchievementCategory::Workout => Some(stats.total_workouts),
        AchievementCategory::Streak => Some(stats.current_streak),
        AchievementCategory::Weight => external.weight_lost_kg,
        AchievementCategory::Steps => external.steps_today,
    }
}

/// Progress value that satisfies the requirement, or `None`
fn satisfied_progress(
    achievement: &Achievement,
    stats: &UserStats,
    ctx: &EvaluationContext,
) -> Option<u32> {
    if achievement.id == AchievementId::NightOwl {
        return (ctx.current_hour >= ctx.night_owl_hour).then_some(1);
    }
    progress_value(achievement, stats, &ctx.external)
        .filter(|value| *value >= achievement.requirement)
}
