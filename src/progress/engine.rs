//! Progression engine - records a workout and applies its consequences
//!
//! The engine holds no user state. Each call takes the host's current
//! `UserStats` by reference and returns a fresh value alongside everything
//! that changed, so the host can persist stats and unlocks in one step.

use tracing::{debug, info, warn};

use super::checker::{EvaluationContext, ExternalProgress, evaluate};
use super::definitions::{ACHIEVEMENTS, Achievement};
use super::levels::{LevelProgress, LevelUp, level_for_points};
use super::streaks::{StreakOutcome, update_streak};
use crate::config::EngineConfig;
use crate::error::{ProgressError, ProgressResult};
use crate::models::{UnlockEvent, UserStats, WorkoutEvent};

/// Events produced while recording a workout, in the order they happened
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressionEvent {
    PointsAwarded { amount: u64, reason: String },
    StreakUpdated { outcome: StreakOutcome, current: u32 },
    AchievementUnlocked(UnlockEvent),
    LevelUp(LevelUp),
}

/// Everything `record_workout` computed
#[derive(Debug, Clone)]
pub struct WorkoutOutcome {
    pub stats: UserStats,
    pub unlocks: Vec<UnlockEvent>,
    pub events: Vec<ProgressionEvent>,
}

impl WorkoutOutcome {
    pub fn level_up(&self) -> Option<&LevelUp> {
        self.events.iter().find_map(|e| match e {
            ProgressionEvent::LevelUp(level_up) => Some(level_up),
            _ => None,
        })
    }

    /// Points gained by this workout, bonus and achievements together
    pub fn points_gained(&self) -> u64 {
        self.events
            .iter()
            .map(|e| match e {
                ProgressionEvent::PointsAwarded { amount, .. } => *amount,
                _ => 0,
            })
            .sum()
    }
}

/// Stateless rules engine for streaks, achievements, points and levels
#[derive(Debug, Clone, Default)]
pub struct ProgressionEngine {
    config: EngineConfig,
}

impl ProgressionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Read-only achievement catalog
    pub fn catalog(&self) -> &'static [Achievement] {
        ACHIEVEMENTS
    }

    pub fn level_progress(&self, stats: &UserStats) -> LevelProgress {
        LevelProgress::new(stats.total_points, self.config.points_per_level)
    }

    /// Record a completed workout.
    ///
    /// `history` holds the user's earlier workouts (at least those from the
    /// event's day and the day before) and must not contain `event` itself.
    /// `current_hour` is the local hour used for time-of-day achievements.
    pub fn record_workout(
        &self,
        stats: &UserStats,
        history: &[WorkoutEvent],
        event: &WorkoutEvent,
        current_hour: u32,
        external: &ExternalProgress,
    ) -> ProgressResult<WorkoutOutcome> {
        if let Err(e) = validate_inputs(history, event, current_hour) {
            warn!("Rejected workout: {}", e);
            return Err(e);
        }

        let points_per_level = self.config.points_per_level;
        let old_level = level_for_points(stats.total_points, points_per_level);
        let mut next = stats.clone();
        let mut events = Vec::new();

        // Aggregates and completion bonus
        next.total_workouts = next.total_workouts.saturating_add(1);
        next.total_calories_burned = next
            .total_calories_burned
            .saturating_add(u64::from(event.calories_burned.unsigned_abs()));
        next.total_points = next
            .total_points
            .saturating_add(self.config.completion_bonus);
        events.push(ProgressionEvent::PointsAwarded {
            amount: self.config.completion_bonus,
            reason: format!("{} workout completed", event.workout_type),
        });

        // Streak
        let streak = update_streak(history, event, stats.current_streak, stats.best_streak);
        debug!(
            outcome = streak.outcome.as_str(),
            current = streak.current,
            best = streak.best,
            "Streak updated"
        );
        next.current_streak = streak.current;
        next.best_streak = streak.best;
        events.push(ProgressionEvent::StreakUpdated {
            outcome: streak.outcome,
            current: streak.current,
        });

        // Achievements, evaluated against the updated aggregates
        let ctx = EvaluationContext::new(current_hour, event.completed_at)
            .with_night_owl_hour(self.config.night_owl_hour)
            .with_external(*external);
        let unlocks = evaluate(&next, &next.unlocked_achievement_ids, &ctx)?;

        let mut achievement_points = 0u64;
        for unlock in &unlocks {
            next.unlocked_achievement_ids
                .insert(unlock.achievement_id.clone());
            achievement_points += u64::from(unlock.awarded_points);
            events.push(ProgressionEvent::AchievementUnlocked(unlock.clone()));
        }
        if achievement_points > 0 {
            next.total_points = next.total_points.saturating_add(achievement_points);
            events.push(ProgressionEvent::PointsAwarded {
                amount: achievement_points,
                reason: format!("{} achievement(s) unlocked", unlocks.len()),
            });
        }

        // Level
        next.level = level_for_points(next.total_points, points_per_level);
        if next.level > old_level {
            info!("Level up: {} -> {}", old_level, next.level);
            events.push(ProgressionEvent::LevelUp(LevelUp {
                old_level,
                new_level: next.level,
            }));
        }

        info!(
            workout_type = %event.workout_type,
            total_workouts = next.total_workouts,
            streak = next.current_streak,
            points = next.total_points,
            unlocked = unlocks.len(),
            "Workout recorded"
        );

        Ok(WorkoutOutcome {
            stats: next,
            unlocks,
            events,
        })
    }
}

fn validate_inputs(
    history: &[WorkoutEvent],
    event: &WorkoutEvent,
    current_hour: u32,
) -> ProgressResult<()> {
    event.validate()?;

    if current_hour > 23 {
        return Err(ProgressError::invalid(
            "current_hour",
            format!("must be within 0..=23, got {current_hour}"),
        ));
    }

    if let Some(latest) = history.iter().map(|w| w.completed_at).max() {
        if event.completed_at < latest {
            return Err(ProgressError::invalid(
                "completed_at",
                format!(
                    "{} is earlier than the latest recorded workout at {}",
                    event.completed_at.to_rfc3339(),
                    latest.to_rfc3339()
                ),
            ));
        }
    }

    Ok(())
}

/// Record a workout with the default engine configuration
pub fn record_workout(
    stats: &UserStats,
    history: &[WorkoutEvent],
    event: &WorkoutEvent,
    current_hour: u32,
    external: &ExternalProgress,
) -> ProgressResult<WorkoutOutcome> {
    ProgressionEngine::default().record_workout(stats, history, event, current_hour, external)
}

/// The read-only achievement catalog, for display and progress bars
pub fn achievement_catalog() -> &'static [Achievement] {
    ACHIEVEMENTS
}
