//! Per-user profile kept by the reference host
//!
//! The profile bundles what the engine needs from the host: current stats,
//! workout history and the weight readings behind the weight achievements.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{ProgressError, ProgressResult};
use crate::models::{UserStats, WorkoutEvent};
use crate::progress::{ExternalProgress, ProgressionEngine, WorkoutOutcome};

/// A single weigh-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    pub weight_kg: f64,
    pub recorded_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    #[serde(default)]
    pub stats: UserStats,
    #[serde(default)]
    pub history: Vec<WorkoutEvent>,
    /// First recorded weight, the baseline for weight-loss achievements
    #[serde(default)]
    pub starting_weight_kg: Option<f64>,
    #[serde(default)]
    pub weight_history: Vec<WeightRecord>,
}

impl UserProfile {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            stats: UserStats::default(),
            history: Vec::new(),
            starting_weight_kg: None,
            weight_history: Vec::new(),
        }
    }

    pub fn current_weight_kg(&self) -> Option<f64> {
        self.weight_history.last().map(|r| r.weight_kg)
    }

    /// Whole kilograms lost since the starting weight
    pub fn weight_lost_kg(&self) -> Option<u32> {
        let starting = self.starting_weight_kg?;
        let current = self.current_weight_kg()?;
        Some(kg_lost(starting, current))
    }

    /// Add a weigh-in; the first one also becomes the starting weight
    pub fn record_weight(
        &mut self,
        weight_kg: f64,
        recorded_at: DateTime<FixedOffset>,
    ) -> ProgressResult<()> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(ProgressError::invalid(
                "weight_kg",
                format!("must be a positive number, got {weight_kg}"),
            ));
        }
        if self.starting_weight_kg.is_none() {
            self.starting_weight_kg = Some(weight_kg);
        }
        self.weight_history.push(WeightRecord {
            weight_kg,
            recorded_at,
        });
        Ok(())
    }

    /// External progress as known to this profile
    pub fn external_progress(&self, steps_today: Option<u32>) -> ExternalProgress {
        ExternalProgress {
            weight_lost_kg: self.weight_lost_kg(),
            steps_today,
        }
    }

    /// Run the engine and apply its result.
    ///
    /// On error the profile is left exactly as it was.
    pub fn record_workout(
        &mut self,
        engine: &ProgressionEngine,
        event: WorkoutEvent,
        current_hour: u32,
        steps_today: Option<u32>,
    ) -> ProgressResult<WorkoutOutcome> {
        let external = self.external_progress(steps_today);
        let outcome =
            engine.record_workout(&self.stats, &self.history, &event, current_hour, &external)?;

        self.stats = outcome.stats.clone();
        self.history.push(event);
        Ok(outcome)
    }
}

/// Whole kilograms between `starting` and `current`, never negative
pub fn kg_lost(starting_kg: f64, current_kg: f64) -> u32 {
    let lost = (starting_kg - current_kg).max(0.0).floor();
    if lost.is_finite() { lost as u32 } else { 0 }
}
