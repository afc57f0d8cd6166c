//! Data models shared between the engine and its host
//!
//! All of these are plain values. The host owns storage; the engine only
//! ever reads a `UserStats` and hands back a new one.

use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ProgressError, ProgressResult};
use crate::progress::{Achievement, by_id};

/// Aggregate progression state for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_workouts: u32,
    pub total_calories_burned: u64,
    pub current_streak: u32,
    pub best_streak: u32,
    pub total_points: u64,
    pub level: u32,
    #[serde(default)]
    pub unlocked_achievement_ids: BTreeSet<String>,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_workouts: 0,
            total_calories_burned: 0,
            current_streak: 0,
            best_streak: 0,
            total_points: 0,
            level: 1,
            unlocked_achievement_ids: BTreeSet::new(),
        }
    }
}

impl UserStats {
    pub fn is_unlocked(&self, achievement_id: &str) -> bool {
        self.unlocked_achievement_ids.contains(achievement_id)
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked_achievement_ids.len()
    }
}

/// A completed workout session.
///
/// `completed_at` keeps the user's local UTC offset, so its calendar day is
/// the day the user saw on their clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutEvent {
    pub completed_at: DateTime<FixedOffset>,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub exercises_completed: i32,
    pub workout_type: String,
}

impl WorkoutEvent {
    /// Local calendar day of the session
    pub fn local_day(&self) -> NaiveDate {
        self.completed_at.date_naive()
    }

    /// Reject sessions the engine cannot account for
    pub fn validate(&self) -> ProgressResult<()> {
        if self.duration_minutes <= 0 {
            return Err(ProgressError::invalid(
                "duration_minutes",
                format!("must be positive, got {}", self.duration_minutes),
            ));
        }
        if self.calories_burned < 0 {
            return Err(ProgressError::invalid(
                "calories_burned",
                format!("must not be negative, got {}", self.calories_burned),
            ));
        }
        if self.exercises_completed < 0 {
            return Err(ProgressError::invalid(
                "exercises_completed",
                format!("must not be negative, got {}", self.exercises_completed),
            ));
        }
        if self.workout_type.trim().is_empty() {
            return Err(ProgressError::invalid("workout_type", "must not be empty"));
        }
        Ok(())
    }
}

/// Emitted once when an achievement first becomes satisfied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockEvent {
    pub achievement_id: String,
    pub awarded_points: u32,
    pub unlocked_at: DateTime<FixedOffset>,
    /// Value that met the requirement (workouts, streak days, kg, steps)
    pub progress: u32,
}

impl UnlockEvent {
    pub fn definition(&self) -> Option<&'static Achievement> {
        by_id(&self.achievement_id)
    }
}

/// Preset workout programs offered by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutType {
    UpperBody,
    LowerBody,
    Core,
    FullBody,
    Cardio,
    Stretching,
}

impl WorkoutType {
    pub fn all() -> &'static [WorkoutType] {
        &[
            Self::UpperBody,
            Self::LowerBody,
            Self::Core,
            Self::FullBody,
            Self::Cardio,
            Self::Stretching,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::UpperBody => "Upper Body",
            Self::LowerBody => "Lower Body",
            Self::Core => "Core",
            Self::FullBody => "Full Body",
            Self::Cardio => "Cardio HIIT",
            Self::Stretching => "Stretching",
        }
    }

    /// Parse a label, case-insensitively
    pub fn from_label(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
    }

    /// Default session length in minutes
    pub fn default_duration(&self) -> i32 {
        match self {
            Self::UpperBody => 25,
            Self::LowerBody => 30,
            Self::Core => 20,
            Self::FullBody => 35,
            Self::Cardio => 20,
            Self::Stretching => 15,
        }
    }

    /// Estimated calories for a default-length session
    pub fn default_calories(&self) -> i32 {
        match self {
            Self::UpperBody => 180,
            Self::LowerBody => 220,
            Self::Core => 150,
            Self::FullBody => 280,
            Self::Cardio => 250,
            Self::Stretching => 50,
        }
    }

    pub fn exercises(&self) -> &'static [&'static str] {
        match self {
            Self::UpperBody => &[
                "Push-ups",
                "Diamond Push-ups",
                "Pike Push-ups",
                "Tricep Dips",
                "Plank Shoulder Taps",
                "Arm Circles",
            ],
            Self::LowerBody => &[
                "Squats",
                "Lunges",
                "Glute Bridges",
                "Calf Raises",
                "Wall Sit",
                "Jump Squats",
                "Side Lunges",
            ],
            Self::Core => &[
                "Crunches",
                "Plank",
                "Russian Twists",
                "Leg Raises",
                "Mountain Climbers",
                "Dead Bug",
            ],
            Self::FullBody => &[
                "Burpees",
                "Squats",
                "Push-ups",
                "Lunges",
                "Plank",
                "Mountain Climbers",
                "Jump Squats",
                "Tricep Dips",
            ],
            Self::Cardio => &[
                "Jumping Jacks",
                "High Knees",
                "Burpees",
                "Mountain Climbers",
                "Jump Squats",
                "Skaters",
            ],
            Self::Stretching => &[
                "Neck Stretch",
                "Shoulder Stretch",
                "Quad Stretch",
                "Hamstring Stretch",
                "Hip Flexor Stretch",
                "Cat-Cow",
            ],
        }
    }
}
