//! Shared helpers for progression integration tests

#![allow(dead_code)]

use chrono::{DateTime, Days, FixedOffset, NaiveDate, TimeZone};

use workhome::progress::ExternalProgress;
use workhome::{ProgressionEngine, UserStats, WorkoutEvent, WorkoutOutcome};

/// Local timezone used by the tests (UTC+02:00)
pub fn tz() -> FixedOffset {
    FixedOffset::east_opt(2 * 3600).expect("valid offset")
}

/// A timestamp `days` after 2024-01-01 at `hour`:00 local time
pub fn local_time(days: u64, hour: u32) -> DateTime<FixedOffset> {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .expect("valid date")
        .checked_add_days(Days::new(days))
        .expect("date in range");
    let naive = date.and_hms_opt(hour, 0, 0).expect("valid time");
    tz().from_local_datetime(&naive)
        .single()
        .expect("fixed offsets are unambiguous")
}

pub fn workout(completed_at: DateTime<FixedOffset>) -> WorkoutEvent {
    WorkoutEvent {
        completed_at,
        duration_minutes: 30,
        calories_burned: 220,
        exercises_completed: 7,
        workout_type: "Lower Body".to_string(),
    }
}

/// Minimal host: owns stats and history, feeds the engine one workout at a time
pub struct TestHost {
    pub engine: ProgressionEngine,
    pub stats: UserStats,
    pub history: Vec<WorkoutEvent>,
}

impl TestHost {
    pub fn new() -> Self {
        Self::with_stats(UserStats::default())
    }

    pub fn with_stats(stats: UserStats) -> Self {
        Self {
            engine: ProgressionEngine::default(),
            stats,
            history: Vec::new(),
        }
    }

    /// Record a workout on day `days` at `hour` and apply the result
    pub fn record(&mut self, days: u64, hour: u32) -> WorkoutOutcome {
        self.record_with(days, hour, ExternalProgress::default())
    }

    pub fn record_with(
        &mut self,
        days: u64,
        hour: u32,
        external: ExternalProgress,
    ) -> WorkoutOutcome {
        let event = workout(local_time(days, hour));
        let outcome = self
            .engine
            .record_workout(&self.stats, &self.history, &event, hour, &external)
            .expect("valid workout");
        self.stats = outcome.stats.clone();
        self.history.push(event);
        outcome
    }
}

pub fn unlocked_ids(outcome: &WorkoutOutcome) -> Vec<&str> {
    outcome
        .unlocks
        .iter()
        .map(|u| u.achievement_id.as_str())
        .collect()
}

/// Invariants that must hold after every update
pub fn assert_invariants(stats: &UserStats) {
    assert!(
        stats.best_streak >= stats.current_streak,
        "best streak {} below current {}",
        stats.best_streak,
        stats.current_streak
    );
    assert_eq!(
        u64::from(stats.level),
        stats.total_points / 1000 + 1,
        "level out of sync with {} points",
        stats.total_points
    );
}
