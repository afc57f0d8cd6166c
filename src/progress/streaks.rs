//! Streak tracking
//!
//! A streak counts consecutive local calendar days with at least one workout.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::WorkoutEvent;

/// How a recorded workout affected the daily streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakOutcome {
    /// First workout ever, or first after the streak was at zero
    Started,
    /// Worked out yesterday, so today adds a day
    Extended,
    /// Another workout on a day that already counted
    Maintained,
    /// Gap of a day or more, streak back to one
    Reset,
}

impl StreakOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::Extended => "extended",
            Self::Maintained => "maintained",
            Self::Reset => "reset",
        }
    }
}

/// Result of running the streak calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    pub current: u32,
    pub best: u32,
    pub outcome: StreakOutcome,
}

/// Compute the new streak after `event`.
///
/// `history` holds the workouts recorded before `event` and must not include it.
pub fn update_streak(
    history: &[WorkoutEvent],
    event: &WorkoutEvent,
    current: u32,
    best: u32,
) -> StreakUpdate {
    let today = event.local_day();
    let yesterday = today.checked_sub_days(Days::new(1));

    let already_logged_today = history.iter().any(|w| w.local_day() == today);
    let worked_out_yesterday =
        yesterday.is_some_and(|y| history.iter().any(|w| w.local_day() == y));

    let (new_current, outcome) = if already_logged_today {
        (current, StreakOutcome::Maintained)
    } else if worked_out_yesterday {
        (current.saturating_add(1), StreakOutcome::Extended)
    } else if current == 0 {
        (1, StreakOutcome::Started)
    } else {
        (1, StreakOutcome::Reset)
    };

    StreakUpdate {
        current: new_current,
        best: best.max(new_current),
        outcome,
    }
}

/// Streak snapshot for display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreakInfo {
    pub current: u32,
    pub best: u32,
    pub last_activity_day: Option<NaiveDate>,
}

impl StreakInfo {
    pub fn from_history(current: u32, best: u32, history: &[WorkoutEvent]) -> Self {
        Self {
            current,
            best,
            last_activity_day: history.iter().map(WorkoutEvent::local_day).max(),
        }
    }

    /// Check if the streak is still alive (activity today or yesterday)
    pub fn is_active(&self, today: NaiveDate) -> bool {
        let Some(last_day) = self.last_activity_day else {
            return false;
        };
        (today - last_day).num_days() <= 1
    }

    /// Check if a workout today would extend the streak
    pub fn can_extend(&self, today: NaiveDate) -> bool {
        match self.last_activity_day {
            Some(last_day) => last_day < today,
            None => true,
        }
    }

    /// Streak value to show today: a lapsed streak displays as zero
    pub fn displayed(&self, today: NaiveDate) -> u32 {
        if self.is_active(today) { self.current } else { 0 }
    }
}
