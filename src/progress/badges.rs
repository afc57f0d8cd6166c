//! Badge state for the achievements screen

use serde::Serialize;

use super::checker::{ExternalProgress, progress_value};
use super::definitions::{ACHIEVEMENTS, Achievement, AchievementCategory, by_category};
use crate::models::UserStats;

/// Display state of one achievement badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BadgeState {
    Done,
    InProgress { progress: u32, requirement: u32 },
    Locked,
}

impl BadgeState {
    pub fn label(&self) -> String {
        match self {
            Self::Done => "Done".to_string(),
            Self::InProgress {
                progress,
                requirement,
            } => format!("{progress}/{requirement}"),
            Self::Locked => "Locked".to_string(),
        }
    }
}

/// A definition paired with its badge state
#[derive(Debug, Clone, Serialize)]
pub struct AchievementProgress {
    pub achievement: &'static Achievement,
    pub state: BadgeState,
}

/// Badge state for one definition
pub fn badge_state(
    achievement: &Achievement,
    stats: &UserStats,
    external: &ExternalProgress,
) -> BadgeState {
    if stats.is_unlocked(achievement.id.as_str()) {
        return BadgeState::Done;
    }
    match progress_value(achievement, stats, external) {
        Some(progress) if progress > 0 && progress < achievement.requirement => {
            BadgeState::InProgress {
                progress,
                requirement: achievement.requirement,
            }
        }
        _ => BadgeState::Locked,
    }
}

/// Badge states for the whole catalog, or one category of it
pub fn achievement_progress(
    stats: &UserStats,
    external: &ExternalProgress,
    category: Option<AchievementCategory>,
) -> Vec<AchievementProgress> {
    let definitions: Vec<&'static Achievement> = match category {
        Some(category) => by_category(category),
        None => ACHIEVEMENTS.iter().collect(),
    };

    definitions
        .into_iter()
        .map(|achievement| AchievementProgress {
            achievement,
            state: badge_state(achievement, stats, external),
        })
        .collect()
}
