//! Achievement definitions and metadata
//!
//! The catalog is fixed at compile time. Its declared order is the order the
//! evaluator walks, so unlock results are reproducible.

use serde::{Serialize, Serializer};

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AchievementId {
    // Streak achievements
    Streak3,
    Streak7,
    Streak30,

    // Workout achievements
    Workout1,
    Workout10,
    Workout50,
    Workout100,
    Workout500,
    NightOwl,

    // Weight achievements
    Weight1,
    Weight3,
    Weight5,

    // Step achievements
    Steps10k,
    Steps15k,
    Steps20k,
}

impl AchievementId {
    /// Get the string ID used by hosts and storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Streak3 => "streak_3",
            Self::Streak7 => "streak_7",
            Self::Streak30 => "streak_30",
            Self::Workout1 => "workout_1",
            Self::Workout10 => "workout_10",
            Self::Workout50 => "workout_50",
            Self::Workout100 => "workout_100",
            Self::Workout500 => "workout_500",
            Self::NightOwl => "night_owl",
            Self::Weight1 => "weight_1",
            Self::Weight3 => "weight_3",
            Self::Weight5 => "weight_5",
            Self::Steps10k => "steps_10k",
            Self::Steps15k => "steps_15k",
            Self::Steps20k => "steps_20k",
        }
    }

    /// Parse from a stored string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "streak_3" => Some(Self::Streak3),
            "streak_7" => Some(Self::Streak7),
            "streak_30" => Some(Self::Streak30),
            "workout_1" => Some(Self::Workout1),
            "workout_10" => Some(Self::Workout10),
            "workout_50" => Some(Self::Workout50),
            "workout_100" => Some(Self::Workout100),
            "workout_500" => Some(Self::Workout500),
            "night_owl" => Some(Self::NightOwl),
            "weight_1" => Some(Self::Weight1),
            "weight_3" => Some(Self::Weight3),
            "weight_5" => Some(Self::Weight5),
            "steps_10k" => Some(Self::Steps10k),
            "steps_15k" => Some(Self::Steps15k),
            "steps_20k" => Some(Self::Steps20k),
            _ => None,
        }
    }
}

impl Serialize for AchievementId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Achievement category, also the unit its requirement is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    /// Consecutive workout days
    Streak,
    /// Completed workouts
    Workout,
    /// Kilograms lost since the starting weight
    Weight,
    /// Steps walked in one day
    Steps,
}

impl AchievementCategory {
    pub fn all() -> &'static [AchievementCategory] {
        &[Self::Streak, Self::Workout, Self::Weight, Self::Steps]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Streak => "Streak",
            Self::Workout => "Workout",
            Self::Weight => "Weight",
            Self::Steps => "Steps",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "streak" => Some(Self::Streak),
            "workout" => Some(Self::Workout),
            "weight" => Some(Self::Weight),
            "steps" => Some(Self::Steps),
            _ => None,
        }
    }
}

/// Achievement definition with all metadata
#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    /// Threshold in category units
    pub requirement: u32,
    pub points: u32,
}

/// All achievement definitions
pub static ACHIEVEMENTS: &[Achievement] = &[
    // === STREAK ===
    Achievement {
        id: AchievementId::Streak3,
        title: "3-Day Streak",
        description: "Workout 3 days in a row",
        icon: "flame.fill",
        category: AchievementCategory::Streak,
        requirement: 3,
        points: 100,
    },
    Achievement {
        id: AchievementId::Streak7,
        title: "7-Day Streak",
        description: "Workout 7 days in a row",
        icon: "flame.fill",
        category: AchievementCategory::Streak,
        requirement: 7,
        points: 250,
    },
    Achievement {
        id: AchievementId::Streak30,
        title: "30-Day Streak",
        description: "Workout 30 days in a row",
        icon: "flame.fill",
        category: AchievementCategory::Streak,
        requirement: 30,
        points: 1000,
    },
    // === WORKOUT ===
    Achievement {
        id: AchievementId::Workout1,
        title: "First Workout",
        description: "Complete your first workout",
        icon: "dumbbell.fill",
        category: AchievementCategory::Workout,
        requirement: 1,
        points: 50,
    },
    Achievement {
        id: AchievementId::Workout10,
        title: "10 Workouts",
        description: "Complete 10 workouts",
        icon: "dumbbell.fill",
        category: AchievementCategory::Workout,
        requirement: 10,
        points: 200,
    },
    Achievement {
        id: AchievementId::Workout50,
        title: "50 Workouts",
        description: "Complete 50 workouts",
        icon: "dumbbell.fill",
        category: AchievementCategory::Workout,
        requirement: 50,
        points: 500,
    },
    Achievement {
        id: AchievementId::Workout100,
        title: "100 Workouts",
        description: "Complete 100 workouts",
        icon: "dumbbell.fill",
        category: AchievementCategory::Workout,
        requirement: 100,
        points: 1000,
    },
    Achievement {
        id: AchievementId::Workout500,
        title: "500 Workouts",
        description: "Complete 500 workouts",
        icon: "crown.fill",
        category: AchievementCategory::Workout,
        requirement: 500,
        points: 2500,
    },
    Achievement {
        id: AchievementId::NightOwl,
        title: "Night Owl",
        description: "Complete a workout after 9 PM",
        icon: "moon.fill",
        category: AchievementCategory::Workout,
        requirement: 1,
        points: 100,
    },
    // === WEIGHT ===
    Achievement {
        id: AchievementId::Weight1,
        title: "First Kg Lost",
        description: "Lose your first kilogram",
        icon: "scalemass.fill",
        category: AchievementCategory::Weight,
        requirement: 1,
        points: 200,
    },
    Achievement {
        id: AchievementId::Weight3,
        title: "3 Kg Lost",
        description: "Lose 3 kilograms",
        icon: "scalemass.fill",
        category: AchievementCategory::Weight,
        requirement: 3,
        points: 400,
    },
    Achievement {
        id: AchievementId::Weight5,
        title: "5 Kg Lost",
        description: "Lose 5 kilograms",
        icon: "scalemass.fill",
        category: AchievementCategory::Weight,
        requirement: 5,
        points: 600,
    },
    // === STEPS ===
    Achievement {
        id: AchievementId::Steps10k,
        title: "10K Steps",
        description: "Walk 10,000 steps in a day",
        icon: "figure.walk",
        category: AchievementCategory::Steps,
        requirement: 10_000,
        points: 150,
    },
    Achievement {
        id: AchievementId::Steps15k,
        title: "15K Steps",
        description: "Walk 15,000 steps in a day",
        icon: "figure.walk",
        category: AchievementCategory::Steps,
        requirement: 15_000,
        points: 250,
    },
    Achievement {
        id: AchievementId::Steps20k,
        title: "20K Steps",
        description: "Walk 20,000 steps in a day",
        icon: "figure.walk",
        category: AchievementCategory::Steps,
        requirement: 20_000,
        points: 400,
    },
];

impl Achievement {
    /// Get achievement definition by typed ID
    pub fn get(id: AchievementId) -> Option<&'static Achievement> {
        ACHIEVEMENTS.iter().find(|a| a.id == id)
    }

    /// Get total number of achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }

    /// Get total possible points from all achievements
    pub fn total_points() -> u64 {
        ACHIEVEMENTS.iter().map(|a| u64::from(a.points)).sum()
    }
}

/// The full catalog in declared order
pub fn all_achievements() -> &'static [Achievement] {
    ACHIEVEMENTS
}

/// Look up a definition by its string ID
pub fn by_id(id: &str) -> Option<&'static Achievement> {
    AchievementId::from_str(id).and_then(Achievement::get)
}

/// All definitions of one category, in declared order
pub fn by_category(category: AchievementCategory) -> Vec<&'static Achievement> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| a.category == category)
        .collect()
}
