//! WorkHome - workout progression engine
//!
//! Decides what a logged workout earns: whether the daily streak continues
//! or resets, which achievements unlock, how many points are awarded and
//! which level results.
//!
//! ## Host contract
//!
//! The engine is pure and keeps no user state. A host reads the user's
//! `UserStats`, passes them to [`progress::ProgressionEngine::record_workout`]
//! together with the recent workout history, and persists the returned stats
//! in one step. Calls for the same user must be serialized by the host;
//! [`store::ProfileStore::update`] is a file-backed host that does this.

pub mod config;
pub mod error;
mod fsio;
pub mod models;
pub mod profile;
pub mod progress;
pub mod store;

pub use config::EngineConfig;
pub use error::{ProgressError, ProgressResult};
pub use models::{UnlockEvent, UserStats, WorkoutEvent, WorkoutType};
pub use progress::{
    Achievement, AchievementCategory, ExternalProgress, ProgressionEngine, WorkoutOutcome,
    achievement_catalog, record_workout,
};
