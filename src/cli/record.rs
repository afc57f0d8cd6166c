//! Record command implementation

use anyhow::{Result, anyhow};
use chrono::Timelike;

use workhome::progress::ProgressionEvent;
use workhome::store::ProfileStore;
use workhome::{ProgressionEngine, WorkoutEvent, WorkoutType};

use super::parse_time;

/// Workout details as given on the command line
pub struct RecordArgs {
    pub user: String,
    pub workout_type: String,
    pub duration: Option<i32>,
    pub calories: Option<i32>,
    pub exercises: Option<i32>,
    pub at: Option<String>,
    pub steps: Option<u32>,
}

/// Log a workout and print what it earned
pub fn record_command(
    store: &ProfileStore,
    engine: &ProgressionEngine,
    args: RecordArgs,
) -> Result<()> {
    let event = build_event(&args)?;
    let hour = event.completed_at.hour();

    let outcome = store.update(&args.user, |profile| {
        profile
            .record_workout(engine, event.clone(), hour, args.steps)
            .map_err(anyhow::Error::from)
    })?;

    println!(
        "Workout recorded: {} ({} min, {} kcal)",
        event.workout_type, event.duration_minutes, event.calories_burned
    );

    for e in &outcome.events {
        match e {
            ProgressionEvent::PointsAwarded { amount, reason } => {
                println!("  +{amount} points ({reason})");
            }
            ProgressionEvent::StreakUpdated { outcome: o, current } => {
                println!("  Streak: {} day(s), {}", current, o.as_str());
            }
            ProgressionEvent::AchievementUnlocked(unlock) => {
                let title: &str = match unlock.definition() {
                    Some(a) => a.title,
                    None => &unlock.achievement_id,
                };
                println!("  Unlocked: {} (+{})", title, unlock.awarded_points);
            }
            ProgressionEvent::LevelUp(level_up) => {
                println!("  Level up! {} -> {}", level_up.old_level, level_up.new_level);
            }
        }
    }

    let stats = &outcome.stats;
    println!(
        "  Level {} with {} points, best streak {}",
        stats.level, stats.total_points, stats.best_streak
    );

    Ok(())
}

/// Fill in preset defaults for known workout types
fn build_event(args: &RecordArgs) -> Result<WorkoutEvent> {
    let preset = WorkoutType::from_label(&args.workout_type);

    let duration = args
        .duration
        .or(preset.map(|p| p.default_duration()))
        .ok_or_else(|| {
            anyhow!(
                "Unknown workout type '{}': pass --duration explicitly",
                args.workout_type
            )
        })?;
    let calories = args
        .calories
        .or(preset.map(|p| p.default_calories()))
        .unwrap_or(0);
    let exercises = args
        .exercises
        .or(preset.map(|p| p.exercises().len() as i32))
        .unwrap_or(0);

    Ok(WorkoutEvent {
        completed_at: parse_time(args.at.as_deref())?,
        duration_minutes: duration,
        calories_burned: calories,
        exercises_completed: exercises,
        workout_type: preset
            .map(|p| p.label().to_string())
            .unwrap_or_else(|| args.workout_type.trim().to_string()),
    })
}
