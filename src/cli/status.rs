//! Status command implementation

use anyhow::Result;
use chrono::Local;

use workhome::ProgressionEngine;
use workhome::progress::{StreakInfo, all_achievements};
use workhome::store::ProfileStore;

/// Show level, streak and totals for a user
pub fn status_command(store: &ProfileStore, engine: &ProgressionEngine, user: &str) -> Result<()> {
    let profile = store.load(user)?;
    let stats = &profile.stats;

    if stats.total_workouts == 0 {
        println!("No workouts recorded for '{user}' yet.");
        return Ok(());
    }

    let level = engine.level_progress(stats);
    let streak =
        StreakInfo::from_history(stats.current_streak, stats.best_streak, &profile.history);
    let today = Local::now().date_naive();

    println!("{user}\n");
    println!(
        "  Level {}  ({}/{} XP, {:.0}%, {} to level {})",
        level.level,
        level.current_xp,
        level.points_per_level,
        level.progress_to_next() * 100.0,
        level.points_to_next(),
        level.level + 1
    );
    println!("  Points:    {}", stats.total_points);
    println!(
        "  Streak:    {} day(s) (best {}){}",
        streak.displayed(today),
        streak.best,
        if streak.can_extend(today) && streak.is_active(today) {
            ", work out today to keep it"
        } else {
            ""
        }
    );
    println!("  Workouts:  {}", stats.total_workouts);
    println!("  Calories:  {} kcal", stats.total_calories_burned);
    println!(
        "  Achievements: {} of {} unlocked",
        stats.unlocked_count(),
        all_achievements().len()
    );
    if let (Some(start), Some(current)) =
        (profile.starting_weight_kg, profile.current_weight_kg())
    {
        println!("  Weight:    {current:.1} kg (started at {start:.1} kg)");
    }

    Ok(())
}
