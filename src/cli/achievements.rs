//! Achievements command implementation

use anyhow::{Context, Result, anyhow};

use workhome::UserStats;
use workhome::progress::{
    Achievement, AchievementCategory, achievement_progress, all_achievements, by_category,
};
use workhome::store::ProfileStore;

/// List the catalog with badge state for a user (or all locked if none)
pub fn achievements_command(
    store: &ProfileStore,
    user: Option<&str>,
    category: Option<&str>,
    steps: Option<u32>,
    json: bool,
) -> Result<()> {
    let category = category
        .map(|c| {
            AchievementCategory::from_str(c).ok_or_else(|| {
                anyhow!("Unknown category '{c}' (expected streak, workout, weight or steps)")
            })
        })
        .transpose()?;

    let (stats, external) = match user {
        Some(user) => {
            let profile = store.load(user)?;
            let external = profile.external_progress(steps);
            (profile.stats, external)
        }
        None => (UserStats::default(), Default::default()),
    };

    let badges = achievement_progress(&stats, &external, category);

    if json {
        let out = serde_json::to_string_pretty(&badges)
            .with_context(|| "Failed to serialize achievements")?;
        println!("{out}");
        return Ok(());
    }

    let mut current_category = None;
    for badge in &badges {
        let a = badge.achievement;
        if current_category != Some(a.category) {
            current_category = Some(a.category);
            println!("\n{} Achievements", a.category.label());
        }
        println!(
            "  {:<16} {:<8} +{:<5} {}",
            a.title,
            badge.state.label(),
            a.points,
            a.description
        );
    }

    println!();
    for category in AchievementCategory::all() {
        let in_category = by_category(*category);
        let done = in_category
            .iter()
            .filter(|a| stats.is_unlocked(a.id.as_str()))
            .count();
        println!("  {:<8} {}/{}", category.label(), done, in_category.len());
    }

    let earned: u64 = all_achievements()
        .iter()
        .filter(|a| stats.is_unlocked(a.id.as_str()))
        .map(|a| u64::from(a.points))
        .sum();
    println!(
        "\n{} of {} unlocked, {} of {} achievement points",
        stats.unlocked_count(),
        Achievement::total_count(),
        earned,
        Achievement::total_points()
    );
    Ok(())
}
