//! Weight command implementation

use anyhow::Result;

use workhome::store::ProfileStore;

use super::parse_time;

/// Record a weigh-in for a user
pub fn weight_command(store: &ProfileStore, user: &str, kg: f64, at: Option<&str>) -> Result<()> {
    let recorded_at = parse_time(at)?;

    let (starting, lost) = store.update(user, |profile| {
        profile.record_weight(kg, recorded_at)?;
        Ok((profile.starting_weight_kg, profile.weight_lost_kg()))
    })?;

    println!("Recorded {kg:.1} kg for {user}");
    if let (Some(start), Some(lost)) = (starting, lost) {
        println!("  Starting weight {start:.1} kg, {lost} kg lost so far");
    }
    Ok(())
}
