//! Init command implementation

use anyhow::{Context, Result, bail};
use std::path::PathBuf;

use workhome::EngineConfig;

/// Default configuration content for workhome init
pub const DEFAULT_CONFIG: &str = r#"# WorkHome progression engine configuration
#
# completion_bonus - points awarded for every completed workout (default: 50)
# night_owl_hour   - local hour from which a workout unlocks "Night Owl" (default: 21)
# points_per_level - points needed per level (default: 1000)

completion_bonus = 50
night_owl_hour = 21
points_per_level = 1000
"#;

/// Write a default config file
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(EngineConfig::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    EngineConfig::write_template(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
    println!("Created: {}", config_path.display());

    Ok(())
}
