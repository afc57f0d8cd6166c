//! CLI command implementations

pub mod achievements;
pub mod init;
pub mod record;
pub mod status;
pub mod weight;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local};

/// Parse an RFC 3339 timestamp, or take the local clock when absent
pub fn parse_time(at: Option<&str>) -> Result<DateTime<FixedOffset>> {
    match at {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("Invalid timestamp '{s}', expected RFC 3339")),
        None => Ok(Local::now().fixed_offset()),
    }
}
