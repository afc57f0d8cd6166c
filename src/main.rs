use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use workhome::store::ProfileStore;
use workhome::{EngineConfig, ProgressionEngine};

mod cli;

#[derive(Parser)]
#[command(name = "workhome")]
#[command(about = "WorkHome - workout streaks, achievements and levels")]
#[command(version)]
struct Cli {
    /// Directory holding user profiles (defaults to ~/.workhome/profiles)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Path to the config file (defaults to ~/.workhome/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a completed workout and show what it earned
    Record {
        /// User id
        #[arg(short, long)]
        user: String,

        /// Workout type, e.g. "Full Body" or "Cardio HIIT"
        #[arg(short = 't', long = "type", default_value = "Full Body")]
        workout_type: String,

        /// Duration in minutes (defaults to the preset's length)
        #[arg(long)]
        duration: Option<i32>,

        /// Calories burned (defaults to the preset's estimate)
        #[arg(long)]
        calories: Option<i32>,

        /// Number of exercises completed
        #[arg(long)]
        exercises: Option<i32>,

        /// Completion time as RFC 3339 (defaults to now)
        #[arg(long)]
        at: Option<String>,

        /// Steps walked today, for step achievements
        #[arg(long)]
        steps: Option<u32>,
    },

    /// Record a weigh-in
    Weight {
        #[arg(short, long)]
        user: String,

        /// Weight in kilograms
        kg: f64,

        /// Time of the weigh-in as RFC 3339 (defaults to now)
        #[arg(long)]
        at: Option<String>,
    },

    /// Show level, streak and totals
    Status {
        #[arg(short, long)]
        user: String,
    },

    /// List achievements with their unlock state
    Achievements {
        #[arg(short, long)]
        user: Option<String>,

        /// Only show one category: streak, workout, weight or steps
        #[arg(long)]
        category: Option<String>,

        /// Steps walked today, for step badge progress
        #[arg(long)]
        steps: Option<u32>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Init { force } = cli.command {
        return cli::init::init_command(cli.config, force);
    }

    let config = EngineConfig::load(cli.config.as_deref())?;
    let engine = ProgressionEngine::new(config);
    let store = cli
        .data_dir
        .map(ProfileStore::new)
        .unwrap_or_else(ProfileStore::open_default);

    match cli.command {
        Commands::Record {
            user,
            workout_type,
            duration,
            calories,
            exercises,
            at,
            steps,
        } => {
            let args = cli::record::RecordArgs {
                user,
                workout_type,
                duration,
                calories,
                exercises,
                at,
                steps,
            };
            cli::record::record_command(&store, &engine, args)?;
        }
        Commands::Weight { user, kg, at } => {
            cli::weight::weight_command(&store, &user, kg, at.as_deref())?;
        }
        Commands::Status { user } => {
            cli::status::status_command(&store, &engine, &user)?;
        }
        Commands::Achievements {
            user,
            category,
            steps,
            json,
        } => {
            cli::achievements::achievements_command(
                &store,
                user.as_deref(),
                category.as_deref(),
                steps,
                json,
            )?;
        }
        Commands::Init { .. } => {}
    }

    Ok(())
}
