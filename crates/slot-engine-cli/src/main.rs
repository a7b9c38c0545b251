//! `slots` CLI: expand weekly availability into bookable slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Every slot over the default 14-day horizon, anchored at today
//! slots generate -r "Monday 09:00-12:00" -r "Thursday 14:00-17:00"
//!
//! # Pin the anchor day and print JSON
//! slots generate -r "Monday 09:00-12:00" --from 2026-03-15 --json
//!
//! # Calendar view: first 7 dates with availability
//! slots group -r "Monday 09:00-12:00" --days 7
//!
//! # Check a custom request
//! slots check --date 2026-03-16 --time 10:00 -r "Monday 09:00-12:00"
//!
//! # Show which entries were accepted and which were skipped
//! slots parse --config tutor.json
//! ```

use std::io;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use slot_engine::config::validate_horizon;
use slot_engine::{
    group_slots_by_date, is_time_available, parse_date_key, parse_request_time,
    AvailabilitySlot, EngineConfig, SlotQuery, WeeklyAvailability,
};
use tracing::{debug, Level};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Expand weekly tutor availability into bookable slots"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log skipped entries and resolved settings to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Where the availability strings and defaults come from.
#[derive(Args)]
struct Source {
    /// Recurrence string such as "Monday 09:00-17:00" (repeatable; replaces
    /// the config file's availability list)
    #[arg(short = 'r', long = "rule")]
    rules: Vec<String>,
    /// JSON config file with horizon_days, display_days and availability
    #[arg(short, long)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every bookable slot in the horizon
    Generate {
        #[command(flatten)]
        source: Source,
        /// Number of days to expand, starting at the anchor day
        #[arg(long)]
        horizon: Option<u32>,
        /// Anchor day (YYYY-MM-DD); defaults to today
        #[arg(long)]
        from: Option<String>,
        /// Print slots as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Group slots by date and show the first dates with availability
    Group {
        #[command(flatten)]
        source: Source,
        #[arg(long)]
        horizon: Option<u32>,
        #[arg(long)]
        from: Option<String>,
        /// Number of dates to show
        #[arg(long)]
        days: Option<usize>,
        /// Print the groups as a JSON object keyed by date
        #[arg(long)]
        json: bool,
    },
    /// Check whether a custom date and time fall inside availability
    Check {
        #[command(flatten)]
        source: Source,
        /// Requested date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Requested time (HH:MM)
        #[arg(long)]
        time: String,
    },
    /// Show accepted rules and skipped entries
    Parse {
        #[command(flatten)]
        source: Source,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            source,
            horizon,
            from,
            json,
        } => {
            let config = load_config(&source, horizon)?;
            let slots = run_query(&config, from.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&slots)?);
            } else if slots.is_empty() {
                println!("No slots available. Try a custom request.");
            } else {
                for slot in &slots {
                    println!(
                        "{} {}  {}  {}",
                        slot.date_key(),
                        slot.time_of_day,
                        slot.display_date,
                        slot.display_time
                    );
                }
            }
        }
        Commands::Group {
            source,
            horizon,
            from,
            days,
            json,
        } => {
            let config = load_config(&source, horizon)?;
            let slots = run_query(&config, from.as_deref())?;
            let groups = group_slots_by_date(&slots);
            let shown = groups.first_dates(days.unwrap_or(config.display_days));

            if json {
                let mut map = serde_json::Map::new();
                for (key, slots) in shown {
                    map.insert(key.to_string(), serde_json::to_value(slots)?);
                }
                println!("{}", serde_json::to_string_pretty(&map)?);
            } else if shown.is_empty() {
                println!("No slots available. Try a custom request.");
            } else {
                for (_, slots) in shown {
                    let times: Vec<&str> = slots.iter().map(|s| s.display_time.as_str()).collect();
                    println!("{}: {}", slots[0].display_date, times.join(", "));
                }
            }
        }
        Commands::Check { source, date, time } => {
            let config = load_config(&source, None)?;
            let date = parse_date_key(&date)?;
            parse_request_time(&time)?;
            let available = is_time_available(date, &time, &config.availability);
            println!("{}", if available { "available" } else { "unavailable" });
        }
        Commands::Parse { source, json } => {
            let config = load_config(&source, None)?;
            let table = WeeklyAvailability::parse(&config.availability);
            if json {
                let report = serde_json::json!({
                    "rules": table.rules().collect::<Vec<_>>(),
                    "skipped": table.skipped(),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for rule in table.rules() {
                    println!("ok    {}", rule);
                }
                for entry in table.skipped() {
                    println!("skip  [{}] {:?}: {}", entry.index, entry.input, entry.reason);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Resolve the config file (if any) and apply command-line overrides.
fn load_config(source: &Source, horizon: Option<u32>) -> Result<EngineConfig> {
    let mut config = match source.config.as_deref() {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => EngineConfig::default(),
    };

    if !source.rules.is_empty() {
        config.availability = source.rules.clone();
    }
    if let Some(days) = horizon {
        validate_horizon(days)?;
        config.horizon_days = days;
    }

    debug!(
        horizon_days = config.horizon_days,
        display_days = config.display_days,
        entries = config.availability.len(),
        "resolved settings"
    );
    Ok(config)
}

fn run_query(config: &EngineConfig, from: Option<&str>) -> Result<Vec<AvailabilitySlot>> {
    let query = match from {
        Some(day) => SlotQuery::new(parse_anchor(day)?),
        None => SlotQuery::today(),
    };
    let availability = WeeklyAvailability::parse(&config.availability);
    Ok(query.horizon_days(config.horizon_days).run(&availability))
}

fn parse_anchor(day: &str) -> Result<NaiveDate> {
    parse_date_key(day).context("Invalid --from date")
}
