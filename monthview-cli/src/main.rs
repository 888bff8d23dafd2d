mod commands;
mod config;
mod load;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use monthview_core::cursor::DEFAULT_TIMEZONE;
use monthview_core::{MonthViewParams, WeekStart, YearMonth};

use crate::config::CliConfig;

/// Years accepted from the command line; anything else falls back to the
/// current month (the core itself allows 1900-9999).
const UI_YEAR_MIN: i32 = 2000;
const UI_YEAR_MAX: i32 = 3000;

#[derive(Parser)]
#[command(name = "monthview")]
#[command(about = "Render a month calendar from local event files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the month grid
    Show {
        /// Month to show (YYYY-MM), defaults to the current month
        month: Option<String>,

        /// Event file to load (.json array or .ics); repeatable
        #[arg(short, long)]
        events: Vec<PathBuf>,

        /// Locale for labels, e.g. "de" or "fr-CH"
        #[arg(short, long)]
        locale: Option<String>,

        /// Start weeks on Sunday instead of Monday
        #[arg(long)]
        sunday_start: bool,

        /// IANA timezone for bucketing (defaults to the system zone)
        #[arg(short, long)]
        timezone: Option<String>,

        /// Events shown per day before the "+N more" indicator
        #[arg(long, default_value_t = 3)]
        max_per_day: usize,

        /// Emit the assembled view as JSON instead of rendering
        #[arg(long)]
        json: bool,
    },
    /// List the month's events grouped by day
    List {
        /// Month to list (YYYY-MM), defaults to the current month
        month: Option<String>,

        /// Event file to load (.json array or .ics); repeatable
        #[arg(short, long)]
        events: Vec<PathBuf>,

        /// IANA timezone for bucketing (defaults to the system zone)
        #[arg(short, long)]
        timezone: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load()?;

    match cli.command {
        Commands::Show {
            month,
            events,
            locale,
            sunday_start,
            timezone,
            max_per_day,
            json,
        } => {
            let params = build_params(&config, month, locale, sunday_start, timezone.as_deref())?;
            let events = load::load_events(config.event_files(&events), params.timezone)?;
            commands::show::run(&params, &events, max_per_day, json)
        }
        Commands::List {
            month,
            events,
            timezone,
        } => {
            let params = build_params(&config, month, None, false, timezone.as_deref())?;
            let events = load::load_events(config.event_files(&events), params.timezone)?;
            commands::list::run(&params, &events)
        }
    }
}

fn build_params(
    config: &CliConfig,
    month: Option<String>,
    locale: Option<String>,
    sunday_start: bool,
    timezone: Option<&str>,
) -> Result<MonthViewParams> {
    let week_start = if sunday_start {
        WeekStart::Sunday
    } else {
        config.week_start()
    };

    Ok(MonthViewParams {
        cursor: sanitize_month(month),
        timezone: resolve_timezone(timezone, config)?,
        locale: locale
            .or_else(|| config.locale.clone())
            .unwrap_or_else(|| "en".to_string()),
        week_start,
        now: Utc::now(),
    })
}

/// Drop month designators outside the UI year range so they fall back to the
/// current month, matching the core's degrade-instead-of-fail policy.
fn sanitize_month(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    match raw.parse::<YearMonth>() {
        Ok(ym) if (UI_YEAR_MIN..=UI_YEAR_MAX).contains(&ym.year) => Some(raw),
        _ => None,
    }
}

fn resolve_timezone(flag: Option<&str>, config: &CliConfig) -> Result<Tz> {
    if let Some(name) = flag.or(config.timezone.as_deref()) {
        return name
            .parse()
            .map_err(|_| anyhow::anyhow!("Unknown timezone '{}'", name));
    }

    Ok(iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse().ok())
        .unwrap_or(DEFAULT_TIMEZONE))
}
