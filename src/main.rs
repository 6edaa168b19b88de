// Calendar Layout command line
// Reads events as JSON and prints their computed placements

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;

use calendar_layout::models::layout::{MonthLayout, WindowLayout};
use calendar_layout::models::settings::LayoutSettings;
use calendar_layout::models::ui::ViewType;
use calendar_layout::services::event_source::{load_events, validation_report};
use calendar_layout::services::filter::filter_events_by_category;
use calendar_layout::services::layout::{layout_month, layout_window, VisibleWindow};
use calendar_layout::services::settings::SettingsService;
use calendar_layout::utils::time::generate_time_slots;

#[derive(Parser)]
#[command(name = "calendar-layout")]
#[command(about = "Compute day, week and month placements for calendar events")]
struct Cli {
    /// Settings file (defaults to config.toml in the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out events for a view
    Layout {
        /// JSON file containing an array of events
        #[arg(short, long)]
        events: PathBuf,

        /// View to lay out (day, work-week, week, days, month)
        #[arg(short, long)]
        view: Option<ViewType>,

        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Day count for the "days" view
        #[arg(long)]
        days: Option<usize>,

        /// Vertical units per hour
        #[arg(long)]
        hour_height: Option<f64>,

        /// Only lay out events in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Print the hourly grid markers
    Slots {
        #[arg(long)]
        start_hour: Option<u32>,

        #[arg(long)]
        end_hour: Option<u32>,
    },
    /// Print the resolved settings and where they come from
    Config,
}

#[derive(Serialize)]
#[serde(untagged)]
enum ViewLayout<'a> {
    Grid(WindowLayout<'a>),
    Month(MonthLayout<'a>),
}

#[derive(Serialize)]
struct LayoutOutput<'a> {
    view: ViewType,
    date: NaiveDate,
    layout: ViewLayout<'a>,
}

#[derive(Serialize)]
struct ConfigOutput<'a> {
    path: String,
    exists: bool,
    settings: &'a LayoutSettings,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    let service = match cli.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_default_location()?,
    };
    log::info!("Using settings from {}", service.path().display());

    let mut settings = service.get()?;

    match cli.command {
        Commands::Layout {
            events,
            view,
            date,
            days,
            hour_height,
            category,
        } => {
            if let Some(days) = days {
                settings.days_view_count = days;
            }
            if let Some(hour_height) = hour_height {
                settings.hour_height = hour_height;
            }
            if let Err(e) = settings.validate() {
                bail!("Invalid layout options: {}", e);
            }

            let view = view.unwrap_or(settings.default_view);
            let date = date.unwrap_or_else(|| Local::now().date_naive());

            let events = load_events(&events)?;
            for (id, err) in validation_report(&events) {
                log::warn!("Event {} is malformed: {}", id, err);
            }
            let events = filter_events_by_category(&events, category.as_deref());

            let layout = match view {
                ViewType::Month => ViewLayout::Month(layout_month(
                    events.iter().copied(),
                    date,
                    settings.first_day_of_week,
                )),
                _ => {
                    let window = VisibleWindow::for_view(view, date, &settings);
                    ViewLayout::Grid(layout_window(
                        events.iter().copied(),
                        &window.days,
                        settings.hour_height,
                    ))
                }
            };

            print_json(&LayoutOutput { view, date, layout })?;
        }
        Commands::Slots {
            start_hour,
            end_hour,
        } => {
            let start = start_hour.unwrap_or(settings.start_hour);
            let end = end_hour.unwrap_or(settings.end_hour);
            if start > 23 || end > 23 {
                bail!("Hours must be between 0 and 23");
            }
            print_json(&generate_time_slots(start, end))?;
        }
        Commands::Config => {
            print_json(&ConfigOutput {
                path: service.path().display().to_string(),
                exists: service.path().exists(),
                settings: &settings,
            })?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
