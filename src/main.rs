use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;

use athlete_board::browse::{SortOrder, WorkoutCategory};
use athlete_board::classify::Classifier;
use athlete_board::commands::{self, plan, stats};
use athlete_board::config::DashboardConfig;
use athlete_board::format::{format_duration, format_pace, format_workout_date};
use athlete_board::models::{AllTimeStats, WeekStats, WorkoutRecord};
use athlete_board::state::{initialize_state, AppState};

#[derive(Parser)]
#[command(
  name = "athlete-board",
  version,
  about = "Weekly running stats and training plan from exported workout CSVs"
)]
struct Cli {
  /// Directory or http(s) URL the sources resolve against
  #[arg(long, global = true)]
  data: Option<String>,

  /// Source name, repeat for several (replaces the configured list)
  #[arg(long = "source", global = true)]
  sources: Vec<String>,

  /// Date to treat as today (YYYY-MM-DD)
  #[arg(long, global = true)]
  today: Option<NaiveDate>,

  /// Print JSON instead of text
  #[arg(long, global = true)]
  json: bool,

  /// -v for info, -vv for debug
  #[arg(short, long, action = ArgAction::Count, global = true)]
  verbose: u8,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Weekly and all-time stats
  Stats,
  /// Stats for the current week
  Current,
  /// Upcoming runs
  Plan {
    /// Days ahead to include
    #[arg(long)]
    days: Option<i64>,
  },
  /// Browse and search all workouts
  Workouts {
    /// all, long, tempo, easy or speed
    #[arg(long, default_value = "all")]
    category: WorkoutCategory,

    /// Title, type or date text; a number matches distances
    #[arg(short, long, default_value = "")]
    query: String,

    /// date or distance
    #[arg(long, default_value = "date")]
    sort: SortOrder,
  },
  /// Everything at once
  Dashboard,
}

fn init_logging(verbose: u8) {
  let level = match verbose {
    0 => "warn",
    1 => "info",
    _ => "debug",
  };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(cli: &Cli) -> Result<DashboardConfig, String> {
  let mut config =
    DashboardConfig::from_env().map_err(|e| format!("Failed to load config: {}", e))?;

  if let Some(data) = &cli.data {
    config.data = data.clone();
  }
  if !cli.sources.is_empty() {
    config.sources = cli.sources.clone();
  }
  if let Command::Plan { days: Some(days) } = cli.command {
    if days < 0 {
      return Err(format!("Invalid plan horizon: {}", days));
    }
    config.plan_horizon_days = days;
  }

  Ok(config)
}

/// ---------------------------------------------------------------------------
/// Output
/// ---------------------------------------------------------------------------

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
  let json = serde_json::to_string_pretty(value)
    .map_err(|e| format!("Failed to serialize output: {}", e))?;
  println!("{}", json);
  Ok(())
}

fn heart_rate_label(hr: Option<u32>) -> String {
  hr.map(|hr| hr.to_string()).unwrap_or_else(|| "--".to_string())
}

fn print_weeks(weeks: &[WeekStats]) {
  if weeks.is_empty() {
    println!("No completed runs");
    return;
  }

  println!("{:<8} {:>9} {:>7} {:>4} {:>6} {:>5}", "Week", "Distance", "Pace", "HR", "Time", "Runs");
  for week in weeks {
    println!(
      "{:<8} {:>6.1} km {:>7} {:>4} {:>6} {:>5}",
      week.week_key.to_string(),
      week.distance_km,
      format_pace(week.avg_pace_min_per_km),
      heart_rate_label(week.avg_heart_rate),
      format_duration(week.duration_hours),
      week.workout_count
    );
  }
}

fn print_all_time(all_time: &AllTimeStats) {
  println!(
    "All time: {} km · {} runs · {} h",
    all_time.distance_km, all_time.runs, all_time.hours
  );
}

fn print_current(today: NaiveDate, week: Option<&WeekStats>) {
  match week {
    Some(week) => println!(
      "This week ({}): {:.1} km · {} runs · {} /km · {}",
      week.week_key,
      week.distance_km,
      week.workout_count,
      format_pace(week.avg_pace_min_per_km),
      format_duration(week.duration_hours)
    ),
    None => println!("No runs yet in the week of {}", today),
  }
}

fn print_workouts(workouts: &[WorkoutRecord]) {
  if workouts.is_empty() {
    println!("No workouts");
    return;
  }

  let classifier = Classifier::for_plan();
  for workout in workouts {
    let class = classifier.classify(workout);
    let status = if class.is_run() { class.as_str() } else { "" };
    println!(
      "{:<14} {:<28} {:>6.1} km {:>6} {:>6} {}",
      format_workout_date(workout.day),
      workout.display_title(),
      workout.distance_km(),
      format_duration(workout.display_duration_hours()),
      format_pace(workout.plausible_pace()),
      status
    );
  }
}

/// ---------------------------------------------------------------------------
/// Entry Point
/// ---------------------------------------------------------------------------

async fn run(cli: Cli, state: AppState, today: NaiveDate) -> Result<(), String> {
  match cli.command {
    Command::Stats => {
      let report = stats::get_stats_report(&state).await?;
      if cli.json {
        return print_json(&report);
      }
      print_weeks(&report.week_stats);
      println!();
      print_all_time(&report.all_time);
    }
    Command::Current => {
      let week = stats::get_current_week_stats(&state, today).await?;
      if cli.json {
        return print_json(&week);
      }
      print_current(today, week.as_ref());
    }
    Command::Plan { .. } => {
      let upcoming = plan::get_upcoming_runs(&state, today).await?;
      if cli.json {
        return print_json(&upcoming);
      }
      print_workouts(&upcoming);
    }
    Command::Workouts { category, query, sort } => {
      let unfiltered =
        category == WorkoutCategory::All && query.trim().is_empty() && sort == SortOrder::Date;
      let results = if unfiltered {
        commands::get_workouts(&state).await?
      } else {
        plan::search_workouts(&state, category, query, sort).await?
      };
      if cli.json {
        return print_json(&results);
      }
      if category != WorkoutCategory::All {
        println!("Category: {}", category.as_str());
      }
      print_workouts(&results);
    }
    Command::Dashboard => {
      let dashboard = stats::get_dashboard(&state, today).await?;
      if cli.json {
        return print_json(&dashboard);
      }
      print_current(today, dashboard.current_week.as_ref());
      print_all_time(&dashboard.all_time);
      println!();
      print_weeks(&dashboard.week_stats);
      println!();
      println!("Next {} days:", state.config.plan_horizon_days);
      print_workouts(&dashboard.upcoming_runs);
    }
  }

  Ok(())
}

#[tokio::main]
async fn main() {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let cli = Cli::parse();
  init_logging(cli.verbose);

  let today = cli.today.unwrap_or_else(|| chrono::Local::now().date_naive());

  let result = match load_config(&cli) {
    Ok(config) => match initialize_state(config) {
      Ok(state) => run(cli, state, today).await,
      Err(e) => Err(format!("Failed to initialize: {}", e)),
    },
    Err(e) => Err(e),
  };

  if let Err(e) = result {
    eprintln!("{}", e);
    std::process::exit(1);
  }
}
