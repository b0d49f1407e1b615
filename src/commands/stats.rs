//! Commands backing the stats and dashboard screens

use chrono::NaiveDate;

use crate::analysis::{current_week_stats, weekly_stats};
use crate::classify::Classifier;
use crate::commands::load_records;
use crate::models::{AllTimeStats, Dashboard, StatsReport, WeekStats};
use crate::state::AppState;

/// Get per-week stats, newest week first
pub async fn get_weekly_stats(state: &AppState) -> Result<Vec<WeekStats>, String> {
  let records = load_records(state).await?;
  Ok(weekly_stats(&records, &Classifier::for_aggregation()))
}

/// Get all-time distance, hours and run count
pub async fn get_all_time_stats(state: &AppState) -> Result<AllTimeStats, String> {
  let records = load_records(state).await?;
  Ok(AllTimeStats::compute(&records, &Classifier::for_aggregation()))
}

/// Get weekly and all-time stats from a single load
pub async fn get_stats_report(state: &AppState) -> Result<StatsReport, String> {
  let records = load_records(state).await?;
  Ok(crate::analysis::aggregate(&records))
}

/// Get stats for the week containing `today`
pub async fn get_current_week_stats(
  state: &AppState,
  today: NaiveDate,
) -> Result<Option<WeekStats>, String> {
  let records = load_records(state).await?;
  Ok(current_week_stats(&records, today, &Classifier::for_aggregation()))
}

/// Get everything the dashboard shows
pub async fn get_dashboard(state: &AppState, today: NaiveDate) -> Result<Dashboard, String> {
  let records = load_records(state).await?;
  Ok(crate::build_dashboard(&records, today, state.config.plan_horizon_days))
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
