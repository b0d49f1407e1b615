//! Athlete dashboard core
//!
//! Exported workout CSVs go through parse -> normalize -> classify ->
//! ISO-week grouping -> statistics. Everything below `sources` is pure and
//! recomputed from scratch on each load.

pub mod analysis;
pub mod browse;
pub mod calendar;
pub mod classify;
pub mod commands;
pub mod config;
pub mod format;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod plan;
pub mod sources;
pub mod state;

#[cfg(test)]
mod test_utils;

use chrono::NaiveDate;

use analysis::{current_week_stats, weekly_stats};
use classify::Classifier;
use models::{AllTimeStats, Dashboard, RawRow, WorkoutRecord};

/// Merge several CSV exports into one record set. Rows from all texts are
/// concatenated before normalization; rows without a date are dropped.
pub fn records_from_texts<S: AsRef<str>>(texts: &[S]) -> Vec<WorkoutRecord> {
  let rows: Vec<RawRow> = texts
    .iter()
    .flat_map(|text| parser::parse_csv(text.as_ref()))
    .collect();

  let records = normalize::normalize_rows(&rows);
  log::info!("Normalized {} workouts from {} source(s)", records.len(), texts.len());
  records
}

/// Everything the dashboard screens show, computed in one pass
pub fn build_dashboard(
  records: &[WorkoutRecord],
  today: NaiveDate,
  horizon_days: i64,
) -> Dashboard {
  let stats = Classifier::for_aggregation();
  let plan = Classifier::for_plan();

  Dashboard {
    week_stats: weekly_stats(records, &stats),
    all_time: AllTimeStats::compute(records, &stats),
    current_week: current_week_stats(records, today, &stats),
    upcoming_runs: plan::upcoming_runs(records, today, horizon_days, &plan)
      .into_iter()
      .cloned()
      .collect(),
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
