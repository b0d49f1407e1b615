use serde::{Deserialize, Serialize};

use crate::calendar::WeekKey;
use crate::models::WorkoutRecord;

/// Summary of all completed runs in one ISO week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekStats {
  pub week_key: WeekKey,

  /// Total distance, one decimal
  pub distance_km: f64,

  /// Mean of per-run paces that pass the sanity bound
  pub avg_pace_min_per_km: Option<f64>,

  /// Mean over runs that recorded a heart rate, rounded
  pub avg_heart_rate: Option<u32>,

  /// Total duration, one decimal
  pub duration_hours: f64,

  pub workout_count: usize,
}

/// Totals over every completed run, independent of weeks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AllTimeStats {
  /// Rounded to whole kilometers
  pub distance_km: u64,
  /// Rounded to whole hours
  pub hours: u64,
  pub runs: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsReport {
  /// Newest week first
  pub week_stats: Vec<WeekStats>,
  pub all_time: AllTimeStats,
}

/// Everything the dashboard screens need from one load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
  pub week_stats: Vec<WeekStats>,
  pub all_time: AllTimeStats,
  pub current_week: Option<WeekStats>,
  pub upcoming_runs: Vec<WorkoutRecord>,
}
