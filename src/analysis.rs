//! Deterministic analysis layer for workout statistics
//!
//! Groups normalized workouts by ISO week and reduces each week's completed
//! runs into a `WeekStats`. Weeks without a completed run are left out
//! entirely. Sums are taken over sorted values so the output does not depend
//! on the order the sources were merged in.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::calendar::WeekKey;
use crate::classify::Classifier;
use crate::models::{AllTimeStats, StatsReport, WeekStats, WorkoutRecord};

/// ---------------------------------------------------------------------------
/// Grouping
/// ---------------------------------------------------------------------------

/// Every record lands in exactly one group, keyed by its ISO week
pub fn group_by_week(records: &[WorkoutRecord]) -> BTreeMap<WeekKey, Vec<&WorkoutRecord>> {
  let mut groups: BTreeMap<WeekKey, Vec<&WorkoutRecord>> = BTreeMap::new();

  for record in records {
    groups
      .entry(WeekKey::from_date(record.day))
      .or_default()
      .push(record);
  }

  groups
}

/// ---------------------------------------------------------------------------
/// Rounding Helpers
/// ---------------------------------------------------------------------------

/// Order-independent float sum
fn canonical_sum(mut values: Vec<f64>) -> f64 {
  values.sort_by(f64::total_cmp);
  values.into_iter().sum()
}

fn canonical_mean(values: Vec<f64>) -> Option<f64> {
  if values.is_empty() {
    return None;
  }
  let count = values.len() as f64;
  Some(canonical_sum(values) / count)
}

fn round_to_tenth(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}

fn meters_to_km_tenth(meters: f64) -> f64 {
  (meters / 100.0).round() / 10.0
}

/// ---------------------------------------------------------------------------
/// Weekly Stats
/// ---------------------------------------------------------------------------

impl WeekStats {
  /// Reduce one week's workouts. `None` when none of them is a completed run.
  pub fn compute(
    week_key: WeekKey,
    workouts: &[&WorkoutRecord],
    classifier: &Classifier,
  ) -> Option<Self> {
    let completed: Vec<&WorkoutRecord> = workouts
      .iter()
      .copied()
      .filter(|w| classifier.is_completed_run(w))
      .collect();

    if completed.is_empty() {
      return None;
    }

    let distance_meters = canonical_sum(completed.iter().map(|w| w.distance_meters).collect());
    let duration_hours = canonical_sum(completed.iter().map(|w| w.duration_hours).collect());

    let avg_heart_rate = canonical_mean(
      completed
        .iter()
        .filter_map(|w| w.heart_rate_average)
        .filter(|hr| *hr > 0.0)
        .collect(),
    )
    .map(|hr| hr.round() as u32);

    let avg_pace_min_per_km =
      canonical_mean(completed.iter().filter_map(|w| w.plausible_pace()).collect());

    Some(Self {
      week_key,
      distance_km: meters_to_km_tenth(distance_meters),
      avg_pace_min_per_km,
      avg_heart_rate,
      duration_hours: round_to_tenth(duration_hours),
      workout_count: completed.len(),
    })
  }
}

/// Stats for every week with at least one completed run, newest first
pub fn weekly_stats(records: &[WorkoutRecord], classifier: &Classifier) -> Vec<WeekStats> {
  group_by_week(records)
    .into_iter()
    .rev()
    .filter_map(|(key, workouts)| WeekStats::compute(key, &workouts, classifier))
    .collect()
}

/// Stats for the week containing `today`, if it has a completed run
pub fn current_week_stats(
  records: &[WorkoutRecord],
  today: NaiveDate,
  classifier: &Classifier,
) -> Option<WeekStats> {
  let key = WeekKey::from_date(today);
  let workouts: Vec<&WorkoutRecord> = records.iter().filter(|w| key.contains(w.day)).collect();
  WeekStats::compute(key, &workouts, classifier)
}

/// ---------------------------------------------------------------------------
/// All-Time Stats
/// ---------------------------------------------------------------------------

impl AllTimeStats {
  pub fn compute(records: &[WorkoutRecord], classifier: &Classifier) -> Self {
    let completed: Vec<&WorkoutRecord> = records
      .iter()
      .filter(|w| classifier.is_completed_run(w))
      .collect();

    let distance_km = canonical_sum(completed.iter().map(|w| w.distance_km()).collect());
    let hours = canonical_sum(completed.iter().map(|w| w.duration_hours).collect());

    Self {
      distance_km: distance_km.round() as u64,
      hours: hours.round() as u64,
      runs: completed.len(),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Full Report
/// ---------------------------------------------------------------------------

/// Weekly and all-time stats with the statistics exclusion list
pub fn aggregate(records: &[WorkoutRecord]) -> StatsReport {
  aggregate_with(records, &Classifier::for_aggregation())
}

pub fn aggregate_with(records: &[WorkoutRecord], classifier: &Classifier) -> StatsReport {
  StatsReport {
    week_stats: weekly_stats(records, classifier),
    all_time: AllTimeStats::compute(records, classifier),
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
