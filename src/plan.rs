//! Plan view: what's coming up and what's already behind us
//!
//! `today` is always passed in so callers control the clock.

use chrono::{Days, NaiveDate};
use std::cmp::Ordering;

use crate::classify::Classifier;
use crate::models::WorkoutRecord;

pub const DEFAULT_PLAN_HORIZON_DAYS: i64 = 7;

/// Total order used for every list this module returns
fn by_day_then_label(a: &WorkoutRecord, b: &WorkoutRecord) -> Ordering {
  a.day
    .cmp(&b.day)
    .then_with(|| a.workout_type.cmp(&b.workout_type))
    .then_with(|| a.title.cmp(&b.title))
}

/// Runs scheduled from `today` through `today + horizon_days`, soonest first.
///
/// Completed and planned runs both count; the plan classifier only decides
/// what is a run.
pub fn upcoming_runs<'a>(
  records: &'a [WorkoutRecord],
  today: NaiveDate,
  horizon_days: i64,
  classifier: &Classifier,
) -> Vec<&'a WorkoutRecord> {
  // Horizons past the calendar's end run to the last representable day
  let last_day = today
    .checked_add_days(Days::new(horizon_days.max(0) as u64))
    .unwrap_or(NaiveDate::MAX);

  let mut upcoming: Vec<&WorkoutRecord> = records
    .iter()
    .filter(|w| w.day >= today && w.day <= last_day)
    .filter(|w| classifier.is_run_type(&w.workout_type))
    .collect();

  upcoming.sort_by(|a, b| by_day_then_label(a, b));
  upcoming
}

/// Runs with nothing recorded yet, soonest first
pub fn planned_runs<'a>(
  records: &'a [WorkoutRecord],
  classifier: &Classifier,
) -> Vec<&'a WorkoutRecord> {
  let mut planned: Vec<&WorkoutRecord> = records
    .iter()
    .filter(|w| classifier.is_planned_run(w))
    .collect();
  planned.sort_by(|a, b| by_day_then_label(a, b));
  planned
}

/// Every workout on or after `today`, soonest first
pub fn future_workouts(records: &[WorkoutRecord], today: NaiveDate) -> Vec<&WorkoutRecord> {
  let mut future: Vec<&WorkoutRecord> = records.iter().filter(|w| w.day >= today).collect();
  future.sort_by(|a, b| by_day_then_label(a, b));
  future
}

/// Every workout before `today`, most recent first
pub fn past_workouts(records: &[WorkoutRecord], today: NaiveDate) -> Vec<&WorkoutRecord> {
  let mut past: Vec<&WorkoutRecord> = records.iter().filter(|w| w.day < today).collect();
  past.sort_by(|a, b| by_day_then_label(b, a));
  past
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
