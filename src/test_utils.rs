//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Mock workout factories
//! - Sample CSV exports
//! - Helper assertions

use chrono::NaiveDate;

use crate::models::WorkoutRecord;
use crate::normalize::parse_day;

/// ---------------------------------------------------------------------------
/// Sample Exports
/// ---------------------------------------------------------------------------

pub const SAMPLE_HEADER: &str = "\"Title\",\"WorkoutType\",\"WorkoutDescription\",\"PlannedDuration\",\"PlannedDistanceInMeters\",\"WorkoutDay\",\"CoachComments\",\"DistanceInMeters\",\"PowerAverage\",\"TimeTotalInHours\",\"VelocityAverage\",\"HeartRateAverage\",\"CadenceAverage\",\"Rpe\",\"AthleteComments\"";

/// Two weeks of training plus a day off and a planned run.
/// Week 2025-49: two completed runs. Week 2025-50: one run and a day off.
/// Week 2026-02: one planned run.
pub fn sample_export_2025() -> String {
  [
    SAMPLE_HEADER,
    "\"Easy Run\",\"Run\",\"Zone 2, keep it chatty\",\"0.5\",\"5000\",\"2025-12-03\",\"\",\"5000\",\"\",\"0.42\",\"3.3\",\"148\",\"170\",\"4\",\"Good\"",
    "\"Tempo\",\"Run\",\"\",\"1\",\"10000\",\"2025-12-06\",\"Nice work\",\"10000\",\"\",\"0.8\",\"3.5\",\"160\",\"176\",\"7\",\"\"",
    "\"Rest\",\"Day Off\",\"\",\"\",\"\",\"2025-12-08\",\"\",\"0\",\"\",\"0\",\"\",\"\",\"\",\"\",\"\"",
    "\"Long Run\",\"Run\",\"\",\"2\",\"20000\",\"2025-12-13\",\"\",\"18500\",\"\",\"1.9\",\"2.7\",\"0\",\"\",\"\",\"\"",
  ]
  .join("\n")
}

pub fn sample_export_2026() -> String {
  [
    SAMPLE_HEADER,
    "\"Intervals 6x800\",\"Run\",\"\",\"1\",\"\",\"2026-01-08\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\"",
    "\"Gym\",\"Strength\",\"\",\"1\",\"\",\"2026-01-09\",\"\",\"\",\"\",\"0.75\",\"\",\"120\",\"\",\"\",\"\"",
  ]
  .join("\n")
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Create a mock workout with distance (m) and duration (h)
pub fn mock_workout(
  day: &str,
  workout_type: &str,
  distance_meters: f64,
  hours: f64,
) -> WorkoutRecord {
  let day = parse_day(day).expect("valid test date");
  let mut record = WorkoutRecord::new(day, workout_type);
  record.distance_meters = distance_meters;
  record.duration_hours = hours;
  record
}

/// Create a completed run with velocity (m/s) and heart rate
pub fn mock_run(
  day: &str,
  distance_meters: f64,
  hours: f64,
  velocity: Option<f64>,
  heart_rate: Option<f64>,
) -> WorkoutRecord {
  let mut record = mock_workout(day, "Run", distance_meters, hours);
  record.velocity_average = velocity;
  record.heart_rate_average = heart_rate;
  record
}

/// Create a titled workout
pub fn mock_titled(
  day: &str,
  workout_type: &str,
  title: &str,
  distance_meters: f64,
) -> WorkoutRecord {
  let mut record = mock_workout(day, workout_type, distance_meters, distance_meters / 10000.0);
  record.title = Some(title.to_string());
  record
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parser::parse_csv;

  #[test]
  fn test_sample_exports_parse() {
    assert_eq!(parse_csv(&sample_export_2025()).len(), 4);
    assert_eq!(parse_csv(&sample_export_2026()).len(), 2);
  }

  #[test]
  fn test_mock_factories_create_valid_data() {
    let run = mock_run("2025-12-03", 5000.0, 0.42, Some(3.3), Some(150.0));
    assert_eq!(run.workout_type, "Run");
    assert_eq!(run.day, ymd(2025, 12, 3));
    assert_eq!(run.heart_rate_average, Some(150.0));

    let titled = mock_titled("2025-12-03", "Run", "Long Run", 20000.0);
    assert_eq!(titled.title.as_deref(), Some("Long Run"));
    assert_eq!(titled.duration_hours, 2.0);
  }
}
