//! Raw CSV rows -> typed workout records
//!
//! Numeric columns are parsed leniently (leading numeric prefix, 0 or
//! `None` on failure). Rows without a parseable `WorkoutDay` are dropped here
//! and never reach aggregation.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

use crate::models::{RawRow, WorkoutRecord};

/// ---------------------------------------------------------------------------
/// Column Names
/// ---------------------------------------------------------------------------

pub const COL_WORKOUT_DAY: &str = "WorkoutDay";
pub const COL_WORKOUT_TYPE: &str = "WorkoutType";
pub const COL_TITLE: &str = "Title";
pub const COL_DISTANCE: &str = "DistanceInMeters";
pub const COL_DURATION: &str = "TimeTotalInHours";
pub const COL_VELOCITY: &str = "VelocityAverage";
pub const COL_HEART_RATE: &str = "HeartRateAverage";
pub const COL_CADENCE: &str = "CadenceAverage";
pub const COL_RPE: &str = "Rpe";
pub const COL_PLANNED_DISTANCE: &str = "PlannedDistanceInMeters";
pub const COL_PLANNED_DURATION: &str = "PlannedDuration";
pub const COL_DESCRIPTION: &str = "WorkoutDescription";
pub const COL_COACH_COMMENTS: &str = "CoachComments";
pub const COL_ATHLETE_COMMENTS: &str = "AthleteComments";

const KNOWN_COLUMNS: [&str; 14] = [
  COL_WORKOUT_DAY,
  COL_WORKOUT_TYPE,
  COL_TITLE,
  COL_DISTANCE,
  COL_DURATION,
  COL_VELOCITY,
  COL_HEART_RATE,
  COL_CADENCE,
  COL_RPE,
  COL_PLANNED_DISTANCE,
  COL_PLANNED_DURATION,
  COL_DESCRIPTION,
  COL_COACH_COMMENTS,
  COL_ATHLETE_COMMENTS,
];

/// Paces at or above this are treated as GPS noise or walking breaks
pub const PACE_SANITY_LIMIT_MIN_PER_KM: f64 = 15.0;

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %B %Y", "%B %d, %Y"];

const DATETIME_FORMATS: [&str; 3] = [
  "%Y-%m-%dT%H:%M:%S%.f",
  "%Y-%m-%d %H:%M:%S%.f",
  "%Y-%m-%dT%H:%M",
];

/// ---------------------------------------------------------------------------
/// Field Parsing
/// ---------------------------------------------------------------------------

/// Parse a workout day. Accepts ISO dates, ISO datetimes (with or without
/// offset), slash dates and long-form "5 December 2025" dates.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }

  let parsed = DATE_FORMATS
    .iter()
    .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
    .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
    .or_else(|| {
      DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
    })?;

  // Week keys are rendered with four-digit years
  (1..=9999).contains(&parsed.year()).then_some(parsed)
}

/// Longest leading slice that looks like a decimal number
fn numeric_prefix(value: &str) -> &str {
  let bytes = value.as_bytes();
  let mut end = 0;
  let mut idx = 0;

  if idx < bytes.len() && (bytes[idx] == b'+' || bytes[idx] == b'-') {
    idx += 1;
  }

  let mut seen_digit = false;
  while idx < bytes.len() && bytes[idx].is_ascii_digit() {
    idx += 1;
    seen_digit = true;
    end = idx;
  }

  if idx < bytes.len() && bytes[idx] == b'.' {
    idx += 1;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
      idx += 1;
      seen_digit = true;
      end = idx;
    }
  }

  if !seen_digit {
    return "";
  }

  if idx < bytes.len() && (bytes[idx] == b'e' || bytes[idx] == b'E') {
    let mut exp = idx + 1;
    if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
      exp += 1;
    }
    let digits_start = exp;
    while exp < bytes.len() && bytes[exp].is_ascii_digit() {
      exp += 1;
    }
    if exp > digits_start {
      end = exp;
    }
  }

  &value[..end]
}

/// Parse a number the way spreadsheet exports need: trailing junk is
/// ignored, anything unparseable or non-finite is `None`.
pub fn parse_number(value: &str) -> Option<f64> {
  let value = value.trim();
  value
    .parse::<f64>()
    .ok()
    .filter(|v| v.is_finite())
    .or_else(|| numeric_prefix(value).parse::<f64>().ok())
    .filter(|v| v.is_finite())
}

/// Like `parse_number` but 0 on failure and never negative
pub fn parse_amount(value: &str) -> f64 {
  parse_number(value).unwrap_or(0.0).max(0.0)
}

fn parse_text(value: &str) -> Option<String> {
  let trimmed = value.trim();
  (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// ---------------------------------------------------------------------------
/// Pace
/// ---------------------------------------------------------------------------

/// m/s -> min/km. Non-positive velocity has no pace.
pub fn velocity_to_pace(velocity_ms: f64) -> Option<f64> {
  if !velocity_ms.is_finite() || velocity_ms <= 0.0 {
    return None;
  }
  let km_per_second = velocity_ms / 1000.0;
  let seconds_per_km = 1.0 / km_per_second;
  Some(seconds_per_km / 60.0)
}

/// Whether a pace is trusted for averaging
pub fn is_plausible_pace(pace_min_per_km: f64) -> bool {
  pace_min_per_km > 0.0 && pace_min_per_km < PACE_SANITY_LIMIT_MIN_PER_KM
}

/// ---------------------------------------------------------------------------
/// Row Normalization
/// ---------------------------------------------------------------------------

/// Convert one raw row, or `None` when it has no usable date
pub fn normalize_row(row: &RawRow) -> Option<WorkoutRecord> {
  let day = parse_day(row.get(COL_WORKOUT_DAY))?;

  let extra: BTreeMap<String, String> = row
    .iter()
    .filter(|(key, _)| !KNOWN_COLUMNS.contains(key))
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect();

  Some(WorkoutRecord {
    day,
    workout_type: row.get(COL_WORKOUT_TYPE).trim().to_string(),
    title: parse_text(row.get(COL_TITLE)),
    distance_meters: parse_amount(row.get(COL_DISTANCE)),
    duration_hours: parse_amount(row.get(COL_DURATION)),
    velocity_average: parse_number(row.get(COL_VELOCITY)),
    heart_rate_average: parse_number(row.get(COL_HEART_RATE)).filter(|hr| *hr > 0.0),
    cadence_average: parse_number(row.get(COL_CADENCE)),
    rpe: parse_number(row.get(COL_RPE)),
    planned_distance_meters: parse_number(row.get(COL_PLANNED_DISTANCE)),
    planned_duration_hours: parse_number(row.get(COL_PLANNED_DURATION)),
    description: parse_text(row.get(COL_DESCRIPTION)),
    coach_comments: parse_text(row.get(COL_COACH_COMMENTS)),
    athlete_comments: parse_text(row.get(COL_ATHLETE_COMMENTS)),
    extra,
  })
}

/// Normalize a batch, dropping rows without a date
pub fn normalize_rows(rows: &[RawRow]) -> Vec<WorkoutRecord> {
  let records: Vec<WorkoutRecord> = rows.iter().filter_map(normalize_row).collect();

  let dropped = rows.len() - records.len();
  if dropped > 0 {
    log::debug!("Dropped {} of {} rows without a valid {}", dropped, rows.len(), COL_WORKOUT_DAY);
  }

  records
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
