//! Workout browser: category chips, search box and sort order

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::format::format_workout_date;
use crate::models::WorkoutRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutCategory {
  #[default]
  All,
  LongRun,
  Tempo,
  Easy,
  Speed,
}

impl WorkoutCategory {
  pub fn matches(&self, workout: &WorkoutRecord) -> bool {
    let title = workout.title.as_deref().unwrap_or("").to_lowercase();

    match self {
      WorkoutCategory::All => true,
      WorkoutCategory::LongRun => {
        workout.workout_type.to_lowercase().contains("long") || contains_any(&title, &["long"])
      }
      WorkoutCategory::Tempo => contains_any(&title, &["tempo", "threshold"]),
      WorkoutCategory::Easy => contains_any(&title, &["easy", "recovery", "aerobic"]),
      WorkoutCategory::Speed => contains_any(&title, &["interval", "vo2", "speed"]),
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      WorkoutCategory::All => "all",
      WorkoutCategory::LongRun => "long",
      WorkoutCategory::Tempo => "tempo",
      WorkoutCategory::Easy => "easy",
      WorkoutCategory::Speed => "speed",
    }
  }
}

impl FromStr for WorkoutCategory {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "all" => Ok(Self::All),
      "long" | "long_run" | "long-run" => Ok(Self::LongRun),
      "tempo" => Ok(Self::Tempo),
      "easy" => Ok(Self::Easy),
      "speed" => Ok(Self::Speed),
      _ => Err(format!("Unknown workout category: {}", s)),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
  /// Newest first
  #[default]
  Date,
  /// Longest first
  Distance,
}

impl FromStr for SortOrder {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "date" => Ok(Self::Date),
      "distance" => Ok(Self::Distance),
      _ => Err(format!("Unknown sort order: {}", s)),
    }
  }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
  needles.iter().any(|n| haystack.contains(n))
}

/// Distance as the browser prints it, e.g. `10.5` or `21`
fn distance_label(workout: &WorkoutRecord) -> String {
  let km = (workout.distance_km() * 100.0).round() / 100.0;
  format!("{}", km)
}

/// Numeric queries match distances starting with the query, anything else
/// is a case-insensitive search over title, type and formatted date.
pub fn matches_query(workout: &WorkoutRecord, query: &str) -> bool {
  let query = query.trim().to_lowercase();
  if query.is_empty() {
    return true;
  }

  if query.parse::<f64>().map(|q| q.is_finite()).unwrap_or(false) {
    return distance_label(workout).starts_with(&query);
  }

  let title = workout.title.as_deref().unwrap_or("").to_lowercase();
  let workout_type = workout.workout_type.to_lowercase();
  let date = format_workout_date(workout.day).to_lowercase();

  title.contains(&query) || workout_type.contains(&query) || date.contains(&query)
}

/// Filter by category and query, then sort
pub fn search_workouts<'a>(
  records: &'a [WorkoutRecord],
  category: WorkoutCategory,
  query: &str,
  sort: SortOrder,
) -> Vec<&'a WorkoutRecord> {
  let mut results: Vec<&WorkoutRecord> = records
    .iter()
    .filter(|w| category.matches(w))
    .filter(|w| matches_query(w, query))
    .collect();

  let newest_first = |a: &&WorkoutRecord, b: &&WorkoutRecord| -> Ordering {
    b.day
      .cmp(&a.day)
      .then_with(|| a.workout_type.cmp(&b.workout_type))
      .then_with(|| a.title.cmp(&b.title))
  };

  match sort {
    SortOrder::Date => results.sort_by(newest_first),
    SortOrder::Distance => results.sort_by(|a, b| {
      b.distance_meters
        .total_cmp(&a.distance_meters)
        .then_with(|| newest_first(a, b))
    }),
  }

  results
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
