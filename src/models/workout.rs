use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::normalize::{is_plausible_pace, velocity_to_pace};

/// One parsed CSV line keyed by header name. Values are untyped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
  fields: HashMap<String, String>,
}

impl RawRow {
  pub fn new() -> Self {
    Self::default()
  }

  /// Later duplicates of a header overwrite earlier ones
  pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
    self.fields.insert(key.into(), value.into());
  }

  /// Value for a column, empty string when the column is missing
  pub fn get(&self, key: &str) -> &str {
    self.fields.get(key).map(String::as_str).unwrap_or("")
  }

  pub fn contains(&self, key: &str) -> bool {
    self.fields.contains_key(key)
  }

  pub fn len(&self) -> usize {
    self.fields.len()
  }

  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut row = RawRow::new();
    for (k, v) in iter {
      row.insert(k, v);
    }
    row
  }
}

/// A normalized workout. Derived values (pace, classification) are
/// computed on demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
  pub day: NaiveDate,
  pub workout_type: String,
  pub title: Option<String>,
  pub distance_meters: f64,
  pub duration_hours: f64,
  /// meters/second
  pub velocity_average: Option<f64>,
  /// bpm, `None` when the export had 0 or nothing
  pub heart_rate_average: Option<f64>,
  pub cadence_average: Option<f64>,
  pub rpe: Option<f64>,
  pub planned_distance_meters: Option<f64>,
  pub planned_duration_hours: Option<f64>,
  pub description: Option<String>,
  pub coach_comments: Option<String>,
  pub athlete_comments: Option<String>,

  /// Columns the normalizer doesn't know about, kept verbatim
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub extra: BTreeMap<String, String>,
}

impl WorkoutRecord {
  /// Minimal record for a given day and type; everything else empty
  pub fn new(day: NaiveDate, workout_type: impl Into<String>) -> Self {
    Self {
      day,
      workout_type: workout_type.into(),
      title: None,
      distance_meters: 0.0,
      duration_hours: 0.0,
      velocity_average: None,
      heart_rate_average: None,
      cadence_average: None,
      rpe: None,
      planned_distance_meters: None,
      planned_duration_hours: None,
      description: None,
      coach_comments: None,
      athlete_comments: None,
      extra: BTreeMap::new(),
    }
  }

  pub fn distance_km(&self) -> f64 {
    self.distance_meters / 1000.0
  }

  /// Pace in min/km from average velocity, `None` without a positive velocity
  pub fn pace_min_per_km(&self) -> Option<f64> {
    self.velocity_average.and_then(velocity_to_pace)
  }

  /// Pace only when it passes the sanity bound used for averaging
  pub fn plausible_pace(&self) -> Option<f64> {
    self.pace_min_per_km().filter(|p| is_plausible_pace(*p))
  }

  /// Duration shown in the plan view: planned duration first, then recorded
  pub fn display_duration_hours(&self) -> f64 {
    match self.planned_duration_hours {
      Some(planned) if planned > 0.0 => planned,
      _ => self.duration_hours,
    }
  }

  pub fn display_title(&self) -> &str {
    match self.title.as_deref() {
      Some(t) if !t.is_empty() => t,
      _ if !self.workout_type.is_empty() => &self.workout_type,
      _ => "Run",
    }
  }
}
