//! Run classification
//!
//! A workout is a run when its type mentions "run" and none of the
//! exclusion terms. Runs with recorded distance or duration are completed,
//! the rest are planned. Two exclusion lists are in use: the broad one for
//! statistics and a narrower one for the upcoming-plan view.

use serde::{Deserialize, Serialize};

use crate::models::WorkoutRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
  NotARun,
  CompletedRun,
  PlannedRun,
}

impl Classification {
  pub fn is_run(&self) -> bool {
    !matches!(self, Classification::NotARun)
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Classification::NotARun => "not_a_run",
      Classification::CompletedRun => "completed_run",
      Classification::PlannedRun => "planned_run",
    }
  }
}

/// ---------------------------------------------------------------------------
/// Exclusion Lists
/// ---------------------------------------------------------------------------

/// Used by weekly and all-time statistics
pub const AGGREGATE_EXCLUSIONS: [&str; 8] = [
  "strength", "custom", "day off", "rest", "walk", "recovery", "yoga", "stretch",
];

/// Used by the upcoming-plan view
pub const PLAN_EXCLUSIONS: [&str; 5] = ["custom", "strength", "day off", "rest", "walk"];

/// Lower-cased substrings that disqualify a workout type from being a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionList {
  terms: Vec<String>,
}

impl ExclusionList {
  pub fn new<I, S>(terms: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    Self {
      terms: terms
        .into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect(),
    }
  }

  pub fn aggregate() -> Self {
    Self::new(AGGREGATE_EXCLUSIONS)
  }

  pub fn plan() -> Self {
    Self::new(PLAN_EXCLUSIONS)
  }

  pub fn empty() -> Self {
    Self { terms: Vec::new() }
  }

  pub fn terms(&self) -> &[String] {
    &self.terms
  }

  /// First term contained in an already lower-cased workout type
  pub fn first_match(&self, lowered_type: &str) -> Option<&str> {
    self
      .terms
      .iter()
      .find(|term| lowered_type.contains(term.as_str()))
      .map(String::as_str)
  }
}

impl Default for ExclusionList {
  fn default() -> Self {
    Self::aggregate()
  }
}

/// ---------------------------------------------------------------------------
/// Classifier
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classifier {
  exclusions: ExclusionList,
}

impl Classifier {
  pub fn new(exclusions: ExclusionList) -> Self {
    Self { exclusions }
  }

  /// Broad exclusions, for statistics
  pub fn for_aggregation() -> Self {
    Self::new(ExclusionList::aggregate())
  }

  /// Narrow exclusions, for the upcoming-plan view
  pub fn for_plan() -> Self {
    Self::new(ExclusionList::plan())
  }

  pub fn exclusions(&self) -> &ExclusionList {
    &self.exclusions
  }

  pub fn is_run_type(&self, workout_type: &str) -> bool {
    let lowered = workout_type.to_lowercase();
    lowered.contains("run") && self.exclusions.first_match(&lowered).is_none()
  }

  pub fn classify(&self, record: &WorkoutRecord) -> Classification {
    if !self.is_run_type(&record.workout_type) {
      return Classification::NotARun;
    }

    if record.distance_meters > 0.0 || record.duration_hours > 0.0 {
      Classification::CompletedRun
    } else {
      Classification::PlannedRun
    }
  }

  pub fn is_completed_run(&self, record: &WorkoutRecord) -> bool {
    self.classify(record) == Classification::CompletedRun
  }

  pub fn is_planned_run(&self, record: &WorkoutRecord) -> bool {
    self.classify(record) == Classification::PlannedRun
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
