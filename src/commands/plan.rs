//! Commands backing the plan and workout browser screens

use chrono::NaiveDate;

use crate::browse::{self, SortOrder, WorkoutCategory};
use crate::classify::Classifier;
use crate::commands::load_records;
use crate::models::WorkoutRecord;
use crate::plan::{planned_runs, upcoming_runs};
use crate::state::AppState;

/// Get runs in the configured horizon starting at `today`
pub async fn get_upcoming_runs(
  state: &AppState,
  today: NaiveDate,
) -> Result<Vec<WorkoutRecord>, String> {
  let records = load_records(state).await?;
  let upcoming = upcoming_runs(
    &records,
    today,
    state.config.plan_horizon_days,
    &Classifier::for_plan(),
  );
  Ok(upcoming.into_iter().cloned().collect())
}

/// Get runs that are scheduled but not yet recorded
pub async fn get_planned_runs(state: &AppState) -> Result<Vec<WorkoutRecord>, String> {
  let records = load_records(state).await?;
  Ok(planned_runs(&records, &Classifier::for_plan()).into_iter().cloned().collect())
}

/// Search the workout list
pub async fn search_workouts(
  state: &AppState,
  category: WorkoutCategory,
  query: String,
  sort: SortOrder,
) -> Result<Vec<WorkoutRecord>, String> {
  let records = load_records(state).await?;
  let results = browse::search_workouts(&records, category, &query, sort);
  Ok(results.into_iter().cloned().collect())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
