pub mod plan;
pub mod stats;

use crate::models::WorkoutRecord;
use crate::sources::resolve_sources;
use crate::state::AppState;

/// Fetch, merge and normalize every configured source
pub(crate) async fn load_records(state: &AppState) -> Result<Vec<WorkoutRecord>, String> {
  let locations =
    resolve_sources(&state.config).map_err(|e| format!("Failed to resolve sources: {}", e))?;

  let texts = state.loader.fetch_all(&locations).await;
  Ok(crate::records_from_texts(texts.as_slice()))
}

/// All workouts, newest first
pub async fn get_workouts(state: &AppState) -> Result<Vec<WorkoutRecord>, String> {
  let mut workouts = load_records(state).await?;
  workouts.sort_by(|a, b| b.day.cmp(&a.day));
  Ok(workouts)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
