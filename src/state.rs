use crate::config::DashboardConfig;
use crate::sources::{SourceError, SourceLoader};

/// Application state shared by the commands. Holds no workout data; every
/// command loads the sources fresh.
#[derive(Debug, Clone)]
pub struct AppState {
  pub config: DashboardConfig,
  pub loader: SourceLoader,
}

/// Build the HTTP client and wrap it with the config
pub fn initialize_state(config: DashboardConfig) -> Result<AppState, SourceError> {
  let loader = SourceLoader::from_config(&config)?;

  log::info!(
    "Dashboard ready: {} source(s) under {}",
    config.sources.len(),
    config.data
  );

  Ok(AppState { config, loader })
}
