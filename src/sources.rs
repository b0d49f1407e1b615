//! CSV source resolution and fetching
//!
//! A source is either a local file or an http(s) URL. Fetching several
//! sources is best-effort: one that fails is logged and contributes no rows,
//! matching how the dashboard behaves when one year's export is missing.

use reqwest::Client;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::config::DashboardConfig;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
  #[error("Failed to read {path}: {source}")]
  Io {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("HTTP request failed: {0}")]
  Request(#[from] reqwest::Error),

  #[error("Source {location} returned status {status}")]
  Status { location: String, status: u16 },

  #[error("Invalid source location: {0}")]
  InvalidLocation(String),
}

impl Serialize for SourceError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Source Locations
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
  File(PathBuf),
  Http(Url),
}

fn parse_http_url(value: &str) -> Option<Url> {
  Url::parse(value)
    .ok()
    .filter(|url| matches!(url.scheme(), "http" | "https"))
}

impl SourceLocation {
  /// Resolve a source name against the data base. Absolute URLs and
  /// absolute paths are used as they are.
  pub fn resolve(base: &str, name: &str) -> Result<Self, SourceError> {
    let name = name.trim();
    if name.is_empty() {
      return Err(SourceError::InvalidLocation("empty source name".into()));
    }

    if let Some(url) = parse_http_url(name) {
      return Ok(SourceLocation::Http(url));
    }

    if let Some(mut base_url) = parse_http_url(base.trim()) {
      // Without a trailing slash `join` would replace the last segment
      if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
      }
      return base_url
        .join(name)
        .map(SourceLocation::Http)
        .map_err(|e| SourceError::InvalidLocation(format!("{} ({})", name, e)));
    }

    let path = Path::new(name);
    if path.is_absolute() {
      Ok(SourceLocation::File(path.to_path_buf()))
    } else {
      Ok(SourceLocation::File(Path::new(base.trim()).join(path)))
    }
  }
}

impl fmt::Display for SourceLocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SourceLocation::File(path) => write!(f, "{}", path.display()),
      SourceLocation::Http(url) => write!(f, "{}", url),
    }
  }
}

/// Every configured source, resolved against the configured base
pub fn resolve_sources(config: &DashboardConfig) -> Result<Vec<SourceLocation>, SourceError> {
  config
    .sources
    .iter()
    .map(|name| SourceLocation::resolve(&config.data, name))
    .collect()
}

/// ---------------------------------------------------------------------------
/// Fetching
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SourceLoader {
  client: Client,
}

impl SourceLoader {
  pub fn new(timeout_secs: u64) -> Result<Self, SourceError> {
    let client = Client::builder()
      .timeout(Duration::from_secs(timeout_secs))
      .build()?;
    Ok(Self { client })
  }

  pub fn from_config(config: &DashboardConfig) -> Result<Self, SourceError> {
    Self::new(config.fetch_timeout_secs)
  }

  /// Raw text of a single source
  pub async fn fetch_text(&self, location: &SourceLocation) -> Result<String, SourceError> {
    match location {
      SourceLocation::File(path) => {
        tokio::fs::read_to_string(path)
          .await
          .map_err(|e| SourceError::Io {
            path: path.display().to_string(),
            source: e,
          })
      }
      SourceLocation::Http(url) => {
        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
          return Err(SourceError::Status {
            location: url.to_string(),
            status: response.status().as_u16(),
          });
        }

        Ok(response.text().await?)
      }
    }
  }

  /// Fetch every source concurrently. Failed sources are logged and left
  /// out; the texts come back in the order the locations were given.
  pub async fn fetch_all(&self, locations: &[SourceLocation]) -> Vec<String> {
    let handles: Vec<_> = locations
      .iter()
      .cloned()
      .map(|location| {
        let loader = self.clone();
        tokio::spawn(async move {
          let result = loader.fetch_text(&location).await;
          (location, result)
        })
      })
      .collect();

    let mut texts = Vec::with_capacity(handles.len());
    for handle in handles {
      match handle.await {
        Ok((location, Ok(text))) => {
          log::info!("Loaded {} ({} bytes)", location, text.len());
          texts.push(text);
        }
        Ok((location, Err(e))) => {
          log::warn!("Failed to load {}: {}", location, e);
        }
        Err(e) => {
          log::warn!("Source fetch task failed: {}", e);
        }
      }
    }

    texts
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
