//! Display helpers for pace, durations and workout dates

use chrono::NaiveDate;

/// Paces past this are shown as unknown
const MAX_DISPLAY_PACE: f64 = 20.0;

/// `M:SS` per km, or `--:--` when there is nothing sensible to show
pub fn format_pace(pace_min_per_km: Option<f64>) -> String {
  match pace_min_per_km {
    Some(pace) if pace.is_finite() && pace > 0.0 && pace <= MAX_DISPLAY_PACE => {
      let total_seconds = (pace * 60.0).round() as u64;
      format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
    }
    _ => "--:--".to_string(),
  }
}

/// `45m` under an hour, `1.5h` otherwise, `--` for nothing
pub fn format_duration(hours: f64) -> String {
  if !hours.is_finite() || hours <= 0.0 {
    return "--".to_string();
  }
  if hours < 1.0 {
    return format!("{}m", (hours * 60.0).round());
  }
  format!("{}h", (hours * 10.0).round() / 10.0)
}

/// `Mon · Dec 10`
pub fn format_workout_date(day: NaiveDate) -> String {
  day.format("%a · %b %-d").to_string()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
