//! ISO-8601 week keys
//!
//! Weeks start on Monday and week 1 is the week holding the year's first
//! Thursday, so the first and last days of a calendar year can belong to a
//! neighbouring ISO year.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// `(iso_year, iso_week)`. Ordering is chronological and matches the
/// lexicographic order of the `"YYYY-WW"` rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
  year: i32,
  week: u32,
}

impl WeekKey {
  pub fn new(year: i32, week: u32) -> Self {
    Self { year, week }
  }

  pub fn from_date(date: NaiveDate) -> Self {
    iso_year_week(date)
  }

  pub fn year(&self) -> i32 {
    self.year
  }

  pub fn week(&self) -> u32 {
    self.week
  }

  /// Monday that opens this week
  pub fn monday(&self) -> Option<NaiveDate> {
    NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon)
  }

  pub fn contains(&self, date: NaiveDate) -> bool {
    iso_year_week(date) == *self
  }
}

/// Shift to the Thursday of the date's own week; that Thursday's calendar
/// year is the ISO year and its day-of-year fixes the week number.
pub fn iso_year_week(date: NaiveDate) -> WeekKey {
  let iso_day_of_week = date.weekday().number_from_monday() as i64;
  let thursday = date
    .checked_add_signed(Duration::days(4 - iso_day_of_week))
    .unwrap_or(date);

  let week = thursday.ordinal().div_ceil(7);

  WeekKey {
    year: thursday.year(),
    week,
  }
}

impl fmt::Display for WeekKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:04}-{:02}", self.year, self.week)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid week key: {0}")]
pub struct ParseWeekKeyError(String);

impl FromStr for WeekKey {
  type Err = ParseWeekKeyError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (year, week) = s
      .split_once('-')
      .ok_or_else(|| ParseWeekKeyError(s.to_string()))?;

    let year: i32 = year.parse().map_err(|_| ParseWeekKeyError(s.to_string()))?;
    let week: u32 = week.parse().map_err(|_| ParseWeekKeyError(s.to_string()))?;

    if !(1..=53).contains(&week) {
      return Err(ParseWeekKeyError(s.to_string()));
    }

    Ok(WeekKey { year, week })
  }
}

impl Serialize for WeekKey {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

impl<'de> Deserialize<'de> for WeekKey {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn test_mid_year_week() {
    // Wednesday
    assert_eq!(iso_year_week(ymd(2025, 12, 3)).to_string(), "2025-49");
  }

  #[test]
  fn test_jan_first_on_saturday_belongs_to_previous_year() {
    assert_eq!(ymd(2028, 1, 1).weekday(), Weekday::Sat);
    assert_eq!(iso_year_week(ymd(2028, 1, 1)).to_string(), "2027-52");
  }

  #[test]
  fn test_jan_first_on_friday_and_sunday() {
    // 2027-01-01 is a Friday, 2023-01-01 a Sunday
    assert_eq!(iso_year_week(ymd(2027, 1, 1)).to_string(), "2026-53");
    assert_eq!(iso_year_week(ymd(2023, 1, 1)).to_string(), "2022-52");
  }

  #[test]
  fn test_jan_first_on_thursday_is_week_one() {
    assert_eq!(iso_year_week(ymd(2026, 1, 1)).to_string(), "2026-01");
  }

  #[test]
  fn test_late_december_in_next_year_week_one() {
    // 2025-12-29 is a Monday
    assert_eq!(iso_year_week(ymd(2025, 12, 29)).to_string(), "2026-01");
    assert_eq!(iso_year_week(ymd(2025, 12, 31)).to_string(), "2026-01");
    // 2024-12-30 is a Monday
    assert_eq!(iso_year_week(ymd(2024, 12, 30)).to_string(), "2025-01");
  }

  #[test]
  fn test_sunday_closes_the_week() {
    assert_eq!(iso_year_week(ymd(2025, 12, 7)), iso_year_week(ymd(2025, 12, 1)));
    assert_ne!(iso_year_week(ymd(2025, 12, 8)), iso_year_week(ymd(2025, 12, 7)));
  }

  #[test]
  fn test_matches_chrono_iso_week_over_several_years() {
    let mut day = ymd(2019, 12, 1);
    let end = ymd(2029, 1, 31);
    while day <= end {
      let iso = day.iso_week();
      assert_eq!(iso_year_week(day), WeekKey::new(iso.year(), iso.week()), "{}", day);
      day = day.succ_opt().unwrap();
    }
  }

  #[test]
  fn test_string_order_matches_chronology() {
    let mut day = ymd(2024, 1, 1);
    while day < ymd(2027, 1, 1) {
      let later = day + Duration::days(8);
      let (a, b) = (iso_year_week(day), iso_year_week(later));
      assert!(b > a);
      assert!(b.to_string() >= a.to_string());
      day = day.succ_opt().unwrap();
    }
  }

  #[test]
  fn test_parse_and_display() {
    let key: WeekKey = "2025-09".parse().unwrap();
    assert_eq!(key, WeekKey::new(2025, 9));
    assert_eq!(key.to_string(), "2025-09");

    assert!("2025".parse::<WeekKey>().is_err());
    assert!("2025-00".parse::<WeekKey>().is_err());
    assert!("2025-54".parse::<WeekKey>().is_err());
    assert!("abcd-10".parse::<WeekKey>().is_err());
  }

  #[test]
  fn test_monday_and_contains() {
    let key = WeekKey::new(2027, 52);
    assert_eq!(key.monday(), Some(ymd(2027, 12, 27)));
    assert!(key.contains(ymd(2028, 1, 1)));
    assert!(!key.contains(ymd(2028, 1, 3)));
  }

  #[test]
  fn test_serde_as_string() {
    let key = WeekKey::new(2026, 3);
    let json = serde_json::to_string(&key).unwrap();
    assert_eq!(json, "\"2026-03\"");
    let back: WeekKey = serde_json::from_str(&json).unwrap();
    assert_eq!(back, key);
  }
}
