//! End-to-end checks over CSV text through the public API

use athlete_board::analysis::{aggregate, group_by_week};
use athlete_board::calendar::WeekKey;
use athlete_board::classify::{Classification, Classifier};
use athlete_board::models::AllTimeStats;
use athlete_board::plan::planned_runs;
use athlete_board::records_from_texts;
use chrono::{Duration, NaiveDate};

const HEADER: &str =
  "WorkoutDay,WorkoutType,Title,DistanceInMeters,TimeTotalInHours,VelocityAverage,HeartRateAverage";

fn export(rows: &[&str]) -> String {
  std::iter::once(HEADER)
    .chain(rows.iter().copied())
    .collect::<Vec<_>>()
    .join("\n")
}

#[test]
fn test_completed_run_contributes_distance_and_pace() {
  let records = records_from_texts(&[export(&["2025-12-03,Run,Easy,5000,0.42,3.3,150"])]);
  let report = aggregate(&records);

  assert_eq!(report.week_stats.len(), 1);
  let week = &report.week_stats[0];
  assert_eq!(week.week_key.to_string(), "2025-49");
  assert_eq!(week.distance_km, 5.0);
  assert_eq!(week.avg_heart_rate, Some(150));

  let pace = week.avg_pace_min_per_km.unwrap();
  assert!((pace - 1000.0 / 3.3 / 60.0).abs() < 1e-9);
  assert!(pace < 15.0);
}

#[test]
fn test_day_off_is_not_counted() {
  let records = records_from_texts(&[export(&["2025-12-08,Day Off,Rest,0,0,,"])]);
  assert_eq!(Classifier::for_aggregation().classify(&records[0]), Classification::NotARun);

  let report = aggregate(&records);
  assert!(report.week_stats.is_empty());
  assert_eq!(report.all_time, AllTimeStats::default());
}

#[test]
fn test_planned_run_only_shows_in_plan() {
  let records = records_from_texts(&[export(&["2026-03-02,Run,Hills,0,0,,"])]);

  assert!(aggregate(&records).week_stats.is_empty());

  let planned = planned_runs(&records, &Classifier::for_plan());
  assert_eq!(planned.len(), 1);
  assert_eq!(planned[0].title.as_deref(), Some("Hills"));
}

#[test]
fn test_single_ten_k_week_and_iso_year_edge() {
  let records = records_from_texts(&[export(&["2028-01-01,Run,Saturday 10k,10000,0.9,2.9,"])]);
  let report = aggregate(&records);

  assert_eq!(report.week_stats.len(), 1);
  assert_eq!(report.week_stats[0].week_key.to_string(), "2027-52");
  assert_eq!(report.week_stats[0].distance_km, 10.0);
  assert_eq!(report.week_stats[0].workout_count, 1);

  let json = serde_json::to_value(&report.week_stats[0]).unwrap();
  assert_eq!(json["week_key"], "2027-52");
}

#[test]
fn test_quoted_commas_and_bad_dates() {
  let text = export(&[
    "2025-12-06,Run,\"Tempo, 3x2k\",8000,0.7,3.4,",
    "someday,Run,Lost,5000,0.5,3.0,",
    "",
  ]);
  let records = records_from_texts(&[text]);

  assert_eq!(records.len(), 1);
  assert_eq!(records[0].title.as_deref(), Some("Tempo, 3x2k"));
}

#[test]
fn test_recovery_run_differs_between_presets() {
  let records = records_from_texts(&[export(&["2025-12-09,Recovery Run,Shakeout,4000,0.4,2.8,"])]);

  assert!(aggregate(&records).week_stats.is_empty());
  assert_eq!(
    Classifier::for_plan().classify(&records[0]),
    Classification::CompletedRun
  );
}

#[test]
fn test_empty_input() {
  let report = aggregate(&records_from_texts::<&str>(&[]));
  assert!(report.week_stats.is_empty());
  assert_eq!(report.all_time.distance_km, 0);
  assert_eq!(report.all_time.runs, 0);

  let header_only = aggregate(&records_from_texts(&[HEADER]));
  assert!(header_only.week_stats.is_empty());
}

#[test]
fn test_pipeline_is_idempotent() {
  let text = export(&[
    "2025-12-01,Run,A,7300,0.61,3.1,141",
    "2025-12-04,Run,B,12100,1.05,3.2,",
    "2025-12-15,Long Run,C,21100,1.95,3.0,138",
    "2025-12-16,Strength,D,0,0.5,,",
  ]);

  let first = aggregate(&records_from_texts(&[&text]));
  let second = aggregate(&records_from_texts(&[&text]));
  assert_eq!(first, second);
  assert_eq!(first.week_stats.len(), 2);
}

#[test]
fn test_every_dated_record_lands_in_one_group() {
  let text = export(&[
    "2025-12-29,Run,A,5000,0.5,,",
    "2026-01-01,Walk,B,3000,0.6,,",
    "2026-01-04,Run,C,0,0,,",
    "2026-01-05,Day Off,D,0,0,,",
  ]);
  let records = records_from_texts(&[text]);
  let groups = group_by_week(&records);

  let grouped: usize = groups.values().map(|g| g.len()).sum();
  assert_eq!(grouped, records.len());
  assert_eq!(groups.len(), 2);
  assert_eq!(groups.keys().next().unwrap().to_string(), "2026-01");
}

#[test]
fn test_week_keys_never_go_backwards() {
  let mut day = NaiveDate::from_ymd_opt(2019, 12, 20).unwrap();
  let end = NaiveDate::from_ymd_opt(2031, 1, 10).unwrap();

  while day < end {
    let later = day + Duration::days(8);
    let (a, b) = (WeekKey::from_date(day), WeekKey::from_date(later));
    assert!(b > a, "{} -> {} gave {} -> {}", day, later, a, b);
    assert!(b.to_string() > a.to_string());
    day += Duration::days(1);
  }
}
