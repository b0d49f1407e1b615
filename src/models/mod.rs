pub mod stats;
pub mod workout;

pub use stats::{AllTimeStats, Dashboard, StatsReport, WeekStats};
pub use workout::{RawRow, WorkoutRecord};
