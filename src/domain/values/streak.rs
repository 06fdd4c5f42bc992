use chrono::{DateTime, Utc};
use serde::Serialize;

/// Days of discipline aimed for.
pub const STREAK_GOAL_DAYS: i64 = 1111;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Streak {
    pub started_at: DateTime<Utc>,
    pub days: i64,
    pub progress: f64,
}

impl Streak {
    /// The first day counts as day 1.
    pub fn compute(started_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let elapsed = (now - started_at).num_milliseconds().abs();
        let days = elapsed / (24 * 3600 * 1000) + 1;
        Self {
            started_at,
            days,
            progress: days as f64 / STREAK_GOAL_DAYS as f64 * 100.0,
        }
    }
}
