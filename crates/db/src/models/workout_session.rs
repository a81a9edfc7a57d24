//! Workout session entity model.

use chrono::{NaiveDate, NaiveTime};
use fitcenter_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `"WorkoutSessions"` table.
///
/// Dates serialize as `YYYY-MM-DD` and times as `HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct WorkoutSession {
    pub session_id: DbId,
    pub member_id: DbId,
    pub session_date: NaiveDate,
    pub session_time: NaiveTime,
    pub activity: String,
}
