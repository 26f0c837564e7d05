use chrono::{NaiveDate, Utc};

use crate::database::catalog::attendance;
use crate::database::gateway::{DbError, Gateway};
use crate::models::RosterRow;

/// One entry of a bulk attendance submission, already validated.
#[derive(Debug, Clone)]
pub struct AttendanceEntry {
    pub activity_id: i64,
    pub student_id: i64,
    pub date: NaiveDate,
    pub status_id: i64,
    pub comment: Option<String>,
}

/// Who should be (or was) present at an activity on a date: the deduplicated
/// union of enrollment-derived expectations and recorded attendance facts,
/// ordered by (name_first, name_last).
pub async fn roster(
    gateway: &Gateway,
    activity_id: i64,
    date: NaiveDate,
) -> Result<Vec<RosterRow>, DbError> {
    gateway
        .fetch_all(attendance::roster_for_activity_date(activity_id, date))
        .await
}

/// Persist a batch of attendance facts, one append-only row per entry, inside
/// a single transaction: either every entry lands or none do. All rows in the
/// batch share one audit timestamp.
pub async fn record_batch(gateway: &Gateway, entries: &[AttendanceEntry]) -> Result<u64, DbError> {
    let entered_at = Utc::now().naive_utc();
    let queries = entries
        .iter()
        .map(|entry| {
            attendance::record_attendance(
                entry.activity_id,
                entry.student_id,
                entry.date,
                entry.status_id,
                entry.comment.as_deref(),
                entered_at,
            )
        })
        .collect();
    gateway.execute_batch_atomic(queries).await
}
