use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One recorded attendance fact. Rows are append-only: a correction for the
/// same (student, activity, date) is a new row with a later `date_entered`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AttendanceRow {
    pub id: i64,
    pub student_id: i64,
    pub activity_id: i64,
    pub date: NaiveDate,
    pub status_id: i64,
    pub comment: Option<String>,
    pub date_entered: NaiveDateTime,
}

/// One line of the reconciled roster for an (activity, date) pair.
/// `status_id`/`comment`/`date_entered` are null for students who are
/// expected but have nothing recorded yet.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RosterRow {
    pub student_id: i64,
    pub name_first: String,
    pub name_last: String,
    pub activity_id: i64,
    pub date_entered: Option<NaiveDateTime>,
    pub status_id: Option<i64>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AttendanceStatusRow {
    pub id: i64,
    pub name: String,
}
