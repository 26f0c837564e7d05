use chrono::{NaiveDate, Utc};

use crate::database::catalog::students;
use crate::database::gateway::{DbError, Gateway};
use crate::models::{AttendanceRow, StudentRow};

pub async fn list_students(gateway: &Gateway) -> Result<Vec<StudentRow>, DbError> {
    gateway.fetch_all(students::all_students()).await
}

/// Absence is an empty vec, not an error; callers treat the two the same.
pub async fn student_by_id(gateway: &Gateway, id: i64) -> Result<Vec<StudentRow>, DbError> {
    gateway.fetch_all(students::student_by_id(id)).await
}

pub async fn create_student(
    gateway: &Gateway,
    name_first: &str,
    name_last: &str,
) -> Result<Vec<StudentRow>, DbError> {
    gateway
        .fetch_all(students::create_student(name_first, name_last))
        .await
}

/// Soft deactivation: stamps `date_inactive` rather than deleting the row, so
/// attendance history keeps its referent. `deactivate = false` clears it.
pub async fn set_deactivated(
    gateway: &Gateway,
    id: i64,
    deactivate: bool,
) -> Result<Vec<StudentRow>, DbError> {
    let stamp = deactivate.then(|| Utc::now().naive_utc());
    gateway
        .fetch_all(students::set_student_inactive(id, stamp))
        .await
}

pub async fn attendance_history(
    gateway: &Gateway,
    student_id: i64,
    range: Option<(NaiveDate, NaiveDate)>,
) -> Result<Vec<AttendanceRow>, DbError> {
    let query = match range {
        Some((start, end)) => students::student_history_in_range(student_id, start, end),
        None => students::student_history(student_id),
    };
    gateway.fetch_all(query).await
}
