use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct StudentRow {
    pub id: i64,
    pub name_first: String,
    pub name_last: String,
    /// Non-null when the student has been soft-deactivated.
    pub date_inactive: Option<NaiveDateTime>,
}
