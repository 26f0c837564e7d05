use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct StaffRow {
    pub id: i64,
    pub name_first: String,
    pub name_last: String,
    /// Functional identifier; lookups use this rather than the row id.
    pub email: String,
    pub date_inactive: Option<NaiveDateTime>,
}
