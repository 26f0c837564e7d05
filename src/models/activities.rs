use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ActivityRow {
    pub id: i64,
    pub name: String,
    pub staff_id: i64,
    pub category_id: i64,
    pub location_id: i64,
    pub allow_dropins: bool,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Display join for the activity detail view.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ActivityDetailRow {
    pub id: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub allow_dropins: bool,
    pub staff_name: String,
    pub category_name: String,
    pub location_name: String,
}
