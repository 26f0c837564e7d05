use chrono::NaiveDate;

use crate::database::catalog::activities;
use crate::database::gateway::{DbError, Gateway};
use crate::models::{ActivityDetailRow, ActivityRow};

pub async fn list_activities(gateway: &Gateway) -> Result<Vec<ActivityRow>, DbError> {
    gateway.fetch_all(activities::all_activities()).await
}

/// Detail view with staff/category/location names resolved for display.
pub async fn activity_detail(
    gateway: &Gateway,
    id: i64,
) -> Result<Vec<ActivityDetailRow>, DbError> {
    gateway.fetch_all(activities::activity_detail(id)).await
}

pub struct NewActivity<'a> {
    pub name: &'a str,
    pub staff_id: i64,
    pub category_id: i64,
    pub location_id: i64,
    pub allow_dropins: bool,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

pub async fn create_activity(
    gateway: &Gateway,
    activity: NewActivity<'_>,
) -> Result<Vec<ActivityRow>, DbError> {
    gateway
        .fetch_all(activities::create_activity(
            activity.name,
            activity.staff_id,
            activity.category_id,
            activity.location_id,
            activity.allow_dropins,
            activity.start_date,
            activity.end_date,
        ))
        .await
}
