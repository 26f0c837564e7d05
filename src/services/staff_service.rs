use chrono::Utc;

use crate::database::catalog::staff;
use crate::database::gateway::{DbError, Gateway};
use crate::models::{ActivityRow, StaffRow};

pub async fn list_staff(gateway: &Gateway) -> Result<Vec<StaffRow>, DbError> {
    gateway.fetch_all(staff::all_staff()).await
}

/// Email is the functional identifier for staff lookups.
pub async fn staff_by_email(gateway: &Gateway, email: &str) -> Result<Vec<StaffRow>, DbError> {
    gateway.fetch_all(staff::staff_by_email(email)).await
}

pub async fn create_staff(
    gateway: &Gateway,
    name_first: &str,
    name_last: &str,
    email: &str,
) -> Result<Vec<StaffRow>, DbError> {
    gateway
        .fetch_all(staff::create_staff(name_first, name_last, email))
        .await
}

pub async fn update_staff(
    gateway: &Gateway,
    id: i64,
    name_first: &str,
    name_last: &str,
    email: &str,
) -> Result<Vec<StaffRow>, DbError> {
    gateway
        .fetch_all(staff::update_staff(id, name_first, name_last, email))
        .await
}

pub async fn set_deactivated(
    gateway: &Gateway,
    id: i64,
    deactivate: bool,
) -> Result<Vec<StaffRow>, DbError> {
    let stamp = deactivate.then(|| Utc::now().naive_utc());
    gateway.fetch_all(staff::set_staff_inactive(id, stamp)).await
}

pub async fn activities_by_email(
    gateway: &Gateway,
    email: &str,
) -> Result<Vec<ActivityRow>, DbError> {
    gateway
        .fetch_all(staff::activities_by_staff_email(email))
        .await
}
