use crate::database::catalog::lookups;
use crate::database::gateway::{DbError, Gateway};
use crate::models::{AttendanceStatusRow, CategoryRow, LocationRow};

pub async fn list_categories(gateway: &Gateway) -> Result<Vec<CategoryRow>, DbError> {
    gateway.fetch_all(lookups::all_categories()).await
}

pub async fn list_locations(gateway: &Gateway) -> Result<Vec<LocationRow>, DbError> {
    gateway.fetch_all(lookups::all_locations()).await
}

pub async fn list_attendance_statuses(
    gateway: &Gateway,
) -> Result<Vec<AttendanceStatusRow>, DbError> {
    gateway.fetch_all(lookups::all_attendance_statuses()).await
}
