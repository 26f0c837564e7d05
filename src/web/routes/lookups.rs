use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::store_error;
use crate::database::gateway::Gateway;
use crate::services::lookups_service;

pub async fn list_categories(State(gateway): State<Gateway>) -> Response {
    match lookups_service::list_categories(&gateway).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => store_error("list categories", err),
    }
}

pub async fn list_locations(State(gateway): State<Gateway>) -> Response {
    match lookups_service::list_locations(&gateway).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => store_error("list locations", err),
    }
}

pub async fn list_attendance_statuses(State(gateway): State<Gateway>) -> Response {
    match lookups_service::list_attendance_statuses(&gateway).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => store_error("list attendance statuses", err),
    }
}
