use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{bad_request, parse_bool_param, store_error};
use crate::database::gateway::Gateway;
use crate::services::attendance_service::{self, AttendanceEntry};
use crate::services::students_service;

pub async fn list_students(State(gateway): State<Gateway>) -> Response {
    match students_service::list_students(&gateway).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => store_error("list students", err),
    }
}

pub async fn student_by_id(State(gateway): State<Gateway>, Path(id): Path<i64>) -> Response {
    match students_service::student_by_id(&gateway, id).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => store_error("student by id", err),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudentBody {
    pub first_name: String,
    pub last_name: String,
}

pub async fn create_student(
    State(gateway): State<Gateway>,
    Json(body): Json<NewStudentBody>,
) -> Response {
    match students_service::create_student(&gateway, &body.first_name, &body.last_name).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => store_error("create student", err),
    }
}

#[derive(Debug, Deserialize)]
pub struct DeactivateQuery {
    pub deactivate: Option<String>,
}

pub async fn put_student(
    State(gateway): State<Gateway>,
    Path(id): Path<i64>,
    Query(query): Query<DeactivateQuery>,
) -> Response {
    let Some(flag) = query.deactivate.as_deref().and_then(parse_bool_param) else {
        return bad_request("deactivate must be true or false");
    };
    match students_service::set_deactivated(&gateway, id, flag).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => store_error("deactivate student", err),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

pub async fn student_history(
    State(gateway): State<Gateway>,
    Path(id): Path<i64>,
    Query(query): Query<HistoryQuery>,
) -> Response {
    // Either bound missing falls back to the full history, as the original
    // client expects.
    let range = match (query.start_date, query.end_date) {
        (Some(start), Some(end)) => Some((start, end)),
        _ => None,
    };
    match students_service::attendance_history(&gateway, id, range).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => store_error("student history", err),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterQuery {
    pub activity_id: i64,
    pub date: NaiveDate,
}

pub async fn activity_roster(
    State(gateway): State<Gateway>,
    query: Result<Query<RosterQuery>, QueryRejection>,
) -> Response {
    let Ok(Query(query)) = query else {
        return bad_request("activityId and date are required");
    };
    match attendance_service::roster(&gateway, query.activity_id, query.date).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => store_error("activity roster", err),
    }
}

/// The single-page client historically sent ids as strings; accept both.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum IdValue {
    Int(i64),
    Text(String),
}

impl IdValue {
    fn as_i64(&self) -> Option<i64> {
        match self {
            IdValue::Int(v) => Some(*v),
            IdValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BulkAttendanceItem {
    #[serde(rename = "STUDENT_ID")]
    pub student_id: IdValue,
    #[serde(rename = "STATUS_ID")]
    pub status_id: IdValue,
    #[serde(rename = "COMMENT")]
    pub comment: Option<String>,
    #[serde(rename = "ACTIVITY_ID")]
    pub activity_id: IdValue,
    #[serde(rename = "DATE")]
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BulkAttendancePayload {
    pub data: Vec<BulkAttendanceItem>,
}

/// Bulk attendance submission. The whole batch is written inside one
/// transaction; on success the accepted batch is echoed back.
pub async fn record_attendance(
    State(gateway): State<Gateway>,
    payload: Result<Json<BulkAttendancePayload>, JsonRejection>,
) -> Response {
    let Ok(Json(payload)) = payload else {
        return bad_request("expected a JSON body");
    };

    let mut entries = Vec::with_capacity(payload.data.len());
    for item in &payload.data {
        let (Some(activity_id), Some(student_id), Some(status_id)) = (
            item.activity_id.as_i64(),
            item.student_id.as_i64(),
            item.status_id.as_i64(),
        ) else {
            return bad_request("ids must be integers or numeric strings");
        };
        entries.push(AttendanceEntry {
            activity_id,
            student_id,
            date: item.date,
            status_id,
            comment: item.comment.clone(),
        });
    }

    match attendance_service::record_batch(&gateway, &entries).await {
        Ok(_) => Json(payload.data).into_response(),
        Err(err) => store_error("record attendance batch", err),
    }
}
