use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use super::{bad_request, parse_bool_param, store_error};
use crate::database::gateway::Gateway;
use crate::services::staff_service;

pub async fn list_teachers(State(gateway): State<Gateway>) -> Response {
    match staff_service::list_staff(&gateway).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => store_error("list teachers", err),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeacherBody {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

pub async fn create_teacher(
    State(gateway): State<Gateway>,
    Json(body): Json<NewTeacherBody>,
) -> Response {
    match staff_service::create_staff(&gateway, &body.first_name, &body.last_name, &body.email)
        .await
    {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => store_error("create teacher", err),
    }
}

pub async fn teacher_by_email(State(gateway): State<Gateway>, Path(email): Path<String>) -> Response {
    match staff_service::staff_by_email(&gateway, &email).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => store_error("teacher by email", err),
    }
}

#[derive(Debug, Deserialize)]
pub struct TeacherPutQuery {
    pub deactivate: Option<String>,
}

/// PUT /api/v1/teachers/:id — with a `deactivate` param this toggles the
/// soft-deactivation timestamp; without one it updates the row from the body.
pub async fn put_teacher(
    State(gateway): State<Gateway>,
    Path(ident): Path<String>,
    Query(query): Query<TeacherPutQuery>,
    payload: Result<Json<NewTeacherBody>, JsonRejection>,
) -> Response {
    let Ok(id) = ident.parse::<i64>() else {
        return bad_request("teacher id must be an integer");
    };

    if let Some(raw) = query.deactivate.as_deref() {
        let Some(flag) = parse_bool_param(raw) else {
            return bad_request("deactivate must be true or false");
        };
        return match staff_service::set_deactivated(&gateway, id, flag).await {
            Ok(rows) => Json(rows).into_response(),
            Err(err) => store_error("deactivate teacher", err),
        };
    }

    let Ok(Json(body)) = payload else {
        return bad_request("expected a JSON body with firstName, lastName and email");
    };
    match staff_service::update_staff(&gateway, id, &body.first_name, &body.last_name, &body.email)
        .await
    {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => store_error("update teacher", err),
    }
}

pub async fn activities_by_teacher_email(
    State(gateway): State<Gateway>,
    Path(email): Path<String>,
) -> Response {
    match staff_service::activities_by_email(&gateway, &email).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => store_error("activities by teacher email", err),
    }
}
