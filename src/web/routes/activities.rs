use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::store_error;
use crate::database::gateway::Gateway;
use crate::services::activities_service::{self, NewActivity};

pub async fn list_activities(State(gateway): State<Gateway>) -> Response {
    match activities_service::list_activities(&gateway).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => store_error("list activities", err),
    }
}

pub async fn activity_detail(State(gateway): State<Gateway>, Path(id): Path<i64>) -> Response {
    match activities_service::activity_detail(&gateway, id).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => store_error("activity detail", err),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivityBody {
    pub name: String,
    pub staff_id: i64,
    pub category_id: i64,
    pub location_id: i64,
    #[serde(default)]
    pub allow_dropins: bool,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

pub async fn create_activity(
    State(gateway): State<Gateway>,
    Json(body): Json<NewActivityBody>,
) -> Response {
    let activity = NewActivity {
        name: &body.name,
        staff_id: body.staff_id,
        category_id: body.category_id,
        location_id: body.location_id,
        allow_dropins: body.allow_dropins,
        start_date: body.start_date,
        end_date: body.end_date,
    };
    match activities_service::create_activity(&gateway, activity).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => store_error("create activity", err),
    }
}
