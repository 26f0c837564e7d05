pub mod routes;

use axum::routing::{get, post};
use axum::Router;

use crate::database::gateway::Gateway;
use self::routes::{activities, lookups, students, teachers};

pub fn router(gateway: Gateway) -> Router {
    Router::new()
        .route(
            "/api/v1/students",
            get(students::list_students).post(students::create_student),
        )
        // Static segment must be registered alongside the :id capture below;
        // the router prefers the literal match.
        .route(
            "/api/v1/students/activity",
            get(students::activity_roster).post(students::record_attendance),
        )
        .route(
            "/api/v1/students/:id",
            get(students::student_by_id).put(students::put_student),
        )
        .route(
            "/api/v1/students/:id/activities",
            get(students::student_history),
        )
        .route(
            "/api/v1/teachers",
            get(teachers::list_teachers).post(teachers::create_teacher),
        )
        .route(
            "/api/v1/teachers/:email",
            get(teachers::teacher_by_email).put(teachers::put_teacher),
        )
        .route(
            "/api/v1/teachers/:email/activity",
            get(teachers::activities_by_teacher_email),
        )
        .route("/api/v1/activities", get(activities::list_activities))
        .route("/api/v1/activity", post(activities::create_activity))
        .route("/api/v1/activity/:id", get(activities::activity_detail))
        .route("/api/v1/categories", get(lookups::list_categories))
        .route("/api/v1/locations", get(lookups::list_locations))
        .route("/api/v1/status", get(lookups::list_attendance_statuses))
        .with_state(gateway)
}
