mod common;

use chrono::NaiveDate;

use rollcall::services::attendance_service::{self, AttendanceEntry};
use rollcall::services::students_service;

fn day(s: &str) -> NaiveDate {
    s.parse().expect("date literal")
}

fn entry(activity_id: i64, student_id: i64, status_id: i64, comment: &str) -> AttendanceEntry {
    AttendanceEntry {
        activity_id,
        student_id,
        date: day("2024-06-15"),
        status_id,
        comment: Some(comment.to_string()),
    }
}

#[tokio::test]
async fn a_batch_of_k_entries_appends_exactly_k_rows() {
    let (pool, gateway) = common::test_gateway().await;
    let staff = common::seed_staff(&pool, "Tess", "Ward", "tess@example.org").await;
    let activity = common::seed_activity(&pool, "Morning Group", staff, "2024-01-01", "2024-12-31").await;
    let status = common::seed_lookup(&pool, "attendance_status", "present").await;
    let a = common::seed_student(&pool, "Sam", "Irving").await;
    let b = common::seed_student(&pool, "Amy", "Abbott").await;
    let c = common::seed_student(&pool, "Zed", "Adams").await;

    let affected = attendance_service::record_batch(
        &gateway,
        &[
            entry(activity, a, status, "ok"),
            entry(activity, b, status, "ok"),
            entry(activity, c, status, "late"),
        ],
    )
    .await
    .unwrap();
    assert_eq!(affected, 3);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM attendance")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 3);
}

#[tokio::test]
async fn one_bad_entry_rolls_back_the_whole_batch() {
    let (pool, gateway) = common::test_gateway().await;
    let staff = common::seed_staff(&pool, "Tess", "Ward", "tess@example.org").await;
    let activity = common::seed_activity(&pool, "Morning Group", staff, "2024-01-01", "2024-12-31").await;
    let status = common::seed_lookup(&pool, "attendance_status", "present").await;
    let good = common::seed_student(&pool, "Sam", "Irving").await;

    let result = attendance_service::record_batch(
        &gateway,
        &[
            entry(activity, good, status, "ok"),
            // Nonexistent student: the foreign key rejects this entry.
            entry(activity, 9999, status, "ghost"),
        ],
    )
    .await;
    assert!(result.is_err());
    assert!(!result.unwrap_err().is_retryable());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM attendance")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0, "the sibling entry must not survive the rollback");
}

#[tokio::test]
async fn same_day_resubmission_appends_history_instead_of_updating() {
    let (pool, gateway) = common::test_gateway().await;
    let staff = common::seed_staff(&pool, "Tess", "Ward", "tess@example.org").await;
    let activity = common::seed_activity(&pool, "Morning Group", staff, "2024-01-01", "2024-12-31").await;
    let absent = common::seed_lookup(&pool, "attendance_status", "absent").await;
    let present = common::seed_lookup(&pool, "attendance_status", "present").await;
    let student = common::seed_student(&pool, "Sam", "Irving").await;
    common::seed_enrollment(&pool, student, activity, "2024-01-01", None).await;

    attendance_service::record_batch(&gateway, &[entry(activity, student, absent, "no-show")])
        .await
        .unwrap();
    attendance_service::record_batch(&gateway, &[entry(activity, student, present, "arrived")])
        .await
        .unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM attendance")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2, "corrections append rather than overwrite");

    // Read-time resolution picks the later correction.
    let roster = attendance_service::roster(&gateway, activity, day("2024-06-15"))
        .await
        .unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].status_id, Some(present));
    assert_eq!(roster[0].comment.as_deref(), Some("arrived"));

    // The student's full history keeps both rows.
    let history = students_service::attendance_history(&gateway, student, None)
        .await
        .unwrap();
    assert_eq!(history.len(), 2);
}

#[tokio::test]
async fn single_fact_can_be_appended_through_the_gateway() {
    let (pool, gateway) = common::test_gateway().await;
    let staff = common::seed_staff(&pool, "Tess", "Ward", "tess@example.org").await;
    let activity = common::seed_activity(&pool, "Morning Group", staff, "2024-01-01", "2024-12-31").await;
    let status = common::seed_lookup(&pool, "attendance_status", "present").await;
    let student = common::seed_student(&pool, "Sam", "Irving").await;

    let affected = gateway
        .execute(rollcall::database::catalog::attendance::record_attendance(
            activity,
            student,
            day("2024-06-15"),
            status,
            None,
            chrono::Utc::now().naive_utc(),
        ))
        .await
        .unwrap();
    assert_eq!(affected, 1);
}

#[tokio::test]
async fn history_range_filter_bounds_by_attendance_date() {
    let (pool, gateway) = common::test_gateway().await;
    let staff = common::seed_staff(&pool, "Tess", "Ward", "tess@example.org").await;
    let activity = common::seed_activity(&pool, "Morning Group", staff, "2024-01-01", "2024-12-31").await;
    let status = common::seed_lookup(&pool, "attendance_status", "present").await;
    let student = common::seed_student(&pool, "Sam", "Irving").await;
    for date in ["2024-03-01", "2024-06-15", "2024-09-20"] {
        common::seed_attendance(
            &pool,
            student,
            activity,
            date,
            status,
            None,
            "2024-09-21 08:00:00",
        )
        .await;
    }

    let all = students_service::attendance_history(&gateway, student, None)
        .await
        .unwrap();
    assert_eq!(all.len(), 3);

    let summer = students_service::attendance_history(
        &gateway,
        student,
        Some((day("2024-06-01"), day("2024-06-30"))),
    )
    .await
    .unwrap();
    assert_eq!(summer.len(), 1);
    assert_eq!(summer[0].date, day("2024-06-15"));
}
