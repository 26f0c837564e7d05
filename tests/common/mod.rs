#![allow(dead_code)]

use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use rollcall::config::AppConfig;
use rollcall::database::gateway::Gateway;

const SCHEMA: &str = r#"
CREATE TABLE student (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name_first TEXT NOT NULL,
  name_last TEXT NOT NULL,
  date_inactive TEXT
);
CREATE TABLE staff (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name_first TEXT NOT NULL,
  name_last TEXT NOT NULL,
  email TEXT NOT NULL,
  date_inactive TEXT
);
CREATE TABLE category (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL
);
CREATE TABLE location (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL
);
CREATE TABLE attendance_status (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL
);
CREATE TABLE activity (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  staff_id INTEGER NOT NULL REFERENCES staff(id),
  category_id INTEGER NOT NULL REFERENCES category(id),
  location_id INTEGER NOT NULL REFERENCES location(id),
  allow_dropins INTEGER NOT NULL DEFAULT 0,
  start_date TEXT NOT NULL,
  end_date TEXT NOT NULL
);
CREATE TABLE activity_enrollment (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  student_id INTEGER NOT NULL REFERENCES student(id),
  activity_id INTEGER NOT NULL REFERENCES activity(id),
  start_date TEXT NOT NULL,
  end_date TEXT
);
-- No uniqueness on (student_id, activity_id, date): attendance is
-- append-only and corrections are later rows.
CREATE TABLE attendance (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  student_id INTEGER NOT NULL REFERENCES student(id),
  activity_id INTEGER NOT NULL REFERENCES activity(id),
  date TEXT NOT NULL,
  status_id INTEGER NOT NULL REFERENCES attendance_status(id),
  comment TEXT,
  date_entered TEXT NOT NULL
);
"#;

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        statement_timeout: Duration::from_secs(5),
    }
}

/// One shared in-memory database. A single pooled connection keeps every
/// caller on the same memory store.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    sqlx::raw_sql(SCHEMA)
        .execute(&pool)
        .await
        .expect("schema setup");
    pool
}

pub async fn test_gateway() -> (SqlitePool, Gateway) {
    let pool = test_pool().await;
    let gateway = Gateway::new(pool.clone(), &test_config());
    (pool, gateway)
}

pub async fn seed_student(pool: &SqlitePool, first: &str, last: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO student (name_first, name_last) VALUES (?, ?) RETURNING id")
        .bind(first)
        .bind(last)
        .fetch_one(pool)
        .await
        .expect("seed student")
}

pub async fn seed_staff(pool: &SqlitePool, first: &str, last: &str, email: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO staff (name_first, name_last, email) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(first)
    .bind(last)
    .bind(email)
    .fetch_one(pool)
    .await
    .expect("seed staff")
}

pub async fn seed_lookup(pool: &SqlitePool, table: &str, name: &str) -> i64 {
    let sql = format!("INSERT INTO {} (name) VALUES (?) RETURNING id", table);
    sqlx::query_scalar(&sql)
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("seed lookup")
}

pub async fn seed_activity(
    pool: &SqlitePool,
    name: &str,
    staff_id: i64,
    start_date: &str,
    end_date: &str,
) -> i64 {
    let category_id = seed_lookup(pool, "category", "Speech").await;
    let location_id = seed_lookup(pool, "location", "Main Campus").await;
    sqlx::query_scalar(
        "INSERT INTO activity \
         (name, staff_id, category_id, location_id, allow_dropins, start_date, end_date) \
         VALUES (?, ?, ?, ?, 1, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(staff_id)
    .bind(category_id)
    .bind(location_id)
    .bind(start_date)
    .bind(end_date)
    .fetch_one(pool)
    .await
    .expect("seed activity")
}

pub async fn seed_enrollment(
    pool: &SqlitePool,
    student_id: i64,
    activity_id: i64,
    start_date: &str,
    end_date: Option<&str>,
) {
    sqlx::query(
        "INSERT INTO activity_enrollment (student_id, activity_id, start_date, end_date) \
         VALUES (?, ?, ?, ?)",
    )
    .bind(student_id)
    .bind(activity_id)
    .bind(start_date)
    .bind(end_date)
    .execute(pool)
    .await
    .expect("seed enrollment");
}

pub async fn seed_attendance(
    pool: &SqlitePool,
    student_id: i64,
    activity_id: i64,
    date: &str,
    status_id: i64,
    comment: Option<&str>,
    date_entered: &str,
) {
    sqlx::query(
        "INSERT INTO attendance \
         (student_id, activity_id, date, status_id, comment, date_entered) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(student_id)
    .bind(activity_id)
    .bind(date)
    .bind(status_id)
    .bind(comment)
    .bind(date_entered)
    .execute(pool)
    .await
    .expect("seed attendance");
}
