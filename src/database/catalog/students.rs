use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};

use crate::database::statements::{QueryDescriptor, StatementSet};

static STUDENT_STATEMENTS: LazyLock<StatementSet> =
    LazyLock::new(|| StatementSet::new("student", &["id"], &["name_first", "name_last"]));

const SQL_ALL_STUDENTS: &str = "SELECT * FROM student ORDER BY id ASC";

const SQL_STUDENT_BY_ID: &str = "SELECT * FROM student WHERE id = $1";

const SQL_SET_STUDENT_INACTIVE: &str = r#"
UPDATE student SET date_inactive = $1 WHERE id = $2 RETURNING *
"#;

const SQL_STUDENT_HISTORY: &str = r#"
SELECT * FROM attendance
WHERE student_id = $1
ORDER BY date ASC, date_entered ASC
"#;

const SQL_STUDENT_HISTORY_RANGE: &str = r#"
SELECT * FROM attendance
WHERE student_id = $1
  AND date BETWEEN $2 AND $3
ORDER BY date ASC, date_entered ASC
"#;

pub fn all_students() -> QueryDescriptor {
    QueryDescriptor::new(SQL_ALL_STUDENTS, vec![])
}

pub fn student_by_id(id: i64) -> QueryDescriptor {
    QueryDescriptor::new(SQL_STUDENT_BY_ID, vec![id.into()])
}

pub fn create_student(name_first: &str, name_last: &str) -> QueryDescriptor {
    STUDENT_STATEMENTS.insert(vec![name_first.into(), name_last.into()])
}

/// `None` clears the deactivation mark (reactivation).
pub fn set_student_inactive(id: i64, deactivated_at: Option<NaiveDateTime>) -> QueryDescriptor {
    QueryDescriptor::new(
        SQL_SET_STUDENT_INACTIVE,
        vec![deactivated_at.into(), id.into()],
    )
}

pub fn student_history(student_id: i64) -> QueryDescriptor {
    QueryDescriptor::new(SQL_STUDENT_HISTORY, vec![student_id.into()])
}

pub fn student_history_in_range(
    student_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> QueryDescriptor {
    QueryDescriptor::new(
        SQL_STUDENT_HISTORY_RANGE,
        vec![student_id.into(), start_date.into(), end_date.into()],
    )
}
