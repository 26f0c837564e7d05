use std::sync::LazyLock;

use chrono::NaiveDateTime;

use crate::database::statements::{QueryDescriptor, StatementSet};

static STAFF_STATEMENTS: LazyLock<StatementSet> =
    LazyLock::new(|| StatementSet::new("staff", &["id"], &["name_first", "name_last", "email"]));

const SQL_ALL_STAFF: &str = "SELECT * FROM staff ORDER BY id ASC";

const SQL_STAFF_BY_EMAIL: &str = "SELECT * FROM staff WHERE email = $1";

const SQL_SET_STAFF_INACTIVE: &str = r#"
UPDATE staff SET date_inactive = $1 WHERE id = $2 RETURNING *
"#;

const SQL_ACTIVITIES_BY_STAFF_EMAIL: &str = r#"
SELECT * FROM activity
WHERE staff_id = (SELECT id FROM staff WHERE email = $1)
"#;

pub fn all_staff() -> QueryDescriptor {
    QueryDescriptor::new(SQL_ALL_STAFF, vec![])
}

pub fn staff_by_email(email: &str) -> QueryDescriptor {
    QueryDescriptor::new(SQL_STAFF_BY_EMAIL, vec![email.into()])
}

pub fn create_staff(name_first: &str, name_last: &str, email: &str) -> QueryDescriptor {
    STAFF_STATEMENTS.insert(vec![name_first.into(), name_last.into(), email.into()])
}

pub fn update_staff(id: i64, name_first: &str, name_last: &str, email: &str) -> QueryDescriptor {
    STAFF_STATEMENTS.update(vec![
        name_first.into(),
        name_last.into(),
        email.into(),
        id.into(),
    ])
}

pub fn set_staff_inactive(id: i64, deactivated_at: Option<NaiveDateTime>) -> QueryDescriptor {
    QueryDescriptor::new(SQL_SET_STAFF_INACTIVE, vec![deactivated_at.into(), id.into()])
}

pub fn activities_by_staff_email(email: &str) -> QueryDescriptor {
    QueryDescriptor::new(SQL_ACTIVITIES_BY_STAFF_EMAIL, vec![email.into()])
}
