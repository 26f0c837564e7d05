use std::sync::LazyLock;

use chrono::NaiveDate;

use crate::database::statements::{QueryDescriptor, StatementSet};

static ACTIVITY_STATEMENTS: LazyLock<StatementSet> = LazyLock::new(|| {
    StatementSet::new(
        "activity",
        &["id"],
        &[
            "name",
            "staff_id",
            "category_id",
            "location_id",
            "allow_dropins",
            "start_date",
            "end_date",
        ],
    )
});

const SQL_ALL_ACTIVITIES: &str = "SELECT * FROM activity ORDER BY id ASC";

const SQL_ACTIVITY_DETAIL: &str = r#"
SELECT
   activity.id
  ,activity.name
  ,activity.start_date
  ,activity.end_date
  ,activity.allow_dropins
  ,staff.name_first || ' ' || staff.name_last AS staff_name
  ,category.name AS category_name
  ,location.name AS location_name
FROM
  activity
  INNER JOIN staff ON staff.id = activity.staff_id
  INNER JOIN category ON category.id = activity.category_id
  INNER JOIN location ON location.id = activity.location_id
WHERE activity.id = $1
"#;

pub fn all_activities() -> QueryDescriptor {
    QueryDescriptor::new(SQL_ALL_ACTIVITIES, vec![])
}

pub fn activity_detail(id: i64) -> QueryDescriptor {
    QueryDescriptor::new(SQL_ACTIVITY_DETAIL, vec![id.into()])
}

#[allow(clippy::too_many_arguments)]
pub fn create_activity(
    name: &str,
    staff_id: i64,
    category_id: i64,
    location_id: i64,
    allow_dropins: bool,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> QueryDescriptor {
    ACTIVITY_STATEMENTS.insert(vec![
        name.into(),
        staff_id.into(),
        category_id.into(),
        location_id.into(),
        allow_dropins.into(),
        start_date.into(),
        end_date.into(),
    ])
}
