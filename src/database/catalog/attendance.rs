use chrono::{NaiveDate, NaiveDateTime};

use crate::database::statements::QueryDescriptor;

/// The reconciled roster for one (activity, date) pair.
///
/// Two branches, deduplicated by UNION:
///  - expected: enrollment joined to student and activity, with the matching
///    attendance row attached via LEFT JOIN so expected-but-unrecorded
///    students still appear (null status/comment). Filters keep only rows
///    where the target date sits inside both the activity window and the
///    enrollment window; a null enrollment end date counts as open-ended
///    ('9999-12-31' stands in for the unbounded future — date columns are
///    ISO-8601 TEXT, so the BETWEEN stays lexicographic).
///  - recorded: attendance joined directly, which surfaces students recorded
///    outside any enrollment window (drop-ins, corrections).
///
/// When several attendance rows exist for one (student, activity, date), both
/// branches join only the one with the greatest date_entered, so the latest
/// correction wins at read time.
///
/// $1 = date, $2 = activity id.
const SQL_ROSTER: &str = r#"
SELECT t.* FROM (
  SELECT
     student.id AS student_id
    ,student.name_first
    ,student.name_last
    ,activity.id AS activity_id
    ,a.date_entered
    ,a.status_id
    ,a.comment
  FROM
    activity_enrollment AS ae
    INNER JOIN student ON ae.student_id = student.id
    INNER JOIN activity ON ae.activity_id = activity.id
    LEFT JOIN attendance AS a
      ON a.student_id = student.id
     AND a.activity_id = activity.id
     AND a.date = $1
     AND a.date_entered = (
           SELECT MAX(a2.date_entered) FROM attendance AS a2
           WHERE a2.student_id = a.student_id
             AND a2.activity_id = a.activity_id
             AND a2.date = a.date
         )
  WHERE
    $1 BETWEEN activity.start_date AND activity.end_date
    AND $1 BETWEEN ae.start_date AND COALESCE(ae.end_date, '9999-12-31')
    AND activity.id = $2
  UNION
  SELECT
     student.id AS student_id
    ,student.name_first
    ,student.name_last
    ,activity.id AS activity_id
    ,a.date_entered
    ,a.status_id
    ,a.comment
  FROM
    attendance AS a
    INNER JOIN student ON student.id = a.student_id
    INNER JOIN activity ON activity.id = a.activity_id
  WHERE
    a.date = $1
    AND activity.id = $2
    AND a.date_entered = (
          SELECT MAX(a2.date_entered) FROM attendance AS a2
          WHERE a2.student_id = a.student_id
            AND a2.activity_id = a.activity_id
            AND a2.date = a.date
        )
) AS t
ORDER BY t.name_first, t.name_last
"#;

const SQL_RECORD_ATTENDANCE: &str = r#"
INSERT INTO attendance (activity_id, student_id, date, status_id, comment, date_entered)
VALUES ($1, $2, $3, $4, $5, $6)
"#;

pub fn roster_for_activity_date(activity_id: i64, date: NaiveDate) -> QueryDescriptor {
    QueryDescriptor::new(SQL_ROSTER, vec![date.into(), activity_id.into()])
}

/// Appends one attendance fact; never updates a prior same-day row.
pub fn record_attendance(
    activity_id: i64,
    student_id: i64,
    date: NaiveDate,
    status_id: i64,
    comment: Option<&str>,
    entered_at: NaiveDateTime,
) -> QueryDescriptor {
    QueryDescriptor::new(
        SQL_RECORD_ATTENDANCE,
        vec![
            activity_id.into(),
            student_id.into(),
            date.into(),
            status_id.into(),
            comment.into(),
            entered_at.into(),
        ],
    )
}
