use chrono::{NaiveDate, NaiveDateTime};

/// A positional argument for a parameterized statement.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlArg {
    Int(i64),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    Null,
}

impl From<i64> for SqlArg {
    fn from(v: i64) -> Self {
        SqlArg::Int(v)
    }
}

impl From<bool> for SqlArg {
    fn from(v: bool) -> Self {
        SqlArg::Int(v as i64)
    }
}

impl From<&str> for SqlArg {
    fn from(v: &str) -> Self {
        SqlArg::Text(v.to_string())
    }
}

impl From<String> for SqlArg {
    fn from(v: String) -> Self {
        SqlArg::Text(v)
    }
}

impl From<NaiveDate> for SqlArg {
    fn from(v: NaiveDate) -> Self {
        SqlArg::Date(v)
    }
}

impl From<NaiveDateTime> for SqlArg {
    fn from(v: NaiveDateTime) -> Self {
        SqlArg::Timestamp(v)
    }
}

impl<T: Into<SqlArg>> From<Option<T>> for SqlArg {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => SqlArg::Null,
        }
    }
}

/// Statement text plus the positional values to bind, ready for the gateway.
#[derive(Debug, Clone)]
pub struct QueryDescriptor {
    pub text: String,
    pub args: Vec<SqlArg>,
}

impl QueryDescriptor {
    pub fn new(text: impl Into<String>, args: Vec<SqlArg>) -> Self {
        QueryDescriptor {
            text: text.into(),
            args,
        }
    }
}

/// Precomputed INSERT/UPDATE templates for one table.
///
/// `key_fields` identify the row (used only in the update WHERE clause);
/// `value_fields` are the mutable columns. Both templates are built once at
/// construction. Placeholders are numbered left-to-right across the value
/// fields, and the update statement continues the same counter through the
/// key fields, so update arguments must be supplied in
/// value-fields-then-key-fields order.
///
/// Field lists must come from static declarations, never from request input.
#[derive(Debug)]
pub struct StatementSet {
    insert_sql: String,
    update_sql: String,
}

impl StatementSet {
    pub fn new(table: &str, key_fields: &[&str], value_fields: &[&str]) -> Self {
        let mut param = 1usize;

        let mut update_sql = format!("UPDATE {} SET ", table);
        for (idx, field) in value_fields.iter().enumerate() {
            if idx > 0 {
                update_sql.push_str(", ");
            }
            update_sql.push_str(&format!("{}=${}", field, param));
            param += 1;
        }
        update_sql.push_str(" WHERE ");
        for (idx, field) in key_fields.iter().enumerate() {
            if idx > 0 {
                update_sql.push_str(" AND ");
            }
            update_sql.push_str(&format!("{}=${}", field, param));
            param += 1;
        }
        update_sql.push_str(" RETURNING *");

        let mut insert_sql = format!("INSERT INTO {}({}) VALUES (", table, value_fields.join(", "));
        for idx in 0..value_fields.len() {
            if idx > 0 {
                insert_sql.push_str(", ");
            }
            insert_sql.push_str(&format!("${}", idx + 1));
        }
        insert_sql.push_str(") RETURNING *");

        StatementSet {
            insert_sql,
            update_sql,
        }
    }

    pub fn insert_sql(&self) -> &str {
        &self.insert_sql
    }

    pub fn update_sql(&self) -> &str {
        &self.update_sql
    }

    /// One argument per value field, in declared order.
    pub fn insert(&self, args: Vec<SqlArg>) -> QueryDescriptor {
        QueryDescriptor::new(self.insert_sql.clone(), args)
    }

    /// Value-field arguments first (declared order), then key-field arguments.
    pub fn update(&self, args: Vec<SqlArg>) -> QueryDescriptor {
        QueryDescriptor::new(self.update_sql.clone(), args)
    }
}
