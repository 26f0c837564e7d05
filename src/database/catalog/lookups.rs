use crate::database::statements::QueryDescriptor;

const SQL_ALL_CATEGORIES: &str = "SELECT * FROM category ORDER BY name ASC";

const SQL_ALL_LOCATIONS: &str = "SELECT * FROM location ORDER BY name ASC";

const SQL_ALL_ATTENDANCE_STATUSES: &str = "SELECT * FROM attendance_status ORDER BY id ASC";

pub fn all_categories() -> QueryDescriptor {
    QueryDescriptor::new(SQL_ALL_CATEGORIES, vec![])
}

pub fn all_locations() -> QueryDescriptor {
    QueryDescriptor::new(SQL_ALL_LOCATIONS, vec![])
}

pub fn all_attendance_statuses() -> QueryDescriptor {
    QueryDescriptor::new(SQL_ALL_ATTENDANCE_STATUSES, vec![])
}
