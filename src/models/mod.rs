pub mod activities;
pub mod attendance;
pub mod lookups;
pub mod staff;
pub mod students;

pub use activities::{ActivityDetailRow, ActivityRow};
pub use attendance::{AttendanceRow, AttendanceStatusRow, RosterRow};
pub use lookups::{CategoryRow, LocationRow};
pub use staff::StaffRow;
pub use students::StudentRow;
