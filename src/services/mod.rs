pub mod activities_service;
pub mod attendance_service;
pub mod lookups_service;
pub mod staff_service;
pub mod students_service;
