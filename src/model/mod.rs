pub mod attendance;
pub mod dashboard;
pub mod employee;

pub use attendance::{AttendanceRecord, AttendanceStatus, MarkAttendance};
pub use dashboard::{DashboardStats, EmployeeStat};
pub use employee::Employee;
