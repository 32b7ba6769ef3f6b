//! Per-view state for a UI built on [`HrmsClient`](crate::client::HrmsClient).
//!
//! Each view owns its form fields, loading flag and error string. Methods
//! issue one request, wait for it, and only then update the state; a failed
//! request leaves the previous data in place and records a display string.

pub mod attendance;
pub mod dashboard;
pub mod employees;

pub use attendance::{AttendanceForm, AttendanceView, DateFilter};
pub use dashboard::{DashboardRow, DashboardView};
pub use employees::{EmployeeForm, EmployeesView};
