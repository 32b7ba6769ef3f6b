use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NOT_MARKED: &str = "Not Marked";

/// Attendance summary for one roster employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeStat {
    #[schema(example = "EMP-001")]
    pub employee_id: String,
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[schema(example = 1)]
    pub present_days: u32,
    #[schema(example = 2)]
    pub total_days: u32,
    /// Percentage of present days; `null` until attendance has been marked at least once
    #[schema(example = 50.0, nullable = true)]
    #[serde(default)]
    pub attendance_rate: Option<f64>,
}

impl EmployeeStat {
    pub fn is_marked(&self) -> bool {
        self.total_days > 0
    }

    /// Rate as shown to users, `"50.0%"` or `"Not Marked"`.
    pub fn rate_label(&self) -> String {
        match self.attendance_rate {
            Some(rate) => format!("{rate:.1}%"),
            None => NOT_MARKED.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    #[schema(example = 10)]
    pub total_employees: usize,
    #[schema(example = 120)]
    pub total_attendance_records: usize,
    pub employee_stats: Vec<EmployeeStat>,
}
