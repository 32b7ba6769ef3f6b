use crate::client::HrmsClient;
use crate::model::{DashboardStats, EmployeeStat, dashboard::NOT_MARKED};

/// Shown regardless of what the server said.
pub const DASHBOARD_FAILED: &str = "Failed to fetch dashboard statistics";

/// One table row, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRow {
    pub employee_id: String,
    pub full_name: String,
    pub present_days: String,
    pub total_days: String,
    pub attendance_rate: String,
}

impl From<&EmployeeStat> for DashboardRow {
    fn from(stat: &EmployeeStat) -> Self {
        let (present_days, total_days) = if stat.is_marked() {
            (stat.present_days.to_string(), stat.total_days.to_string())
        } else {
            (NOT_MARKED.to_string(), NOT_MARKED.to_string())
        };

        Self {
            employee_id: stat.employee_id.clone(),
            full_name: stat.full_name.clone(),
            present_days,
            total_days,
            attendance_rate: stat.rate_label(),
        }
    }
}

#[derive(Debug)]
pub struct DashboardView {
    pub stats: Option<DashboardStats>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for DashboardView {
    /// Starts out loading, before the first fetch completes.
    fn default() -> Self {
        Self {
            stats: None,
            loading: true,
            error: None,
        }
    }
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(&mut self, client: &HrmsClient) {
        self.loading = true;
        match client.dashboard().await {
            Ok(stats) => {
                self.stats = Some(stats);
                self.error = None;
            }
            Err(_) => self.error = Some(DASHBOARD_FAILED.to_string()),
        }
        self.loading = false;
    }

    pub fn total_employees(&self) -> usize {
        self.stats.as_ref().map_or(0, |s| s.total_employees)
    }

    pub fn total_attendance_records(&self) -> usize {
        self.stats.as_ref().map_or(0, |s| s.total_attendance_records)
    }

    pub fn rows(&self) -> Vec<DashboardRow> {
        self.stats
            .iter()
            .flat_map(|s| s.employee_stats.iter())
            .map(DashboardRow::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(
        id: &str,
        present_days: u32,
        total_days: u32,
        attendance_rate: Option<f64>,
    ) -> EmployeeStat {
        EmployeeStat {
            employee_id: id.to_string(),
            full_name: format!("Name {id}"),
            present_days,
            total_days,
            attendance_rate,
        }
    }

    #[test]
    fn unmarked_employees_render_not_marked_everywhere() {
        let row = DashboardRow::from(&stat("E1", 0, 0, None));
        assert_eq!(row.present_days, "Not Marked");
        assert_eq!(row.total_days, "Not Marked");
        assert_eq!(row.attendance_rate, "Not Marked");
    }

    #[test]
    fn marked_employees_render_counts_and_rate() {
        let row = DashboardRow::from(&stat("E1", 3, 4, Some(75.0)));
        assert_eq!(row.present_days, "3");
        assert_eq!(row.total_days, "4");
        assert_eq!(row.attendance_rate, "75.0%");
    }

    #[test]
    fn empty_view_reports_zero_totals() {
        let view = DashboardView::new();
        assert!(view.loading);
        assert_eq!(view.total_employees(), 0);
        assert_eq!(view.total_attendance_records(), 0);
        assert!(view.rows().is_empty());
    }
}
