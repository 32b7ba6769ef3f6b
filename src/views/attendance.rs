use crate::client::HrmsClient;
use crate::model::{AttendanceRecord, AttendanceStatus, Employee, MarkAttendance};
use chrono::{Local, NaiveDate};

pub const EMPLOYEES_FAILED: &str = "Failed to fetch employees";
pub const MARK_FAILED: &str = "Failed to mark attendance";
pub const RECORDS_FAILED: &str = "Failed to fetch attendance records";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceForm {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl Default for AttendanceForm {
    /// Nobody selected, today's date, Present.
    fn default() -> Self {
        Self {
            employee_id: String::new(),
            date: Local::now().date_naive(),
            status: AttendanceStatus::Present,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Attendance screen: the "mark attendance" form and the per-employee record list.
#[derive(Debug, Default)]
pub struct AttendanceView {
    pub employees: Vec<Employee>,
    pub records: Vec<AttendanceRecord>,
    pub selected_employee: Option<String>,
    pub filter: DateFilter,
    pub form: AttendanceForm,
    pub busy: bool,
    pub error: Option<String>,
}

impl AttendanceView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load_employees(&mut self, client: &HrmsClient) {
        match client.list_employees().await {
            Ok(employees) => self.employees = employees,
            Err(e) => self.error = Some(e.message(EMPLOYEES_FAILED)),
        }
    }

    /// Display name for an id, falling back to the id itself.
    pub fn employee_name<'a>(&'a self, employee_id: &'a str) -> &'a str {
        self.employees
            .iter()
            .find(|e| e.employee_id == employee_id)
            .map(|e| e.full_name.as_str())
            .unwrap_or(employee_id)
    }

    /// Label for the submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.busy { "Marking..." } else { "Mark Attendance" }
    }

    /// Sends the form. Ignored while another request is in flight. Refreshes
    /// the record list when the marked employee is the one being viewed.
    pub async fn mark_attendance(&mut self, client: &HrmsClient) -> bool {
        if self.busy {
            return false;
        }

        self.busy = true;
        let payload = MarkAttendance {
            employee_id: self.form.employee_id.clone(),
            date: self.form.date,
            status: self.form.status,
        };

        let marked = match client.mark_attendance(&payload).await {
            Ok(_) => {
                self.form = AttendanceForm::default();
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(e.message(MARK_FAILED));
                false
            }
        };
        self.busy = false;

        if marked && self.selected_employee.as_deref() == Some(payload.employee_id.as_str()) {
            self.fetch_records(client).await;
        }
        marked
    }

    /// Switches the viewed employee; `None` clears the list.
    pub async fn select_employee(&mut self, client: &HrmsClient, employee_id: Option<String>) {
        self.selected_employee = employee_id.filter(|id| !id.is_empty());
        if self.selected_employee.is_some() {
            self.fetch_records(client).await;
        } else {
            self.records.clear();
        }
    }

    pub async fn apply_date_filter(&mut self, client: &HrmsClient, filter: DateFilter) {
        self.filter = filter;
        if self.selected_employee.is_some() {
            self.fetch_records(client).await;
        }
    }

    pub async fn clear_date_filter(&mut self, client: &HrmsClient) {
        self.apply_date_filter(client, DateFilter::default()).await;
    }

    /// Reloads the selected employee's records with the current filter.
    /// A failure empties the list.
    pub async fn fetch_records(&mut self, client: &HrmsClient) {
        let Some(employee_id) = self.selected_employee.clone() else {
            return;
        };

        self.busy = true;
        match client
            .attendance_for(&employee_id, self.filter.start_date, self.filter.end_date)
            .await
        {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.message(RECORDS_FAILED));
                self.records.clear();
            }
        }
        self.busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_defaults_to_today_and_present() {
        let form = AttendanceForm::default();
        assert!(form.employee_id.is_empty());
        assert!((Local::now().date_naive() - form.date).num_days().abs() <= 1);
        assert_eq!(form.status, AttendanceStatus::Present);
    }

    #[test]
    fn unknown_ids_display_as_themselves() {
        let mut view = AttendanceView::new();
        view.employees
            .push(Employee::new("E1", "Alice", "alice@example.com", "Ops"));

        assert_eq!(view.employee_name("E1"), "Alice");
        assert_eq!(view.employee_name("E9"), "E9");
    }

    #[test]
    fn submit_label_follows_busy_flag() {
        let mut view = AttendanceView::new();
        assert_eq!(view.submit_label(), "Mark Attendance");
        view.busy = true;
        assert_eq!(view.submit_label(), "Marking...");
    }
}
