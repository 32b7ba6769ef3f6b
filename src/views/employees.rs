use crate::client::HrmsClient;
use crate::model::Employee;
use tracing::debug;

pub const FETCH_FAILED: &str = "Failed to fetch employees";
pub const CREATE_FAILED: &str = "Failed to create employee";
pub const DELETE_FAILED: &str = "Failed to delete employee";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeForm {
    fn to_employee(&self) -> Employee {
        Employee::new(
            self.employee_id.trim(),
            self.full_name.trim(),
            self.email.trim(),
            self.department.trim(),
        )
    }
}

/// Roster screen: the employee list plus the "add employee" form.
#[derive(Debug, Default)]
pub struct EmployeesView {
    pub employees: Vec<Employee>,
    pub form: EmployeeForm,
    pub loading: bool,
    pub error: Option<String>,
}

impl EmployeesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, client: &HrmsClient) {
        self.loading = true;
        match client.list_employees().await {
            Ok(employees) => {
                self.employees = employees;
                self.error = None;
            }
            Err(e) => self.error = Some(e.message(FETCH_FAILED)),
        }
        self.loading = false;
    }

    /// Submits the form; on success the form is cleared and the list reloaded.
    pub async fn submit(&mut self, client: &HrmsClient) -> bool {
        if self.loading {
            return false;
        }

        self.loading = true;
        let created = match client.create_employee(&self.form.to_employee()).await {
            Ok(employee) => {
                debug!(employee_id = %employee.employee_id, "Employee added");
                self.form = EmployeeForm::default();
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(e.message(CREATE_FAILED));
                false
            }
        };
        self.loading = false;

        if created {
            self.load(client).await;
        }
        created
    }

    pub async fn delete(&mut self, client: &HrmsClient, employee_id: &str) -> bool {
        match client.delete_employee(employee_id).await {
            Ok(()) => {
                self.employees.retain(|e| e.employee_id != employee_id);
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(e.message(DELETE_FAILED));
                false
            }
        }
    }
}
