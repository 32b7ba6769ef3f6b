use crate::api::attendance::MarkAttendanceRequest;
use crate::error::ErrorBody;
use crate::model::{AttendanceRecord, AttendanceStatus, DashboardStats, Employee, EmployeeStat};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A small **Human Resource Management** service: an employee roster, a daily
attendance log, and a dashboard of attendance rates per employee.

### Key Features
- **Employee Management**
  - List, create and delete employees
- **Attendance Management**
  - Mark an employee Present or Absent for a date (once per date)
  - View an employee's attendance, optionally within a date range
- **Dashboard**
  - Totals plus present days, recorded days and attendance rate per employee

### Response Format
- JSON bodies
- Errors are `{"detail": "..."}` with a 4xx/5xx status
- `attendance_rate` is `null` for employees without any attendance marked
"#,
    ),
    paths(
        crate::api::index,

        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::employee_attendance,

        crate::api::dashboard::get_dashboard
    ),
    components(
        schemas(
            Employee,
            AttendanceStatus,
            AttendanceRecord,
            MarkAttendanceRequest,
            EmployeeStat,
            DashboardStats,
            ErrorBody
        )
    ),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Employee", description = "Employee roster APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Dashboard", description = "Attendance statistics"),
    )
)]
pub struct ApiDoc;
