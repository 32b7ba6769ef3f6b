use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP-001",
        "full_name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering"
    })
)]
pub struct Employee {
    #[schema(example = "EMP-001")]
    pub employee_id: String,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "john.doe@company.com", format = "email")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,
}

impl Employee {
    pub fn new(
        employee_id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            full_name: full_name.into(),
            email: email.into(),
            department: department.into(),
        }
    }
}
