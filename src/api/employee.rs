use crate::{
    error::ApiError,
    model::Employee,
    utils::{
        db_utils::{employee_exists, is_constraint_violation, unique_violation},
        validation::{any_blank, is_valid_email},
    },
};
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{debug, error, info, instrument};

/// Whole roster in insertion order.
pub async fn fetch_roster(pool: &SqlitePool) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        r#"
        SELECT employee_id, full_name, email, department
        FROM employees
        ORDER BY rowid
        "#,
    )
    .fetch_all(pool)
    .await
}

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "Every employee on the roster", body = Vec<Employee>),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Employee"
)]
#[instrument(name = "list_employees", skip(pool))]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<impl Responder, ApiError> {
    let employees = fetch_roster(pool.get_ref()).await?;
    debug!(count = employees.len(), "Fetched roster");

    Ok(HttpResponse::Ok().json(employees))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = Employee,
    responses(
        (status = 200, description = "Employee created", body = Employee),
        (
            status = 400,
            description = "Validation failed or duplicate",
            body = crate::error::ErrorBody,
            example = json!({
                "detail": "Employee ID already exists"
            })
        ),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Employee"
)]
#[instrument(
    name = "create_employee",
    skip(pool, payload),
    fields(employee_id = %payload.employee_id)
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<Employee>,
) -> Result<impl Responder, ApiError> {
    let employee = payload.into_inner();

    if any_blank(&[&employee.employee_id, &employee.full_name, &employee.department]) {
        return Err(ApiError::bad_request("All fields are required"));
    }

    if !is_valid_email(&employee.email) {
        info!(email = %employee.email, "Rejected invalid email");
        return Err(ApiError::bad_request("Invalid email format"));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO employees (employee_id, full_name, email, department)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&employee.employee_id)
    .bind(&employee.full_name)
    .bind(&employee.email)
    .bind(&employee.department)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => {
            info!("Employee created");
            Ok(HttpResponse::Ok().json(employee))
        }
        Err(e) => {
            if let Some(violation) = unique_violation(&e) {
                if violation.involves("employee_id") {
                    return Err(ApiError::bad_request("Employee ID already exists"));
                }
                if violation.involves("email") {
                    return Err(ApiError::bad_request("Email already exists"));
                }
            }
            if is_constraint_violation(&e) {
                return Err(ApiError::bad_request("Database constraint violation"));
            }

            error!(error = %e, "Failed to create employee");
            Err(ApiError::Internal)
        }
    }
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (
            status = 200,
            description = "Employee and their attendance removed",
            body = Object,
            example = json!({
                "message": "Employee deleted successfully"
            })
        ),
        (
            status = 404,
            description = "Employee not found",
            body = crate::error::ErrorBody,
            example = json!({
                "detail": "Employee not found"
            })
        ),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Employee"
)]
#[instrument(name = "delete_employee", skip(pool))]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let employee_id = path.into_inner();

    let mut tx = pool.begin().await?;

    if !employee_exists(&mut *tx, &employee_id).await? {
        return Err(ApiError::not_found("Employee not found"));
    }

    let removed = sqlx::query("DELETE FROM attendance WHERE employee_id = ?")
        .bind(&employee_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    sqlx::query("DELETE FROM employees WHERE employee_id = ?")
        .bind(&employee_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    info!(attendance_removed = removed, "Employee deleted");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully"
    })))
}
