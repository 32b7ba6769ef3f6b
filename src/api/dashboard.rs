use crate::{
    api::employee::fetch_roster,
    error::ApiError,
    model::{AttendanceRecord, DashboardStats},
    stats,
};
use actix_web::{HttpResponse, Responder, web};
use futures_util::TryStreamExt;
use sqlx::SqlitePool;
use tracing::{debug, instrument};

/// Dashboard statistics
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (
            status = 200,
            description = "Totals and per-employee attendance, most present days first",
            body = DashboardStats
        ),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Dashboard"
)]
#[instrument(name = "dashboard", skip(pool))]
pub async fn get_dashboard(pool: web::Data<SqlitePool>) -> Result<impl Responder, ApiError> {
    let employees = fetch_roster(pool.get_ref()).await?;

    let records: Vec<AttendanceRecord> = sqlx::query_as::<_, AttendanceRecord>(
        "SELECT id, employee_id, date, status FROM attendance ORDER BY id",
    )
    .fetch(pool.get_ref())
    .try_collect()
    .await?;

    let stats: DashboardStats = stats::dashboard(&employees, &records);
    debug!(
        employees = stats.total_employees,
        records = stats.total_attendance_records,
        "Dashboard computed"
    );

    Ok(HttpResponse::Ok().json(stats))
}
