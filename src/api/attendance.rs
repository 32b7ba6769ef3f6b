use crate::{
    error::ApiError,
    model::{AttendanceRecord, AttendanceStatus},
    stats::filter_by_date,
    utils::db_utils::{employee_exists, unique_violation},
};
use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, error, info, instrument};
use utoipa::{IntoParams, ToSchema};

/// Server side of [`MarkAttendance`](crate::model::MarkAttendance): same JSON,
/// but `status` stays a string so an unknown value gets the readable
/// "Status must be 'Present' or 'Absent'" 400 instead of a deserializer error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkAttendanceRequest {
    #[schema(example = "EMP-001")]
    pub employee_id: String,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "Present")]
    pub status: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AttendanceQuery {
    /// Earliest date to include (inclusive), `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// Latest date to include (inclusive), `YYYY-MM-DD`
    pub end_date: Option<String>,
}

/// Empty strings count as "no bound", the way the UI sends a cleared filter.
fn parse_date_param(value: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                ApiError::bad_request(format!("Invalid date '{raw}', expected YYYY-MM-DD"))
            }),
    }
}

/// Mark Attendance
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = MarkAttendanceRequest,
    responses(
        (status = 200, description = "Attendance recorded", body = AttendanceRecord),
        (
            status = 400,
            description = "Invalid status or already marked",
            body = crate::error::ErrorBody,
            example = json!({
                "detail": "Attendance already marked for this date"
            })
        ),
        (status = 404, description = "Employee not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Attendance"
)]
#[instrument(
    name = "mark_attendance",
    skip(pool, payload),
    fields(employee_id = %payload.employee_id, date = %payload.date)
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<MarkAttendanceRequest>,
) -> Result<impl Responder, ApiError> {
    let request = payload.into_inner();

    let status = AttendanceStatus::from_str(&request.status)
        .map_err(|_| ApiError::bad_request("Status must be 'Present' or 'Absent'"))?;

    if !employee_exists(pool.get_ref(), &request.employee_id).await? {
        return Err(ApiError::not_found("Employee not found"));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO attendance (employee_id, date, status)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(&request.employee_id)
    .bind(request.date)
    .bind(status)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(done) => {
            info!(%status, "Attendance marked");
            Ok(HttpResponse::Ok().json(AttendanceRecord {
                id: done.last_insert_rowid(),
                employee_id: request.employee_id,
                date: request.date,
                status,
            }))
        }
        Err(e) => {
            if unique_violation(&e).is_some() {
                return Err(ApiError::bad_request("Attendance already marked for this date"));
            }

            error!(error = %e, "Failed to mark attendance");
            Err(ApiError::Internal)
        }
    }
}

/// Attendance of one employee
#[utoipa::path(
    get,
    path = "/attendance/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID"),
        AttendanceQuery
    ),
    responses(
        (status = 200, description = "Records newest first", body = Vec<AttendanceRecord>),
        (status = 400, description = "Unparsable date filter", body = crate::error::ErrorBody),
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
    tag = "Attendance"
)]
#[instrument(name = "employee_attendance", skip(pool))]
pub async fn employee_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    query: web::Query<AttendanceQuery>,
) -> Result<impl Responder, ApiError> {
    let employee_id = path.into_inner();
    let start = parse_date_param(query.start_date.as_deref())?;
    let end = parse_date_param(query.end_date.as_deref())?;

    if !employee_exists(pool.get_ref(), &employee_id).await? {
        return Err(ApiError::not_found("Employee not found"));
    }

    let records = sqlx::query_as::<_, AttendanceRecord>(
        r#"
        SELECT id, employee_id, date, status
        FROM attendance
        WHERE employee_id = ?
        ORDER BY date DESC
        "#,
    )
    .bind(&employee_id)
    .fetch_all(pool.get_ref())
    .await?;

    let records = filter_by_date(records, start, end);
    debug!(count = records.len(), ?start, ?end, "Fetched attendance");

    Ok(HttpResponse::Ok().json(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_date_params_are_unbounded() {
        assert_eq!(parse_date_param(None).unwrap(), None);
        assert_eq!(parse_date_param(Some("")).unwrap(), None);
        assert_eq!(parse_date_param(Some("  ")).unwrap(), None);
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date_param(Some("2024-02-29")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn bad_dates_name_the_value() {
        let err = parse_date_param(Some("29/02/2024")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid date '29/02/2024', expected YYYY-MM-DD");
    }
}
