use hrms_lite::model::{AttendanceStatus, MarkAttendance};

mod common;
use common::{date, spawn_app};

fn mark(employee_id: &str, day: &str, status: AttendanceStatus) -> MarkAttendance {
    MarkAttendance {
        employee_id: employee_id.to_string(),
        date: date(day),
        status,
    }
}

#[actix_web::test]
async fn marking_returns_the_stored_record() {
    let app = spawn_app().await;
    app.add_employee("EMP-001", "Alice Archer").await;

    let record = app
        .client
        .mark_attendance(&mark("EMP-001", "2024-01-01", AttendanceStatus::Absent))
        .await
        .expect("mark");

    assert!(record.id > 0);
    assert_eq!(record.employee_id, "EMP-001");
    assert_eq!(record.date, date("2024-01-01"));
    assert_eq!(record.status, AttendanceStatus::Absent);
}

#[actix_web::test]
async fn same_day_cannot_be_marked_twice() {
    let app = spawn_app().await;
    app.add_employee("EMP-001", "Alice Archer").await;
    app.client
        .mark_attendance(&mark("EMP-001", "2024-01-01", AttendanceStatus::Present))
        .await
        .expect("first mark");

    let err = app
        .client
        .mark_attendance(&mark("EMP-001", "2024-01-01", AttendanceStatus::Absent))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.message("fallback"), "Attendance already marked for this date");
}

#[actix_web::test]
async fn marking_unknown_employee_is_not_found() {
    let app = spawn_app().await;

    let err = app
        .client
        .mark_attendance(&mark("GHOST", "2024-01-01", AttendanceStatus::Present))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message("fallback"), "Employee not found");
}

#[actix_web::test]
async fn unknown_status_is_rejected_with_a_readable_detail() {
    let app = spawn_app().await;
    app.add_employee("EMP-001", "Alice Archer").await;

    let resp = reqwest::Client::new()
        .post(format!("{}/attendance", app.base_url))
        .json(&serde_json::json!({
            "employee_id": "EMP-001",
            "date": "2024-01-01",
            "status": "Late"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "Status must be 'Present' or 'Absent'");
}

#[actix_web::test]
async fn records_come_back_newest_first() {
    let app = spawn_app().await;
    app.add_employee("EMP-001", "Alice Archer").await;
    for day in ["2024-01-02", "2024-01-03", "2024-01-01"] {
        app.client
            .mark_attendance(&mark("EMP-001", day, AttendanceStatus::Present))
            .await
            .expect("mark");
    }

    let records = app.client.attendance_for("EMP-001", None, None).await.unwrap();
    let days: Vec<_> = records.iter().map(|r| r.date.to_string()).collect();
    assert_eq!(days, ["2024-01-03", "2024-01-02", "2024-01-01"]);
}

#[actix_web::test]
async fn date_filters_are_inclusive_and_optional() {
    let app = spawn_app().await;
    app.add_employee("EMP-001", "Alice Archer").await;
    app.add_employee("EMP-002", "Bob Builder").await;
    for day in ["2024-01-01", "2024-01-02", "2024-01-03"] {
        app.client
            .mark_attendance(&mark("EMP-001", day, AttendanceStatus::Present))
            .await
            .expect("mark");
    }
    app.client
        .mark_attendance(&mark("EMP-002", "2024-01-02", AttendanceStatus::Absent))
        .await
        .expect("mark other employee");

    let from_second = app
        .client
        .attendance_for("EMP-001", Some(date("2024-01-02")), None)
        .await
        .unwrap();
    assert_eq!(from_second.len(), 2);
    assert!(from_second.iter().all(|r| r.employee_id == "EMP-001"));

    let until_second = app
        .client
        .attendance_for("EMP-001", None, Some(date("2024-01-02")))
        .await
        .unwrap();
    let days: Vec<_> = until_second.iter().map(|r| r.date.to_string()).collect();
    assert_eq!(days, ["2024-01-02", "2024-01-01"]);

    let only_second = app
        .client
        .attendance_for("EMP-001", Some(date("2024-01-02")), Some(date("2024-01-02")))
        .await
        .unwrap();
    assert_eq!(only_second.len(), 1);
}

#[actix_web::test]
async fn empty_filter_params_mean_no_bound() {
    let app = spawn_app().await;
    app.add_employee("EMP-001", "Alice Archer").await;
    app.client
        .mark_attendance(&mark("EMP-001", "2024-01-01", AttendanceStatus::Present))
        .await
        .expect("mark");

    let resp = reqwest::Client::new()
        .get(format!("{}/attendance/EMP-001?start_date=&end_date=", app.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn unparsable_filter_date_is_a_bad_request() {
    let app = spawn_app().await;
    app.add_employee("EMP-001", "Alice Archer").await;

    let resp = reqwest::Client::new()
        .get(format!("{}/attendance/EMP-001?start_date=yesterday", app.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "Invalid date 'yesterday', expected YYYY-MM-DD");
}

#[actix_web::test]
async fn listing_unknown_employee_is_not_found() {
    let app = spawn_app().await;

    let err = app.client.attendance_for("GHOST", None, None).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message("fallback"), "Employee not found");
}
