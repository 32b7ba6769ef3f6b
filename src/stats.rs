//! Attendance aggregation and date-range filtering.
//!
//! Everything here is a pure function over already-fetched snapshots. The
//! dashboard endpoint and the client views both go through these, so the
//! service and the UI agree on how a rate is computed.

use crate::model::{AttendanceRecord, AttendanceStatus, DashboardStats, Employee, EmployeeStat};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Inclusive date bounds; a missing side is unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

/// Keeps the records dated within `[start, end]`, preserving input order.
pub fn filter_by_date(
    records: Vec<AttendanceRecord>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<AttendanceRecord> {
    let range = DateRange::new(start, end);
    if range.is_unbounded() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| range.contains(record.date))
        .collect()
}

/// `present / total * 100`, or `None` when nothing has been recorded yet.
pub fn attendance_rate(present_days: u32, total_days: u32) -> Option<f64> {
    if total_days == 0 {
        return None;
    }
    Some(f64::from(present_days) / f64::from(total_days) * 100.0)
}

/// One stat per roster employee, in roster order.
///
/// Records for employees missing from the roster are ignored. When several
/// records share an (employee, date) pair the last one in `records` wins, so
/// the date counts once with its latest status.
pub fn aggregate(employees: &[Employee], records: &[AttendanceRecord]) -> Vec<EmployeeStat> {
    let mut latest: HashMap<(&str, NaiveDate), AttendanceStatus> = HashMap::new();
    for record in records {
        latest.insert((record.employee_id.as_str(), record.date), record.status);
    }

    // (present, total) per employee id
    let mut tallies: HashMap<&str, (u32, u32)> = HashMap::new();
    for ((employee_id, _), status) in latest {
        let tally = tallies.entry(employee_id).or_default();
        tally.1 += 1;
        if status == AttendanceStatus::Present {
            tally.0 += 1;
        }
    }

    employees
        .iter()
        .map(|employee| {
            let (present_days, total_days) = tallies
                .get(employee.employee_id.as_str())
                .copied()
                .unwrap_or_default();

            EmployeeStat {
                employee_id: employee.employee_id.clone(),
                full_name: employee.full_name.clone(),
                present_days,
                total_days,
                attendance_rate: attendance_rate(present_days, total_days),
            }
        })
        .collect()
}

/// Totals plus per-employee stats, most present days first. The sort is
/// stable, so employees with equal present days stay in roster order.
pub fn dashboard(employees: &[Employee], records: &[AttendanceRecord]) -> DashboardStats {
    let mut employee_stats = aggregate(employees, records);
    employee_stats.sort_by(|a, b| b.present_days.cmp(&a.present_days));

    DashboardStats {
        total_employees: employees.len(),
        total_attendance_records: records.len(),
        employee_stats,
    }
}
