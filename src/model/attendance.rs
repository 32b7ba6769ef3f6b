use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// The two valid attendance outcomes for a day.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    sqlx::Type,
    ToSchema,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "EMP-001")]
    pub employee_id: String,

    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,

    #[schema(example = "Present")]
    pub status: AttendanceStatus,
}

/// Payload of a "mark attendance" action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = "EMP-001")]
    pub employee_id: String,

    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,

    #[schema(example = "Present")]
    pub status: AttendanceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_text_matches_wire_format() {
        assert_eq!(AttendanceStatus::Present.to_string(), "Present");
        assert_eq!(AttendanceStatus::Absent.as_ref(), "Absent");
        assert_eq!(
            serde_json::to_value(AttendanceStatus::Absent).unwrap(),
            serde_json::json!("Absent")
        );
    }

    #[test]
    fn status_parsing_is_exact() {
        assert_eq!(AttendanceStatus::from_str("Present").unwrap(), AttendanceStatus::Present);
        assert!(AttendanceStatus::from_str("present").is_err());
        assert!(AttendanceStatus::from_str("Late").is_err());
    }
}
