//! Typed HTTP client for the HRMS Lite API.

use crate::error::ErrorBody;
use crate::model::{AttendanceRecord, DashboardStats, Employee, MarkAttendance};
use chrono::NaiveDate;
use derive_more::Display;
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use std::env;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Display)]
pub enum ClientError {
    /// The service answered with a non-2xx status.
    #[display(fmt = "HTTP {} {:?}", status, detail)]
    Api { status: u16, detail: Option<String> },

    #[display(fmt = "Request failed: {}", _0)]
    Transport(reqwest::Error),

    #[display(fmt = "Invalid API URL: {}", _0)]
    InvalidUrl(String),
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Transport(e)
    }
}

impl ClientError {
    /// The server's `detail` when it sent one, `fallback` otherwise.
    pub fn message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HrmsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HrmsClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// Uses `HRMS_API_URL`, or `http://localhost:8000` when unset.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = env::var("HRMS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ClientError> {
        let url = self.endpoint(&["employees"])?;
        decode(self.http.get(url).send().await?).await
    }

    pub async fn create_employee(&self, employee: &Employee) -> Result<Employee, ClientError> {
        let url = self.endpoint(&["employees"])?;
        decode(self.http.post(url).json(employee).send().await?).await
    }

    pub async fn delete_employee(&self, employee_id: &str) -> Result<(), ClientError> {
        let url = self.endpoint(&["employees", employee_id])?;
        ensure_success(self.http.delete(url).send().await?).await?;
        Ok(())
    }

    pub async fn mark_attendance(
        &self,
        attendance: &MarkAttendance,
    ) -> Result<AttendanceRecord, ClientError> {
        let url = self.endpoint(&["attendance"])?;
        decode(self.http.post(url).json(attendance).send().await?).await
    }

    /// Attendance for one employee, newest first, optionally within `[start, end]`.
    pub async fn attendance_for(
        &self,
        employee_id: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, ClientError> {
        let mut url = self.endpoint(&["attendance", employee_id])?;
        if start.is_some() || end.is_some() {
            let mut query = url.query_pairs_mut();
            if let Some(start) = start {
                query.append_pair("start_date", &start.format("%Y-%m-%d").to_string());
            }
            if let Some(end) = end {
                query.append_pair("end_date", &end.format("%Y-%m-%d").to_string());
            }
        }

        decode(self.http.get(url).send().await?).await
    }

    pub async fn dashboard(&self) -> Result<DashboardStats, ClientError> {
        let url = self.endpoint(&["dashboard"])?;
        decode(self.http.get(url).send().await?).await
    }
}

async fn ensure_success(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let detail = resp.json::<ErrorBody>().await.ok().map(|body| body.detail);
    debug!(status = status.as_u16(), ?detail, "API request failed");

    Err(ClientError::Api {
        status: status.as_u16(),
        detail,
    })
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let resp = ensure_success(resp).await?;
    Ok(resp.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_encodes_segments() {
        let client = HrmsClient::new("http://localhost:8000").unwrap();
        let url = client.endpoint(&["employees", "EMP 1/a"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/employees/EMP%201%2Fa");
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let client = HrmsClient::new("http://example.com/hr/").unwrap();
        let url = client.endpoint(&["dashboard"]).unwrap();
        assert_eq!(url.as_str(), "http://example.com/hr/dashboard");
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(HrmsClient::new("not a url"), Err(ClientError::InvalidUrl(_))));
        assert!(matches!(
            HrmsClient::new("mailto:hr@example.com"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn message_prefers_server_detail() {
        let with_detail = ClientError::Api {
            status: 400,
            detail: Some("Email already exists".to_string()),
        };
        let without_detail = ClientError::Api {
            status: 502,
            detail: None,
        };

        assert_eq!(with_detail.message("Failed to create employee"), "Email already exists");
        assert_eq!(
            without_detail.message("Failed to create employee"),
            "Failed to create employee"
        );
        assert_eq!(with_detail.status(), Some(400));
    }
}
