use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// HTTP verb of an API call, interpreted by the dispatcher collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// One assembled API call: path relative to the account endpoint plus the
/// wire payload. Transport, signing and retries belong to the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Submitted,
    Progressing,
    Complete,
    Canceled,
    Error,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Submitted => "SUBMITTED",
            JobStatus::Progressing => "PROGRESSING",
            JobStatus::Complete => "COMPLETE",
            JobStatus::Canceled => "CANCELED",
            JobStatus::Error => "ERROR",
        }
    }
}

/// A transcoding job as reported by the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub arn: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub error_code: Option<i64>,
    pub error_message: Option<String>,
    pub id: String,
    pub queue: Option<String>,
    pub role: Option<String>,
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub user_metadata: HashMap<String, String>,
}

/// Account-specific API endpoint returned by the endpoint discovery call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_deserializes_from_camel_case() {
        let job: Job = serde_json::from_value(json!({
            "id": "1751234567890-abc123",
            "arn": "arn:vodconvert:jobs/1751234567890-abc123",
            "status": "PROGRESSING",
            "createdAt": "2026-08-07T12:00:00Z",
            "userMetadata": { "tenant": "acme" }
        }))
        .unwrap();
        assert_eq!(job.status, Some(JobStatus::Progressing));
        assert_eq!(job.user_metadata["tenant"], "acme");
    }

    #[test]
    fn test_unknown_status_is_an_error() {
        let result: std::result::Result<JobStatus, _> =
            serde_json::from_value(json!("QUEUED"));
        assert!(result.is_err());
    }
}
