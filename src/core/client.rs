use serde_json::Value;

use crate::core::request::CreateJobRequest;
use crate::domain::model::{ApiRequest, ApiResponse, Endpoint, Job, JobStatus, Method};
use crate::domain::ports::{ConfigProvider, Dispatcher};
use crate::settings::SettingsGroup;
use crate::utils::error::{ConvertError, Result};

/// High-level job API over an injected dispatcher. All payload assembly and
/// validation happens here, on the client side; the dispatcher only carries
/// the finished request.
pub struct JobClient<D: Dispatcher, C: ConfigProvider> {
    dispatcher: D,
    config: C,
}

impl<D: Dispatcher, C: ConfigProvider> JobClient<D, C> {
    pub fn new(dispatcher: D, config: C) -> Self {
        Self { dispatcher, config }
    }

    pub async fn create_job(&self, request: &CreateJobRequest) -> Result<Job> {
        let mut payload = request.request_body()?;

        // Account defaults fill in whatever the request leaves unset.
        if !payload.contains_key("role") {
            if let Some(role) = self.config.role_arn() {
                payload.insert("role".to_string(), Value::String(role.to_string()));
            }
        }
        if !payload.contains_key("queue") {
            if let Some(queue) = self.config.queue() {
                payload.insert("queue".to_string(), Value::String(queue.to_string()));
            }
        }

        tracing::debug!("Submitting create-job request to {}", self.config.endpoint());
        let response = self
            .dispatcher
            .dispatch(ApiRequest {
                method: Method::Post,
                path: "/v1/jobs".to_string(),
                body: Some(Value::Object(payload)),
            })
            .await?;

        let job = parse_job(response)?;
        tracing::info!("Created job {}", job.id);
        Ok(job)
    }

    pub async fn get_job(&self, id: &str) -> Result<Job> {
        let response = self
            .dispatcher
            .dispatch(ApiRequest {
                method: Method::Get,
                path: format!("/v1/jobs/{}", id),
                body: None,
            })
            .await?;
        parse_job(response)
    }

    pub async fn cancel_job(&self, id: &str) -> Result<()> {
        tracing::debug!("Canceling job {}", id);
        let response = self
            .dispatcher
            .dispatch(ApiRequest {
                method: Method::Delete,
                path: format!("/v1/jobs/{}", id),
                body: None,
            })
            .await?;
        check_status(&response)?;
        Ok(())
    }

    pub async fn list_jobs(&self, status: Option<JobStatus>) -> Result<Vec<Job>> {
        let path = match status {
            Some(status) => format!("/v1/jobs?status={}", status.as_str()),
            None => "/v1/jobs".to_string(),
        };
        let response = self
            .dispatcher
            .dispatch(ApiRequest {
                method: Method::Get,
                path,
                body: None,
            })
            .await?;
        check_status(&response)?;
        let jobs = serde_json::from_value(response.body["jobs"].clone())?;
        Ok(jobs)
    }

    /// Resolve the account-specific endpoints the dispatcher should target.
    pub async fn describe_endpoints(&self) -> Result<Vec<Endpoint>> {
        let response = self
            .dispatcher
            .dispatch(ApiRequest {
                method: Method::Post,
                path: "/v1/endpoints".to_string(),
                body: None,
            })
            .await?;
        check_status(&response)?;
        let endpoints = serde_json::from_value(response.body["endpoints"].clone())?;
        Ok(endpoints)
    }
}

fn check_status(response: &ApiResponse) -> Result<()> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    let message = response.body["message"]
        .as_str()
        .unwrap_or("no error message in response")
        .to_string();
    Err(ConvertError::ApiError {
        code: response.status,
        message,
    })
}

fn parse_job(response: ApiResponse) -> Result<Job> {
    check_status(&response)?;
    let job = serde_json::from_value(response.body["job"].clone())?;
    Ok(job)
}
