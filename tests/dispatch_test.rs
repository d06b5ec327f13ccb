use anyhow::Result;
use async_trait::async_trait;
use httpmock::prelude::*;
use serde_json::{json, Value};
use vodconvert::{
    ApiRequest, ApiResponse, ClientConfig, ConvertError, CreateJobRequest, Dispatcher, JobClient,
    JobStatus, Method, SettingsGroup,
};

/// Minimal HTTP-backed dispatcher used only to prove the wire contract
/// against a mock server. The SDK itself ships no transport.
struct HttpDispatcher {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDispatcher {
    fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn dispatch(&self, request: ApiRequest) -> vodconvert::Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder
            .send()
            .await
            .map_err(|e| ConvertError::DispatchError {
                message: e.to_string(),
            })?;
        let status = response.status().as_u16();
        let body = response.json().await.unwrap_or(Value::Null);
        Ok(ApiResponse { status, body })
    }
}

fn client_for(server: &MockServer) -> JobClient<HttpDispatcher, ClientConfig> {
    let mut config = ClientConfig::new(server.base_url());
    config.role_arn = Some("arn:vodconvert:iam/default-role".to_string());
    JobClient::new(HttpDispatcher::new(server.base_url()), config)
}

#[tokio::test]
async fn test_create_job_posts_exact_payload() -> Result<()> {
    let server = MockServer::start();

    let expected_body = json!({
        "role": "arn:vodconvert:iam/default-role",
        "settings": {
            "inputs": [{ "fileInput": "s3://bucket/in.mp4" }]
        }
    });

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/jobs").json_body(expected_body);
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "job": {
                    "id": "1754560000000-k3v9p2",
                    "arn": "arn:vodconvert:jobs/1754560000000-k3v9p2",
                    "status": "SUBMITTED",
                    "createdAt": "2026-08-07T09:15:00Z"
                }
            }));
    });

    let request = CreateJobRequest::from_value(&json!({
        "Settings": { "Inputs": [{ "FileInput": "s3://bucket/in.mp4" }] }
    }))?;

    let client = client_for(&server);
    let job = client.create_job(&request).await?;

    api_mock.assert();
    assert_eq!(job.id, "1754560000000-k3v9p2");
    assert_eq!(job.status, Some(JobStatus::Submitted));
    Ok(())
}

#[tokio::test]
async fn test_get_job_reads_documented_path() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/jobs/job-42");
        then.status(200).json_body(json!({
            "job": {
                "id": "job-42",
                "status": "COMPLETE",
                "userMetadata": { "assetId": "A123" }
            }
        }));
    });

    let client = client_for(&server);
    let job = client.get_job("job-42").await?;

    api_mock.assert();
    assert_eq!(job.status, Some(JobStatus::Complete));
    assert_eq!(job.user_metadata["assetId"], "A123");
    Ok(())
}

#[tokio::test]
async fn test_list_jobs_passes_status_filter() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/jobs")
            .query_param("status", "ERROR");
        then.status(200).json_body(json!({
            "jobs": [{
                "id": "job-7",
                "status": "ERROR",
                "errorCode": 1040,
                "errorMessage": "input file not found"
            }]
        }));
    });

    let client = client_for(&server);
    let jobs = client.list_jobs(Some(JobStatus::Error)).await?;

    api_mock.assert();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].error_code, Some(1040));
    Ok(())
}

#[tokio::test]
async fn test_cancel_job_deletes() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(DELETE).path("/v1/jobs/job-9");
        then.status(202).json_body(json!({}));
    });

    let client = client_for(&server);
    client.cancel_job("job-9").await?;

    api_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_service_error_mapped_to_api_error() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/v1/jobs");
        then.status(400).json_body(json!({
            "message": "Output group 'Apple HLS' has no outputs"
        }));
    });

    let client = client_for(&server);
    let err = client
        .create_job(&CreateJobRequest::default())
        .await
        .unwrap_err();

    match err {
        ConvertError::ApiError { code, message } => {
            assert_eq!(code, 400);
            assert_eq!(message, "Output group 'Apple HLS' has no outputs");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_invalid_enum_refused_before_any_request() -> Result<()> {
    let server = MockServer::start();

    // No mock registered: a dispatched request would fail loudly.
    let request = CreateJobRequest::from_value(&json!({
        "Settings": {
            "Inputs": [{ "TimecodeSource": "SYSTEMCLOCK" }]
        }
    }))?;

    let client = client_for(&server);
    let err = client.create_job(&request).await.unwrap_err();
    assert!(matches!(err, ConvertError::InvalidEnumValueError { .. }));
    Ok(())
}

#[tokio::test]
async fn test_describe_endpoints() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/endpoints");
        then.status(200).json_body(json!({
            "endpoints": [{ "url": "https://abcd1234.vodconvert.example.com" }]
        }));
    });

    let client = client_for(&server);
    let endpoints = client.describe_endpoints().await?;

    api_mock.assert();
    assert_eq!(endpoints[0].url, "https://abcd1234.vodconvert.example.com");
    Ok(())
}
