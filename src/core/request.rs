use std::collections::BTreeMap;

use serde::Deserialize;

use crate::settings::{put_group, put_str, put_str_map, JobSettings, RequestBody, SettingsGroup};
use crate::utils::error::Result;

/// Envelope for the create-job call: the job settings plus the
/// account-level fields that ride alongside them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateJobRequest {
    pub client_request_token: Option<String>,
    pub queue: Option<String>,
    pub role: Option<String>,
    pub settings: Option<JobSettings>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    #[serde(default)]
    pub user_metadata: BTreeMap<String, String>,
}

impl CreateJobRequest {
    pub fn new(role: impl Into<String>, settings: JobSettings) -> Self {
        Self {
            role: Some(role.into()),
            settings: Some(settings),
            ..Default::default()
        }
    }
}

impl SettingsGroup for CreateJobRequest {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_str(&mut body, "clientRequestToken", &self.client_request_token);
        put_str(&mut body, "queue", &self.queue);
        put_str(&mut body, "role", &self.role);
        put_group(&mut body, "settings", &self.settings)?;
        put_str_map(&mut body, "tags", &self.tags);
        put_str_map(&mut body, "userMetadata", &self.user_metadata);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_request_serializes_empty() {
        let request = CreateJobRequest::default();
        assert!(request.request_body().unwrap().is_empty());
    }

    #[test]
    fn test_settings_appear_unchanged_under_their_key() {
        let request = CreateJobRequest::from_value(&json!({
            "Role": "arn:vodconvert:iam/transcoder",
            "Settings": {
                "Inputs": [{ "FileInput": "s3://bucket/in.mov" }]
            },
            "UserMetadata": { "tenant": "acme" }
        }))
        .unwrap();
        let body = request.request_body().unwrap();
        assert_eq!(body["role"], json!("arn:vodconvert:iam/transcoder"));
        assert_eq!(
            body["settings"],
            json!({ "inputs": [{ "fileInput": "s3://bucket/in.mov" }] })
        );
        assert_eq!(body["userMetadata"], json!({ "tenant": "acme" }));
    }

    #[test]
    fn test_new_sets_role_and_settings() {
        let request = CreateJobRequest::new(
            "arn:vodconvert:iam/transcoder",
            crate::settings::JobSettings::default(),
        );
        let body = request.request_body().unwrap();
        assert_eq!(body["role"], json!("arn:vodconvert:iam/transcoder"));
        assert_eq!(body["settings"], json!({}));
    }

    #[test]
    fn test_metadata_keys_are_passed_through_verbatim() {
        // User metadata keys are customer data, not schema fields: no
        // casing transformation applies.
        let mut request = CreateJobRequest::default();
        request
            .user_metadata
            .insert("CostCenter".to_string(), "video-42".to_string());
        let body = request.request_body().unwrap();
        assert_eq!(body["userMetadata"], json!({ "CostCenter": "video-42" }));
    }
}
