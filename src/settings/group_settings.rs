use serde::Deserialize;

use super::{put_enum, put_group, put_str, RequestBody, SettingsGroup};
use crate::settings::dash_group::DashIsoGroupSettings;
use crate::settings::hls_group::HlsGroupSettings;
use crate::utils::error::Result;

const OUTPUT_GROUP_TYPES: &[&str] = &[
    "FILE_GROUP_SETTINGS",
    "HLS_GROUP_SETTINGS",
    "DASH_ISO_GROUP_SETTINGS",
];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputGroupSettings {
    pub dash_iso_group_settings: Option<DashIsoGroupSettings>,
    pub file_group_settings: Option<FileGroupSettings>,
    pub hls_group_settings: Option<HlsGroupSettings>,
    pub r#type: Option<String>,
}

impl SettingsGroup for OutputGroupSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_group(
            &mut body,
            "dashIsoGroupSettings",
            &self.dash_iso_group_settings,
        )?;
        put_group(&mut body, "fileGroupSettings", &self.file_group_settings)?;
        put_group(&mut body, "hlsGroupSettings", &self.hls_group_settings)?;
        put_enum(&mut body, "type", &self.r#type, OUTPUT_GROUP_TYPES)?;
        Ok(body)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileGroupSettings {
    pub destination: Option<String>,
}

impl SettingsGroup for FileGroupSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_str(&mut body, "destination", &self.destination);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_discriminator_matches_populated_group() {
        let settings = OutputGroupSettings::from_value(&json!({
            "Type": "FILE_GROUP_SETTINGS",
            "FileGroupSettings": { "Destination": "s3://bucket/outputs/" }
        }))
        .unwrap();
        let body = settings.request_body().unwrap();
        assert_eq!(body["type"], json!("FILE_GROUP_SETTINGS"));
        assert_eq!(
            body["fileGroupSettings"],
            json!({ "destination": "s3://bucket/outputs/" })
        );
    }

    #[test]
    fn test_unknown_group_type() {
        let settings = OutputGroupSettings {
            r#type: Some("CMAF_GROUP_SETTINGS".to_string()),
            ..Default::default()
        };
        assert!(settings.request_body().is_err());
    }
}
