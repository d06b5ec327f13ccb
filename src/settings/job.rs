use serde::Deserialize;

use super::{put_group, put_group_list, put_i64, RequestBody, SettingsGroup};
use crate::settings::input::Input;
use crate::settings::output::OutputGroup;
use crate::settings::timecode::TimecodeConfig;
use crate::utils::error::Result;

/// Root settings group of a transcoding job specification.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobSettings {
    pub ad_avail_offset: Option<i64>,
    #[serde(default)]
    pub inputs: Vec<Input>,
    #[serde(default)]
    pub output_groups: Vec<OutputGroup>,
    pub timecode_config: Option<TimecodeConfig>,
}

impl SettingsGroup for JobSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_i64(&mut body, "adAvailOffset", &self.ad_avail_offset);
        put_group_list(&mut body, "inputs", &self.inputs)?;
        put_group_list(&mut body, "outputGroups", &self.output_groups)?;
        put_group(&mut body, "timecodeConfig", &self.timecode_config)?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_job_settings_serialize_empty() {
        let settings = JobSettings::from_value(&json!({})).unwrap();
        assert!(settings.inputs.is_empty());
        assert!(settings.output_groups.is_empty());
        assert!(settings.request_body().unwrap().is_empty());
    }

    #[test]
    fn test_parse_is_idempotent_over_own_output() {
        let spec = json!({
            "AdAvailOffset": -2,
            "Inputs": [{ "FileInput": "s3://bucket/in.mp4" }],
            "TimecodeConfig": { "Source": "ZEROBASED" }
        });
        let first = JobSettings::from_value(&spec).unwrap();
        let second = JobSettings::from_value(&spec).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.request_body().unwrap(),
            second.request_body().unwrap()
        );
    }

    #[test]
    fn test_ad_avail_offset_zero_on_the_wire() {
        let settings = JobSettings {
            ad_avail_offset: Some(0),
            ..Default::default()
        };
        assert_eq!(
            settings.request_body().unwrap()["adAvailOffset"],
            json!(0)
        );
    }
}
