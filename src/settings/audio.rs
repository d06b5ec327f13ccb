use serde::Deserialize;

use super::{put_enum, put_group, put_i64, put_str, RequestBody, SettingsGroup};
use crate::settings::audio_codecs::{AacSettings, Ac3Settings, Mp2Settings};
use crate::utils::error::Result;

const AUDIO_CODECS: &[&str] = &["AAC", "AC3", "MP2", "PASSTHROUGH"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AudioCodecSettings {
    pub aac_settings: Option<AacSettings>,
    pub ac3_settings: Option<Ac3Settings>,
    pub codec: Option<String>,
    pub mp2_settings: Option<Mp2Settings>,
}

impl SettingsGroup for AudioCodecSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_group(&mut body, "aacSettings", &self.aac_settings)?;
        put_group(&mut body, "ac3Settings", &self.ac3_settings)?;
        put_enum(&mut body, "codec", &self.codec, AUDIO_CODECS)?;
        put_group(&mut body, "mp2Settings", &self.mp2_settings)?;
        Ok(body)
    }
}

const AUDIO_TYPE_CONTROLS: &[&str] = &["FOLLOW_INPUT", "USE_CONFIGURED"];
const LANGUAGE_CODE_CONTROLS: &[&str] = &["FOLLOW_INPUT", "USE_CONFIGURED"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AudioDescription {
    pub audio_source_name: Option<String>,
    pub audio_type: Option<i64>,
    pub audio_type_control: Option<String>,
    pub codec_settings: Option<AudioCodecSettings>,
    pub language_code: Option<String>,
    pub language_code_control: Option<String>,
    pub stream_name: Option<String>,
}

impl SettingsGroup for AudioDescription {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_str(&mut body, "audioSourceName", &self.audio_source_name);
        put_i64(&mut body, "audioType", &self.audio_type);
        put_enum(
            &mut body,
            "audioTypeControl",
            &self.audio_type_control,
            AUDIO_TYPE_CONTROLS,
        )?;
        put_group(&mut body, "codecSettings", &self.codec_settings)?;
        put_str(&mut body, "languageCode", &self.language_code);
        put_enum(
            &mut body,
            "languageCodeControl",
            &self.language_code_control,
            LANGUAGE_CODE_CONTROLS,
        )?;
        put_str(&mut body, "streamName", &self.stream_name);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_codec_settings_nest_unchanged() {
        let settings = AudioCodecSettings::from_value(&json!({
            "Codec": "AAC",
            "AacSettings": { "Bitrate": 96000, "CodingMode": "CODING_MODE_2_0" }
        }))
        .unwrap();
        let body = settings.request_body().unwrap();
        assert_eq!(body["codec"], json!("AAC"));
        assert_eq!(
            body["aacSettings"],
            json!({ "bitrate": 96000, "codingMode": "CODING_MODE_2_0" })
        );
    }

    #[test]
    fn test_nested_enum_failure_propagates() {
        let settings = AudioCodecSettings::from_value(&json!({
            "Codec": "AAC",
            "AacSettings": { "CodingMode": "CODING_MODE_7_1" }
        }))
        .unwrap();
        assert!(settings.request_body().is_err());
    }

    #[test]
    fn test_audio_description_audio_type_zero_distinct_from_absent() {
        let with_zero = AudioDescription {
            audio_type: Some(0),
            ..Default::default()
        };
        assert_eq!(with_zero.request_body().unwrap()["audioType"], json!(0));

        let absent = AudioDescription::default();
        assert!(!absent.request_body().unwrap().contains_key("audioType"));
    }

    #[test]
    fn test_empty_nested_group_serializes_as_empty_object() {
        let settings = AudioDescription {
            codec_settings: Some(AudioCodecSettings::default()),
            ..Default::default()
        };
        let body = settings.request_body().unwrap();
        assert_eq!(body["codecSettings"], json!({}));
    }
}
