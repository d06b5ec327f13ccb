use serde::Deserialize;

use super::{put_enum, put_i64, RequestBody, SettingsGroup};
use crate::utils::error::Result;

const AAC_AUDIO_DESCRIPTION_BROADCASTER_MIX: &[&str] = &["BROADCASTER_MIXED_AD", "NORMAL"];
const AAC_CODEC_PROFILES: &[&str] = &["LC", "HEV1", "HEV2"];
const AAC_CODING_MODES: &[&str] = &[
    "AD_RECEIVER_MIX",
    "CODING_MODE_1_0",
    "CODING_MODE_1_1",
    "CODING_MODE_2_0",
    "CODING_MODE_5_1",
];
const AAC_RATE_CONTROL_MODES: &[&str] = &["CBR", "VBR"];
const AAC_RAW_FORMATS: &[&str] = &["LATM_LOAS", "NONE"];
const AAC_SPECIFICATIONS: &[&str] = &["MPEG2", "MPEG4"];
const AAC_VBR_QUALITIES: &[&str] = &["LOW", "MEDIUM_LOW", "MEDIUM_HIGH", "HIGH"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AacSettings {
    pub audio_description_broadcaster_mix: Option<String>,
    pub bitrate: Option<i64>,
    pub codec_profile: Option<String>,
    pub coding_mode: Option<String>,
    pub rate_control_mode: Option<String>,
    pub raw_format: Option<String>,
    pub sample_rate: Option<i64>,
    pub specification: Option<String>,
    pub vbr_quality: Option<String>,
}

impl SettingsGroup for AacSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_enum(
            &mut body,
            "audioDescriptionBroadcasterMix",
            &self.audio_description_broadcaster_mix,
            AAC_AUDIO_DESCRIPTION_BROADCASTER_MIX,
        )?;
        put_i64(&mut body, "bitrate", &self.bitrate);
        put_enum(&mut body, "codecProfile", &self.codec_profile, AAC_CODEC_PROFILES)?;
        put_enum(&mut body, "codingMode", &self.coding_mode, AAC_CODING_MODES)?;
        put_enum(
            &mut body,
            "rateControlMode",
            &self.rate_control_mode,
            AAC_RATE_CONTROL_MODES,
        )?;
        put_enum(&mut body, "rawFormat", &self.raw_format, AAC_RAW_FORMATS)?;
        put_i64(&mut body, "sampleRate", &self.sample_rate);
        put_enum(&mut body, "specification", &self.specification, AAC_SPECIFICATIONS)?;
        put_enum(&mut body, "vbrQuality", &self.vbr_quality, AAC_VBR_QUALITIES)?;
        Ok(body)
    }
}

const AC3_BITSTREAM_MODES: &[&str] = &[
    "COMPLETE_MAIN",
    "COMMENTARY",
    "DIALOGUE",
    "EMERGENCY",
    "HEARING_IMPAIRED",
    "MUSIC_AND_EFFECTS",
    "VISUALLY_IMPAIRED",
    "VOICE_OVER",
];
const AC3_CODING_MODES: &[&str] = &[
    "CODING_MODE_1_0",
    "CODING_MODE_1_1",
    "CODING_MODE_2_0",
    "CODING_MODE_3_2_LFE",
];
const AC3_DRC_PROFILES: &[&str] = &["FILM_STANDARD", "NONE"];
const AC3_LFE_FILTERS: &[&str] = &["ENABLED", "DISABLED"];
const AC3_METADATA_CONTROLS: &[&str] = &["FOLLOW_INPUT", "USE_CONFIGURED"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ac3Settings {
    pub bitrate: Option<i64>,
    pub bitstream_mode: Option<String>,
    pub coding_mode: Option<String>,
    pub dialnorm: Option<i64>,
    pub dynamic_range_compression_profile: Option<String>,
    pub lfe_filter: Option<String>,
    pub metadata_control: Option<String>,
    pub sample_rate: Option<i64>,
}

impl SettingsGroup for Ac3Settings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_i64(&mut body, "bitrate", &self.bitrate);
        put_enum(&mut body, "bitstreamMode", &self.bitstream_mode, AC3_BITSTREAM_MODES)?;
        put_enum(&mut body, "codingMode", &self.coding_mode, AC3_CODING_MODES)?;
        put_i64(&mut body, "dialnorm", &self.dialnorm);
        put_enum(
            &mut body,
            "dynamicRangeCompressionProfile",
            &self.dynamic_range_compression_profile,
            AC3_DRC_PROFILES,
        )?;
        put_enum(&mut body, "lfeFilter", &self.lfe_filter, AC3_LFE_FILTERS)?;
        put_enum(
            &mut body,
            "metadataControl",
            &self.metadata_control,
            AC3_METADATA_CONTROLS,
        )?;
        put_i64(&mut body, "sampleRate", &self.sample_rate);
        Ok(body)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Mp2Settings {
    pub bitrate: Option<i64>,
    pub channels: Option<i64>,
    pub sample_rate: Option<i64>,
}

impl SettingsGroup for Mp2Settings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_i64(&mut body, "bitrate", &self.bitrate);
        put_i64(&mut body, "channels", &self.channels);
        put_i64(&mut body, "sampleRate", &self.sample_rate);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_aac_empty_input_serializes_empty() {
        let settings = AacSettings::from_value(&json!({})).unwrap();
        assert_eq!(settings.request_body().unwrap().len(), 0);
    }

    #[test]
    fn test_aac_round_trips_valid_enum() {
        let settings = AacSettings::from_value(&json!({
            "CodingMode": "CODING_MODE_2_0",
            "SampleRate": 48000
        }))
        .unwrap();
        let body = settings.request_body().unwrap();
        assert_eq!(body["codingMode"], json!("CODING_MODE_2_0"));
        assert_eq!(body["sampleRate"], json!(48000));
    }

    #[test]
    fn test_aac_rejects_unknown_rate_control_mode() {
        let settings = AacSettings {
            rate_control_mode: Some("ABR".to_string()),
            ..Default::default()
        };
        assert!(settings.request_body().is_err());
    }

    #[test]
    fn test_ac3_dialnorm_zero_is_kept() {
        let settings = Ac3Settings {
            dialnorm: Some(0),
            ..Default::default()
        };
        let body = settings.request_body().unwrap();
        assert_eq!(body["dialnorm"], json!(0));
    }

    #[test]
    fn test_mp2_omits_absent_fields() {
        let settings = Mp2Settings {
            bitrate: Some(192000),
            ..Default::default()
        };
        let body = settings.request_body().unwrap();
        assert_eq!(body.len(), 1);
        assert!(!body.contains_key("channels"));
        assert!(!body.contains_key("sampleRate"));
    }
}
