use serde::Deserialize;

use super::{put_enum, put_group, put_i64, RequestBody, SettingsGroup};
use crate::settings::frame_capture::FrameCaptureSettings;
use crate::settings::h264::H264Settings;
use crate::settings::h265::H265Settings;
use crate::settings::mpeg2::Mpeg2Settings;
use crate::settings::preprocessors::VideoPreprocessor;
use crate::settings::prores::ProresSettings;
use crate::utils::error::Result;

const AFD_SIGNALINGS: &[&str] = &["NONE", "AUTO", "FIXED"];
const COLOR_METADATA: &[&str] = &["IGNORE", "INSERT"];
const RESPOND_TO_AFDS: &[&str] = &["NONE", "RESPOND", "PASSTHROUGH"];
const SCALING_BEHAVIORS: &[&str] = &["DEFAULT", "STRETCH_TO_OUTPUT"];
const TIMECODE_INSERTIONS: &[&str] = &["DISABLED", "PIC_TIMING_SEI"];
const TOGGLE: &[&str] = &["DISABLED", "ENABLED"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoDescription {
    pub afd_signaling: Option<String>,
    pub anti_alias: Option<String>,
    pub codec_settings: Option<VideoCodecSettings>,
    pub color_metadata: Option<String>,
    pub crop: Option<Rectangle>,
    pub drop_frame_timecode: Option<String>,
    pub fixed_afd: Option<i64>,
    pub height: Option<i64>,
    pub position: Option<Rectangle>,
    pub respond_to_afd: Option<String>,
    pub scaling_behavior: Option<String>,
    pub sharpness: Option<i64>,
    pub timecode_insertion: Option<String>,
    pub video_preprocessors: Option<VideoPreprocessor>,
    pub width: Option<i64>,
}

impl SettingsGroup for VideoDescription {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_enum(&mut body, "afdSignaling", &self.afd_signaling, AFD_SIGNALINGS)?;
        put_enum(&mut body, "antiAlias", &self.anti_alias, TOGGLE)?;
        put_group(&mut body, "codecSettings", &self.codec_settings)?;
        put_enum(&mut body, "colorMetadata", &self.color_metadata, COLOR_METADATA)?;
        put_group(&mut body, "crop", &self.crop)?;
        put_enum(&mut body, "dropFrameTimecode", &self.drop_frame_timecode, TOGGLE)?;
        put_i64(&mut body, "fixedAfd", &self.fixed_afd);
        put_i64(&mut body, "height", &self.height);
        put_group(&mut body, "position", &self.position)?;
        put_enum(&mut body, "respondToAfd", &self.respond_to_afd, RESPOND_TO_AFDS)?;
        put_enum(
            &mut body,
            "scalingBehavior",
            &self.scaling_behavior,
            SCALING_BEHAVIORS,
        )?;
        put_i64(&mut body, "sharpness", &self.sharpness);
        put_enum(
            &mut body,
            "timecodeInsertion",
            &self.timecode_insertion,
            TIMECODE_INSERTIONS,
        )?;
        put_group(&mut body, "videoPreprocessors", &self.video_preprocessors)?;
        put_i64(&mut body, "width", &self.width);
        Ok(body)
    }
}

const VIDEO_CODECS: &[&str] = &["FRAME_CAPTURE", "H_264", "H_265", "MPEG2", "PRORES"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoCodecSettings {
    pub codec: Option<String>,
    pub frame_capture_settings: Option<FrameCaptureSettings>,
    pub h264_settings: Option<H264Settings>,
    pub h265_settings: Option<H265Settings>,
    pub mpeg2_settings: Option<Mpeg2Settings>,
    pub prores_settings: Option<ProresSettings>,
}

impl SettingsGroup for VideoCodecSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_enum(&mut body, "codec", &self.codec, VIDEO_CODECS)?;
        put_group(
            &mut body,
            "frameCaptureSettings",
            &self.frame_capture_settings,
        )?;
        put_group(&mut body, "h264Settings", &self.h264_settings)?;
        put_group(&mut body, "h265Settings", &self.h265_settings)?;
        put_group(&mut body, "mpeg2Settings", &self.mpeg2_settings)?;
        put_group(&mut body, "proresSettings", &self.prores_settings)?;
        Ok(body)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rectangle {
    pub height: Option<i64>,
    pub width: Option<i64>,
    pub x: Option<i64>,
    pub y: Option<i64>,
}

impl SettingsGroup for Rectangle {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_i64(&mut body, "height", &self.height);
        put_i64(&mut body, "width", &self.width);
        put_i64(&mut body, "x", &self.x);
        put_i64(&mut body, "y", &self.y);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_codec_settings_nest_through_three_levels() {
        let description = VideoDescription::from_value(&json!({
            "Width": 1920,
            "Height": 1080,
            "CodecSettings": {
                "Codec": "H_264",
                "H264Settings": { "RateControlMode": "CBR", "Bitrate": 5000000 }
            }
        }))
        .unwrap();
        let body = description.request_body().unwrap();
        assert_eq!(
            body["codecSettings"],
            json!({
                "codec": "H_264",
                "h264Settings": { "bitrate": 5000000, "rateControlMode": "CBR" }
            })
        );
    }

    #[test]
    fn test_crop_origin_zero_serialized() {
        let description = VideoDescription {
            crop: Some(Rectangle {
                height: Some(1080),
                width: Some(1440),
                x: Some(0),
                y: Some(0),
            }),
            ..Default::default()
        };
        let body = description.request_body().unwrap();
        assert_eq!(
            body["crop"],
            json!({ "height": 1080, "width": 1440, "x": 0, "y": 0 })
        );
    }

    #[test]
    fn test_codec_name_outside_set() {
        let settings = VideoCodecSettings {
            codec: Some("AV1".to_string()),
            ..Default::default()
        };
        assert!(settings.request_body().is_err());
    }

    #[test]
    fn test_deep_enum_failure_surfaces_from_leaf() {
        let description = VideoDescription::from_value(&json!({
            "CodecSettings": {
                "H264Settings": { "EntropyEncoding": "ARITHMETIC" }
            }
        }))
        .unwrap();
        let err = description.request_body().unwrap_err();
        assert!(err.to_string().contains("entropyEncoding"));
    }
}
