use serde::Deserialize;

use super::{put_enum, put_group, put_group_list, put_str, RequestBody, SettingsGroup};
use crate::settings::audio::AudioDescription;
use crate::settings::captions::CaptionDescription;
use crate::settings::container::ContainerSettings;
use crate::settings::group_settings::OutputGroupSettings;
use crate::settings::video::VideoDescription;
use crate::utils::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputGroup {
    pub custom_name: Option<String>,
    pub name: Option<String>,
    pub output_group_settings: Option<OutputGroupSettings>,
    #[serde(default)]
    pub outputs: Vec<Output>,
}

impl SettingsGroup for OutputGroup {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_str(&mut body, "customName", &self.custom_name);
        put_str(&mut body, "name", &self.name);
        put_group(&mut body, "outputGroupSettings", &self.output_group_settings)?;
        put_group_list(&mut body, "outputs", &self.outputs)?;
        Ok(body)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Output {
    #[serde(default)]
    pub audio_descriptions: Vec<AudioDescription>,
    #[serde(default)]
    pub caption_descriptions: Vec<CaptionDescription>,
    pub container_settings: Option<ContainerSettings>,
    pub extension: Option<String>,
    pub name_modifier: Option<String>,
    pub output_settings: Option<OutputSettings>,
    pub preset: Option<String>,
    pub video_description: Option<VideoDescription>,
}

impl SettingsGroup for Output {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_group_list(&mut body, "audioDescriptions", &self.audio_descriptions)?;
        put_group_list(&mut body, "captionDescriptions", &self.caption_descriptions)?;
        put_group(&mut body, "containerSettings", &self.container_settings)?;
        put_str(&mut body, "extension", &self.extension);
        put_str(&mut body, "nameModifier", &self.name_modifier);
        put_group(&mut body, "outputSettings", &self.output_settings)?;
        put_str(&mut body, "preset", &self.preset);
        put_group(&mut body, "videoDescription", &self.video_description)?;
        Ok(body)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputSettings {
    pub hls_settings: Option<HlsSettings>,
}

impl SettingsGroup for OutputSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_group(&mut body, "hlsSettings", &self.hls_settings)?;
        Ok(body)
    }
}

const AUDIO_TRACK_TYPES: &[&str] = &[
    "ALTERNATE_AUDIO_AUTO_SELECT_DEFAULT",
    "ALTERNATE_AUDIO_AUTO_SELECT",
    "ALTERNATE_AUDIO_NOT_AUTO_SELECT",
    "AUDIO_ONLY_VARIANT_STREAM",
];
const I_FRAME_ONLY_MANIFESTS: &[&str] = &["INCLUDE", "EXCLUDE"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HlsSettings {
    pub audio_group_id: Option<String>,
    pub audio_rendition_sets: Option<String>,
    pub audio_track_type: Option<String>,
    pub i_frame_only_manifest: Option<String>,
    pub segment_modifier: Option<String>,
}

impl SettingsGroup for HlsSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_str(&mut body, "audioGroupId", &self.audio_group_id);
        put_str(&mut body, "audioRenditionSets", &self.audio_rendition_sets);
        put_enum(
            &mut body,
            "audioTrackType",
            &self.audio_track_type,
            AUDIO_TRACK_TYPES,
        )?;
        put_enum(
            &mut body,
            "iFrameOnlyManifest",
            &self.i_frame_only_manifest,
            I_FRAME_ONLY_MANIFESTS,
        )?;
        put_str(&mut body, "segmentModifier", &self.segment_modifier);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outputs_list_serializes_in_order() {
        let group = OutputGroup::from_value(&json!({
            "Name": "HLS ladder",
            "Outputs": [
                { "NameModifier": "_1080p" },
                { "NameModifier": "_720p" },
                { "NameModifier": "_360p" }
            ]
        }))
        .unwrap();
        let body = group.request_body().unwrap();
        assert_eq!(
            body["outputs"],
            json!([
                { "nameModifier": "_1080p" },
                { "nameModifier": "_720p" },
                { "nameModifier": "_360p" }
            ])
        );
    }

    #[test]
    fn test_output_group_empty_outputs_omitted() {
        let group = OutputGroup::from_value(&json!({ "Name": "File group" })).unwrap();
        assert!(group.outputs.is_empty());
        assert!(!group.request_body().unwrap().contains_key("outputs"));
    }

    #[test]
    fn test_audio_track_type_set() {
        let settings = HlsSettings {
            audio_track_type: Some("COMMENTARY".to_string()),
            ..Default::default()
        };
        assert!(settings.request_body().is_err());
    }
}
