use std::collections::BTreeMap;

use serde::Deserialize;

use super::{
    put_enum, put_group, put_group_list, put_group_map, put_i64, put_str, RequestBody,
    SettingsGroup,
};
use crate::settings::audio_selector::AudioSelector;
use crate::settings::caption_selector::CaptionSelector;
use crate::settings::video_selector::VideoSelector;
use crate::utils::error::Result;

const DEBLOCK_FILTERS: &[&str] = &["ENABLED", "DISABLED"];
const DENOISE_FILTERS: &[&str] = &["ENABLED", "DISABLED"];
const FILTER_ENABLES: &[&str] = &["AUTO", "DISABLE", "FORCE"];
const PSI_CONTROLS: &[&str] = &["IGNORE_PSI", "USE_PSI"];
const TIMECODE_SOURCES: &[&str] = &["EMBEDDED", "ZEROBASED", "SPECIFIEDSTART"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Input {
    #[serde(default)]
    pub audio_selectors: BTreeMap<String, AudioSelector>,
    #[serde(default)]
    pub caption_selectors: BTreeMap<String, CaptionSelector>,
    pub deblock_filter: Option<String>,
    pub denoise_filter: Option<String>,
    pub file_input: Option<String>,
    pub filter_enable: Option<String>,
    pub filter_strength: Option<i64>,
    #[serde(default)]
    pub input_clippings: Vec<InputClipping>,
    pub program_number: Option<i64>,
    pub psi_control: Option<String>,
    pub timecode_source: Option<String>,
    pub video_selector: Option<VideoSelector>,
}

impl SettingsGroup for Input {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_group_map(&mut body, "audioSelectors", &self.audio_selectors)?;
        put_group_map(&mut body, "captionSelectors", &self.caption_selectors)?;
        put_enum(&mut body, "deblockFilter", &self.deblock_filter, DEBLOCK_FILTERS)?;
        put_enum(&mut body, "denoiseFilter", &self.denoise_filter, DENOISE_FILTERS)?;
        put_str(&mut body, "fileInput", &self.file_input);
        put_enum(&mut body, "filterEnable", &self.filter_enable, FILTER_ENABLES)?;
        put_i64(&mut body, "filterStrength", &self.filter_strength);
        put_group_list(&mut body, "inputClippings", &self.input_clippings)?;
        put_i64(&mut body, "programNumber", &self.program_number);
        put_enum(&mut body, "psiControl", &self.psi_control, PSI_CONTROLS)?;
        put_enum(
            &mut body,
            "timecodeSource",
            &self.timecode_source,
            TIMECODE_SOURCES,
        )?;
        put_group(&mut body, "videoSelector", &self.video_selector)?;
        Ok(body)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputClipping {
    pub end_timecode: Option<String>,
    pub start_timecode: Option<String>,
}

impl SettingsGroup for InputClipping {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_str(&mut body, "endTimecode", &self.end_timecode);
        put_str(&mut body, "startTimecode", &self.start_timecode);
        Ok(body)
    }
}
