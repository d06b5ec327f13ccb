//! Job settings groups mirroring the VodConvert job specification.
//!
//! Each type parses from the job-spec (PascalCase) form and assembles the
//! camelCase wire payload the service expects. Enum-typed fields are checked
//! against their documented value set when the payload is assembled, not when
//! the settings are parsed.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::utils::error::Result;
use crate::utils::validation::validate_enum_value;

pub mod audio;
pub mod audio_codecs;
pub mod audio_selector;
pub mod caption_selector;
pub mod captions;
pub mod color;
pub mod container;
pub mod dash_group;
pub mod frame_capture;
pub mod group_settings;
pub mod h264;
pub mod h265;
pub mod hls_group;
pub mod image;
pub mod input;
pub mod job;
pub mod mpeg2;
pub mod noise;
pub mod output;
pub mod preprocessors;
pub mod prores;
pub mod timecode;
pub mod video;
pub mod video_selector;

pub use audio::{AudioCodecSettings, AudioDescription};
pub use audio_codecs::{AacSettings, Ac3Settings, Mp2Settings};
pub use audio_selector::AudioSelector;
pub use caption_selector::{
    CaptionSelector, CaptionSourceSettings, EmbeddedSourceSettings, FileSourceSettings,
    TeletextSourceSettings,
};
pub use captions::{CaptionDescription, CaptionDestinationSettings, TtmlDestinationSettings};
pub use color::{ColorCorrector, Hdr10Metadata};
pub use container::{ContainerSettings, M3u8Settings, MovSettings, Mp4Settings};
pub use dash_group::DashIsoGroupSettings;
pub use frame_capture::FrameCaptureSettings;
pub use group_settings::{FileGroupSettings, OutputGroupSettings};
pub use h264::{H264QvbrSettings, H264Settings};
pub use h265::{H265QvbrSettings, H265Settings};
pub use hls_group::HlsGroupSettings;
pub use image::{ImageInserter, InsertableImage};
pub use input::{Input, InputClipping};
pub use job::JobSettings;
pub use mpeg2::Mpeg2Settings;
pub use noise::{NoiseReducer, NoiseReducerFilterSettings, NoiseReducerSpatialFilterSettings};
pub use output::{HlsSettings, Output, OutputGroup, OutputSettings};
pub use preprocessors::{Deinterlacer, VideoPreprocessor};
pub use prores::ProresSettings;
pub use timecode::{TimecodeBurnin, TimecodeConfig};
pub use video::{Rectangle, VideoCodecSettings, VideoDescription};
pub use video_selector::VideoSelector;

/// Wire payload of one settings group: camelCase keys, ready for JSON encoding.
pub type RequestBody = Map<String, Value>;

/// One settings group of the remote job specification.
///
/// Absent fields stay absent: they are never defaulted and never serialized.
pub trait SettingsGroup: DeserializeOwned {
    /// Parse from the job-spec (PascalCase) representation. Unknown enum
    /// values are accepted here; membership is checked by [`request_body`].
    ///
    /// [`request_body`]: SettingsGroup::request_body
    fn from_value(input: &Value) -> Result<Self> {
        Ok(serde_json::from_value(input.clone())?)
    }

    /// Assemble the wire payload, validating enum-typed fields against their
    /// documented value sets.
    fn request_body(&self) -> Result<RequestBody>;
}

pub(crate) fn put_str(body: &mut RequestBody, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        body.insert(key.to_string(), Value::String(v.clone()));
    }
}

pub(crate) fn put_i64(body: &mut RequestBody, key: &str, value: &Option<i64>) {
    if let Some(v) = value {
        body.insert(key.to_string(), Value::from(*v));
    }
}

pub(crate) fn put_f64(body: &mut RequestBody, key: &str, value: &Option<f64>) {
    if let Some(v) = value {
        body.insert(key.to_string(), Value::from(*v));
    }
}

pub(crate) fn put_enum(
    body: &mut RequestBody,
    key: &str,
    value: &Option<String>,
    allowed: &[&str],
) -> Result<()> {
    if let Some(v) = value {
        validate_enum_value(key, v, allowed)?;
        body.insert(key.to_string(), Value::String(v.clone()));
    }
    Ok(())
}

pub(crate) fn put_enum_list(
    body: &mut RequestBody,
    key: &str,
    values: &[String],
    allowed: &[&str],
) -> Result<()> {
    if values.is_empty() {
        return Ok(());
    }
    let mut items = Vec::with_capacity(values.len());
    for v in values {
        validate_enum_value(key, v, allowed)?;
        items.push(Value::String(v.clone()));
    }
    body.insert(key.to_string(), Value::Array(items));
    Ok(())
}

pub(crate) fn put_i64_list(body: &mut RequestBody, key: &str, values: &[i64]) {
    if values.is_empty() {
        return;
    }
    let items = values.iter().map(|v| Value::from(*v)).collect();
    body.insert(key.to_string(), Value::Array(items));
}

pub(crate) fn put_group<T: SettingsGroup>(
    body: &mut RequestBody,
    key: &str,
    value: &Option<T>,
) -> Result<()> {
    if let Some(v) = value {
        body.insert(key.to_string(), Value::Object(v.request_body()?));
    }
    Ok(())
}

pub(crate) fn put_group_list<T: SettingsGroup>(
    body: &mut RequestBody,
    key: &str,
    values: &[T],
) -> Result<()> {
    if values.is_empty() {
        return Ok(());
    }
    let mut items = Vec::with_capacity(values.len());
    for v in values {
        items.push(Value::Object(v.request_body()?));
    }
    body.insert(key.to_string(), Value::Array(items));
    Ok(())
}

pub(crate) fn put_str_map(
    body: &mut RequestBody,
    key: &str,
    values: &BTreeMap<String, String>,
) {
    if values.is_empty() {
        return;
    }
    let mut entries = RequestBody::new();
    for (name, v) in values {
        entries.insert(name.clone(), Value::String(v.clone()));
    }
    body.insert(key.to_string(), Value::Object(entries));
}

pub(crate) fn put_group_map<T: SettingsGroup>(
    body: &mut RequestBody,
    key: &str,
    values: &BTreeMap<String, T>,
) -> Result<()> {
    if values.is_empty() {
        return Ok(());
    }
    let mut entries = RequestBody::new();
    for (name, v) in values {
        entries.insert(name.clone(), Value::Object(v.request_body()?));
    }
    body.insert(key.to_string(), Value::Object(entries));
    Ok(())
}
