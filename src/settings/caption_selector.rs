use serde::Deserialize;

use super::{put_enum, put_group, put_i64, put_str, RequestBody, SettingsGroup};
use crate::utils::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CaptionSelector {
    pub language_code: Option<String>,
    pub source_settings: Option<CaptionSourceSettings>,
}

impl SettingsGroup for CaptionSelector {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_str(&mut body, "languageCode", &self.language_code);
        put_group(&mut body, "sourceSettings", &self.source_settings)?;
        Ok(body)
    }
}

const CAPTION_SOURCE_TYPES: &[&str] = &[
    "ANCILLARY",
    "DVB_SUB",
    "EMBEDDED",
    "SCC",
    "TTML",
    "STL",
    "SRT",
    "TELETEXT",
    "NULL_SOURCE",
];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CaptionSourceSettings {
    pub embedded_source_settings: Option<EmbeddedSourceSettings>,
    pub file_source_settings: Option<FileSourceSettings>,
    pub source_type: Option<String>,
    pub teletext_source_settings: Option<TeletextSourceSettings>,
}

impl SettingsGroup for CaptionSourceSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_group(
            &mut body,
            "embeddedSourceSettings",
            &self.embedded_source_settings,
        )?;
        put_group(&mut body, "fileSourceSettings", &self.file_source_settings)?;
        put_enum(&mut body, "sourceType", &self.source_type, CAPTION_SOURCE_TYPES)?;
        put_group(
            &mut body,
            "teletextSourceSettings",
            &self.teletext_source_settings,
        )?;
        Ok(body)
    }
}

const CONVERT_608_TO_708: &[&str] = &["UPCONVERT", "DISABLED"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmbeddedSourceSettings {
    pub convert_608_to_708: Option<String>,
    pub source_608_channel_number: Option<i64>,
    pub source_608_track_number: Option<i64>,
}

impl SettingsGroup for EmbeddedSourceSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_enum(
            &mut body,
            "convert608To708",
            &self.convert_608_to_708,
            CONVERT_608_TO_708,
        )?;
        put_i64(
            &mut body,
            "source608ChannelNumber",
            &self.source_608_channel_number,
        );
        put_i64(
            &mut body,
            "source608TrackNumber",
            &self.source_608_track_number,
        );
        Ok(body)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileSourceSettings {
    pub convert_608_to_708: Option<String>,
    pub source_file: Option<String>,
    pub time_delta: Option<i64>,
}

impl SettingsGroup for FileSourceSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_enum(
            &mut body,
            "convert608To708",
            &self.convert_608_to_708,
            CONVERT_608_TO_708,
        )?;
        put_str(&mut body, "sourceFile", &self.source_file);
        put_i64(&mut body, "timeDelta", &self.time_delta);
        Ok(body)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeletextSourceSettings {
    pub page_number: Option<String>,
}

impl SettingsGroup for TeletextSourceSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_str(&mut body, "pageNumber", &self.page_number);
        Ok(body)
    }
}
