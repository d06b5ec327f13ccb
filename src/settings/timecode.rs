use serde::Deserialize;

use super::{put_enum, put_i64, put_str, RequestBody, SettingsGroup};
use crate::utils::error::Result;

const TIMECODE_SOURCES: &[&str] = &["EMBEDDED", "ZEROBASED", "SPECIFIEDSTART"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimecodeConfig {
    pub anchor: Option<String>,
    pub source: Option<String>,
    pub start: Option<String>,
    pub timestamp_offset: Option<String>,
}

impl SettingsGroup for TimecodeConfig {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_str(&mut body, "anchor", &self.anchor);
        put_enum(&mut body, "source", &self.source, TIMECODE_SOURCES)?;
        put_str(&mut body, "start", &self.start);
        put_str(&mut body, "timestampOffset", &self.timestamp_offset);
        Ok(body)
    }
}

const BURNIN_POSITIONS: &[&str] = &[
    "TOP_CENTER",
    "TOP_LEFT",
    "TOP_RIGHT",
    "MIDDLE_LEFT",
    "MIDDLE_CENTER",
    "MIDDLE_RIGHT",
    "BOTTOM_LEFT",
    "BOTTOM_CENTER",
    "BOTTOM_RIGHT",
];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimecodeBurnin {
    pub font_size: Option<i64>,
    pub position: Option<String>,
    pub prefix: Option<String>,
}

impl SettingsGroup for TimecodeBurnin {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_i64(&mut body, "fontSize", &self.font_size);
        put_enum(&mut body, "position", &self.position, BURNIN_POSITIONS)?;
        put_str(&mut body, "prefix", &self.prefix);
        Ok(body)
    }
}
