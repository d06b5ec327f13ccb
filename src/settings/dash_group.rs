use serde::Deserialize;

use super::{put_enum, put_i64, put_str, RequestBody, SettingsGroup};
use crate::utils::error::Result;

const HBBTV_COMPLIANCES: &[&str] = &["HBBTV_1_5", "NONE"];
const SEGMENT_CONTROLS: &[&str] = &["SINGLE_FILE", "SEGMENTED_FILES"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DashIsoGroupSettings {
    pub base_url: Option<String>,
    pub destination: Option<String>,
    pub fragment_length: Option<i64>,
    pub hbbtv_compliance: Option<String>,
    pub min_buffer_time: Option<i64>,
    pub segment_control: Option<String>,
    pub segment_length: Option<i64>,
}

impl SettingsGroup for DashIsoGroupSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_str(&mut body, "baseUrl", &self.base_url);
        put_str(&mut body, "destination", &self.destination);
        put_i64(&mut body, "fragmentLength", &self.fragment_length);
        put_enum(
            &mut body,
            "hbbtvCompliance",
            &self.hbbtv_compliance,
            HBBTV_COMPLIANCES,
        )?;
        put_i64(&mut body, "minBufferTime", &self.min_buffer_time);
        put_enum(&mut body, "segmentControl", &self.segment_control, SEGMENT_CONTROLS)?;
        put_i64(&mut body, "segmentLength", &self.segment_length);
        Ok(body)
    }
}
