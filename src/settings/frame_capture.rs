use serde::Deserialize;

use super::{put_i64, RequestBody, SettingsGroup};
use crate::utils::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FrameCaptureSettings {
    pub framerate_denominator: Option<i64>,
    pub framerate_numerator: Option<i64>,
    pub max_captures: Option<i64>,
    pub quality: Option<i64>,
}

impl SettingsGroup for FrameCaptureSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_i64(&mut body, "framerateDenominator", &self.framerate_denominator);
        put_i64(&mut body, "framerateNumerator", &self.framerate_numerator);
        put_i64(&mut body, "maxCaptures", &self.max_captures);
        put_i64(&mut body, "quality", &self.quality);
        Ok(body)
    }
}
