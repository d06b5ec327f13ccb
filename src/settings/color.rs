use serde::Deserialize;

use super::{put_enum, put_group, put_i64, RequestBody, SettingsGroup};
use crate::utils::error::Result;

const COLOR_SPACE_CONVERSIONS: &[&str] = &[
    "NONE",
    "FORCE_601",
    "FORCE_709",
    "FORCE_HDR10",
    "FORCE_HLG_2020",
];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColorCorrector {
    pub brightness: Option<i64>,
    pub color_space_conversion: Option<String>,
    pub contrast: Option<i64>,
    pub hdr10_metadata: Option<Hdr10Metadata>,
    pub hue: Option<i64>,
    pub saturation: Option<i64>,
}

impl SettingsGroup for ColorCorrector {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_i64(&mut body, "brightness", &self.brightness);
        put_enum(
            &mut body,
            "colorSpaceConversion",
            &self.color_space_conversion,
            COLOR_SPACE_CONVERSIONS,
        )?;
        put_i64(&mut body, "contrast", &self.contrast);
        put_group(&mut body, "hdr10Metadata", &self.hdr10_metadata)?;
        put_i64(&mut body, "hue", &self.hue);
        put_i64(&mut body, "saturation", &self.saturation);
        Ok(body)
    }
}

/// Static HDR10 mastering display and content light level metadata.
/// Primaries are in 0.00002 x/y units, luminance in 0.0001 cd/m2.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Hdr10Metadata {
    pub blue_primary_x: Option<i64>,
    pub blue_primary_y: Option<i64>,
    pub green_primary_x: Option<i64>,
    pub green_primary_y: Option<i64>,
    pub max_content_light_level: Option<i64>,
    pub max_frame_average_light_level: Option<i64>,
    pub max_luminance: Option<i64>,
    pub min_luminance: Option<i64>,
    pub red_primary_x: Option<i64>,
    pub red_primary_y: Option<i64>,
    pub white_point_x: Option<i64>,
    pub white_point_y: Option<i64>,
}

impl SettingsGroup for Hdr10Metadata {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_i64(&mut body, "bluePrimaryX", &self.blue_primary_x);
        put_i64(&mut body, "bluePrimaryY", &self.blue_primary_y);
        put_i64(&mut body, "greenPrimaryX", &self.green_primary_x);
        put_i64(&mut body, "greenPrimaryY", &self.green_primary_y);
        put_i64(
            &mut body,
            "maxContentLightLevel",
            &self.max_content_light_level,
        );
        put_i64(
            &mut body,
            "maxFrameAverageLightLevel",
            &self.max_frame_average_light_level,
        );
        put_i64(&mut body, "maxLuminance", &self.max_luminance);
        put_i64(&mut body, "minLuminance", &self.min_luminance);
        put_i64(&mut body, "redPrimaryX", &self.red_primary_x);
        put_i64(&mut body, "redPrimaryY", &self.red_primary_y);
        put_i64(&mut body, "whitePointX", &self.white_point_x);
        put_i64(&mut body, "whitePointY", &self.white_point_y);
        Ok(body)
    }
}
