use serde::Deserialize;

use super::{put_enum, put_group, put_i64, RequestBody, SettingsGroup};
use crate::settings::color::Hdr10Metadata;
use crate::utils::error::Result;

const COLOR_SPACES: &[&str] = &["FOLLOW", "REC_601", "REC_709", "HDR10", "HLG_2020"];
const COLOR_SPACE_USAGES: &[&str] = &["FORCE", "FALLBACK"];
const ROTATIONS: &[&str] = &["DEGREE_0", "DEGREES_90", "DEGREES_180", "DEGREES_270", "AUTO"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoSelector {
    pub color_space: Option<String>,
    pub color_space_usage: Option<String>,
    pub hdr10_metadata: Option<Hdr10Metadata>,
    pub pid: Option<i64>,
    pub program_number: Option<i64>,
    pub rotate: Option<String>,
}

impl SettingsGroup for VideoSelector {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_enum(&mut body, "colorSpace", &self.color_space, COLOR_SPACES)?;
        put_enum(
            &mut body,
            "colorSpaceUsage",
            &self.color_space_usage,
            COLOR_SPACE_USAGES,
        )?;
        put_group(&mut body, "hdr10Metadata", &self.hdr10_metadata)?;
        put_i64(&mut body, "pid", &self.pid);
        put_i64(&mut body, "programNumber", &self.program_number);
        put_enum(&mut body, "rotate", &self.rotate, ROTATIONS)?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hdr10_metadata_nests() {
        let selector = VideoSelector::from_value(&json!({
            "ColorSpace": "HDR10",
            "Hdr10Metadata": { "MaxLuminance": 10000, "MinLuminance": 5 }
        }))
        .unwrap();
        let body = selector.request_body().unwrap();
        assert_eq!(
            body["hdr10Metadata"],
            json!({ "maxLuminance": 10000, "minLuminance": 5 })
        );
    }

    #[test]
    fn test_rotate_rejects_arbitrary_degrees() {
        let selector = VideoSelector {
            rotate: Some("DEGREES_45".to_string()),
            ..Default::default()
        };
        assert!(selector.request_body().is_err());
    }
}
