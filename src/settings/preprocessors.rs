use serde::Deserialize;

use super::{put_enum, put_group, RequestBody, SettingsGroup};
use crate::settings::color::ColorCorrector;
use crate::settings::image::ImageInserter;
use crate::settings::noise::NoiseReducer;
use crate::settings::timecode::TimecodeBurnin;
use crate::utils::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoPreprocessor {
    pub color_corrector: Option<ColorCorrector>,
    pub deinterlacer: Option<Deinterlacer>,
    pub image_inserter: Option<ImageInserter>,
    pub noise_reducer: Option<NoiseReducer>,
    pub timecode_burnin: Option<TimecodeBurnin>,
}

impl SettingsGroup for VideoPreprocessor {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_group(&mut body, "colorCorrector", &self.color_corrector)?;
        put_group(&mut body, "deinterlacer", &self.deinterlacer)?;
        put_group(&mut body, "imageInserter", &self.image_inserter)?;
        put_group(&mut body, "noiseReducer", &self.noise_reducer)?;
        put_group(&mut body, "timecodeBurnin", &self.timecode_burnin)?;
        Ok(body)
    }
}

const DEINTERLACE_ALGORITHMS: &[&str] = &[
    "INTERPOLATE",
    "INTERPOLATE_TICKER",
    "BLEND",
    "BLEND_TICKER",
];
const DEINTERLACER_CONTROLS: &[&str] = &["FORCE_ALL_FRAMES", "NORMAL"];
const DEINTERLACER_MODES: &[&str] = &["DEINTERLACE", "INVERSE_TELECINE", "ADAPTIVE"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Deinterlacer {
    pub algorithm: Option<String>,
    pub control: Option<String>,
    pub mode: Option<String>,
}

impl SettingsGroup for Deinterlacer {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_enum(&mut body, "algorithm", &self.algorithm, DEINTERLACE_ALGORITHMS)?;
        put_enum(&mut body, "control", &self.control, DEINTERLACER_CONTROLS)?;
        put_enum(&mut body, "mode", &self.mode, DEINTERLACER_MODES)?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preprocessor_composes_stages() {
        let preprocessor = VideoPreprocessor::from_value(&json!({
            "Deinterlacer": { "Mode": "ADAPTIVE" },
            "NoiseReducer": { "Filter": "MEAN", "FilterSettings": { "Strength": 2 } }
        }))
        .unwrap();
        let body = preprocessor.request_body().unwrap();
        assert_eq!(body["deinterlacer"], json!({ "mode": "ADAPTIVE" }));
        assert_eq!(
            body["noiseReducer"],
            json!({ "filter": "MEAN", "filterSettings": { "strength": 2 } })
        );
        assert!(!body.contains_key("colorCorrector"));
    }

    #[test]
    fn test_deinterlacer_algorithm_set() {
        let deinterlacer = Deinterlacer {
            algorithm: Some("MOTION_COMPENSATED".to_string()),
            ..Default::default()
        };
        assert!(deinterlacer.request_body().is_err());
    }
}
