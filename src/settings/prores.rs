use serde::Deserialize;

use super::{put_enum, put_i64, RequestBody, SettingsGroup};
use crate::utils::error::Result;

const CODEC_PROFILES: &[&str] = &[
    "APPLE_PRORES_422",
    "APPLE_PRORES_422_HQ",
    "APPLE_PRORES_422_LT",
    "APPLE_PRORES_422_PROXY",
];
const FRAMERATE_CONTROLS: &[&str] = &["INITIALIZE_FROM_SOURCE", "SPECIFIED"];
const FRAMERATE_CONVERSION_ALGORITHMS: &[&str] = &["DUPLICATE_DROP", "INTERPOLATE"];
const INTERLACE_MODES: &[&str] = &[
    "PROGRESSIVE",
    "TOP_FIELD",
    "BOTTOM_FIELD",
    "FOLLOW_TOP_FIELD",
    "FOLLOW_BOTTOM_FIELD",
];
const PAR_CONTROLS: &[&str] = &["INITIALIZE_FROM_SOURCE", "SPECIFIED"];
const TELECINES: &[&str] = &["NONE", "HARD"];
const TOGGLE: &[&str] = &["DISABLED", "ENABLED"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProresSettings {
    pub codec_profile: Option<String>,
    pub framerate_control: Option<String>,
    pub framerate_conversion_algorithm: Option<String>,
    pub framerate_denominator: Option<i64>,
    pub framerate_numerator: Option<i64>,
    pub interlace_mode: Option<String>,
    pub par_control: Option<String>,
    pub par_denominator: Option<i64>,
    pub par_numerator: Option<i64>,
    pub slow_pal: Option<String>,
    pub telecine: Option<String>,
}

impl SettingsGroup for ProresSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_enum(&mut body, "codecProfile", &self.codec_profile, CODEC_PROFILES)?;
        put_enum(
            &mut body,
            "framerateControl",
            &self.framerate_control,
            FRAMERATE_CONTROLS,
        )?;
        put_enum(
            &mut body,
            "framerateConversionAlgorithm",
            &self.framerate_conversion_algorithm,
            FRAMERATE_CONVERSION_ALGORITHMS,
        )?;
        put_i64(&mut body, "framerateDenominator", &self.framerate_denominator);
        put_i64(&mut body, "framerateNumerator", &self.framerate_numerator);
        put_enum(&mut body, "interlaceMode", &self.interlace_mode, INTERLACE_MODES)?;
        put_enum(&mut body, "parControl", &self.par_control, PAR_CONTROLS)?;
        put_i64(&mut body, "parDenominator", &self.par_denominator);
        put_i64(&mut body, "parNumerator", &self.par_numerator);
        put_enum(&mut body, "slowPal", &self.slow_pal, TOGGLE)?;
        put_enum(&mut body, "telecine", &self.telecine, TELECINES)?;
        Ok(body)
    }
}
