use serde::Deserialize;

use super::{put_enum, put_f64, put_i64, RequestBody, SettingsGroup};
use crate::utils::error::Result;

const ADAPTIVE_QUANTIZATIONS: &[&str] = &["OFF", "LOW", "MEDIUM", "HIGH"];
const CODEC_LEVELS: &[&str] = &["AUTO", "LOW", "MAIN", "HIGH1440", "HIGH"];
const CODEC_PROFILES: &[&str] = &["MAIN", "PROFILE_422"];
const FRAMERATE_CONTROLS: &[&str] = &["INITIALIZE_FROM_SOURCE", "SPECIFIED"];
const FRAMERATE_CONVERSION_ALGORITHMS: &[&str] = &["DUPLICATE_DROP", "INTERPOLATE"];
const GOP_SIZE_UNITS: &[&str] = &["FRAMES", "SECONDS"];
const INTERLACE_MODES: &[&str] = &[
    "PROGRESSIVE",
    "TOP_FIELD",
    "BOTTOM_FIELD",
    "FOLLOW_TOP_FIELD",
    "FOLLOW_BOTTOM_FIELD",
];
const INTRA_DC_PRECISIONS: &[&str] = &[
    "AUTO",
    "INTRA_DC_PRECISION_8",
    "INTRA_DC_PRECISION_9",
    "INTRA_DC_PRECISION_10",
    "INTRA_DC_PRECISION_11",
];
const PAR_CONTROLS: &[&str] = &["INITIALIZE_FROM_SOURCE", "SPECIFIED"];
const QUALITY_TUNING_LEVELS: &[&str] = &["SINGLE_PASS", "MULTI_PASS"];
const RATE_CONTROL_MODES: &[&str] = &["VBR", "CBR"];
const SYNTAXES: &[&str] = &["DEFAULT", "D_10"];
const TELECINES: &[&str] = &["NONE", "SOFT", "HARD"];
const TOGGLE: &[&str] = &["DISABLED", "ENABLED"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Mpeg2Settings {
    pub adaptive_quantization: Option<String>,
    pub bitrate: Option<i64>,
    pub codec_level: Option<String>,
    pub codec_profile: Option<String>,
    pub framerate_control: Option<String>,
    pub framerate_conversion_algorithm: Option<String>,
    pub framerate_denominator: Option<i64>,
    pub framerate_numerator: Option<i64>,
    pub gop_closed_cadence: Option<i64>,
    pub gop_size: Option<f64>,
    pub gop_size_units: Option<String>,
    pub hrd_buffer_initial_fill_percentage: Option<i64>,
    pub hrd_buffer_size: Option<i64>,
    pub interlace_mode: Option<String>,
    pub intra_dc_precision: Option<String>,
    pub max_bitrate: Option<i64>,
    pub min_i_interval: Option<i64>,
    pub number_b_frames_between_reference_frames: Option<i64>,
    pub par_control: Option<String>,
    pub par_denominator: Option<i64>,
    pub par_numerator: Option<i64>,
    pub quality_tuning_level: Option<String>,
    pub rate_control_mode: Option<String>,
    pub scene_change_detect: Option<String>,
    pub slow_pal: Option<String>,
    pub softness: Option<i64>,
    pub spatial_adaptive_quantization: Option<String>,
    pub syntax: Option<String>,
    pub telecine: Option<String>,
    pub temporal_adaptive_quantization: Option<String>,
}

impl SettingsGroup for Mpeg2Settings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_enum(
            &mut body,
            "adaptiveQuantization",
            &self.adaptive_quantization,
            ADAPTIVE_QUANTIZATIONS,
        )?;
        put_i64(&mut body, "bitrate", &self.bitrate);
        put_enum(&mut body, "codecLevel", &self.codec_level, CODEC_LEVELS)?;
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
        put_i64(&mut body, "gopClosedCadence", &self.gop_closed_cadence);
        put_f64(&mut body, "gopSize", &self.gop_size);
        put_enum(&mut body, "gopSizeUnits", &self.gop_size_units, GOP_SIZE_UNITS)?;
        put_i64(
            &mut body,
            "hrdBufferInitialFillPercentage",
            &self.hrd_buffer_initial_fill_percentage,
        );
        put_i64(&mut body, "hrdBufferSize", &self.hrd_buffer_size);
        put_enum(&mut body, "interlaceMode", &self.interlace_mode, INTERLACE_MODES)?;
        put_enum(
            &mut body,
            "intraDcPrecision",
            &self.intra_dc_precision,
            INTRA_DC_PRECISIONS,
        )?;
        put_i64(&mut body, "maxBitrate", &self.max_bitrate);
        put_i64(&mut body, "minIInterval", &self.min_i_interval);
        put_i64(
            &mut body,
            "numberBFramesBetweenReferenceFrames",
            &self.number_b_frames_between_reference_frames,
        );
        put_enum(&mut body, "parControl", &self.par_control, PAR_CONTROLS)?;
        put_i64(&mut body, "parDenominator", &self.par_denominator);
        put_i64(&mut body, "parNumerator", &self.par_numerator);
        put_enum(
            &mut body,
            "qualityTuningLevel",
            &self.quality_tuning_level,
            QUALITY_TUNING_LEVELS,
        )?;
        put_enum(
            &mut body,
            "rateControlMode",
            &self.rate_control_mode,
            RATE_CONTROL_MODES,
        )?;
        put_enum(&mut body, "sceneChangeDetect", &self.scene_change_detect, TOGGLE)?;
        put_enum(&mut body, "slowPal", &self.slow_pal, TOGGLE)?;
        put_i64(&mut body, "softness", &self.softness);
        put_enum(
            &mut body,
            "spatialAdaptiveQuantization",
            &self.spatial_adaptive_quantization,
            TOGGLE,
        )?;
        put_enum(&mut body, "syntax", &self.syntax, SYNTAXES)?;
        put_enum(&mut body, "telecine", &self.telecine, TELECINES)?;
        put_enum(
            &mut body,
            "temporalAdaptiveQuantization",
            &self.temporal_adaptive_quantization,
            TOGGLE,
        )?;
        Ok(body)
    }
}
