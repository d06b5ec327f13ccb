use serde::Deserialize;

use super::{put_enum, put_f64, put_group, put_i64, RequestBody, SettingsGroup};
use crate::utils::error::Result;

const ADAPTIVE_QUANTIZATIONS: &[&str] = &["OFF", "LOW", "MEDIUM", "HIGH", "HIGHER", "MAX"];
const CODEC_LEVELS: &[&str] = &[
    "AUTO",
    "LEVEL_1",
    "LEVEL_1_1",
    "LEVEL_1_2",
    "LEVEL_1_3",
    "LEVEL_2",
    "LEVEL_2_1",
    "LEVEL_2_2",
    "LEVEL_3",
    "LEVEL_3_1",
    "LEVEL_3_2",
    "LEVEL_4",
    "LEVEL_4_1",
    "LEVEL_4_2",
    "LEVEL_5",
    "LEVEL_5_1",
    "LEVEL_5_2",
];
const CODEC_PROFILES: &[&str] = &[
    "BASELINE",
    "HIGH",
    "HIGH_10BIT",
    "HIGH_422",
    "HIGH_422_10BIT",
    "MAIN",
];
const ENTROPY_ENCODINGS: &[&str] = &["CABAC", "CAVLC"];
const FIELD_ENCODINGS: &[&str] = &["PAFF", "FORCE_FIELD"];
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
const PAR_CONTROLS: &[&str] = &["INITIALIZE_FROM_SOURCE", "SPECIFIED"];
const QUALITY_TUNING_LEVELS: &[&str] = &["SINGLE_PASS", "SINGLE_PASS_HQ", "MULTI_PASS_HQ"];
const RATE_CONTROL_MODES: &[&str] = &["VBR", "CBR", "QVBR"];
const SYNTAXES: &[&str] = &["DEFAULT", "RP2027"];
const TELECINES: &[&str] = &["NONE", "SOFT", "HARD"];
const TOGGLE: &[&str] = &["DISABLED", "ENABLED"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct H264Settings {
    pub adaptive_quantization: Option<String>,
    pub bitrate: Option<i64>,
    pub codec_level: Option<String>,
    pub codec_profile: Option<String>,
    pub entropy_encoding: Option<String>,
    pub field_encoding: Option<String>,
    pub flicker_adaptive_quantization: Option<String>,
    pub framerate_control: Option<String>,
    pub framerate_conversion_algorithm: Option<String>,
    pub framerate_denominator: Option<i64>,
    pub framerate_numerator: Option<i64>,
    pub gop_b_reference: Option<String>,
    pub gop_closed_cadence: Option<i64>,
    pub gop_size: Option<f64>,
    pub gop_size_units: Option<String>,
    pub hrd_buffer_initial_fill_percentage: Option<i64>,
    pub hrd_buffer_size: Option<i64>,
    pub interlace_mode: Option<String>,
    pub max_bitrate: Option<i64>,
    pub min_i_interval: Option<i64>,
    pub number_b_frames_between_reference_frames: Option<i64>,
    pub number_reference_frames: Option<i64>,
    pub par_control: Option<String>,
    pub par_denominator: Option<i64>,
    pub par_numerator: Option<i64>,
    pub quality_tuning_level: Option<String>,
    pub qvbr_settings: Option<H264QvbrSettings>,
    pub rate_control_mode: Option<String>,
    pub repeat_pps: Option<String>,
    pub scene_change_detect: Option<String>,
    pub slices: Option<i64>,
    pub slow_pal: Option<String>,
    pub softness: Option<i64>,
    pub spatial_adaptive_quantization: Option<String>,
    pub syntax: Option<String>,
    pub telecine: Option<String>,
    pub temporal_adaptive_quantization: Option<String>,
    pub unregistered_sei_timecode: Option<String>,
}

impl SettingsGroup for H264Settings {
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
            "entropyEncoding",
            &self.entropy_encoding,
            ENTROPY_ENCODINGS,
        )?;
        put_enum(&mut body, "fieldEncoding", &self.field_encoding, FIELD_ENCODINGS)?;
        put_enum(
            &mut body,
            "flickerAdaptiveQuantization",
            &self.flicker_adaptive_quantization,
            TOGGLE,
        )?;
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
        put_enum(&mut body, "gopBReference", &self.gop_b_reference, TOGGLE)?;
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
        put_i64(&mut body, "maxBitrate", &self.max_bitrate);
        put_i64(&mut body, "minIInterval", &self.min_i_interval);
        put_i64(
            &mut body,
            "numberBFramesBetweenReferenceFrames",
            &self.number_b_frames_between_reference_frames,
        );
        put_i64(&mut body, "numberReferenceFrames", &self.number_reference_frames);
        put_enum(&mut body, "parControl", &self.par_control, PAR_CONTROLS)?;
        put_i64(&mut body, "parDenominator", &self.par_denominator);
        put_i64(&mut body, "parNumerator", &self.par_numerator);
        put_enum(
            &mut body,
            "qualityTuningLevel",
            &self.quality_tuning_level,
            QUALITY_TUNING_LEVELS,
        )?;
        put_group(&mut body, "qvbrSettings", &self.qvbr_settings)?;
        put_enum(
            &mut body,
            "rateControlMode",
            &self.rate_control_mode,
            RATE_CONTROL_MODES,
        )?;
        put_enum(&mut body, "repeatPps", &self.repeat_pps, TOGGLE)?;
        put_enum(&mut body, "sceneChangeDetect", &self.scene_change_detect, TOGGLE)?;
        put_i64(&mut body, "slices", &self.slices);
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
        put_enum(
            &mut body,
            "unregisteredSeiTimecode",
            &self.unregistered_sei_timecode,
            TOGGLE,
        )?;
        Ok(body)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct H264QvbrSettings {
    pub max_average_bitrate: Option<i64>,
    pub qvbr_quality_level: Option<i64>,
}

impl SettingsGroup for H264QvbrSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_i64(&mut body, "maxAverageBitrate", &self.max_average_bitrate);
        put_i64(&mut body, "qvbrQualityLevel", &self.qvbr_quality_level);
        Ok(body)
    }
}
