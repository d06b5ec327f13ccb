use serde::Deserialize;

use super::{put_enum, put_enum_list, put_i64, put_str, RequestBody, SettingsGroup};
use crate::utils::error::Result;

const AD_MARKERS: &[&str] = &["ELEMENTAL", "ELEMENTAL_SCTE35"];
const CAPTION_LANGUAGE_SETTINGS: &[&str] = &["INSERT", "OMIT", "NONE"];
const CLIENT_CACHES: &[&str] = &["ENABLED", "DISABLED"];
const CODEC_SPECIFICATIONS: &[&str] = &["RFC_4281", "RFC_6381"];
const DIRECTORY_STRUCTURES: &[&str] = &["SINGLE_DIRECTORY", "SUBDIRECTORY_PER_STREAM"];
const MANIFEST_COMPRESSIONS: &[&str] = &["GZIP", "NONE"];
const MANIFEST_DURATION_FORMATS: &[&str] = &["FLOATING_POINT", "INTEGER"];
const OUTPUT_SELECTIONS: &[&str] = &["MANIFESTS_AND_SEGMENTS", "SEGMENTS_ONLY"];
const PROGRAM_DATE_TIMES: &[&str] = &["INCLUDE", "EXCLUDE"];
const SEGMENT_CONTROLS: &[&str] = &["SINGLE_FILE", "SEGMENTED_FILES"];
const STREAM_INF_RESOLUTIONS: &[&str] = &["INCLUDE", "EXCLUDE"];
const TIMED_METADATA_ID3_FRAMES: &[&str] = &["NONE", "PRIV", "TDRL"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HlsGroupSettings {
    #[serde(default)]
    pub ad_markers: Vec<String>,
    pub base_url: Option<String>,
    pub caption_language_setting: Option<String>,
    pub client_cache: Option<String>,
    pub codec_specification: Option<String>,
    pub destination: Option<String>,
    pub directory_structure: Option<String>,
    pub manifest_compression: Option<String>,
    pub manifest_duration_format: Option<String>,
    pub min_segment_length: Option<i64>,
    pub output_selection: Option<String>,
    pub program_date_time: Option<String>,
    pub program_date_time_period: Option<i64>,
    pub segment_control: Option<String>,
    pub segment_length: Option<i64>,
    pub segments_per_subdirectory: Option<i64>,
    pub stream_inf_resolution: Option<String>,
    pub timed_metadata_id3_frame: Option<String>,
    pub timed_metadata_id3_period: Option<i64>,
    pub timestamp_delta_milliseconds: Option<i64>,
}

impl SettingsGroup for HlsGroupSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_enum_list(&mut body, "adMarkers", &self.ad_markers, AD_MARKERS)?;
        put_str(&mut body, "baseUrl", &self.base_url);
        put_enum(
            &mut body,
            "captionLanguageSetting",
            &self.caption_language_setting,
            CAPTION_LANGUAGE_SETTINGS,
        )?;
        put_enum(&mut body, "clientCache", &self.client_cache, CLIENT_CACHES)?;
        put_enum(
            &mut body,
            "codecSpecification",
            &self.codec_specification,
            CODEC_SPECIFICATIONS,
        )?;
        put_str(&mut body, "destination", &self.destination);
        put_enum(
            &mut body,
            "directoryStructure",
            &self.directory_structure,
            DIRECTORY_STRUCTURES,
        )?;
        put_enum(
            &mut body,
            "manifestCompression",
            &self.manifest_compression,
            MANIFEST_COMPRESSIONS,
        )?;
        put_enum(
            &mut body,
            "manifestDurationFormat",
            &self.manifest_duration_format,
            MANIFEST_DURATION_FORMATS,
        )?;
        put_i64(&mut body, "minSegmentLength", &self.min_segment_length);
        put_enum(&mut body, "outputSelection", &self.output_selection, OUTPUT_SELECTIONS)?;
        put_enum(
            &mut body,
            "programDateTime",
            &self.program_date_time,
            PROGRAM_DATE_TIMES,
        )?;
        put_i64(&mut body, "programDateTimePeriod", &self.program_date_time_period);
        put_enum(&mut body, "segmentControl", &self.segment_control, SEGMENT_CONTROLS)?;
        put_i64(&mut body, "segmentLength", &self.segment_length);
        put_i64(
            &mut body,
            "segmentsPerSubdirectory",
            &self.segments_per_subdirectory,
        );
        put_enum(
            &mut body,
            "streamInfResolution",
            &self.stream_inf_resolution,
            STREAM_INF_RESOLUTIONS,
        )?;
        put_enum(
            &mut body,
            "timedMetadataId3Frame",
            &self.timed_metadata_id3_frame,
            TIMED_METADATA_ID3_FRAMES,
        )?;
        put_i64(
            &mut body,
            "timedMetadataId3Period",
            &self.timed_metadata_id3_period,
        );
        put_i64(
            &mut body,
            "timestampDeltaMilliseconds",
            &self.timestamp_delta_milliseconds,
        );
        Ok(body)
    }
}
