use serde::Deserialize;

use super::{put_enum, put_group, put_i64, put_i64_list, put_str, RequestBody, SettingsGroup};
use crate::utils::error::Result;

const CONTAINERS: &[&str] = &["M3U8", "MOV", "MP4", "MPD", "RAW"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerSettings {
    pub container: Option<String>,
    pub m3u8_settings: Option<M3u8Settings>,
    pub mov_settings: Option<MovSettings>,
    pub mp4_settings: Option<Mp4Settings>,
}

impl SettingsGroup for ContainerSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_enum(&mut body, "container", &self.container, CONTAINERS)?;
        put_group(&mut body, "m3u8Settings", &self.m3u8_settings)?;
        put_group(&mut body, "movSettings", &self.mov_settings)?;
        put_group(&mut body, "mp4Settings", &self.mp4_settings)?;
        Ok(body)
    }
}

const NIELSEN_ID3: &[&str] = &["INSERT", "NONE"];
const PCR_CONTROLS: &[&str] = &["PCR_EVERY_PES_PACKET", "CONFIGURED_PCR_PERIOD"];
const SCTE_35_SOURCES: &[&str] = &["PASSTHROUGH", "NONE"];
const TIMED_METADATA: &[&str] = &["PASSTHROUGH", "NONE"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct M3u8Settings {
    pub audio_frames_per_pes: Option<i64>,
    #[serde(default)]
    pub audio_pids: Vec<i64>,
    pub nielsen_id3: Option<String>,
    pub pat_interval: Option<i64>,
    pub pcr_control: Option<String>,
    pub pcr_pid: Option<i64>,
    pub pmt_interval: Option<i64>,
    pub pmt_pid: Option<i64>,
    pub private_metadata_pid: Option<i64>,
    pub program_number: Option<i64>,
    pub scte_35_pid: Option<i64>,
    pub scte_35_source: Option<String>,
    pub timed_metadata: Option<String>,
    pub timed_metadata_pid: Option<i64>,
    pub transport_stream_id: Option<i64>,
    pub video_pid: Option<i64>,
}

impl SettingsGroup for M3u8Settings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_i64(&mut body, "audioFramesPerPes", &self.audio_frames_per_pes);
        put_i64_list(&mut body, "audioPids", &self.audio_pids);
        put_enum(&mut body, "nielsenId3", &self.nielsen_id3, NIELSEN_ID3)?;
        put_i64(&mut body, "patInterval", &self.pat_interval);
        put_enum(&mut body, "pcrControl", &self.pcr_control, PCR_CONTROLS)?;
        put_i64(&mut body, "pcrPid", &self.pcr_pid);
        put_i64(&mut body, "pmtInterval", &self.pmt_interval);
        put_i64(&mut body, "pmtPid", &self.pmt_pid);
        put_i64(&mut body, "privateMetadataPid", &self.private_metadata_pid);
        put_i64(&mut body, "programNumber", &self.program_number);
        put_i64(&mut body, "scte35Pid", &self.scte_35_pid);
        put_enum(&mut body, "scte35Source", &self.scte_35_source, SCTE_35_SOURCES)?;
        put_enum(&mut body, "timedMetadata", &self.timed_metadata, TIMED_METADATA)?;
        put_i64(&mut body, "timedMetadataPid", &self.timed_metadata_pid);
        put_i64(&mut body, "transportStreamId", &self.transport_stream_id);
        put_i64(&mut body, "videoPid", &self.video_pid);
        Ok(body)
    }
}

const ATOM_CONTROL: &[&str] = &["INCLUDE", "EXCLUDE"];
const MPEG2_FOURCC_CONTROLS: &[&str] = &["XDCAM", "MPEG"];
const PADDING_CONTROLS: &[&str] = &["OMNEON", "NONE"];
const REFERENCES: &[&str] = &["SELF_CONTAINED", "EXTERNAL"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovSettings {
    pub clap_atom: Option<String>,
    pub cslg_atom: Option<String>,
    pub mpeg2_fourcc_control: Option<String>,
    pub padding_control: Option<String>,
    pub reference: Option<String>,
}

impl SettingsGroup for MovSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_enum(&mut body, "clapAtom", &self.clap_atom, ATOM_CONTROL)?;
        put_enum(&mut body, "cslgAtom", &self.cslg_atom, ATOM_CONTROL)?;
        put_enum(
            &mut body,
            "mpeg2FourccControl",
            &self.mpeg2_fourcc_control,
            MPEG2_FOURCC_CONTROLS,
        )?;
        put_enum(&mut body, "paddingControl", &self.padding_control, PADDING_CONTROLS)?;
        put_enum(&mut body, "reference", &self.reference, REFERENCES)?;
        Ok(body)
    }
}

const MOOV_PLACEMENTS: &[&str] = &["PROGRESSIVE_DOWNLOAD", "NORMAL"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Mp4Settings {
    pub cslg_atom: Option<String>,
    pub free_space_box: Option<String>,
    pub moov_placement: Option<String>,
    pub mp4_major_brand: Option<String>,
}

impl SettingsGroup for Mp4Settings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_enum(&mut body, "cslgAtom", &self.cslg_atom, ATOM_CONTROL)?;
        put_enum(&mut body, "freeSpaceBox", &self.free_space_box, ATOM_CONTROL)?;
        put_enum(&mut body, "moovPlacement", &self.moov_placement, MOOV_PLACEMENTS)?;
        put_str(&mut body, "mp4MajorBrand", &self.mp4_major_brand);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mp4_fast_start() {
        let settings = ContainerSettings::from_value(&json!({
            "Container": "MP4",
            "Mp4Settings": { "MoovPlacement": "PROGRESSIVE_DOWNLOAD" }
        }))
        .unwrap();
        let body = settings.request_body().unwrap();
        assert_eq!(body["container"], json!("MP4"));
        assert_eq!(
            body["mp4Settings"],
            json!({ "moovPlacement": "PROGRESSIVE_DOWNLOAD" })
        );
    }

    #[test]
    fn test_m3u8_pid_layout() {
        let settings = M3u8Settings::from_value(&json!({
            "VideoPid": 481,
            "AudioPids": [482, 483],
            "PcrControl": "PCR_EVERY_PES_PACKET",
            "Scte35Pid": 500
        }))
        .unwrap();
        let body = settings.request_body().unwrap();
        assert_eq!(body["videoPid"], json!(481));
        assert_eq!(body["audioPids"], json!([482, 483]));
        assert_eq!(body["scte35Pid"], json!(500));
    }

    #[test]
    fn test_unknown_container_rejected() {
        let settings = ContainerSettings {
            container: Some("MKV".to_string()),
            ..Default::default()
        };
        assert!(settings.request_body().is_err());
    }

    #[test]
    fn test_mov_atoms() {
        let settings = MovSettings {
            clap_atom: Some("EXCLUDE".to_string()),
            reference: Some("SELF_CONTAINED".to_string()),
            ..Default::default()
        };
        let body = settings.request_body().unwrap();
        assert_eq!(body["clapAtom"], json!("EXCLUDE"));
        assert_eq!(body["reference"], json!("SELF_CONTAINED"));
    }
}
