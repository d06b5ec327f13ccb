use serde::Deserialize;

use super::{put_enum, put_i64, put_i64_list, put_str, RequestBody, SettingsGroup};
use crate::utils::error::Result;

const DEFAULT_SELECTIONS: &[&str] = &["DEFAULT", "NOT_DEFAULT"];
const SELECTOR_TYPES: &[&str] = &["PID", "TRACK", "LANGUAGE_CODE"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AudioSelector {
    pub default_selection: Option<String>,
    pub external_audio_file_input: Option<String>,
    pub language_code: Option<String>,
    pub offset: Option<i64>,
    #[serde(default)]
    pub pids: Vec<i64>,
    pub program_selection: Option<i64>,
    pub selector_type: Option<String>,
    #[serde(default)]
    pub tracks: Vec<i64>,
}

impl SettingsGroup for AudioSelector {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_enum(
            &mut body,
            "defaultSelection",
            &self.default_selection,
            DEFAULT_SELECTIONS,
        )?;
        put_str(
            &mut body,
            "externalAudioFileInput",
            &self.external_audio_file_input,
        );
        put_str(&mut body, "languageCode", &self.language_code);
        put_i64(&mut body, "offset", &self.offset);
        put_i64_list(&mut body, "pids", &self.pids);
        put_i64(&mut body, "programSelection", &self.program_selection);
        put_enum(&mut body, "selectorType", &self.selector_type, SELECTOR_TYPES)?;
        put_i64_list(&mut body, "tracks", &self.tracks);
        Ok(body)
    }
}
