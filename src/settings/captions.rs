use serde::Deserialize;

use super::{put_enum, put_group, put_str, RequestBody, SettingsGroup};
use crate::utils::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CaptionDescription {
    pub caption_selector_name: Option<String>,
    pub destination_settings: Option<CaptionDestinationSettings>,
    pub language_code: Option<String>,
    pub language_description: Option<String>,
}

impl SettingsGroup for CaptionDescription {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_str(&mut body, "captionSelectorName", &self.caption_selector_name);
        put_group(&mut body, "destinationSettings", &self.destination_settings)?;
        put_str(&mut body, "languageCode", &self.language_code);
        put_str(&mut body, "languageDescription", &self.language_description);
        Ok(body)
    }
}

const CAPTION_DESTINATION_TYPES: &[&str] = &[
    "BURN_IN", "DVB_SUB", "EMBEDDED", "SCC", "SRT", "TELETEXT", "TTML", "WEBVTT",
];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CaptionDestinationSettings {
    pub destination_type: Option<String>,
    pub ttml_destination_settings: Option<TtmlDestinationSettings>,
}

impl SettingsGroup for CaptionDestinationSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_enum(
            &mut body,
            "destinationType",
            &self.destination_type,
            CAPTION_DESTINATION_TYPES,
        )?;
        put_group(
            &mut body,
            "ttmlDestinationSettings",
            &self.ttml_destination_settings,
        )?;
        Ok(body)
    }
}

const TTML_STYLE_PASSTHROUGH: &[&str] = &["ENABLED", "DISABLED"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TtmlDestinationSettings {
    pub style_passthrough: Option<String>,
}

impl SettingsGroup for TtmlDestinationSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_enum(
            &mut body,
            "stylePassthrough",
            &self.style_passthrough,
            TTML_STYLE_PASSTHROUGH,
        )?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_caption_description_full_nesting() {
        let desc = CaptionDescription::from_value(&json!({
            "CaptionSelectorName": "Captions 1",
            "LanguageCode": "ENG",
            "DestinationSettings": {
                "DestinationType": "TTML",
                "TtmlDestinationSettings": { "StylePassthrough": "ENABLED" }
            }
        }))
        .unwrap();
        let body = desc.request_body().unwrap();
        assert_eq!(
            body["destinationSettings"],
            json!({
                "destinationType": "TTML",
                "ttmlDestinationSettings": { "stylePassthrough": "ENABLED" }
            })
        );
    }

    #[test]
    fn test_destination_type_outside_set_fails() {
        let settings = CaptionDestinationSettings {
            destination_type: Some("IMSC".to_string()),
            ..Default::default()
        };
        assert!(settings.request_body().is_err());
    }
}
