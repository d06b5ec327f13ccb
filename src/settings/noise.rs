use serde::Deserialize;

use super::{put_enum, put_group, put_i64, RequestBody, SettingsGroup};
use crate::utils::error::Result;

const NOISE_REDUCER_FILTERS: &[&str] = &[
    "BILATERAL",
    "MEAN",
    "GAUSSIAN",
    "LANCZOS",
    "SHARPEN",
    "CONSERVE",
    "SPATIAL",
];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NoiseReducer {
    pub filter: Option<String>,
    pub filter_settings: Option<NoiseReducerFilterSettings>,
    pub spatial_filter_settings: Option<NoiseReducerSpatialFilterSettings>,
}

impl SettingsGroup for NoiseReducer {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_enum(&mut body, "filter", &self.filter, NOISE_REDUCER_FILTERS)?;
        put_group(&mut body, "filterSettings", &self.filter_settings)?;
        put_group(
            &mut body,
            "spatialFilterSettings",
            &self.spatial_filter_settings,
        )?;
        Ok(body)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NoiseReducerFilterSettings {
    pub strength: Option<i64>,
}

impl SettingsGroup for NoiseReducerFilterSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_i64(&mut body, "strength", &self.strength);
        Ok(body)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NoiseReducerSpatialFilterSettings {
    pub post_filter_sharpen_strength: Option<i64>,
    pub speed: Option<i64>,
    pub strength: Option<i64>,
}

impl SettingsGroup for NoiseReducerSpatialFilterSettings {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_i64(
            &mut body,
            "postFilterSharpenStrength",
            &self.post_filter_sharpen_strength,
        );
        put_i64(&mut body, "speed", &self.speed);
        put_i64(&mut body, "strength", &self.strength);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_spatial_filter_round_trip() {
        let reducer = NoiseReducer::from_value(&json!({
            "Filter": "SPATIAL",
            "SpatialFilterSettings": { "Strength": 8, "Speed": -1 }
        }))
        .unwrap();
        let body = reducer.request_body().unwrap();
        assert_eq!(body["filter"], json!("SPATIAL"));
        assert_eq!(
            body["spatialFilterSettings"],
            json!({ "speed": -1, "strength": 8 })
        );
    }

    #[test]
    fn test_filter_outside_set() {
        let reducer = NoiseReducer {
            filter: Some("TEMPORAL".to_string()),
            ..Default::default()
        };
        assert!(reducer.request_body().is_err());
    }
}
