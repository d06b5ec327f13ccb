use serde::Deserialize;

use super::{put_group_list, put_i64, put_str, RequestBody, SettingsGroup};
use crate::utils::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageInserter {
    #[serde(default)]
    pub insertable_images: Vec<InsertableImage>,
}

impl SettingsGroup for ImageInserter {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_group_list(&mut body, "insertableImages", &self.insertable_images)?;
        Ok(body)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InsertableImage {
    pub duration: Option<i64>,
    pub fade_in: Option<i64>,
    pub fade_out: Option<i64>,
    pub height: Option<i64>,
    pub image_inserter_input: Option<String>,
    pub image_x: Option<i64>,
    pub image_y: Option<i64>,
    pub layer: Option<i64>,
    pub opacity: Option<i64>,
    pub start_time: Option<String>,
    pub width: Option<i64>,
}

impl SettingsGroup for InsertableImage {
    fn request_body(&self) -> Result<RequestBody> {
        let mut body = RequestBody::new();
        put_i64(&mut body, "duration", &self.duration);
        put_i64(&mut body, "fadeIn", &self.fade_in);
        put_i64(&mut body, "fadeOut", &self.fade_out);
        put_i64(&mut body, "height", &self.height);
        put_str(&mut body, "imageInserterInput", &self.image_inserter_input);
        put_i64(&mut body, "imageX", &self.image_x);
        put_i64(&mut body, "imageY", &self.image_y);
        put_i64(&mut body, "layer", &self.layer);
        put_i64(&mut body, "opacity", &self.opacity);
        put_str(&mut body, "startTime", &self.start_time);
        put_i64(&mut body, "width", &self.width);
        Ok(body)
    }
}
