use serde::Serialize;

pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub image_data_url: String,
}

impl GeneratedImage {
    pub fn from_b64_png(b64_json: &str) -> Self {
        return Self {
            image_data_url: [PNG_DATA_URL_PREFIX, b64_json].concat(),
        };
    }
}
