use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Body returned by `POST /v1/images/generations`, for both success and error
/// statuses. Fields with an unexpected shape read as absent.
#[derive(Debug, Default, Deserialize)]
pub struct OpenAiGenerateImagesResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub data: Option<Vec<OpenAiImageData>>,
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<OpenAiError>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OpenAiImageData {
    #[serde(default, deserialize_with = "lenient")]
    pub b64_json: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OpenAiError {
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
}

impl OpenAiGenerateImagesResponse {
    pub fn from_value(value: Value) -> Self {
        return serde_json::from_value(value).unwrap_or_default();
    }

    /// First image payload, if it is a non-empty string.
    pub fn b64_json(&self) -> Option<&str> {
        return self
            .data
            .as_ref()?
            .first()?
            .b64_json
            .as_deref()
            .filter(|b64_json| !b64_json.is_empty());
    }

    pub fn error_message(&self) -> Option<&str> {
        return self
            .error
            .as_ref()?
            .message
            .as_deref()
            .filter(|message| !message.is_empty());
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    return Ok(serde_json::from_value(value).ok());
}
