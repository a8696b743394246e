use serde::Serialize;
use serde_json::Value;

pub const OPENAI_IMAGE_MODEL: &str = "gpt-image-1";

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub model: String,
    pub prompt: String,
    pub size: Value,
}

impl InputSpec {
    pub fn new(prompt: &str, size: Value) -> Self {
        return Self {
            model: OPENAI_IMAGE_MODEL.to_string(),
            prompt: prompt.to_string(),
            size,
        };
    }
}
