use serde_json::Value;
use validator::Validate;

use crate::{app::models::api_error::ApiError, images::errors::ImagesApiError};

pub const DEFAULT_SIZE: &str = "1024x1024";

#[derive(Debug, Clone, Default, Validate)]
pub struct GenerateImageDto {
    #[validate(
        required(message = "Prompt is required."),
        length(min = 1, message = "Prompt is required.")
    )]
    pub prompt: Option<String>,
    // forwarded upstream as sent, whatever its JSON type
    pub size: Option<Value>,
}

impl GenerateImageDto {
    /// Parses a raw request body. Only an object can carry a prompt; other
    /// JSON values parse to an empty request. `null`, or a prompt that is
    /// present but not a string, is rejected as invalid.
    pub fn from_slice(body: &[u8]) -> Result<Self, ApiError> {
        let value = match serde_json::from_slice::<Value>(body) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(%e, "rejected request body");
                return Err(ImagesApiError::InvalidJsonBody.value());
            }
        };

        let mut fields = match value {
            Value::Object(fields) => fields,
            Value::Null => return Err(ImagesApiError::InvalidJsonBody.value()),
            _ => return Ok(Self::default()),
        };

        let prompt = match fields.remove("prompt") {
            Some(Value::String(prompt)) => Some(prompt),
            Some(value) if is_blank(&value) => None,
            Some(_) => return Err(ImagesApiError::InvalidJsonBody.value()),
            None => None,
        };

        return Ok(Self {
            prompt,
            size: fields.remove("size"),
        });
    }

    pub fn sanitized(&self) -> Self {
        return Self {
            prompt: self
                .prompt
                .as_deref()
                .map(str::trim)
                .filter(|prompt| !prompt.is_empty())
                .map(str::to_string),
            size: Some(
                self.size
                    .clone()
                    .filter(|size| !is_blank(size))
                    .unwrap_or_else(|| Value::String(DEFAULT_SIZE.to_string())),
            ),
        };
    }

    pub fn prompt(&self) -> &str {
        return self.prompt.as_deref().unwrap_or_default();
    }

    pub fn size(&self) -> Value {
        return self
            .size
            .clone()
            .unwrap_or_else(|| Value::String(DEFAULT_SIZE.to_string()));
    }
}

/// `null`, `false`, zero and `""` count as not provided.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
