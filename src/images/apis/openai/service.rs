// https://platform.openai.com/docs/api-reference/images/create

use serde_json::Value;

use crate::{
    app::models::api_error::ApiError,
    images::{errors::ImagesApiError, models::generated_image::GeneratedImage},
};

use super::{
    models::input_spec::InputSpec,
    structs::openai_generate_images_response::OpenAiGenerateImagesResponse,
};

/// Sends one generation request and maps the outcome onto the browser facing
/// envelope. Never retries.
pub async fn generate_image(
    input_spec: &InputSpec,
    openai_api_key: &str,
    url: &str,
    client: &reqwest::Client,
) -> Result<GeneratedImage, ApiError> {
    let result = client
        .post(url)
        .bearer_auth(openai_api_key)
        .json(input_spec)
        .send()
        .await;

    let res = match result {
        Ok(res) => res,
        Err(e) => {
            tracing::error!("generate_image, {:?}", e);
            return Err(ImagesApiError::UnexpectedError.value());
        }
    };

    let status = res.status();

    let value = match res.text().await {
        Ok(text) => match serde_json::from_str::<Value>(&text) {
            Ok(value) => value,
            Err(_) => {
                tracing::error!(%status, %text, "upstream returned a non-JSON body");
                return Err(ImagesApiError::UnexpectedError.value());
            }
        },
        Err(e) => {
            tracing::error!(%e);
            return Err(ImagesApiError::UnexpectedError.value());
        }
    };

    let response = OpenAiGenerateImagesResponse::from_value(value);

    if !status.is_success() {
        tracing::warn!(%status, message = ?response.error_message(), "upstream rejected generation");

        return match response.error_message() {
            Some(message) => Err(ApiError {
                code: ImagesApiError::GenerationFailed.value().code,
                message: message.to_string(),
            }),
            None => Err(ImagesApiError::GenerationFailed.value()),
        };
    }

    match response.b64_json() {
        Some(b64_json) => Ok(GeneratedImage::from_b64_png(b64_json)),
        None => {
            tracing::error!(%status, "upstream response carried no image data");
            Err(ImagesApiError::NoImageData.value())
        }
    }
}
