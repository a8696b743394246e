use bytes::Bytes;
use validator::Validate;

use crate::{app::models::api_error::ApiError, AppState};

use super::{
    apis::openai::{self, models::input_spec::InputSpec},
    dtos::generate_image_dto::GenerateImageDto,
    errors::ImagesApiError,
    models::generated_image::GeneratedImage,
};

/// Credential, then body, then prompt. Nothing leaves the process unless all
/// three pass.
pub async fn generate_image(
    body: Result<Bytes, ApiError>,
    state: &AppState,
) -> Result<GeneratedImage, ApiError> {
    let Some(openai_api_key) = state.envy.openai_api_key() else {
        tracing::error!("OPENAI_API_KEY is not configured");
        return Err(ImagesApiError::MissingApiKey.value());
    };

    let dto = GenerateImageDto::from_slice(&body?)?.sanitized();

    if let Err(e) = dto.validate() {
        tracing::debug!(%e, "rejected generation request");
        return Err(ImagesApiError::PromptRequired.value());
    }

    tracing::info!(
        size = %dto.size(),
        prompt_chars = dto.prompt().chars().count(),
        "generating image"
    );

    let input_spec = InputSpec::new(dto.prompt(), dto.size());

    return openai::service::generate_image(
        &input_spec,
        openai_api_key,
        state.envy.openai_images_url(),
        &state.client,
    )
    .await;
}
