use axum::{extract::rejection::BytesRejection, extract::State, http::StatusCode};
use bytes::Bytes;

use crate::{
    app::models::{api_error::ApiError, json_response::JsonResponse},
    AppState,
};

use super::{errors::ImagesApiError, models::generated_image::GeneratedImage, service};

pub async fn generate_image(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<JsonResponse<GeneratedImage>, ApiError> {
    let body = body.map_err(|e| {
        tracing::debug!(%e, "failed to read request body");

        match e.status() {
            StatusCode::PAYLOAD_TOO_LARGE => ApiError {
                code: StatusCode::PAYLOAD_TOO_LARGE,
                message: "Request body is too large.".to_string(),
            },
            _ => ImagesApiError::InvalidJsonBody.value(),
        }
    });

    match service::generate_image(body, &state).await {
        Ok(image) => Ok(JsonResponse(image)),
        Err(e) => Err(e),
    }
}
