use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ImagesApiError {
    MissingApiKey,
    InvalidJsonBody,
    PromptRequired,
    GenerationFailed,
    NoImageData,
    UnexpectedError,
}

impl ImagesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MissingApiKey => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Server is missing OPENAI_API_KEY. Add it to your environment and restart the server.".to_string(),
            },
            Self::InvalidJsonBody => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid JSON body.".to_string(),
            },
            Self::PromptRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Prompt is required.".to_string(),
            },
            Self::GenerationFailed => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Image generation failed.".to_string(),
            },
            Self::NoImageData => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "No image data returned.".to_string(),
            },
            Self::UnexpectedError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Unexpected server error while generating image.".to_string(),
            },
        }
    }
}
