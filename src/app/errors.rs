use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    UnexpectedServerError,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::UnexpectedServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Unexpected server error.".to_string(),
            },
        }
    }
}
