use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const APPLICATION_JSON_UTF_8: &str = "application/json; charset=utf-8";

/// `Json`, with the charset spelled out in the content type.
#[derive(Debug, Clone)]
pub struct JsonResponse<T>(pub T);

impl<T: Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        return (
            [(header::CONTENT_TYPE, APPLICATION_JSON_UTF_8)],
            Json(self.0),
        )
            .into_response();
    }
}
