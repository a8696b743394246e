use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicApiError {
    Forbidden,
    NotFound,
    MethodNotAllowed,
}

impl PublicApiError {
    pub fn value(&self) -> (StatusCode, &'static str) {
        match *self {
            Self::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            Self::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            Self::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
        }
    }
}

impl IntoResponse for PublicApiError {
    fn into_response(self) -> Response {
        let (code, message) = self.value();

        return (
            code,
            [(header::CONTENT_TYPE, mime::TEXT_PLAIN_UTF_8.to_string())],
            message,
        )
            .into_response();
    }
}
