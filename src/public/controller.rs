use axum::{
    extract::State,
    http::{header, Method, Uri},
    response::{IntoResponse, Response},
};

use crate::AppState;

use super::{errors::PublicApiError, service};

/// Fallback for everything that is not `POST /api/generate`.
pub async fn serve(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET {
        return PublicApiError::MethodNotAllowed.into_response();
    }

    match service::read_file(&state.envy.public_dir(), uri.path()).await {
        Ok(file) => (
            [(header::CONTENT_TYPE, file.content_type.value().to_string())],
            file.data,
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
