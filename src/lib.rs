use std::{any::Any, sync::Arc};

use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::app::{env::Envy, errors::DefaultApiError};

pub mod app;
pub mod images;
pub mod public;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(envy: Envy) -> Result<Self, reqwest::Error> {
        let client = app::util::reqwest::build_client(&envy)?;

        return Ok(Self {
            envy: Arc::new(envy),
            client,
        });
    }
}

pub fn router(state: AppState) -> Router {
    let body_limit = state.envy.body_limit_bytes();

    return Router::new()
        // images
        .route(
            "/api/generate",
            post(images::controller::generate_image).fallback(public::controller::serve),
        )
        // public
        .fallback(public::controller::serve)
        // layers
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state);
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    tracing::error!(%details, "request handler panicked");

    return DefaultApiError::UnexpectedServerError.value().into_response();
}
