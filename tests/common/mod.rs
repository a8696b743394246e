#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use bytes::Bytes;
use image_creator::{app::env::Envy, router, AppState};
use serde_json::Value;
use tower::util::ServiceExt;

pub const API_KEY: &str = "sk-test";
pub const IMAGES_PATH: &str = "/v1/images/generations";

pub fn app(envy: Envy) -> Router {
    return router(AppState::new(envy).unwrap());
}

/// Envy pointed at a mock upstream with a configured key.
pub fn envy_for(upstream_uri: &str) -> Envy {
    return Envy {
        openai_api_key: Some(API_KEY.to_string()),
        openai_images_url: Some(format!("{}{}", upstream_uri, IMAGES_PATH)),
        ..Default::default()
    };
}

pub fn post_generate(body: impl Into<Body>) -> Request<Body> {
    return Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
}

pub fn get(uri: &str) -> Request<Body> {
    return Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Bytes> {
    let response = app.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = hyper::body::to_bytes(body).await.unwrap();

    return Response::from_parts(parts, bytes);
}

pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = send(app, request).await;

    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json; charset=utf-8",
        "json envelope expected"
    );

    let status = response.status();
    let value = serde_json::from_slice(response.body()).unwrap();

    return (status, value);
}
