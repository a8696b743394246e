mod common;

use std::fs;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use image_creator::app::env::Envy;
use tempfile::TempDir;

use common::{app, get, send};

struct Site {
    // outer holds a secret next to the public root
    _outer: TempDir,
    envy: Envy,
}

fn site() -> Site {
    let outer = tempfile::tempdir().unwrap();
    let root = outer.path().join("public");

    fs::create_dir_all(root.join("css")).unwrap();
    fs::write(root.join("index.html"), "<h1>Image Creator</h1>").unwrap();
    fs::write(root.join("app.js"), "console.log('hi');").unwrap();
    fs::write(root.join("css/site.css"), "body{}").unwrap();
    fs::write(root.join("model.bin"), [0u8, 1, 2]).unwrap();
    fs::write(outer.path().join("secret.txt"), "top secret").unwrap();

    let envy = Envy {
        public_dir: Some(root.to_string_lossy().into_owned()),
        ..Default::default()
    };

    return Site {
        _outer: outer,
        envy,
    };
}

#[tokio::test]
async fn root_serves_index_document() {
    let site = site();

    let response = send(app(site.envy.clone()), get("/")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    assert_eq!(response.body().as_ref(), b"<h1>Image Creator</h1>");
}

#[tokio::test]
async fn serves_assets_by_extension() {
    let site = site();

    for (uri, content_type) in [
        ("/app.js", "application/javascript; charset=utf-8"),
        ("/app.js?v=2", "application/javascript; charset=utf-8"),
        ("/css/site.css", "text/css; charset=utf-8"),
        ("/model.bin", "application/octet-stream"),
    ] {
        let response = send(app(site.envy.clone()), get(uri)).await;

        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        assert_eq!(response.headers()[header::CONTENT_TYPE], content_type);
    }
}

#[tokio::test]
async fn missing_paths_are_not_found() {
    let site = site();

    for uri in ["/nope.html", "/css", "/css/", "/api/generate"] {
        let response = send(app(site.envy.clone()), get(uri)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(response.body().as_ref(), b"Not found");
    }
}

#[tokio::test]
async fn traversal_never_reads_outside_the_root() {
    let site = site();

    for uri in [
        "/../secret.txt",
        "/css/../../secret.txt",
        "/%2e%2e/secret.txt",
        "/..%2fsecret.txt",
    ] {
        let response = send(app(site.envy.clone()), get(uri)).await;

        assert!(
            response.status() == StatusCode::FORBIDDEN
                || response.status() == StatusCode::NOT_FOUND,
            "{} answered {}",
            uri,
            response.status()
        );
        assert_ne!(response.body().as_ref(), b"top secret");
    }

    let response = send(app(site.envy.clone()), get("/../secret.txt")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(response.body().as_ref(), b"Forbidden");
}

#[tokio::test]
async fn dot_segments_inside_the_root_resolve() {
    let site = site();

    let response = send(app(site.envy.clone()), get("/css/../app.js")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.body().as_ref(), b"console.log('hi');");
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    let site = site();

    for (method, uri) in [
        ("POST", "/index.html"),
        ("PUT", "/api/generate"),
        ("DELETE", "/"),
        ("PATCH", "/app.js"),
    ] {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = send(app(site.envy.clone()), request).await;

        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "{} {}",
            method,
            uri
        );
        assert_eq!(response.body().as_ref(), b"Method not allowed");
    }
}
