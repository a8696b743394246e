use std::{env, net::SocketAddr, process};

use image_creator::{app::env::Envy, router, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let _ = dotenvy::dotenv();
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(%e, "invalid environment");
            process::exit(1);
        }
    };

    if envy.openai_api_key().is_none() {
        tracing::warn!("OPENAI_API_KEY is not set, /api/generate will answer 500 until it is");
    }

    // properties
    let port = envy.port();
    let public_dir = envy.public_dir();

    let state = match AppState::new(envy) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(%e, "failed to build http client");
            process::exit(1);
        }
    };

    // app
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let server = match axum::Server::try_bind(&addr) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(%e, %addr, "failed to bind");
            process::exit(1);
        }
    };

    tracing::info!(public_dir = %public_dir.display(), "image creator running on http://localhost:{}", port);

    if let Err(e) = server
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(%e, "server error");
        process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(%e, "failed to listen for shutdown signal");
        return;
    }

    tracing::info!("shutting down");
}
