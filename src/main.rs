//! Starlit Portfolio
//!
//! Server binary: serves the Dioxus application plus the small JSON API the
//! contact form relies on. The wasm build launches the client app directly.

use starlit_portfolio::app;

#[cfg(feature = "server")]
use starlit_portfolio::{api, config};

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "server")]
    return serve();

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(app::App);
        Ok(())
    }
}

#[cfg(feature = "server")]
#[tokio::main]
async fn serve() -> anyhow::Result<()> {
    use axum::routing::{get, post};
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::net::SocketAddr;
    use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "starlit_portfolio=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting Starlit Portfolio v{} ({})",
        env!("PORTFOLIO_VERSION"),
        env!("PORTFOLIO_GIT_SHA")
    );

    // Load configuration
    let config = config::load_config()?;
    tracing::info!("Configuration loaded, port: {}", config.port);
    if config.contact.is_none() {
        tracing::warn!("Contact relay not configured; /api/contact will return 503");
    }

    let state = api::AppState::new(config.contact.clone());

    // Build API routes, then mount the Dioxus application on top
    let router = axum::Router::new()
        .route("/api/status", get(api::status_handler))
        .route("/api/contact", post(api::contact_handler))
        .with_state(state)
        .serve_dioxus_application(ServeConfig::default(), app::App)
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server with graceful shutdown
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
#[cfg(feature = "server")]
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
