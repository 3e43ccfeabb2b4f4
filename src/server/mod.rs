use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

pub mod handlers;
pub mod state;

pub use self::state::AppState;
use crate::constants::ALTERNATIVE_PORT;
use handlers::{get_legend, get_map_view, get_settings, index_html, script_js, style_css};

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_html))
        .route("/style.css", get(style_css))
        .route("/script.js", get(script_js))
        .route("/api/map", get(get_map_view))
        .route("/api/legend", get(get_legend))
        .route("/api/settings", get(get_settings))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

/// Binds 127.0.0.1 on `port`, falling back to the alternative port when busy.
pub async fn bind_listener(port: u16) -> Result<TcpListener> {
    bind_with_fallback(port, ALTERNATIVE_PORT).await
}

async fn bind_with_fallback(port: u16, fallback: u16) -> Result<TcpListener> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    match TcpListener::bind(addr).await {
        Ok(listener) => Ok(listener),
        Err(e) if port != fallback => {
            warn!(port, error = %e, fallback, "port unavailable");
            let fallback = SocketAddr::from(([127, 0, 0, 1], fallback));
            TcpListener::bind(fallback)
                .await
                .with_context(|| format!("Failed to bind {} or {}", addr, fallback))
        }
        Err(e) => Err(e).with_context(|| format!("Failed to bind {}", addr)),
    }
}

pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let app = create_app(state);
    info!(addr = %listener.local_addr()?, "HTTP server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;
    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
