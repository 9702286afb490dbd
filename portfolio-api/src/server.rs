use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers::{create_status_check, get_portfolio, health, list_status_checks, root};
use crate::state::AppState;

/// Create the HTTP router with all routes
pub fn create_server(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/portfolio", get(get_portfolio))
        .route("/api/status", get(list_status_checks).post(create_status_check))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

/// Start the HTTP server; returns once a shutdown signal has been handled
pub async fn start_server(state: AppState, addr: &str) -> anyhow::Result<()> {
    let app = create_server(state);
    let listener = TcpListener::bind(addr).await?;

    info!("HTTP server running on http://{}", addr);
    info!("Portfolio: http://{}/api/portfolio", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
