//! Web front end for the solar sizing calculator.
//!
//! HTML routes:
//! - `GET /` calculator form
//! - `POST /calcular` sizing result page
//! - `POST /simular` wiring diagram for a panel count
//!
//! JSON routes:
//! - `POST /api/estimate` sizing report
//! - `GET /api/diagram` diagram identifier for a panel count

pub mod form;
mod handlers;
pub mod render;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

pub use types::{DiagramResponse, ErrorResponse, EstimateRequest};

use crate::io::diagrams::DiagramStore;
use crate::sizing::panel::PanelModel;

/// Immutable application state shared across all request handlers.
///
/// Built once at startup and wrapped in `Arc`; requests never mutate it.
pub struct AppState {
    /// Panel model used for every calculation.
    pub panel: PanelModel,
    /// Wiring diagram resources.
    pub diagrams: Box<dyn DiagramStore>,
}

impl AppState {
    pub fn new(panel: PanelModel, diagrams: impl DiagramStore + 'static) -> Self {
        Self {
            panel,
            diagrams: Box::new(diagrams),
        }
    }
}

/// Builds the axum router with all routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/calcular", post(handlers::calculate_form))
        .route("/simular", post(handlers::diagram_form))
        .route("/api/estimate", post(handlers::estimate))
        .route("/api/diagram", get(handlers::diagram))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds to the given address and serves until Ctrl-C.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an `io::Error` if binding or serving fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("calculator listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
