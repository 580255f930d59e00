//! Request, response, and error types for the web layer.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::render;
use crate::error::SizingError;
use crate::sizing::demand::ApplianceEntry;
use crate::sizing::diagram::DiagramId;

/// Body of `POST /api/estimate`.
#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    /// Opaque location label.
    #[serde(default)]
    pub location: String,
    pub appliances: Vec<ApplianceEntry>,
}

/// Query of `GET /api/diagram`.
///
/// Kept as text so malformed values produce our own error body.
#[derive(Debug, Deserialize)]
pub struct DiagramQuery {
    pub panel_count: Option<String>,
}

/// Response of `GET /api/diagram`.
#[derive(Debug, Serialize)]
pub struct DiagramResponse {
    pub panel_count: i64,
    pub diagram: DiagramId,
}

/// Error response body for JSON endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// HTTP status for each error kind.
pub fn status_for(err: &SizingError) -> StatusCode {
    match err {
        SizingError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        SizingError::DiagramNotFound(_) => StatusCode::NOT_FOUND,
        SizingError::InvalidConfiguration(_) | SizingError::Io(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// User-facing message; server-side failures are logged and not echoed.
fn public_message(err: &SizingError) -> String {
    match err {
        SizingError::InvalidInput(msg) => msg.clone(),
        SizingError::DiagramNotFound(id) => {
            tracing::warn!(diagram = %id, "diagram resource missing");
            "Diagram not found.".to_string()
        }
        SizingError::InvalidConfiguration(_) | SizingError::Io(_) => {
            tracing::error!(error = %err, "request failed");
            "Internal server error.".to_string()
        }
    }
}

/// Error rendered as an HTML error page.
#[derive(Debug)]
pub struct PageError(pub SizingError);

impl From<SizingError> for PageError {
    fn from(err: SizingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        let body = render::error_page(&public_message(&self.0));
        (status, Html(body)).into_response()
    }
}

/// Error rendered as an `ErrorResponse` JSON body.
#[derive(Debug)]
pub struct JsonError(pub SizingError);

impl From<SizingError> for JsonError {
    fn from(err: SizingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        let body = ErrorResponse {
            error: public_message(&self.0),
        };
        (status, Json(body)).into_response()
    }
}
