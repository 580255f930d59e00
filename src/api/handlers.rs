//! Request handlers for the calculator pages and JSON endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::{Form, Json};

use super::AppState;
use super::form::{panel_count_value, parse_calculation, parse_panel_count};
use super::render;
use super::types::{DiagramQuery, DiagramResponse, EstimateRequest, JsonError, PageError};
use crate::error::SizingError;
use crate::io::appliances::check_entries;
use crate::sizing::diagram::select_diagram;
use crate::sizing::report::{SizingReport, calculate};

/// Calculator form.
///
/// `GET /` → 200 HTML
pub async fn index() -> Html<String> {
    Html(render::index_page())
}

/// Sizes the installation for a submitted calculator form.
///
/// `POST /calcular` → 200 result page
/// invalid or missing fields → 400 error page
pub async fn calculate_form(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Html<String>, PageError> {
    let form = parse_calculation(&pairs)?;
    let report = calculate(form.location, form.appliances, &state.panel)?;
    tracing::info!(
        appliances = report.appliances.len(),
        total_kwh = report.total_kwh,
        panel_count = report.panel_count,
        "calculation complete"
    );
    Ok(Html(render::result_page(&report)))
}

/// Shows the wiring diagram for a panel count.
///
/// `POST /simular` → 200 diagram document
/// missing or non-integer `num_paneles` → 400 error page
/// diagram resource absent → 404 error page
pub async fn diagram_form(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Html<String>, PageError> {
    let panel_count = parse_panel_count(&pairs)?;
    warn_negative(panel_count);
    let id = select_diagram(panel_count);
    tracing::debug!(panel_count, diagram = %id, "diagram selected");
    let doc = state.diagrams.fetch(id)?;
    Ok(Html(doc))
}

/// JSON variant of the calculation.
///
/// `POST /api/estimate` → 200 + `SizingReport` JSON
/// malformed body or invalid entries → 400 + `ErrorResponse`
pub async fn estimate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<SizingReport>, JsonError> {
    let Json(req) = body.map_err(|rejection| SizingError::invalid_input(rejection.body_text()))?;
    check_entries(&req.appliances)?;
    let report = calculate(req.location, req.appliances, &state.panel)?;
    Ok(Json(report))
}

/// Diagram identifier for a panel count, without resolving the resource.
///
/// `GET /api/diagram?panel_count=N` → 200 + `DiagramResponse` JSON
/// missing or non-integer `panel_count` → 400 + `ErrorResponse`
pub async fn diagram(
    Query(query): Query<DiagramQuery>,
) -> Result<Json<DiagramResponse>, JsonError> {
    let panel_count = panel_count_value("panel_count", query.panel_count.as_deref())?;
    warn_negative(panel_count);
    Ok(Json(DiagramResponse {
        panel_count,
        diagram: select_diagram(panel_count),
    }))
}

fn warn_negative(panel_count: i64) {
    if panel_count < 0 {
        tracing::warn!(panel_count, "negative panel count mapped to smallest diagram");
    }
}
