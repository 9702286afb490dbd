use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use portfolio_core::{Portfolio, StatusCheck, StatusCheckCreate};

use crate::error::ApiError;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "portfolio-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /api/
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Portfolio API Ready" }))
}

/// GET /api/portfolio
pub async fn get_portfolio(State(state): State<AppState>) -> Result<Json<Portfolio>, ApiError> {
    let portfolio = state.aggregator.get_portfolio().await?;
    Ok(Json(portfolio))
}

/// POST /api/status
pub async fn create_status_check(
    State(state): State<AppState>,
    payload: Result<Json<StatusCheckCreate>, JsonRejection>,
) -> Result<Json<StatusCheck>, ApiError> {
    let Json(input) = payload?;
    let check = state.status_log.record(input).await?;
    Ok(Json(check))
}

/// GET /api/status
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    let checks = state.status_log.list().await?;
    Ok(Json(checks))
}
