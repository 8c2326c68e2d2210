//! Health check handlers

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::health::ModelStatus;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    message: &'static str,
    timestamp: DateTime<Utc>,
    uptime_seconds: f64,
    uptime_percentage: f64,
    models_loaded: bool,
    model_status: ModelStatus,
}

/// Full health report for the dashboard and deployment probes
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let report = state.health.report();
    Json(HealthResponse {
        status: report.status,
        message: "NanoTox AI API is running",
        timestamp: Utc::now(),
        uptime_seconds: report.uptime_seconds,
        uptime_percentage: report.uptime_percentage,
        models_loaded: report.models_loaded,
        model_status: report.model_status,
    })
}

/// Minimal liveness probe
pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn ping() -> &'static str {
    "pong"
}
