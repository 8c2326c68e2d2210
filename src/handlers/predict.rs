//! Prediction handler

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::analytics::{instrument, PredictionOutcome};
use crate::models::{PredictRequest, PredictResponse};
use crate::pipeline;
use crate::{AppError, AppResult, AppState};

/// Run the three-stage pipeline for one nanoparticle.
///
/// The whole request body is parsed inside the instrumentation wrapper so
/// that malformed payloads still tick the prediction fail counter.
pub async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> AppResult<Json<PredictResponse>> {
    instrument::observe_prediction(&state.analytics, || {
        let request: PredictRequest = serde_json::from_value(payload)
            .map_err(|err| AppError::Validation(format!("Invalid prediction payload: {err}")))?;

        let response = pipeline::run(&request);
        let outcome = PredictionOutcome {
            nanoparticle_id: response.nanoparticle_id.clone(),
            toxicity: response.stage2.toxicity_prediction,
            confidence: response.stage2.confidence,
            cytotoxicity: response.stage3.cytotoxicity,
            risk_level: response.stage2.risk_level.to_string(),
            key_factors: response.key_factors.clone(),
        };
        Ok((Json(response), outcome))
    })
}
