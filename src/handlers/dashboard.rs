//! Dashboard query handlers
//!
//! Read-only views over an analytics snapshot. Every endpoint returns the
//! zero/empty contract on a fresh process; none of them can fail on sparse
//! data, and limit/offset parameters clamp instead of erroring.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::analytics::aggregate::{
    self, DailyCount, HistoryPage, RequestStats, ToxicityDistribution, TypeCount,
};
use crate::models::{ContactEvent, DatasetEvent, PredictionEvent};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_predictions: usize,
    pub average_response_time_ms: f64,
    pub prediction_success_count: u64,
    pub prediction_fail_count: u64,
}

#[derive(Debug, Serialize)]
pub struct SeriesResponse<T> {
    pub series: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct RequestsResponse<T> {
    pub requests: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct PredictionsResponse {
    pub predictions: Vec<PredictionEvent>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// KPI card numbers
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let snapshot = state.analytics.snapshot();
    let stats = aggregate::request_stats(&snapshot);
    Json(StatsResponse {
        total_predictions: aggregate::total_predictions(&snapshot),
        average_response_time_ms: aggregate::average_response_time_ms(&snapshot),
        prediction_success_count: stats.success,
        prediction_fail_count: stats.failed,
    })
}

/// Daily prediction counts for line/bar charts
pub async fn predictions_over_time(
    State(state): State<AppState>,
) -> Json<SeriesResponse<DailyCount>> {
    let snapshot = state.analytics.snapshot();
    Json(SeriesResponse {
        series: aggregate::predictions_over_time(&snapshot),
    })
}

/// Success vs failed prediction requests
pub async fn request_stats(State(state): State<AppState>) -> Json<RequestStats> {
    Json(aggregate::request_stats(&state.analytics.snapshot()))
}

/// TOXIC vs NON-TOXIC split
pub async fn toxicity_distribution(
    State(state): State<AppState>,
) -> Json<ToxicityDistribution> {
    Json(aggregate::toxicity_distribution(&state.analytics.snapshot()))
}

/// Contact form submissions, newest first
pub async fn contact_requests(
    State(state): State<AppState>,
) -> Json<RequestsResponse<ContactEvent>> {
    Json(RequestsResponse {
        requests: aggregate::contact_requests(&state.analytics.snapshot()),
    })
}

/// Dataset share submissions, newest first
pub async fn dataset_requests(
    State(state): State<AppState>,
) -> Json<RequestsResponse<DatasetEvent>> {
    Json(RequestsResponse {
        requests: aggregate::dataset_requests(&state.analytics.snapshot()),
    })
}

/// Prediction counts by nanoparticle identifier
pub async fn nanoparticle_types(
    State(state): State<AppState>,
) -> Json<SeriesResponse<TypeCount>> {
    Json(SeriesResponse {
        series: aggregate::nanoparticle_type_counts(&state.analytics.snapshot()),
    })
}

/// Last N predictions, newest first
pub async fn recent_predictions(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Json<PredictionsResponse> {
    Json(PredictionsResponse {
        predictions: aggregate::recent_predictions(&state.analytics.snapshot(), query.limit),
    })
}

/// Paginated prediction history
pub async fn prediction_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<HistoryPage> {
    Json(aggregate::prediction_history(
        &state.analytics.snapshot(),
        query.limit,
        query.offset,
    ))
}
