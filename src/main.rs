//! NanoTox AI Backend Server
//!
//! Serves nanoparticle toxicity predictions and in-process usage analytics.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       NANOTOX API                            │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌──────────────┐  ┌───────────────────────┐ │
//! │  │  API      │  │  Prediction  │  │  Dashboard Queries    │ │
//! │  │  Gateway  │  │  Pipeline    │  │  (Aggregator)         │ │
//! │  │  (Axum)   │  │  (3-stage)   │  │                       │ │
//! │  └─────┬─────┘  └──────┬───────┘  └───────────┬───────────┘ │
//! │        └───────────────┼──────────────────────┘              │
//! │                        ▼                                     │
//! │                 ┌─────────────┐                              │
//! │                 │  EventLog   │  (in-memory, per process)    │
//! │                 └─────────────┘                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! All analytics state is process-local memory and resets on restart.

mod analytics;
mod config;
mod error;
mod handlers;
mod health;
mod models;
mod notify;
mod pipeline;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use analytics::EventLog;
use health::HealthReporter;
use notify::{LogNotifier, Notifier};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nanotox_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("NanoTox AI API starting...");
    tracing::info!("Environment: {}", config.environment);

    // Model artifacts are scanned once; the status is fixed for the
    // process lifetime
    let model_status = pipeline::detect_artifacts(&config.model_dir);

    let state = AppState {
        analytics: Arc::new(EventLog::new()),
        health: HealthReporter::new(model_status),
        notifier: Arc::new(LogNotifier),
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app)
        .await
        .expect("Server error");
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub analytics: Arc<EventLog>,
    pub health: HealthReporter,
    pub notifier: Arc<dyn Notifier>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let dashboard_routes = Router::new()
        .route("/api/dashboard/stats", get(handlers::dashboard::stats))
        .route(
            "/api/dashboard/predictions-over-time",
            get(handlers::dashboard::predictions_over_time),
        )
        .route(
            "/api/dashboard/request-stats",
            get(handlers::dashboard::request_stats),
        )
        .route(
            "/api/dashboard/toxicity-distribution",
            get(handlers::dashboard::toxicity_distribution),
        )
        .route(
            "/api/dashboard/contact-requests",
            get(handlers::dashboard::contact_requests),
        )
        .route(
            "/api/dashboard/dataset-requests",
            get(handlers::dashboard::dataset_requests),
        )
        .route(
            "/api/dashboard/nanoparticle-types",
            get(handlers::dashboard::nanoparticle_types),
        )
        .route(
            "/api/dashboard/recent-predictions",
            get(handlers::dashboard::recent_predictions),
        )
        .route(
            "/api/dashboard/prediction-history",
            get(handlers::dashboard::prediction_history),
        );

    Router::new()
        .route("/", get(handlers::index::index))
        .route("/health", get(handlers::health::check))
        .route("/healthz", get(handlers::health::healthz))
        .route("/ping", get(handlers::health::ping))
        .route("/predict", post(handlers::predict::predict))
        .route("/contact", post(handlers::forms::contact))
        .route("/share-dataset", post(handlers::forms::share_dataset))
        .merge(dashboard_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
