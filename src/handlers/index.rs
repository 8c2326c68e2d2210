//! Service index handler

use axum::Json;
use serde_json::{json, Value};

/// API overview served at the root path
pub async fn index() -> Json<Value> {
    Json(json!({
        "name": "NanoTox AI API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "predict": "POST /predict",
            "contact": "POST /contact",
            "share_dataset": "POST /share-dataset",
            "health": "GET /health",
            "dashboard": "GET /api/dashboard/*"
        }
    }))
}
