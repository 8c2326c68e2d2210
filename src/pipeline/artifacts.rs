//! Trained-model artifact discovery
//!
//! Checked once at startup. Missing artifacts are not an error; the
//! pipeline falls back to its heuristic model and health reports the fact.

use std::path::Path;

use crate::health::ModelStatus;

/// Artifacts the full pipeline expects
const REQUIRED_MODELS: [&str; 2] = ["aggregation.onnx", "toxicity.onnx"];

/// Per-mechanism cytotoxicity models; at least one must be present
const CYTOTOXICITY_MODELS: [&str; 4] = [
    "cytotoxicity_ros_production.onnx",
    "cytotoxicity_membrane_damage.onnx",
    "cytotoxicity_apoptosis.onnx",
    "cytotoxicity_necrosis.onnx",
];

/// Feature scaling parameters from training
const SCALER_FILE: &str = "scaler.json";

/// Determine whether the trained model set is fully present
pub fn detect_artifacts(model_dir: &Path) -> ModelStatus {
    let required = REQUIRED_MODELS.iter().all(|name| {
        let present = model_dir.join(name).is_file();
        if !present {
            tracing::warn!("Model artifact missing: {}", name);
        }
        present
    });

    let any_cytotoxicity = CYTOTOXICITY_MODELS
        .iter()
        .any(|name| model_dir.join(name).is_file());
    if !any_cytotoxicity {
        tracing::warn!("No cytotoxicity model artifacts found in {:?}", model_dir);
    }

    let scaler = model_dir.join(SCALER_FILE).is_file();
    if !scaler {
        tracing::warn!("Scaler parameters missing: {}", SCALER_FILE);
    }

    if required && any_cytotoxicity && scaler {
        tracing::info!("All model artifacts loaded from {:?}", model_dir);
        ModelStatus::Loaded
    } else {
        tracing::warn!("Using fallback prediction system");
        ModelStatus::Fallback
    }
}
