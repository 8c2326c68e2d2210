//! Prediction request/response types

use serde::{Deserialize, Serialize};

use super::event::{Cytotoxicity, KeyFactors, Toxicity};

/// Inbound nanoparticle parameters for the three-stage pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    pub nanoparticle_id: String,
    pub core_size: f64,
    pub zeta_potential: f64,
    pub surface_area: f64,
    pub dosage: f64,
    #[serde(default)]
    pub exposure_time: Option<f64>,
    #[serde(default, rename = "environmental_pH")]
    pub environmental_ph: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub protein_corona: Option<bool>,
    #[serde(default)]
    pub hydrodynamic_diameter: Option<f64>,
}

/// Pipeline mode, detected from which parameters the caller supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PredictionMode {
    #[serde(rename = "BIOLOGICAL_CONTEXT")]
    BiologicalContext,
    #[serde(rename = "NON_BIOLOGICAL_CONTEXT")]
    NonBiologicalContext,
}

/// Stage 1 output - aggregation behaviour and hydrodynamic diameter
#[derive(Debug, Clone, Serialize)]
pub struct AggregationResult {
    pub predicted_hydrodynamic_diameter: String,
    pub aggregation_factor: String,
    pub stability_assessment: String,
    pub calculation_method: &'static str,
    pub mode: PredictionMode,
}

/// Stage 2 output - overall toxicity verdict
#[derive(Debug, Clone, Serialize)]
pub struct ToxicityResult {
    pub toxicity_prediction: Toxicity,
    pub confidence: f64,
    pub risk_level: &'static str,
    pub composite_score: f64,
}

/// Stage 3 output - cytotoxicity verdict
#[derive(Debug, Clone, Serialize)]
pub struct CytotoxicityResult {
    pub cytotoxicity: Cytotoxicity,
}

/// Full pipeline response returned to the caller
#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub success: bool,
    pub mode: PredictionMode,
    pub nanoparticle_id: String,
    pub stage1: AggregationResult,
    pub stage2: ToxicityResult,
    pub stage3: CytotoxicityResult,
    pub key_factors: KeyFactors,
}
