//! Heuristic pipeline stages
//!
//! Calibrated against the material toxicity literature used to train the
//! full models: material class dominates, with size, surface area, surface
//! charge and dose contributing to a weighted composite score.

use crate::models::{
    AggregationResult, Cytotoxicity, CytotoxicityResult, KeyFactors, PredictRequest,
    PredictResponse, PredictionMode, Toxicity, ToxicityResult,
};

/// Composite score above which a particle is called TOXIC
const TOXIC_THRESHOLD: f64 = 0.6;

/// Stage weights: material, size, surface area, zeta potential, dose
const WEIGHTS: [f64; 5] = [0.4, 0.2, 0.15, 0.15, 0.1];

/// Detect pipeline mode from which context parameters the caller supplied
pub fn detect_mode(request: &PredictRequest) -> PredictionMode {
    if request.environmental_ph.is_some()
        || request.temperature.is_some()
        || request.protein_corona.is_some()
    {
        PredictionMode::BiologicalContext
    } else {
        PredictionMode::NonBiologicalContext
    }
}

/// Run the full three-stage pipeline
pub fn run(request: &PredictRequest) -> PredictResponse {
    let mode = detect_mode(request);
    tracing::info!(
        nanoparticle_id = %request.nanoparticle_id,
        mode = ?mode,
        exposure_time = ?request.exposure_time,
        "Running prediction pipeline"
    );

    let stage1 = aggregation_stage(request, mode);
    let stage2 = toxicity_stage(request);
    let stage3 = cytotoxicity_stage(&stage2);
    let key_factors = key_factors(request, mode);

    PredictResponse {
        success: true,
        mode,
        nanoparticle_id: request.nanoparticle_id.clone(),
        stage1,
        stage2,
        stage3,
        key_factors,
    }
}

/// Stage 1: hydrodynamic diameter and aggregation behaviour
fn aggregation_stage(request: &PredictRequest, mode: PredictionMode) -> AggregationResult {
    let base_diameter = request.core_size * 1.2;
    let zeta_abs = request.zeta_potential.abs();

    // A caller-supplied measurement overrides the model entirely
    if let Some(provided) = request.hydrodynamic_diameter {
        return AggregationResult {
            predicted_hydrodynamic_diameter: format!("{provided:.1}"),
            aggregation_factor: format!("{:.2}x", provided / base_diameter),
            stability_assessment: stability_assessment(zeta_abs).to_string(),
            calculation_method: "PROVIDED",
            mode,
        };
    }

    let mut factor = match mode {
        PredictionMode::BiologicalContext => {
            let mut f = if zeta_abs < 25.0 {
                1.5
            } else if zeta_abs < 40.0 {
                1.2
            } else {
                1.0
            };
            if let Some(ph) = request.environmental_ph {
                if !(6.0..=8.0).contains(&ph) {
                    // Unfavourable pH promotes aggregation
                    f *= 1.3;
                }
            }
            if let Some(temperature) = request.temperature {
                if temperature > 37.0 {
                    f *= 1.1;
                }
            }
            if request.protein_corona == Some(true) {
                f *= 1.2;
            }
            f
        }
        PredictionMode::NonBiologicalContext => {
            if zeta_abs < 25.0 {
                1.3
            } else if zeta_abs < 40.0 {
                1.1
            } else {
                1.0
            }
        }
    };

    let predicted = base_diameter * factor;
    factor = predicted / base_diameter;

    AggregationResult {
        predicted_hydrodynamic_diameter: format!("{predicted:.1}"),
        aggregation_factor: format!("{factor:.2}x"),
        stability_assessment: stability_assessment(zeta_abs).to_string(),
        calculation_method: "CALCULATED",
        mode,
    }
}

fn stability_assessment(zeta_abs: f64) -> &'static str {
    if zeta_abs > 30.0 {
        "HIGH STABILITY - Well dispersed"
    } else if zeta_abs > 15.0 {
        "MODERATE STABILITY - Some aggregation possible"
    } else {
        "LOW STABILITY - Prone to aggregation"
    }
}

/// Stage 2: overall toxicity from the weighted composite score
fn toxicity_stage(request: &PredictRequest) -> ToxicityResult {
    let composite = composite_score(request);

    let prediction = if composite > TOXIC_THRESHOLD {
        Toxicity::Toxic
    } else {
        Toxicity::NonToxic
    };
    let confidence = (composite + 0.1).min(0.95);

    let risk_level = if confidence > 0.8 {
        "HIGH RISK - Immediate concern"
    } else if confidence > 0.6 {
        "MODERATE RISK - Monitor closely"
    } else {
        "LOW RISK - Minimal concern"
    };

    ToxicityResult {
        toxicity_prediction: prediction,
        confidence,
        risk_level,
        composite_score: confidence,
    }
}

fn composite_score(request: &PredictRequest) -> f64 {
    let material = material_toxicity(&request.nanoparticle_id);
    let size = if request.core_size < 50.0 { 1.0 } else { 0.5 };
    let surface = (request.surface_area / 100.0).min(1.0);
    let zeta = ((50.0 - request.zeta_potential.abs()) / 50.0).max(0.0);
    let dose = (request.dosage / 100.0).min(1.0);

    material * WEIGHTS[0]
        + size * WEIGHTS[1]
        + surface * WEIGHTS[2]
        + zeta * WEIGHTS[3]
        + dose * WEIGHTS[4]
}

/// Baseline toxicity by material class, keyed on the identifier
fn material_toxicity(nanoparticle_id: &str) -> f64 {
    if nanoparticle_id.contains("CuO") {
        0.9
    } else if nanoparticle_id.contains("NiO") || nanoparticle_id.contains("ZnO") {
        0.8
    } else if nanoparticle_id.contains("SiO2") {
        0.1
    } else if nanoparticle_id.contains("CeO2") {
        0.2
    } else {
        0.0
    }
}

/// Stage 3: cytotoxicity follows the overall toxicity verdict
fn cytotoxicity_stage(stage2: &ToxicityResult) -> CytotoxicityResult {
    CytotoxicityResult {
        cytotoxicity: if stage2.toxicity_prediction.is_toxic() {
            Cytotoxicity::Yes
        } else {
            Cytotoxicity::No
        },
    }
}

fn key_factors(request: &PredictRequest, mode: PredictionMode) -> KeyFactors {
    let environmental = match mode {
        PredictionMode::BiologicalContext => match request.environmental_ph {
            Some(ph) if !(6.0..=8.0).contains(&ph) => "UNFAVORABLE",
            _ => "FAVORABLE",
        },
        PredictionMode::NonBiologicalContext => "N/A",
    };

    KeyFactors {
        material: format!("{:.1}%", material_toxicity(&request.nanoparticle_id) * 100.0),
        size_effect: (if request.core_size < 50.0 { "HIGH" } else { "MODERATE" }).to_string(),
        surface_reactivity: (if request.surface_area > 100.0 { "HIGH" } else { "MODERATE" })
            .to_string(),
        environmental: environmental.to_string(),
    }
}
