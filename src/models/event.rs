//! Analytics event records
//!
//! Immutable log entries, one per completed user-facing action.
//! Events are never mutated after creation; the event log owns them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stage 2 verdict for a single prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Toxicity {
    #[serde(rename = "TOXIC")]
    Toxic,
    #[serde(rename = "NON-TOXIC")]
    NonToxic,
}

impl Toxicity {
    pub fn is_toxic(self) -> bool {
        self == Toxicity::Toxic
    }
}

/// Stage 3 verdict - simple yes/no
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cytotoxicity {
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
}

/// Named factors that drove a prediction, shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyFactors {
    pub material: String,
    pub size_effect: String,
    pub surface_reactivity: String,
    pub environmental: String,
}

/// One completed prediction request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionEvent {
    pub timestamp: DateTime<Utc>,
    pub nanoparticle_id: String,
    pub toxicity: Toxicity,
    pub confidence: f64,
    pub cytotoxicity: Cytotoxicity,
    pub risk_level: String,
    pub response_time_ms: f64,
    pub key_factors: KeyFactors,
}

/// One successful contact form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactEvent {
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub profession: String,
    pub phone: String,
    pub message: String,
}

/// One successful dataset-share submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetEvent {
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub organization: String,
    pub dataset_description: String,
    pub dataset_size: String,
    pub research_area: String,
}
