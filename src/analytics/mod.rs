//! Analytics subsystem
//!
//! Process-local usage analytics: a concurrently-written event log, pure
//! aggregation queries over snapshots of it, and the per-request
//! instrumentation that feeds it.

pub mod aggregate;
pub mod instrument;
pub mod log;

pub use instrument::PredictionOutcome;
pub use log::{EventLog, Snapshot};

/// Round to two decimal places for wire output
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, Utc};

    use super::PredictionOutcome;
    use crate::models::{
        ContactEvent, Cytotoxicity, DatasetEvent, KeyFactors, PredictionEvent, Toxicity,
    };

    pub fn key_factors() -> KeyFactors {
        KeyFactors {
            material: "90.0%".to_string(),
            size_effect: "HIGH".to_string(),
            surface_reactivity: "MODERATE".to_string(),
            environmental: "FAVORABLE".to_string(),
        }
    }

    pub fn prediction_event(id: &str, toxic: bool) -> PredictionEvent {
        PredictionEvent {
            timestamp: Utc::now(),
            nanoparticle_id: id.to_string(),
            toxicity: if toxic {
                Toxicity::Toxic
            } else {
                Toxicity::NonToxic
            },
            confidence: 0.9,
            cytotoxicity: if toxic {
                Cytotoxicity::Yes
            } else {
                Cytotoxicity::No
            },
            risk_level: "HIGH RISK - Immediate concern".to_string(),
            response_time_ms: 12.34,
            key_factors: key_factors(),
        }
    }

    pub fn prediction_event_at(id: &str, toxic: bool, timestamp: &str) -> PredictionEvent {
        PredictionEvent {
            timestamp: timestamp.parse::<DateTime<Utc>>().unwrap(),
            ..prediction_event(id, toxic)
        }
    }

    pub fn prediction_outcome(id: &str) -> PredictionOutcome {
        PredictionOutcome {
            nanoparticle_id: id.to_string(),
            toxicity: Toxicity::Toxic,
            confidence: 0.9,
            cytotoxicity: Cytotoxicity::Yes,
            risk_level: "HIGH RISK - Immediate concern".to_string(),
            key_factors: key_factors(),
        }
    }

    pub fn contact_event(name: &str) -> ContactEvent {
        ContactEvent {
            timestamp: Utc::now(),
            name: name.to_string(),
            email: format!("{name}@lab.example.org"),
            profession: "Researcher".to_string(),
            phone: String::new(),
            message: "Hello".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn dataset_event(name: &str) -> DatasetEvent {
        DatasetEvent {
            timestamp: Utc::now(),
            name: name.to_string(),
            email: format!("{name}@lab.example.org"),
            organization: "Example Lab".to_string(),
            dataset_description: "Cytotoxicity assay results".to_string(),
            dataset_size: "2k rows".to_string(),
            research_area: "Nanotoxicology".to_string(),
        }
    }
}
