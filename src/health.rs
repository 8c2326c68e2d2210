//! Process health reporting
//!
//! Uptime and model-load status, fixed at startup. Deliberately independent
//! of the analytics log: a live process always reports healthy, and uptime
//! percentage is self-reported single-instance availability, not an SLA.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether trained model artifacts were found at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStatus {
    Loaded,
    Fallback,
}

impl ModelStatus {
    pub fn is_loaded(self) -> bool {
        self == ModelStatus::Loaded
    }
}

/// Health snapshot for the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub uptime_seconds: f64,
    pub uptime_percentage: f64,
    pub models_loaded: bool,
    pub model_status: ModelStatus,
}

#[derive(Debug, Clone, Copy)]
pub struct HealthReporter {
    started_at: DateTime<Utc>,
    model_status: ModelStatus,
}

impl HealthReporter {
    pub fn new(model_status: ModelStatus) -> Self {
        Self {
            started_at: Utc::now(),
            model_status,
        }
    }

    /// Seconds since process start, to one decimal place
    pub fn uptime_seconds(&self) -> f64 {
        let millis = (Utc::now() - self.started_at).num_milliseconds().max(0);
        (millis as f64 / 100.0).round() / 10.0
    }

    /// Fixed at 100.0: this process does not observe its own downtime
    pub fn uptime_percentage(&self) -> f64 {
        100.0
    }

    pub fn report(&self) -> HealthReport {
        HealthReport {
            status: "healthy",
            uptime_seconds: self.uptime_seconds(),
            uptime_percentage: self.uptime_percentage(),
            models_loaded: self.model_status.is_loaded(),
            model_status: self.model_status,
        }
    }
}
