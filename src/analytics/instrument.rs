//! Request instrumentation
//!
//! Wraps a single handler invocation with wall-clock timing and applies the
//! exactly-once logging contract: one `record_outcome` per prediction
//! request, one event append per successful request, nothing on failure
//! (beyond the prediction fail counter). The handler runs outside any
//! event-log lock.

use std::time::Instant;

use chrono::Utc;

use super::log::EventLog;
use super::round2;
use crate::models::{
    ContactEvent, Cytotoxicity, DatasetEvent, KeyFactors, PredictionEvent, Toxicity,
};

/// Everything a prediction handler produces for the log, minus the fields
/// only instrumentation knows (timestamp, elapsed time)
#[derive(Debug, Clone)]
pub struct PredictionOutcome {
    pub nanoparticle_id: String,
    pub toxicity: Toxicity,
    pub confidence: f64,
    pub cytotoxicity: Cytotoxicity,
    pub risk_level: String,
    pub key_factors: KeyFactors,
}

/// Wall-clock timer for one request
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Run a prediction handler under timing. Success appends one prediction
/// event and counts a success; failure counts a failure and leaves no event.
pub fn observe_prediction<T, E, F>(log: &EventLog, handler: F) -> Result<T, E>
where
    F: FnOnce() -> Result<(T, PredictionOutcome), E>,
{
    let timer = RequestTimer::start();
    match handler() {
        Ok((value, outcome)) => {
            let elapsed_ms = timer.elapsed_ms();
            log.append_prediction(PredictionEvent {
                timestamp: Utc::now(),
                nanoparticle_id: outcome.nanoparticle_id,
                toxicity: outcome.toxicity,
                confidence: outcome.confidence,
                cytotoxicity: outcome.cytotoxicity,
                risk_level: outcome.risk_level,
                response_time_ms: round2(elapsed_ms),
                key_factors: outcome.key_factors,
            });
            log.record_outcome(true, elapsed_ms);
            Ok(value)
        }
        Err(err) => {
            log.record_outcome(false, timer.elapsed_ms());
            Err(err)
        }
    }
}

/// Run a contact handler; append the event only when it succeeds.
/// Contact submissions carry no fail counter.
pub fn observe_contact<T, E, F>(log: &EventLog, handler: F) -> Result<T, E>
where
    F: FnOnce() -> Result<(T, ContactEvent), E>,
{
    let (value, event) = handler()?;
    log.append_contact(event);
    Ok(value)
}

/// Run a dataset-share handler; append the event only when it succeeds
pub fn observe_dataset<T, E, F>(log: &EventLog, handler: F) -> Result<T, E>
where
    F: FnOnce() -> Result<(T, DatasetEvent), E>,
{
    let (value, event) = handler()?;
    log.append_dataset(event);
    Ok(value)
}
