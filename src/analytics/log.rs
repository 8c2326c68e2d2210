//! In-process analytics event log
//!
//! Append-only store of prediction/contact/dataset events plus request
//! counters. One instance per process, shared across request workers; all
//! state lives behind a single mutex so appends are short critical sections
//! with no I/O. State resets on restart by design - this is not a database.
//!
//! Event sequences grow without bound for the process lifetime; the
//! response-time sample window is the only capped buffer. Long-running
//! deployments trade memory for the full prediction history.

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::models::{ContactEvent, DatasetEvent, PredictionEvent};

/// Capacity of the rolling response-time sample window
pub const RESPONSE_TIME_WINDOW: usize = 500;

/// Thread-safe analytics store
#[derive(Default)]
pub struct EventLog {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    predictions: Vec<PredictionEvent>,
    contacts: Vec<ContactEvent>,
    datasets: Vec<DatasetEvent>,
    success_count: u64,
    fail_count: u64,
    response_times_ms: VecDeque<f64>,
}

/// Consistent point-in-time view of the log, safe to aggregate over
/// without holding the lock
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub predictions: Vec<PredictionEvent>,
    pub contacts: Vec<ContactEvent>,
    pub datasets: Vec<DatasetEvent>,
    pub success_count: u64,
    pub fail_count: u64,
    pub response_times_ms: Vec<f64>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one completed prediction. Insertion order is preserved.
    pub fn append_prediction(&self, event: PredictionEvent) {
        self.inner.lock().predictions.push(event);
    }

    /// Append one successful contact submission
    pub fn append_contact(&self, event: ContactEvent) {
        self.inner.lock().contacts.push(event);
    }

    /// Append one successful dataset-share submission
    pub fn append_dataset(&self, event: DatasetEvent) {
        self.inner.lock().datasets.push(event);
    }

    /// Count a prediction request outcome and sample its response time.
    /// The sample window evicts oldest-first once full.
    pub fn record_outcome(&self, success: bool, response_time_ms: f64) {
        let mut inner = self.inner.lock();
        if success {
            inner.success_count += 1;
        } else {
            inner.fail_count += 1;
        }
        if inner.response_times_ms.len() == RESPONSE_TIME_WINDOW {
            inner.response_times_ms.pop_front();
        }
        inner.response_times_ms.push_back(response_time_ms);
    }

    /// Clone the current state. Readers never observe a half-applied append;
    /// an append racing the snapshot is either fully included or not at all.
    pub fn snapshot(&self) -> Snapshot {
        let inner = self.inner.lock();
        Snapshot {
            predictions: inner.predictions.clone(),
            contacts: inner.contacts.clone(),
            datasets: inner.datasets.clone(),
            success_count: inner.success_count,
            fail_count: inner.fail_count,
            response_times_ms: inner.response_times_ms.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analytics::test_support::prediction_event;

    #[test]
    fn test_appends_preserve_insertion_order() {
        let log = EventLog::new();
        log.append_prediction(prediction_event("CuO_30nm", true));
        log.append_prediction(prediction_event("ZnO_20nm", true));
        log.append_prediction(prediction_event("SiO2_80nm", false));

        let snap = log.snapshot();
        let ids: Vec<_> = snap
            .predictions
            .iter()
            .map(|p| p.nanoparticle_id.as_str())
            .collect();
        assert_eq!(ids, ["CuO_30nm", "ZnO_20nm", "SiO2_80nm"]);
    }

    #[test]
    fn test_concurrent_appends_lose_nothing() {
        let log = Arc::new(EventLog::new());
        let threads = 8;
        let per_thread = 50;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let log = Arc::clone(&log);
                std::thread::spawn(move || {
                    for i in 0..per_thread {
                        log.append_prediction(prediction_event(
                            &format!("NP_{}_{}", t, i),
                            true,
                        ));
                        log.record_outcome(true, 12.5);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snap = log.snapshot();
        assert_eq!(snap.predictions.len(), threads * per_thread);
        assert_eq!(snap.success_count, (threads * per_thread) as u64);
        assert_eq!(snap.fail_count, 0);
    }

    #[test]
    fn test_response_time_window_evicts_oldest() {
        let log = EventLog::new();
        for i in 0..(RESPONSE_TIME_WINDOW + 1) {
            log.record_outcome(true, i as f64);
        }

        let snap = log.snapshot();
        assert_eq!(snap.response_times_ms.len(), RESPONSE_TIME_WINDOW);
        // Sample 0 was evicted; the window starts at 1
        assert_eq!(snap.response_times_ms[0], 1.0);
        assert_eq!(
            *snap.response_times_ms.last().unwrap(),
            RESPONSE_TIME_WINDOW as f64
        );
    }

    #[test]
    fn test_failed_outcomes_count_separately() {
        let log = EventLog::new();
        log.record_outcome(true, 10.0);
        log.record_outcome(false, 250.0);
        log.record_outcome(true, 20.0);

        let snap = log.snapshot();
        assert_eq!(snap.success_count, 2);
        assert_eq!(snap.fail_count, 1);
        assert_eq!(snap.response_times_ms.len(), 3);
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_appends() {
        let log = EventLog::new();
        log.append_contact(crate::analytics::test_support::contact_event("ada"));
        let snap = log.snapshot();
        log.append_contact(crate::analytics::test_support::contact_event("grace"));

        assert_eq!(snap.contacts.len(), 1);
        assert_eq!(log.snapshot().contacts.len(), 2);
    }
}
