//! Read-side aggregation queries
//!
//! Pure functions over an [`EventLog`](super::log::EventLog) snapshot. All of
//! them are deterministic, mutate nothing, and return well-defined zero/empty
//! results on an empty log. Query parameters are clamped, never rejected.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use super::log::Snapshot;
use super::round2;
use crate::models::{ContactEvent, DatasetEvent, PredictionEvent};

/// Newest-first listing bounds
const RECENT_LIMIT_MAX: usize = 100;
const RECENT_LIMIT_DEFAULT: usize = 20;
const HISTORY_LIMIT_MAX: usize = 200;
const HISTORY_LIMIT_DEFAULT: usize = 50;

/// Success/fail counters for prediction requests
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RequestStats {
    pub success: u64,
    pub failed: u64,
    pub total: u64,
}

/// One calendar-date bucket of the prediction time series
#[derive(Debug, Clone, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub total: u64,
    pub toxic: u64,
    pub non_toxic: u64,
}

/// TOXIC vs NON-TOXIC split across all predictions
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToxicityDistribution {
    pub toxic: u64,
    pub non_toxic: u64,
    pub total: u64,
}

/// Prediction count for one nanoparticle identifier
#[derive(Debug, Clone, Serialize)]
pub struct TypeCount {
    pub nanoparticle_id: String,
    pub count: u64,
}

/// One page of prediction history, newest first
#[derive(Debug, Clone, Serialize)]
pub struct HistoryPage {
    pub predictions: Vec<PredictionEvent>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
}

pub fn total_predictions(snapshot: &Snapshot) -> usize {
    snapshot.predictions.len()
}

/// Mean of the rolling response-time window, 0.0 when empty
pub fn average_response_time_ms(snapshot: &Snapshot) -> f64 {
    let samples = &snapshot.response_times_ms;
    if samples.is_empty() {
        return 0.0;
    }
    round2(samples.iter().sum::<f64>() / samples.len() as f64)
}

pub fn request_stats(snapshot: &Snapshot) -> RequestStats {
    RequestStats {
        success: snapshot.success_count,
        failed: snapshot.fail_count,
        total: snapshot.success_count + snapshot.fail_count,
    }
}

/// Predictions grouped by UTC calendar date, ascending. Dates with no
/// predictions are omitted rather than zero-filled.
pub fn predictions_over_time(snapshot: &Snapshot) -> Vec<DailyCount> {
    let mut by_day: BTreeMap<NaiveDate, (u64, u64, u64)> = BTreeMap::new();
    for event in &snapshot.predictions {
        let bucket = by_day.entry(event.timestamp.date_naive()).or_default();
        bucket.0 += 1;
        if event.toxicity.is_toxic() {
            bucket.1 += 1;
        } else {
            bucket.2 += 1;
        }
    }

    by_day
        .into_iter()
        .map(|(date, (total, toxic, non_toxic))| DailyCount {
            date,
            total,
            toxic,
            non_toxic,
        })
        .collect()
}

pub fn toxicity_distribution(snapshot: &Snapshot) -> ToxicityDistribution {
    let toxic = snapshot
        .predictions
        .iter()
        .filter(|p| p.toxicity.is_toxic())
        .count() as u64;
    let total = snapshot.predictions.len() as u64;
    ToxicityDistribution {
        toxic,
        non_toxic: total - toxic,
        total,
    }
}

/// Prediction counts per nanoparticle identifier, descending by count.
/// Equal counts keep first-seen insertion order so the output is stable.
pub fn nanoparticle_type_counts(snapshot: &Snapshot) -> Vec<TypeCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<TypeCount> = Vec::new();

    for event in &snapshot.predictions {
        let id = event.nanoparticle_id.trim();
        let id = if id.is_empty() { "unknown" } else { id };
        match index.get(id) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(id, counts.len());
                counts.push(TypeCount {
                    nanoparticle_id: id.to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, so ties stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Last `limit` predictions, newest first. The limit is clamped to
/// [1, 100]; `None` means the default of 20.
pub fn recent_predictions(snapshot: &Snapshot, limit: Option<usize>) -> Vec<PredictionEvent> {
    let limit = limit
        .unwrap_or(RECENT_LIMIT_DEFAULT)
        .clamp(1, RECENT_LIMIT_MAX);
    snapshot
        .predictions
        .iter()
        .rev()
        .take(limit)
        .cloned()
        .collect()
}

/// Paginated newest-first history. Limit clamps to [1, 200] (default 50);
/// an offset past the end yields an empty page, never an error.
pub fn prediction_history(
    snapshot: &Snapshot,
    limit: Option<usize>,
    offset: Option<usize>,
) -> HistoryPage {
    let limit = limit
        .unwrap_or(HISTORY_LIMIT_DEFAULT)
        .clamp(1, HISTORY_LIMIT_MAX);
    let offset = offset.unwrap_or(0);

    let predictions: Vec<PredictionEvent> = snapshot
        .predictions
        .iter()
        .rev()
        .skip(offset)
        .take(limit)
        .cloned()
        .collect();

    HistoryPage {
        predictions,
        total: snapshot.predictions.len(),
        offset,
        limit,
    }
}

/// All contact submissions, newest first
pub fn contact_requests(snapshot: &Snapshot) -> Vec<ContactEvent> {
    snapshot.contacts.iter().rev().cloned().collect()
}

/// All dataset-share submissions, newest first
pub fn dataset_requests(snapshot: &Snapshot) -> Vec<DatasetEvent> {
    snapshot.datasets.iter().rev().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::log::EventLog;
    use crate::analytics::test_support::{
        contact_event, prediction_event, prediction_event_at,
    };

    #[test]
    fn test_empty_log_yields_zero_contract() {
        let snap = EventLog::new().snapshot();

        assert_eq!(total_predictions(&snap), 0);
        assert_eq!(average_response_time_ms(&snap), 0.0);
        assert_eq!(request_stats(&snap).total, 0);
        assert!(predictions_over_time(&snap).is_empty());
        assert_eq!(toxicity_distribution(&snap).total, 0);
        assert!(nanoparticle_type_counts(&snap).is_empty());
        assert!(recent_predictions(&snap, None).is_empty());
        let page = prediction_history(&snap, None, None);
        assert!(page.predictions.is_empty());
        assert_eq!(page.total, 0);
        assert!(contact_requests(&snap).is_empty());
        assert!(dataset_requests(&snap).is_empty());
    }

    #[test]
    fn test_average_response_time() {
        let log = EventLog::new();
        log.record_outcome(true, 10.0);
        log.record_outcome(true, 20.0);
        log.record_outcome(false, 30.0);
        assert_eq!(average_response_time_ms(&log.snapshot()), 20.0);
    }

    #[test]
    fn test_average_honours_window_eviction() {
        let log = EventLog::new();
        // One outlier followed by a full window of identical samples
        log.record_outcome(true, 100_000.0);
        for _ in 0..500 {
            log.record_outcome(true, 5.0);
        }
        assert_eq!(average_response_time_ms(&log.snapshot()), 5.0);
    }

    #[test]
    fn test_request_stats_totals() {
        let log = EventLog::new();
        for _ in 0..3 {
            log.record_outcome(true, 1.0);
        }
        log.record_outcome(false, 1.0);

        let stats = request_stats(&log.snapshot());
        assert_eq!(stats.success, 3);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.total, 4);
    }

    #[test]
    fn test_recent_predictions_newest_first() {
        let log = EventLog::new();
        log.append_prediction(prediction_event("A", true));
        log.append_prediction(prediction_event("B", true));
        log.append_prediction(prediction_event("C", true));

        let recent = recent_predictions(&log.snapshot(), Some(2));
        let ids: Vec<_> = recent.iter().map(|p| p.nanoparticle_id.as_str()).collect();
        assert_eq!(ids, ["C", "B"]);
    }

    #[test]
    fn test_recent_predictions_clamps_limit() {
        let log = EventLog::new();
        for i in 0..150 {
            log.append_prediction(prediction_event(&format!("NP{i}"), true));
        }
        let snap = log.snapshot();

        assert_eq!(recent_predictions(&snap, Some(0)).len(), 1);
        assert_eq!(recent_predictions(&snap, Some(1000)).len(), 100);
        assert_eq!(recent_predictions(&snap, None).len(), 20);
    }

    #[test]
    fn test_prediction_history_paging() {
        let log = EventLog::new();
        log.append_prediction(prediction_event("A", true));
        log.append_prediction(prediction_event("B", true));
        log.append_prediction(prediction_event("C", true));
        let snap = log.snapshot();

        let page = prediction_history(&snap, Some(2), Some(1));
        let ids: Vec<_> = page
            .predictions
            .iter()
            .map(|p| p.nanoparticle_id.as_str())
            .collect();
        assert_eq!(ids, ["B", "A"]);
        assert_eq!(page.total, 3);
        assert_eq!(page.offset, 1);
        assert_eq!(page.limit, 2);

        let past_end = prediction_history(&snap, Some(2), Some(10));
        assert!(past_end.predictions.is_empty());
        assert_eq!(past_end.total, 3);
    }

    #[test]
    fn test_history_limit_clamped_to_bounds() {
        let snap = EventLog::new().snapshot();
        assert_eq!(prediction_history(&snap, Some(1000), None).limit, 200);
        assert_eq!(prediction_history(&snap, Some(0), None).limit, 1);
    }

    #[test]
    fn test_type_counts_descending_with_stable_ties() {
        let log = EventLog::new();
        for id in ["X", "Y", "X", "Z", "Y", "X"] {
            log.append_prediction(prediction_event(id, true));
        }

        let counts = nanoparticle_type_counts(&log.snapshot());
        let pairs: Vec<_> = counts
            .iter()
            .map(|c| (c.nanoparticle_id.as_str(), c.count))
            .collect();
        assert_eq!(pairs, [("X", 3), ("Y", 2), ("Z", 1)]);
    }

    #[test]
    fn test_type_counts_blank_ids_become_unknown() {
        let log = EventLog::new();
        log.append_prediction(prediction_event("  ", true));
        let counts = nanoparticle_type_counts(&log.snapshot());
        assert_eq!(counts[0].nanoparticle_id, "unknown");
    }

    #[test]
    fn test_predictions_over_time_sparse_buckets() {
        let log = EventLog::new();
        log.append_prediction(prediction_event_at("CuO", true, "2026-02-20T08:00:00Z"));
        log.append_prediction(prediction_event_at("CuO", true, "2026-02-20T12:00:00Z"));
        log.append_prediction(prediction_event_at("SiO2", false, "2026-02-20T18:00:00Z"));

        let series = predictions_over_time(&log.snapshot());
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date.to_string(), "2026-02-20");
        assert_eq!(series[0].total, 3);
        assert_eq!(series[0].toxic, 2);
        assert_eq!(series[0].non_toxic, 1);
    }

    #[test]
    fn test_predictions_over_time_dates_ascending() {
        let log = EventLog::new();
        log.append_prediction(prediction_event_at("A", true, "2026-02-22T01:00:00Z"));
        log.append_prediction(prediction_event_at("B", true, "2026-02-20T01:00:00Z"));

        let series = predictions_over_time(&log.snapshot());
        assert_eq!(series[0].date.to_string(), "2026-02-20");
        assert_eq!(series[1].date.to_string(), "2026-02-22");
    }

    #[test]
    fn test_toxicity_distribution() {
        let log = EventLog::new();
        log.append_prediction(prediction_event("A", true));
        log.append_prediction(prediction_event("B", false));
        log.append_prediction(prediction_event("C", false));

        let dist = toxicity_distribution(&log.snapshot());
        assert_eq!(dist.toxic, 1);
        assert_eq!(dist.non_toxic, 2);
        assert_eq!(dist.total, 3);
    }

    #[test]
    fn test_contact_requests_newest_first() {
        let log = EventLog::new();
        log.append_contact(contact_event("ada"));
        log.append_contact(contact_event("grace"));

        let requests = contact_requests(&log.snapshot());
        assert_eq!(requests[0].name, "grace");
        assert_eq!(requests[1].name, "ada");
    }
}
