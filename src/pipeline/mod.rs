//! Three-stage toxicity prediction pipeline
//!
//! Aggregation -> toxicity -> cytotoxicity. The stages run a calibrated
//! heuristic model regardless of whether trained artifacts are present on
//! disk; artifact presence only drives the reported model status.

mod artifacts;
mod stages;

pub use artifacts::detect_artifacts;
pub use stages::{detect_mode, run};
