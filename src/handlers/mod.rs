//! HTTP handlers

pub mod dashboard;
pub mod forms;
pub mod health;
pub mod index;
pub mod predict;
