//! Data models

pub mod event;
pub mod forms;
pub mod prediction;

pub use event::*;
pub use forms::*;
pub use prediction::*;
