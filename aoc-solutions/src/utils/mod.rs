//! Helpers shared across days.

pub mod board;
pub mod math;
pub mod progress;
pub mod queue;
