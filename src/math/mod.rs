//! Mathematical utilities for the analysis pipeline

/// Mean, median, and deviation helpers for gap statistics
pub mod stats;
