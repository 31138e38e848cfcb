//! Heuristic raster-to-layout analysis for UI screenshots
//!
//! Given a decoded RGBA buffer, the pipeline derives a compact color
//! palette, a list of candidate UI-element rectangles with best-guess
//! classifications and confidence scores, and an inferred layout topology.
//! The heuristics are bounded and deterministic: identical buffers always
//! produce identical results, and inputs where nothing is recognized yield
//! an empty, valid result rather than an error.

#![forbid(unsafe_code)]

/// Analysis stages from pixels to palette, elements, and layout
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for gap statistics
pub mod math;
/// Immutable pixel data model
pub mod raster;

pub use io::error::{AnalysisError, Result};
