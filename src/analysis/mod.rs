//! Heuristic analysis stages from pixels to layout
//!
//! The stages run leaves-first: palette extraction and edge detection read
//! the buffer directly, region detection proposes candidate rectangles,
//! classification turns rectangles into elements, and layout inference
//! consumes the element list. Each stage is a pure function; the pipeline
//! module wires them together behind one entry point.

/// Rectangle-to-element classification and element values
pub mod classify;
/// Sobel edge map computation
pub mod edges;
/// Layout topology inference
pub mod layout;
/// Color palette extraction
pub mod palette;
/// Pipeline orchestration, configuration, and the result contract
pub mod pipeline;
/// Candidate region detection
pub mod regions;

pub use pipeline::{AnalysisResult, Analyzer, AnalyzerConfig};
