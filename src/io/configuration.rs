//! Heuristic thresholds and runtime configuration defaults
//!
//! Every tunable number in the pipeline lives here under a name. The
//! [`crate::analysis::pipeline::AnalyzerConfig`] structure copies these
//! defaults and carries them into the stages, so behavior can be tuned per
//! call without touching this module.

use crate::raster::Rgb;

// Palette extraction
/// Pixel index stride for palette frequency sampling
pub const PALETTE_SAMPLE_STRIDE: usize = 100;
/// Minimum alpha for a sample to count as opaque
pub const MIN_OPAQUE_ALPHA: u8 = 128;
/// Number of ranked candidate colors collected before truncation
pub const PALETTE_CANDIDATES: usize = 10;
/// Number of colors retained in the published palette
pub const PALETTE_SIZE: usize = 5;
/// Minimum contrast ratio against the background for an accent color
pub const ACCENT_CONTRAST: f64 = 3.0;
/// Accent color used when no palette entry clears the contrast bar
pub const DEFAULT_ACCENT: Rgb = Rgb::new(0x3b, 0x82, 0xf6);

// Edge detection
/// Sobel gradient magnitude above which a pixel is an edge
pub const EDGE_THRESHOLD: f64 = 50.0;

// Region detection
/// Spacing of the coarse seed grid in pixels
pub const SEED_STRIDE: usize = 20;
/// Sub-sampling step when gathering window statistics
pub const WINDOW_SAMPLE_STEP: usize = 2;
/// Summed per-channel color variance above which a window is rejected
pub const WINDOW_VARIANCE_LIMIT: f64 = 2000.0;
/// Spacing of contrast probes along the window border
pub const BORDER_SAMPLE_STEP: usize = 5;
/// Contrast ratio a border probe must exceed to count as a hit
pub const BORDER_CONTRAST: f64 = 1.5;
/// Fraction of border probes that must be hits for a candidate window
pub const BORDER_HIT_RATIO: f64 = 0.3;
/// Pixel step when growing a region outward from its seed
pub const EXPANSION_STEP: usize = 2;
/// Euclidean RGB distance at which region growth stops
pub const COLOR_TOLERANCE: f64 = 50.0;
/// Minimum width of a reported region
pub const MIN_REGION_WIDTH: u32 = 30;
/// Minimum height of a reported region
pub const MIN_REGION_HEIGHT: u32 = 20;
/// Spacing of visited markers laid over an accepted region
pub const VISITED_STRIDE: usize = 5;

// Layout inference
/// Coordinate tolerance when grouping elements into rows and columns
pub const ROW_TOLERANCE: f64 = 20.0;
/// Coordinate tolerance when scoring pairwise element alignment
pub const PAIR_TOLERANCE: f64 = 10.0;
/// Pairwise alignment score above which a flex axis is declared
pub const FLEX_SCORE_CUTOFF: f64 = 0.6;
/// Gap standard deviation below which grid spacing counts as consistent
pub const GRID_GAP_DEVIATION: f64 = 20.0;
/// Gap standard deviation below which flex spacing counts as uniform
pub const SPACING_GAP_DEVIATION: f64 = 10.0;
/// Mean gap separating space-between from space-around classification
pub const SPACING_GAP_THRESHOLD: f64 = 50.0;
/// Gap reported when no positive gaps are observed
pub const DEFAULT_GAP: u32 = 16;
/// Lower clamp for the estimated container padding
pub const PADDING_MIN: u32 = 8;
/// Upper clamp for the estimated container padding
pub const PADDING_MAX: u32 = 32;
/// Half-extent fraction within which content reads as centered
pub const CENTER_BAND: f64 = 0.2;
/// Axis fraction within which an element hugs a container edge
pub const EDGE_BAND: f64 = 0.1;
/// Lower bound of the centered band along an axis
pub const CENTER_BAND_LOW: f64 = 0.3;
/// Upper bound of the centered band along an axis
pub const CENTER_BAND_HIGH: f64 = 0.7;

// Output settings
/// Suffix added to report filenames
pub const OUTPUT_SUFFIX: &str = "_analysis";
/// Suffix added to edge map export filenames
pub const EDGE_MAP_SUFFIX: &str = "_edges";
