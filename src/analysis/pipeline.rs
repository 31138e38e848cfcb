//! Pipeline entry point, configuration, and the assembled analysis result
//!
//! The analyzer owns nothing but its configuration: every stage is a pure
//! function of the buffer and the config, so independent buffers can be
//! analyzed concurrently from separate threads without shared state.

use crate::analysis::classify::{DetectedElement, classify_regions};
use crate::analysis::layout::{LayoutAnalysis, analyze_layout};
use crate::analysis::palette::{ColorPalette, extract_palette};
use crate::analysis::regions::find_regions;
use crate::io::configuration::{
    ACCENT_CONTRAST, BORDER_CONTRAST, BORDER_HIT_RATIO, BORDER_SAMPLE_STEP, CENTER_BAND,
    CENTER_BAND_HIGH, CENTER_BAND_LOW, COLOR_TOLERANCE, DEFAULT_GAP, EDGE_BAND, EDGE_THRESHOLD,
    EXPANSION_STEP, FLEX_SCORE_CUTOFF, GRID_GAP_DEVIATION, MIN_OPAQUE_ALPHA, MIN_REGION_HEIGHT,
    MIN_REGION_WIDTH, PADDING_MAX, PADDING_MIN, PAIR_TOLERANCE, PALETTE_CANDIDATES, PALETTE_SAMPLE_STRIDE,
    PALETTE_SIZE, ROW_TOLERANCE, SEED_STRIDE, SPACING_GAP_DEVIATION,
    SPACING_GAP_THRESHOLD, VISITED_STRIDE, WINDOW_SAMPLE_STEP, WINDOW_VARIANCE_LIMIT,
};
use crate::io::error::{AnalysisError, Result, invalid_parameter};
use crate::raster::PixelBuffer;
use serde::{Deserialize, Serialize};

/// Every heuristic threshold the pipeline consults, in one injectable value
///
/// Defaults reproduce the documented behavior; tests and callers may tune
/// individual fields without touching the named constants.
#[derive(Clone, Copy, Debug)]
pub struct AnalyzerConfig {
    /// Pixel index stride for palette frequency sampling
    pub palette_sample_stride: usize,
    /// Minimum alpha for a sample to count as opaque
    pub min_opaque_alpha: u8,
    /// Number of ranked candidate colors collected before truncation
    pub palette_candidates: usize,
    /// Number of colors retained in the published palette
    pub palette_size: usize,
    /// Minimum contrast ratio against the background for an accent color
    pub accent_contrast: f64,
    /// Sobel gradient magnitude above which a pixel is an edge
    pub edge_threshold: f64,
    /// Spacing of the coarse seed grid in pixels
    pub seed_stride: usize,
    /// Sub-sampling step when gathering window statistics
    pub window_sample_step: usize,
    /// Summed per-channel color variance above which a window is rejected
    pub window_variance_limit: f64,
    /// Spacing of contrast probes along the window border
    pub border_sample_step: usize,
    /// Contrast ratio a border probe must exceed to count as a hit
    pub border_contrast: f64,
    /// Fraction of border probes that must be hits for a candidate window
    pub border_hit_ratio: f64,
    /// Pixel step when growing a region outward from its seed
    pub expansion_step: usize,
    /// Euclidean RGB distance at which region growth stops
    pub color_tolerance: f64,
    /// Minimum width of a reported region
    pub min_region_width: u32,
    /// Minimum height of a reported region
    pub min_region_height: u32,
    /// Spacing of visited markers laid over an accepted region
    pub visited_stride: usize,
    /// Coordinate tolerance when grouping elements into rows and columns
    pub row_tolerance: f64,
    /// Coordinate tolerance when scoring pairwise element alignment
    pub pair_tolerance: f64,
    /// Pairwise alignment score above which a flex axis is declared
    pub flex_score_cutoff: f64,
    /// Gap standard deviation below which grid spacing counts as consistent
    pub grid_gap_deviation: f64,
    /// Gap standard deviation below which flex spacing counts as uniform
    pub spacing_gap_deviation: f64,
    /// Mean gap separating space-between from space-around classification
    pub spacing_gap_threshold: f64,
    /// Gap reported when no positive gaps are observed
    pub default_gap: u32,
    /// Lower clamp for the estimated container padding
    pub padding_min: u32,
    /// Upper clamp for the estimated container padding
    pub padding_max: u32,
    /// Half-extent fraction within which content reads as centered
    pub center_band: f64,
    /// Axis fraction within which an element hugs a container edge
    pub edge_band: f64,
    /// Lower bound of the centered band along an axis
    pub center_band_low: f64,
    /// Upper bound of the centered band along an axis
    pub center_band_high: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            palette_sample_stride: PALETTE_SAMPLE_STRIDE,
            min_opaque_alpha: MIN_OPAQUE_ALPHA,
            palette_candidates: PALETTE_CANDIDATES,
            palette_size: PALETTE_SIZE,
            accent_contrast: ACCENT_CONTRAST,
            edge_threshold: EDGE_THRESHOLD,
            seed_stride: SEED_STRIDE,
            window_sample_step: WINDOW_SAMPLE_STEP,
            window_variance_limit: WINDOW_VARIANCE_LIMIT,
            border_sample_step: BORDER_SAMPLE_STEP,
            border_contrast: BORDER_CONTRAST,
            border_hit_ratio: BORDER_HIT_RATIO,
            expansion_step: EXPANSION_STEP,
            color_tolerance: COLOR_TOLERANCE,
            min_region_width: MIN_REGION_WIDTH,
            min_region_height: MIN_REGION_HEIGHT,
            visited_stride: VISITED_STRIDE,
            row_tolerance: ROW_TOLERANCE,
            pair_tolerance: PAIR_TOLERANCE,
            flex_score_cutoff: FLEX_SCORE_CUTOFF,
            grid_gap_deviation: GRID_GAP_DEVIATION,
            spacing_gap_deviation: SPACING_GAP_DEVIATION,
            spacing_gap_threshold: SPACING_GAP_THRESHOLD,
            default_gap: DEFAULT_GAP,
            padding_min: PADDING_MIN,
            padding_max: PADDING_MAX,
            center_band: CENTER_BAND,
            edge_band: EDGE_BAND,
            center_band_low: CENTER_BAND_LOW,
            center_band_high: CENTER_BAND_HIGH,
        }
    }
}

impl AnalyzerConfig {
    /// Validate the structural parameters the stages divide and stride by
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidParameter`] when a stride or minimum
    /// size is zero, or when a ratio falls outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.palette_sample_stride == 0 {
            return Err(invalid_parameter(
                "palette_sample_stride",
                &self.palette_sample_stride,
                &"must be positive",
            ));
        }
        if self.seed_stride == 0 {
            return Err(invalid_parameter(
                "seed_stride",
                &self.seed_stride,
                &"must be positive",
            ));
        }
        if self.expansion_step == 0 {
            return Err(invalid_parameter(
                "expansion_step",
                &self.expansion_step,
                &"must be positive",
            ));
        }
        if self.min_region_width == 0 || self.min_region_height == 0 {
            return Err(invalid_parameter(
                "min_region_size",
                &format!("{}x{}", self.min_region_width, self.min_region_height),
                &"both dimensions must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.border_hit_ratio) {
            return Err(invalid_parameter(
                "border_hit_ratio",
                &self.border_hit_ratio,
                &"must lie in [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.flex_score_cutoff) {
            return Err(invalid_parameter(
                "flex_score_cutoff",
                &self.flex_score_cutoff,
                &"must lie in [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Canvas dimensions echoed into the analysis result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Source buffer width in pixels
    pub width: u32,
    /// Source buffer height in pixels
    pub height: u32,
}

/// Complete output of one analysis run
///
/// This shape, including enum spellings and hex color strings, is the
/// interchange contract: any substitute analyzer must produce it
/// byte-for-byte compatibly for downstream consumers to treat the two
/// interchangeably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Derived color palette
    pub colors: ColorPalette,
    /// Classified elements in detector scan order
    pub elements: Vec<DetectedElement>,
    /// Inferred layout topology
    pub layout: LayoutAnalysis,
    /// Source buffer dimensions
    pub dimensions: Dimensions,
}

/// Heuristic analyzer for decoded UI screenshots
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create an analyzer with default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom thresholds
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidParameter`] if the configuration
    /// fails validation.
    pub fn with_config(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this analyzer runs with
    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run the full pipeline over a decoded buffer
    ///
    /// An absent buffer fails fast; everything downstream is total. A
    /// buffer in which no elements are found yields an empty element list
    /// and an absolute layout, which downstream consumers must treat as a
    /// valid, minimal result rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MissingImage`] when `buffer` is `None`.
    pub fn analyze(&self, buffer: Option<&PixelBuffer>) -> Result<AnalysisResult> {
        let buffer = buffer.ok_or(AnalysisError::MissingImage)?;

        let colors = extract_palette(buffer, &self.config);
        let regions = find_regions(buffer, &self.config);
        let elements: Vec<DetectedElement> = classify_regions(buffer, &regions, &self.config);
        let layout = analyze_layout(&elements, buffer.width(), buffer.height(), &self.config);

        Ok(AnalysisResult {
            colors,
            elements,
            layout,
            dimensions: Dimensions {
                width: buffer.width(),
                height: buffer.height(),
            },
        })
    }
}
