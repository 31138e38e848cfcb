//! Layout topology inference from detected element geometry
//!
//! Elements are reduced to gap and position statistics, then tested against
//! the three topologies in a fixed order: grid (rows and columns with
//! consistent spacing), flex (a dominant pairwise-aligned axis), and the
//! absolute fallback. Every input maps to a defined output; degenerate and
//! collinear element sets never error.

use crate::analysis::classify::DetectedElement;
use crate::analysis::pipeline::AnalyzerConfig;
use crate::math::stats::{mean, median, std_dev};
use serde::{Deserialize, Serialize};

/// Inferred layout topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// Elements flow along one axis
    Flex,
    /// Elements align into rows and columns
    Grid,
    /// No regular structure detected
    Absolute,
}

/// Main axis of a flex layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    /// Horizontal main axis
    Row,
    /// Vertical main axis
    Column,
}

/// Content alignment along the inferred layout's main axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    /// Content hugs the start edge
    Start,
    /// Content sits in the middle band
    Center,
    /// Content hugs the end edge
    End,
    /// Uniform large gaps spanning the axis
    SpaceBetween,
    /// Uniform small gaps spanning the axis
    SpaceAround,
}

/// Inferred spatial organization of sibling elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutAnalysis {
    /// Layout topology
    #[serde(rename = "type")]
    pub kind: LayoutKind,
    /// Flex main axis; absent for grid and absolute layouts
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub direction: Option<FlexDirection>,
    /// Content alignment, when one could be derived
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub alignment: Option<Alignment>,
    /// Median or mean gap between elements in pixels
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gap: Option<u32>,
    /// Estimated container padding in pixels
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub padding: Option<u32>,
}

impl LayoutAnalysis {
    /// The terminal absolute layout with no derived fields
    pub const fn absolute() -> Self {
        Self {
            kind: LayoutKind::Absolute,
            direction: None,
            alignment: None,
            gap: None,
            padding: None,
        }
    }
}

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    // (start, end) extent of an element along this axis
    fn span(self, element: &DetectedElement) -> (f64, f64) {
        match self {
            Self::Horizontal => (
                f64::from(element.bounds.x),
                f64::from(element.bounds.right()),
            ),
            Self::Vertical => (
                f64::from(element.bounds.y),
                f64::from(element.bounds.bottom()),
            ),
        }
    }

    fn start(self, element: &DetectedElement) -> f64 {
        self.span(element).0
    }
}

/// Infer the layout topology of a set of detected elements
///
/// `width` and `height` are the canvas dimensions the elements were detected
/// on; they anchor the alignment judgements. Fewer than two elements always
/// yields the bare absolute layout.
pub fn analyze_layout(
    elements: &[DetectedElement],
    width: u32,
    height: u32,
    config: &AnalyzerConfig,
) -> LayoutAnalysis {
    if elements.len() < 2 {
        return LayoutAnalysis::absolute();
    }

    let horizontal_gaps = axis_gaps(elements, Axis::Horizontal);
    let vertical_gaps = axis_gaps(elements, Axis::Vertical);
    let padding = Some(estimate_padding(elements, config));

    let rows = cluster_count(elements, Axis::Vertical, config.row_tolerance);
    let columns = cluster_count(elements, Axis::Horizontal, config.row_tolerance);
    if rows >= 2
        && columns >= 2
        && std_dev(&horizontal_gaps) < config.grid_gap_deviation
        && std_dev(&vertical_gaps) < config.grid_gap_deviation
    {
        let pooled: Vec<f64> = horizontal_gaps
            .iter()
            .chain(vertical_gaps.iter())
            .copied()
            .collect();
        let gap = if pooled.is_empty() {
            config.default_gap
        } else {
            mean(&pooled).round() as u32
        };
        return LayoutAnalysis {
            kind: LayoutKind::Grid,
            direction: None,
            alignment: Some(overall_alignment(elements, width, config)),
            gap: Some(gap),
            padding,
        };
    }

    let row_score = pair_alignment_score(elements, Axis::Vertical, config.pair_tolerance);
    if row_score > config.flex_score_cutoff {
        return LayoutAnalysis {
            kind: LayoutKind::Flex,
            direction: Some(FlexDirection::Row),
            alignment: Some(resolve_alignment(
                elements,
                Axis::Horizontal,
                f64::from(width),
                config,
            )),
            gap: Some(gap_or_default(&horizontal_gaps, config)),
            padding,
        };
    }

    let column_score = pair_alignment_score(elements, Axis::Horizontal, config.pair_tolerance);
    if column_score > config.flex_score_cutoff {
        return LayoutAnalysis {
            kind: LayoutKind::Flex,
            direction: Some(FlexDirection::Column),
            alignment: Some(resolve_alignment(
                elements,
                Axis::Vertical,
                f64::from(height),
                config,
            )),
            gap: Some(gap_or_default(&vertical_gaps, config)),
            padding,
        };
    }

    LayoutAnalysis {
        kind: LayoutKind::Absolute,
        direction: None,
        alignment: None,
        gap: None,
        padding,
    }
}

// Positive start-to-end gaps between elements sorted along an axis
fn axis_gaps(elements: &[DetectedElement], axis: Axis) -> Vec<f64> {
    let mut spans: Vec<(f64, f64)> = elements.iter().map(|e| axis.span(e)).collect();
    spans.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    spans
        .windows(2)
        .filter_map(|pair| {
            let (_, prev_end) = pair.first()?;
            let (next_start, _) = pair.last()?;
            let gap = next_start - prev_end;
            (gap > 0.0).then_some(gap)
        })
        .collect()
}

// Number of distinct coordinate clusters along an axis, greedy within tolerance
fn cluster_count(elements: &[DetectedElement], axis: Axis, tolerance: f64) -> usize {
    let mut starts: Vec<f64> = elements.iter().map(|e| axis.start(e)).collect();
    starts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut clusters = 0_usize;
    let mut anchor = f64::NEG_INFINITY;
    for start in starts {
        if start - anchor > tolerance {
            clusters += 1;
            anchor = start;
        }
    }
    clusters
}

// Share of element pairs whose start coordinates align within tolerance
fn pair_alignment_score(elements: &[DetectedElement], axis: Axis, tolerance: f64) -> f64 {
    let count = elements.len();
    if count < 2 {
        return 0.0;
    }

    let starts: Vec<f64> = elements.iter().map(|e| axis.start(e)).collect();
    let mut aligned = 0_usize;
    for (index, a) in starts.iter().enumerate() {
        for b in starts.iter().skip(index + 1) {
            if (a - b).abs() <= tolerance {
                aligned += 1;
            }
        }
    }

    let pairs = count * (count - 1) / 2;
    aligned as f64 / pairs as f64
}

// Container padding guessed from the top-left content inset
fn estimate_padding(elements: &[DetectedElement], config: &AnalyzerConfig) -> u32 {
    let min_x = elements.iter().map(|e| e.bounds.x).min().unwrap_or(0);
    let min_y = elements.iter().map(|e| e.bounds.y).min().unwrap_or(0);
    min_x.min(min_y).clamp(config.padding_min, config.padding_max)
}

// Compare the average element center against the canvas center
fn overall_alignment(elements: &[DetectedElement], width: u32, config: &AnalyzerConfig) -> Alignment {
    let centers: Vec<f64> = elements.iter().map(|e| e.bounds.center().0).collect();
    let average = mean(&centers);
    let canvas_center = f64::from(width) / 2.0;

    if (average - canvas_center).abs() <= config.center_band * canvas_center {
        Alignment::Center
    } else if average < canvas_center {
        Alignment::Start
    } else {
        Alignment::End
    }
}

// Spacing classification first, but only when the content actually spans the
// axis; otherwise classify by position against the edge and center bands.
fn resolve_alignment(
    elements: &[DetectedElement],
    axis: Axis,
    extent: f64,
    config: &AnalyzerConfig,
) -> Alignment {
    let mut spans: Vec<(f64, f64)> = elements.iter().map(|e| axis.span(e)).collect();
    spans.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let gaps: Vec<f64> = spans
        .windows(2)
        .filter_map(|pair| {
            let (_, prev_end) = pair.first()?;
            let (next_start, _) = pair.last()?;
            Some(next_start - prev_end)
        })
        .collect();

    let first_start = spans.first().map_or(0.0, |span| span.0);
    let last_end = spans.last().map_or(0.0, |span| span.1);
    let near_start = first_start <= config.edge_band * extent;
    let near_end = last_end >= (1.0 - config.edge_band) * extent;

    if near_start && near_end && !gaps.is_empty() && std_dev(&gaps) < config.spacing_gap_deviation {
        return if mean(&gaps) > config.spacing_gap_threshold {
            Alignment::SpaceBetween
        } else {
            Alignment::SpaceAround
        };
    }

    if near_start {
        Alignment::Start
    } else if near_end {
        Alignment::End
    } else if first_start >= config.center_band_low * extent
        && last_end <= config.center_band_high * extent
    {
        Alignment::Center
    } else {
        Alignment::Start
    }
}

// Rounded median of the observed gaps, or the configured default
fn gap_or_default(gaps: &[f64], config: &AnalyzerConfig) -> u32 {
    if gaps.is_empty() {
        config.default_gap
    } else {
        median(gaps).round().max(0.0) as u32
    }
}
