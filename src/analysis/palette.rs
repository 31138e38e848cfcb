//! Palette extraction from strided opaque pixel samples
//!
//! A frequency census over a fixed-stride sample of the buffer yields the
//! dominant color and the ranked palette; corner sampling picks the
//! background, and luminance/contrast rules derive the text and accent
//! colors from it. Ranking ties break on packed color value so identical
//! buffers always produce identical palettes.

use crate::analysis::pipeline::AnalyzerConfig;
use crate::io::configuration::DEFAULT_ACCENT;
use crate::raster::{PixelBuffer, Rect, Rgb};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Compact color summary of a buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    /// Most frequent sampled color
    pub dominant: Rgb,
    /// Majority corner color, or the dominant color when corners disagree
    pub background: Rgb,
    /// Black or white, whichever contrasts with the background
    pub text: Rgb,
    /// First palette entry readable against the background
    pub accent: Rgb,
    /// Up to five distinct colors in descending sample frequency
    pub palette: Vec<Rgb>,
}

/// Derive a [`ColorPalette`] from a pixel buffer
///
/// Pure function of the buffer contents; an image with no opaque samples
/// falls back to an all-white palette.
pub fn extract_palette(buffer: &PixelBuffer, config: &AnalyzerConfig) -> ColorPalette {
    let frequencies = sample_frequencies(buffer, config);
    let ranked = rank_colors(&frequencies, config.palette_candidates);

    let dominant = ranked.first().copied().unwrap_or(Rgb::WHITE);
    let palette: Vec<Rgb> = ranked.into_iter().take(config.palette_size).collect();

    let background = corner_majority(buffer).unwrap_or(dominant);
    let text = if background.luminance() > 0.5 {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    };
    let accent = palette
        .iter()
        .copied()
        .find(|color| color.contrast_ratio(background) > config.accent_contrast)
        .unwrap_or(DEFAULT_ACCENT);

    ColorPalette {
        dominant,
        background,
        text,
        accent,
        palette,
    }
}

/// Most frequent color within a rectangular sub-region
///
/// Applies the same strided opaque-sample census as the whole-buffer palette,
/// scoped to the rectangle. Falls back to white when every covered sample is
/// transparent.
pub fn region_dominant_color(buffer: &PixelBuffer, region: &Rect, config: &AnalyzerConfig) -> Rgb {
    let mut frequencies: HashMap<Rgb, usize> = HashMap::new();
    let pixel_count = (region.width as usize) * (region.height as usize);
    let stride = config.palette_sample_stride.max(1);

    for index in (0..pixel_count).step_by(stride) {
        let x = region.x + (index % region.width as usize) as u32;
        let y = region.y + (index / region.width as usize) as u32;
        let Some([r, g, b, a]) = buffer.rgba(x, y) else {
            continue;
        };
        if a < config.min_opaque_alpha {
            continue;
        }
        *frequencies.entry(Rgb::new(r, g, b)).or_insert(0) += 1;
    }

    rank_colors(&frequencies, 1)
        .first()
        .copied()
        .unwrap_or(Rgb::WHITE)
}

// Census over every stride-th pixel, skipping translucent samples
fn sample_frequencies(buffer: &PixelBuffer, config: &AnalyzerConfig) -> HashMap<Rgb, usize> {
    let mut frequencies: HashMap<Rgb, usize> = HashMap::new();
    let stride = config.palette_sample_stride.max(1);

    for index in (0..buffer.pixel_count()).step_by(stride) {
        let Some([r, g, b, a]) = buffer.rgba_at_index(index) else {
            continue;
        };
        if a < config.min_opaque_alpha {
            continue;
        }
        *frequencies.entry(Rgb::new(r, g, b)).or_insert(0) += 1;
    }

    frequencies
}

// Descending frequency with packed-value tie-break for reproducible output
fn rank_colors(frequencies: &HashMap<Rgb, usize>, limit: usize) -> Vec<Rgb> {
    let mut ranked: Vec<(Rgb, usize)> = frequencies
        .iter()
        .map(|(&color, &count)| (color, count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.packed().cmp(&b.0.packed())));
    ranked.truncate(limit);
    ranked.into_iter().map(|(color, _)| color).collect()
}

// Majority vote over the four image corners; None without a repeated color
fn corner_majority(buffer: &PixelBuffer) -> Option<Rgb> {
    let right = buffer.width().saturating_sub(1);
    let bottom = buffer.height().saturating_sub(1);
    let corners = [(0, 0), (right, 0), (0, bottom), (right, bottom)];

    let mut votes: HashMap<Rgb, usize> = HashMap::new();
    for (x, y) in corners {
        if let Some(color) = buffer.rgb(x, y) {
            *votes.entry(color).or_insert(0) += 1;
        }
    }

    votes
        .into_iter()
        .filter(|&(_, count)| count >= 2)
        .min_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.packed().cmp(&b.0.packed())))
        .map(|(color, _)| color)
}
