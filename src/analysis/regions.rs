//! Candidate region detection via seeded windows and axis-limited growth
//!
//! A coarse seed grid is scanned in row-major order. Each unvisited seed's
//! window must be color-consistent (low summed channel variance) and must
//! stand out from a ring of border probes before it is grown outward along
//! the four axes through the seed. Growth is deliberately not a flood fill:
//! the extents are walked independently per axis, and downstream size and
//! aspect-ratio thresholds assume that approximation's bias.
//!
//! Visited markers are laid sparsely over accepted regions, so overlapping
//! seeds can still produce duplicate rectangles. That suppression is best
//! effort by design; callers must tolerate overlaps.

use crate::analysis::pipeline::AnalyzerConfig;
use crate::raster::{PixelBuffer, Rect, Rgb};
use bitvec::prelude::*;

/// Mean color and color spread of a seed window
#[derive(Debug, Clone, Copy)]
struct WindowStats {
    mean: MeanColor,
    variance: f64,
}

/// Fractional mean color, kept unquantized for distance tests
#[derive(Debug, Clone, Copy)]
struct MeanColor {
    r: f64,
    g: f64,
    b: f64,
}

impl MeanColor {
    fn distance(self, color: Rgb) -> f64 {
        let dr = self.r - f64::from(color.r);
        let dg = self.g - f64::from(color.g);
        let db = self.b - f64::from(color.b);
        db.mul_add(db, dr.mul_add(dr, dg * dg)).sqrt()
    }

    fn quantized(self) -> Rgb {
        Rgb::new(
            self.r.round().clamp(0.0, 255.0) as u8,
            self.g.round().clamp(0.0, 255.0) as u8,
            self.b.round().clamp(0.0, 255.0) as u8,
        )
    }
}

/// Scan a buffer for rectangular candidate regions
///
/// Returns rectangles in row-major seed order. Output is deterministic for a
/// given buffer and configuration; duplicates and overlaps are possible. The
/// visited bitmap is allocated fresh per call and never escapes it.
pub fn find_regions(buffer: &PixelBuffer, config: &AnalyzerConfig) -> Vec<Rect> {
    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    let stride = config.seed_stride.max(1);

    let mut visited = bitvec![0; width * height];
    let mut regions = Vec::new();

    for seed_y in (0..height).step_by(stride) {
        for seed_x in (0..width).step_by(stride) {
            if visited.get(seed_y * width + seed_x).as_deref() == Some(&true) {
                continue;
            }

            let Some(stats) = window_stats(buffer, seed_x, seed_y, config) else {
                continue;
            };
            if stats.variance >= config.window_variance_limit {
                continue;
            }
            if !border_contrast_passes(buffer, seed_x, seed_y, stats.mean, config) {
                continue;
            }

            let region = grow_from_seed(buffer, seed_x, seed_y, stats.mean, config);
            if region.width < config.min_region_width || region.height < config.min_region_height {
                continue;
            }

            mark_visited(&mut visited, width, &region, config.visited_stride);
            regions.push(region);
        }
    }

    regions
}

// Mean and summed per-channel variance over a sub-sampled window.
// None when every covered sample is transparent or out of bounds.
fn window_stats(
    buffer: &PixelBuffer,
    seed_x: usize,
    seed_y: usize,
    config: &AnalyzerConfig,
) -> Option<WindowStats> {
    let x_end = (seed_x + config.seed_stride).min(buffer.width() as usize);
    let y_end = (seed_y + config.seed_stride).min(buffer.height() as usize);
    let step = config.window_sample_step.max(1);

    let mut samples = 0_usize;
    let mut sum = [0.0_f64; 3];
    let mut sum_sq = [0.0_f64; 3];

    for y in (seed_y..y_end).step_by(step) {
        for x in (seed_x..x_end).step_by(step) {
            let Some([r, g, b, a]) = buffer.rgba(x as u32, y as u32) else {
                continue;
            };
            if a < config.min_opaque_alpha {
                continue;
            }

            for (slot, channel) in [r, g, b].iter().enumerate() {
                let value = f64::from(*channel);
                if let Some(total) = sum.get_mut(slot) {
                    *total += value;
                }
                if let Some(total) = sum_sq.get_mut(slot) {
                    *total += value * value;
                }
            }
            samples += 1;
        }
    }

    if samples == 0 {
        return None;
    }

    let count = samples as f64;
    let mean_of = |slot: usize| sum.get(slot).copied().unwrap_or(0.0) / count;
    let variance_of = |slot: usize| {
        let mean = mean_of(slot);
        (sum_sq.get(slot).copied().unwrap_or(0.0) / count) - mean * mean
    };

    Some(WindowStats {
        mean: MeanColor {
            r: mean_of(0),
            g: mean_of(1),
            b: mean_of(2),
        },
        variance: variance_of(0) + variance_of(1) + variance_of(2),
    })
}

// Probe the ring one pixel outside the window; a candidate must contrast
// with its surroundings along a sufficient share of the ring.
fn border_contrast_passes(
    buffer: &PixelBuffer,
    seed_x: usize,
    seed_y: usize,
    mean: MeanColor,
    config: &AnalyzerConfig,
) -> bool {
    let x_end = seed_x + config.seed_stride;
    let y_end = seed_y + config.seed_stride;
    let step = config.border_sample_step.max(1);
    let window_color = mean.quantized();

    let mut samples = 0_usize;
    let mut hits = 0_usize;

    let mut probe = |x: i64, y: i64| {
        if x < 0 || y < 0 {
            return;
        }
        let Some(color) = buffer.rgb(x as u32, y as u32) else {
            return;
        };
        samples += 1;
        if color.contrast_ratio(window_color) > config.border_contrast {
            hits += 1;
        }
    };

    for x in (seed_x..x_end).step_by(step) {
        probe(x as i64, seed_y as i64 - 1);
        probe(x as i64, y_end as i64);
    }
    for y in (seed_y..y_end).step_by(step) {
        probe(seed_x as i64 - 1, y as i64);
        probe(x_end as i64, y as i64);
    }

    samples > 0 && (hits as f64) / (samples as f64) >= config.border_hit_ratio
}

// Walk outward from the seed along each axis independently while the color
// stays within tolerance of the window mean.
fn grow_from_seed(
    buffer: &PixelBuffer,
    seed_x: usize,
    seed_y: usize,
    mean: MeanColor,
    config: &AnalyzerConfig,
) -> Rect {
    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    let step = config.expansion_step.max(1);

    let similar = |x: usize, y: usize| {
        buffer
            .rgb(x as u32, y as u32)
            .is_some_and(|color| mean.distance(color) < config.color_tolerance)
    };

    let mut max_x = seed_x;
    while max_x + step < width && similar(max_x + step, seed_y) {
        max_x += step;
    }

    let mut min_x = seed_x;
    while min_x >= step && similar(min_x - step, seed_y) {
        min_x -= step;
    }

    let mut max_y = seed_y;
    while max_y + step < height && similar(seed_x, max_y + step) {
        max_y += step;
    }

    let mut min_y = seed_y;
    while min_y >= step && similar(seed_x, min_y - step) {
        min_y -= step;
    }

    Rect::new(
        min_x as u32,
        min_y as u32,
        (max_x - min_x) as u32,
        (max_y - min_y) as u32,
    )
}

// Lay sparse visited markers over an accepted region so nearby seeds skip it
fn mark_visited(visited: &mut BitVec, width: usize, region: &Rect, stride: usize) {
    let step = stride.max(1);
    for y in (region.y..=region.bottom()).step_by(step) {
        for x in (region.x..=region.right()).step_by(step) {
            let index = (y as usize) * width + (x as usize);
            if let Some(mut cell) = visited.get_mut(index) {
                *cell = true;
            }
        }
    }
}
