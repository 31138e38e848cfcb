//! Sobel edge detection over grayscale intensity
//!
//! An auxiliary signal computed alongside region detection, not consumed by
//! it. The two stages judge contrast independently and stay independently
//! testable; the CLI can export this map as a debug image.

use crate::analysis::pipeline::AnalyzerConfig;
use crate::raster::PixelBuffer;
use ndarray::Array2;

/// Binary edge map with the same dimensions as its source buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMap {
    cells: Array2<bool>,
}

impl EdgeMap {
    /// Map width in pixels
    pub fn width(&self) -> u32 {
        self.cells.ncols() as u32
    }

    /// Map height in pixels
    pub fn height(&self) -> u32 {
        self.cells.nrows() as u32
    }

    /// Whether the pixel at a position is an edge
    ///
    /// Out-of-bounds positions and the one-pixel image border are never
    /// edges.
    pub fn is_edge(&self, x: u32, y: u32) -> bool {
        self.cells
            .get([y as usize, x as usize])
            .copied()
            .unwrap_or(false)
    }

    /// Total number of edge pixels
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&edge| edge).count()
    }
}

/// Derive a binary edge map from a pixel buffer
///
/// Each pixel's grayscale intensity is the mean of its RGB channels; the
/// fixed 3x3 Sobel kernels run over interior pixels and the gradient
/// magnitude is thresholded into a binary map. Border pixels are left unset.
pub fn detect_edges(buffer: &PixelBuffer, config: &AnalyzerConfig) -> EdgeMap {
    let width = buffer.width() as usize;
    let height = buffer.height() as usize;

    let mut gray = Array2::<f64>::zeros((height, width));
    for y in 0..height {
        for x in 0..width {
            let intensity = buffer
                .rgba(x as u32, y as u32)
                .map_or(0.0, |[r, g, b, _]| {
                    (f64::from(r) + f64::from(g) + f64::from(b)) / 3.0
                });
            if let Some(cell) = gray.get_mut([y, x]) {
                *cell = intensity;
            }
        }
    }

    let mut cells = Array2::from_elem((height, width), false);
    if width < 3 || height < 3 {
        return EdgeMap { cells };
    }

    let sample = |x: usize, y: usize| gray.get([y, x]).copied().unwrap_or(0.0);

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let tl = sample(x - 1, y - 1);
            let tc = sample(x, y - 1);
            let tr = sample(x + 1, y - 1);
            let ml = sample(x - 1, y);
            let mr = sample(x + 1, y);
            let bl = sample(x - 1, y + 1);
            let bc = sample(x, y + 1);
            let br = sample(x + 1, y + 1);

            // Sobel kernels: Gx = [[-1,0,1],[-2,0,2],[-1,0,1]], Gy transposed
            let gx = 2.0_f64.mul_add(mr, tr + br) - 2.0_f64.mul_add(ml, tl + bl);
            let gy = 2.0_f64.mul_add(bc, bl + br) - 2.0_f64.mul_add(tc, tl + tr);

            if gx.hypot(gy) >= config.edge_threshold {
                if let Some(cell) = cells.get_mut([y, x]) {
                    *cell = true;
                }
            }
        }
    }

    EdgeMap { cells }
}
