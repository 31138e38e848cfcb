//! Immutable RGBA pixel buffer shared by every analysis stage
//!
//! The buffer is validated once at construction and read-only afterwards.
//! All accessors are bounds-checked and return `Option` rather than
//! panicking, so the heuristic stages can probe freely near image borders.

use crate::io::error::{Result, invalid_buffer};
use crate::raster::color::Rgb;

/// Decoded raster image data: row-major RGBA samples, top-left origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from decoded RGBA bytes
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnalysisError::InvalidBuffer`] if either dimension is
    /// zero or the sample data does not hold exactly `width * height` RGBA
    /// quadruples.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 {
            return Err(invalid_buffer(width, height, "width must be non-zero"));
        }
        if height == 0 {
            return Err(invalid_buffer(width, height, "height must be non-zero"));
        }

        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(invalid_buffer(
                width,
                height,
                "sample data length does not match dimensions",
            ));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Buffer width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Buffer dimensions as a (width, height) pair
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// RGBA sample at a pixel position, or `None` outside the buffer
    pub fn rgba(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let samples = self.data.get(index..index + 4)?;
        <[u8; 4]>::try_from(samples).ok()
    }

    /// RGB color at a pixel position, ignoring alpha
    pub fn rgb(&self, x: u32, y: u32) -> Option<Rgb> {
        let [r, g, b, _] = self.rgba(x, y)?;
        Some(Rgb::new(r, g, b))
    }

    /// RGBA sample by flat pixel index in row-major order
    pub fn rgba_at_index(&self, index: usize) -> Option<[u8; 4]> {
        let offset = index.checked_mul(4)?;
        let samples = self.data.get(offset..offset + 4)?;
        <[u8; 4]>::try_from(samples).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> PixelBuffer {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&rgba);
        }
        PixelBuffer::new(width, height, data).unwrap()
    }

    #[test]
    fn test_rejects_degenerate_dimensions() {
        assert!(PixelBuffer::new(0, 10, vec![]).is_err());
        assert!(PixelBuffer::new(10, 0, vec![]).is_err());
        assert!(PixelBuffer::new(2, 2, vec![0; 15]).is_err());
    }

    #[test]
    fn test_bounds_checked_access() {
        let buffer = solid(4, 3, [10, 20, 30, 255]);
        assert_eq!(buffer.rgba(0, 0), Some([10, 20, 30, 255]));
        assert_eq!(buffer.rgb(3, 2), Some(Rgb::new(10, 20, 30)));
        assert_eq!(buffer.rgba(4, 0), None);
        assert_eq!(buffer.rgba(0, 3), None);
        assert_eq!(buffer.rgba_at_index(11), Some([10, 20, 30, 255]));
        assert_eq!(buffer.rgba_at_index(12), None);
    }
}
