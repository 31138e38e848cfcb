//! Raster data model shared by every analysis stage
//!
//! This module contains the immutable pixel-level values the pipeline reads:
//! - Validated RGBA buffer access
//! - 24-bit color arithmetic (luminance, contrast, distance)
//! - Rectangle geometry for regions and element bounds

/// Validated immutable RGBA pixel buffer
pub mod buffer;
/// 24-bit color values and contrast arithmetic
pub mod color;
/// Axis-aligned rectangle geometry
pub mod rect;

pub use buffer::PixelBuffer;
pub use color::Rgb;
pub use rect::Rect;
