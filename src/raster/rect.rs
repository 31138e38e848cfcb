//! Axis-aligned rectangle used for candidate regions and element bounds

use serde::{Deserialize, Serialize};

/// A rectangle within a pixel buffer, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate one past the right edge
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Y coordinate one past the bottom edge
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Area in square pixels
    pub const fn area(&self) -> u64 {
        (self.width as u64) * (self.height as u64)
    }

    /// Width divided by height
    ///
    /// The primary classification signal. Zero-height rectangles are never
    /// produced by the detector, so the division is well defined.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Center point of the rectangle
    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(self.x) + f64::from(self.width) / 2.0,
            f64::from(self.y) + f64::from(self.height) / 2.0,
        )
    }

    /// Whether the rectangle lies entirely within a canvas of the given size
    pub const fn contained_in(&self, width: u32, height: u32) -> bool {
        self.right() <= width && self.bottom() <= height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_helpers() {
        let rect = Rect::new(10, 20, 80, 40);
        assert_eq!(rect.right(), 90);
        assert_eq!(rect.bottom(), 60);
        assert_eq!(rect.area(), 3200);
        assert!((rect.aspect_ratio() - 2.0).abs() < f64::EPSILON);
        assert_eq!(rect.center(), (50.0, 40.0));
        assert!(rect.contained_in(90, 60));
        assert!(!rect.contained_in(89, 60));
    }
}
