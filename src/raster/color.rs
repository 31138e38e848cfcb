//! 24-bit RGB color with the luminance and contrast arithmetic used by the
//! heuristic stages
//!
//! Colors serialize as `#rrggbb` hex strings so reports round-trip exactly
//! between the internal representation and the external contract.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A 24-bit RGB color value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Pure white, the fallback for empty samples
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure black, the dark text choice
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a color from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack the channels into a single integer (0xRRGGBB)
    ///
    /// Used as a deterministic tie-break when frequencies are equal.
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Relative luminance over normalized channels
    ///
    /// Uses the Rec. 601 weights `0.299R + 0.587G + 0.114B`, matching the
    /// brightness judgement the text and accent selections are defined
    /// against.
    pub fn luminance(self) -> f64 {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        0.114_f64.mul_add(b, 0.299_f64.mul_add(r, 0.587 * g))
    }

    /// Contrast ratio between two colors
    ///
    /// `(max(L1, L2) + 0.05) / (min(L1, L2) + 0.05)`; symmetric in its
    /// arguments and always at least 1.0.
    pub fn contrast_ratio(self, other: Self) -> f64 {
        let l1 = self.luminance();
        let l2 = other.luminance();
        (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
    }

    /// Euclidean distance to another color in RGB space
    pub fn distance(self, other: Self) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        db.mul_add(db, dr.mul_add(dr, dg * dg)).sqrt()
    }

    /// Format as a lowercase `#rrggbb` hex string
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a `#rrggbb` hex string
    ///
    /// Returns `None` for anything but a 7-character `#`-prefixed literal.
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(digits.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(digits.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(digits.get(4..6)?, 16).ok()?;
        Some(Self::new(r, g, b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text)
            .ok_or_else(|| D::Error::custom(format!("invalid color literal '{text}'")))
    }
}
