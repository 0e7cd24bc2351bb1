//! RGB color type for theme palettes.
//!
//! Colors are immutable triples of f64 components in `[0.0, 1.0]`, the form
//! the drawing surface's `set_source_rgb`-style primitives expect. Theme
//! loading happens outside this crate; [`Color::from_hex`] exists so a theme
//! file can carry the usual `#RRGGBB` strings.
//!
//! # Examples
//!
//! ```
//! use lantern::Color;
//!
//! let accent = Color::from_hex("#6495ed").unwrap();
//! let dim = Color::BLACK;
//! assert!(accent.g > dim.g);
//! ```

use crate::error::{Error, Result};

/// RGB color with f64 components in range [0.0, 1.0].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Create a new color from f64 components.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from u8 RGB components.
    #[must_use]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Parse a hex color string (e.g., "#FF0000" or "FF0000").
    ///
    /// Supports 3-char (#RGB) and 6-char (#RRGGBB) formats.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        let parsed = match digits.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = u8::from_str_radix(&digits[0..1], 16).ok();
                let g = u8::from_str_radix(&digits[1..2], 16).ok();
                let b = u8::from_str_radix(&digits[2..3], 16).ok();
                match (r, g, b) {
                    (Some(r), Some(g), Some(b)) => Some(Self::from_rgb_u8(r * 17, g * 17, b * 17)),
                    _ => None,
                }
            }
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).ok();
                let g = u8::from_str_radix(&digits[2..4], 16).ok();
                let b = u8::from_str_radix(&digits[4..6], 16).ok();
                match (r, g, b) {
                    (Some(r), Some(g), Some(b)) => Some(Self::from_rgb_u8(r, g, b)),
                    _ => None,
                }
            }
            _ => None,
        };

        parsed.ok_or_else(|| Error::InvalidColor(hex.to_string()))
    }
}
