//! Offsets, rectangles, and image fitting.
//!
//! The drawing surface positions glyphs by their baseline but images by
//! their top-left corner, so a layout position carries two vertical fields:
//! `y` for the next text baseline and `image_y` for the next image origin.
//! The two diverge in the description panel when an image reserves vertical
//! space the text baseline has not yet caught up to.

use crate::config::Settings;

/// Layout position inside the window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    /// Horizontal pen position.
    pub x: f64,
    /// Baseline of the next text run.
    pub y: f64,
    /// Top edge of the next image.
    pub image_y: f64,
}

/// Axis-aligned rectangle in window coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Pixel dimensions of an image after any scaling.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ImageFormat {
    pub width: u32,
    pub height: u32,
}

impl ImageFormat {
    /// The degenerate format returned when an image cannot be drawn.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Downscale-only fit of this format inside `bounds`, preserving aspect
    /// ratio exactly. Dimensions already within bounds pass through
    /// unchanged; scaled dimensions are integer-truncated. Never upscales.
    #[must_use]
    pub fn fit_within(self, bounds: Self) -> Self {
        if self.width <= bounds.width && self.height <= bounds.height {
            return self;
        }
        let scale = (f64::from(bounds.width) / f64::from(self.width))
            .min(f64::from(bounds.height) / f64::from(self.height));
        Self {
            width: (scale * f64::from(self.width)) as u32,
            height: (scale * f64::from(self.height)) as u32,
        }
    }
}

/// Draw origin for a zero-based row index.
///
/// Pure: `x` is the configured left padding, `y` sits one ascent below the
/// row top so text hangs from its baseline, `image_y` is the row top itself.
#[must_use]
pub fn line_offset(settings: &Settings, line: u32) -> Offset {
    let top = f64::from(settings.row_height) * f64::from(line);
    Offset {
        x: f64::from(settings.horiz_padding),
        y: top + settings.line_ascent,
        image_y: top,
    }
}
