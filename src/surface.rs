//! Boundary traits for the drawing surface and the window system.
//!
//! The surrounding application owns the real resources (a cairo-style
//! surface bound to a window, and the window-system connection). This crate
//! borrows them through these traits for the duration of each redraw and
//! never retains them.

use crate::color::Color;
use crate::geometry::{ImageFormat, Rect};
use std::io;
use std::path::Path;

/// Font weight for a text run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font selection for one measurement or draw call.
#[derive(Clone, Copy, Debug)]
pub struct FontSpec<'a> {
    pub family: &'a str,
    pub size: f64,
    pub weight: FontWeight,
}

/// Metrics reported by the surface's text-measurement primitive.
///
/// `x_advance` is the pen movement after drawing the string, which can
/// differ from `width` (trailing whitespace advances without inking).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtents {
    pub width: f64,
    pub height: f64,
    pub x_advance: f64,
}

/// Drawing primitives consumed by the layout engines.
///
/// Implementations are expected to be cheap to call repeatedly; the layout
/// engines interleave measurement and drawing within one row.
pub trait DrawSurface {
    /// Handle to a decoded image owned by the surface.
    type Image;

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a straight line segment.
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color);

    /// Measure a string without drawing it.
    fn measure_text(&mut self, text: &str, font: FontSpec<'_>) -> TextExtents;

    /// Draw a string with its baseline origin at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, color: Color, font: FontSpec<'_>);

    /// Decode an image file. The path has already been expanded and
    /// existence-checked by the caller.
    fn load_image(&mut self, path: &Path) -> io::Result<Self::Image>;

    /// Natural (pre-scaling) dimensions of a loaded image.
    fn image_size(&self, image: &Self::Image) -> ImageFormat;

    /// Produce a resized copy of a loaded image.
    fn scale_image(&mut self, image: &Self::Image, size: ImageFormat) -> Self::Image;

    /// Composite an image with its top-left corner at `(x, y)`.
    fn composite_image(&mut self, image: &Self::Image, x: f64, y: f64);

    /// Resize the surface to match the window.
    fn set_size(&mut self, width: u32, height: u32);

    /// Push any buffered drawing to the screen.
    fn flush(&mut self);
}

/// Window-system calls issued when the description panel appears or
/// vanishes. Addressed through whatever opaque handle the implementation
/// wraps.
pub trait WindowSystem {
    /// Resize the popup window.
    fn resize(&mut self, width: u32, height: u32);

    /// Move the popup window to an absolute position.
    fn reposition(&mut self, x: i32, y: i32);

    /// Flush pending window-system requests.
    fn flush(&mut self);
}
