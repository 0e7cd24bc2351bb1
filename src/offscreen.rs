//! In-memory drawing surface that records operations instead of rendering.
//!
//! Useful for headless runs and for asserting on layout decisions in tests:
//! every primitive call is appended to an op log in call order. Text
//! measurement is deterministic — each terminal column of a string (per
//! `unicode-width`) advances the pen by half the font size, a reasonable
//! stand-in for a monospace face.

use crate::color::Color;
use crate::geometry::{ImageFormat, Rect};
use crate::surface::{DrawSurface, FontSpec, TextExtents, WindowSystem};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

/// One recorded drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeLine {
        from: (f64, f64),
        to: (f64, f64),
        color: Color,
    },
    Text {
        content: String,
        x: f64,
        y: f64,
        color: Color,
        size: f64,
        bold: bool,
    },
    Image {
        path: PathBuf,
        x: f64,
        y: f64,
        size: ImageFormat,
    },
    SetSize {
        width: u32,
        height: u32,
    },
    Flush,
}

/// Fake decoded image: just a path and its registered natural size.
#[derive(Clone, Debug)]
pub struct OffscreenImage {
    path: PathBuf,
    size: ImageFormat,
}

/// Recording [`DrawSurface`] with deterministic metrics.
#[derive(Debug, Default)]
pub struct OffscreenSurface {
    ops: Vec<DrawOp>,
    images: HashMap<PathBuf, ImageFormat>,
}

impl OffscreenSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the natural size [`DrawSurface::load_image`] reports for
    /// `path`. Unregistered paths fail to load.
    pub fn register_image(&mut self, path: impl Into<PathBuf>, size: ImageFormat) {
        self.images.insert(path.into(), size);
    }

    /// All operations recorded so far, in call order.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drop the recorded operations, keeping registered images.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Pen advance for `text` at `size`: half a font size per column.
    #[must_use]
    pub fn advance_for(text: &str, size: f64) -> f64 {
        text.width() as f64 * (size / 2.0)
    }
}

impl DrawSurface for OffscreenSurface {
    type Image = OffscreenImage;

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color) {
        self.ops.push(DrawOp::StrokeLine { from, to, color });
    }

    fn measure_text(&mut self, text: &str, font: FontSpec<'_>) -> TextExtents {
        let advance = Self::advance_for(text, font.size);
        TextExtents {
            width: advance,
            height: font.size,
            x_advance: advance,
        }
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, color: Color, font: FontSpec<'_>) {
        self.ops.push(DrawOp::Text {
            content: text.to_string(),
            x,
            y,
            color,
            size: font.size,
            bold: font.weight == crate::surface::FontWeight::Bold,
        });
    }

    fn load_image(&mut self, path: &Path) -> io::Result<OffscreenImage> {
        match self.images.get(path) {
            Some(&size) => Ok(OffscreenImage {
                path: path.to_path_buf(),
                size,
            }),
            None => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("no registered image at {}", path.display()),
            )),
        }
    }

    fn image_size(&self, image: &OffscreenImage) -> ImageFormat {
        image.size
    }

    fn scale_image(&mut self, image: &OffscreenImage, size: ImageFormat) -> OffscreenImage {
        OffscreenImage {
            path: image.path.clone(),
            size,
        }
    }

    fn composite_image(&mut self, image: &OffscreenImage, x: f64, y: f64) {
        self.ops.push(DrawOp::Image {
            path: image.path.clone(),
            x,
            y,
            size: image.size,
        });
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.ops.push(DrawOp::SetSize { width, height });
    }

    fn flush(&mut self) {
        self.ops.push(DrawOp::Flush);
    }
}

/// One recorded window-system request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowOp {
    Resize { width: u32, height: u32 },
    Reposition { x: i32, y: i32 },
    Flush,
}

/// Recording [`WindowSystem`] counterpart to [`OffscreenSurface`].
#[derive(Debug, Default)]
pub struct RecordingWindow {
    ops: Vec<WindowOp>,
}

impl RecordingWindow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ops(&self) -> &[WindowOp] {
        &self.ops
    }
}

impl WindowSystem for RecordingWindow {
    fn resize(&mut self, width: u32, height: u32) {
        self.ops.push(WindowOp::Resize { width, height });
    }

    fn reposition(&mut self, x: i32, y: i32) {
        self.ops.push(WindowOp::Reposition { x, y });
    }

    fn flush(&mut self) {
        self.ops.push(WindowOp::Flush);
    }
}
