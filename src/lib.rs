//! `lantern` - rendering and layout core for an overlay item selector
//!
//! The popup shows an editable query line, a scrollable list of filtered
//! results, and a description panel for the highlighted item. This crate
//! owns the layout decisions: budget-bounded rich-text tokenization,
//! per-token inline rendering, cursor tracking with horizontal
//! scroll-follow, and the highlight-tracking scroll window. The actual
//! window and drawing surface stay with the application and are reached
//! through the [`surface`] traits.

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Intentional pixel-coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional pixel-coordinate casts
#![allow(clippy::cast_precision_loss)] // Intentional for advance math
#![allow(clippy::module_name_repetitions)] // Allow ImageFormat etc.
#![allow(clippy::missing_panics_doc)] // Draw path does not panic
#![allow(clippy::float_cmp)] // Exact comparison intended in tests

pub mod color;
pub mod compositor;
pub mod config;
pub mod error;
pub mod geometry;
pub mod image;
pub mod layout;
pub mod offscreen;
pub mod results;
pub mod surface;
pub mod token;
pub mod viewport;

// Re-export core types at crate root
pub use color::Color;
pub use compositor::Compositor;
pub use config::{Settings, Theme};
pub use error::{Error, Result};
pub use geometry::{ImageFormat, Offset, Rect, line_offset};
pub use results::{ResultItem, parse_results};
pub use surface::{DrawSurface, FontSpec, FontWeight, TextExtents, WindowSystem};
pub use token::{MarkupCursor, RunAttrs, Token};
pub use viewport::Viewport;

// Re-export the offscreen harness types used throughout the test suite
pub use offscreen::{DrawOp, OffscreenSurface, RecordingWindow, WindowOp};
