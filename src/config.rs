//! Window geometry, font, and palette settings.
//!
//! Configuration files are parsed by the surrounding application; this crate
//! only consumes the resulting plain structs. Both types implement
//! [`Default`] with values that produce a usable popup out of the box.

use crate::color::Color;
use crate::error::{Error, Result};

/// Geometry and font settings for the popup window.
///
/// All pixel quantities are in device pixels. `font_size` is the size handed
/// to the drawing surface when selecting the font; `line_ascent` is the
/// measured pixel ascent of that font and positions the text baseline within
/// a row. The description panel has its own font size and line height.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Width of the query line and each result row.
    pub row_width: u32,
    /// Width of the description panel to the right of the rows.
    pub desc_width: u32,
    /// Height of one row.
    pub row_height: u32,
    /// Maximum window height; bounds how many rows are visible at once.
    pub max_height: u32,
    /// Left padding applied to every row's content.
    pub horiz_padding: u32,
    /// Font family name passed through to the drawing surface.
    pub font_name: String,
    /// Font size for the query line and result rows.
    pub font_size: f64,
    /// Font size for the description panel.
    pub desc_font_size: f64,
    /// Measured pixel ascent of the row font; baseline offset within a row.
    pub line_ascent: f64,
    /// Line height used when flowing description text.
    pub desc_line_height: f64,
    /// Vertical padding above and below the bar cursor.
    pub cursor_padding: f64,
    /// Draw the cursor as an underline glyph instead of a bar.
    pub cursor_is_underline: bool,
    /// Horizontal inset of the rule separator inside the panel.
    pub line_gap: f64,
    /// Recenter the window when the description panel appears or vanishes.
    pub auto_center: bool,
    /// Window position without a description panel.
    pub anchor: (i32, i32),
    /// Window position while the description panel is shown.
    pub anchor_with_desc: (i32, i32),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            row_width: 500,
            desc_width: 300,
            row_height: 30,
            max_height: 300,
            horiz_padding: 5,
            font_name: "monospace".to_string(),
            font_size: 18.0,
            desc_font_size: 12.0,
            line_ascent: 18.0,
            desc_line_height: 12.0,
            cursor_padding: 4.0,
            cursor_is_underline: false,
            line_gap: 4.0,
            auto_center: false,
            anchor: (0, 0),
            anchor_with_desc: (0, 0),
        }
    }
}

impl Settings {
    /// Validate that these settings can produce a drawable window.
    pub fn validate(&self) -> Result<()> {
        if self.row_height == 0 {
            return Err(Error::InvalidSettings("row height must be nonzero".into()));
        }
        if self.row_width == 0 {
            return Err(Error::InvalidSettings("row width must be nonzero".into()));
        }
        if self.max_height < 2 * self.row_height {
            return Err(Error::InvalidSettings(
                "max height must fit the query row plus one result".into(),
            ));
        }
        if self.font_size <= 0.0 || self.desc_font_size <= 0.0 {
            return Err(Error::InvalidSettings("font sizes must be positive".into()));
        }
        Ok(())
    }

    /// Number of result rows that fit below the query line.
    #[must_use]
    pub fn max_visible_rows(&self) -> u32 {
        (self.max_height / self.row_height).saturating_sub(1)
    }

    /// Window height for a given result count: one row per visible result
    /// plus the query line, capped at the configured maximum.
    #[must_use]
    pub fn window_height(&self, result_count: u32) -> u32 {
        (self.row_height.saturating_mul(result_count + 1)).min(self.max_height)
    }
}

/// Color palette for the popup, normally loaded from a theme file.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub query_fg: Color,
    pub query_bg: Color,
    pub result_fg: Color,
    pub result_bg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            query_fg: Color::WHITE,
            query_bg: Color::BLACK,
            result_fg: Color::new(0.8, 0.8, 0.8),
            result_bg: Color::new(0.1, 0.1, 0.1),
            highlight_fg: Color::WHITE,
            highlight_bg: Color::new(0.2, 0.3, 0.5),
        }
    }
}
