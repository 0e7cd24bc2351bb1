//! Single-row layout: result rows and the editable query line.
//!
//! Rows never wrap. The remaining width is handed to the tokenizer as a
//! budget, so overlong content is truncated at a grapheme boundary instead
//! of spilling into the description panel.

use crate::color::Color;
use crate::config::Settings;
use crate::geometry::{ImageFormat, Rect, line_offset};
use crate::image::draw_image;
use crate::layout::draw_run;
use crate::surface::{DrawSurface, FontSpec, FontWeight};
use crate::token::{MarkupCursor, RunAttrs, Token};

/// Draw one result row at `line` (counting from the top, query = 0).
pub(crate) fn draw_row<S: DrawSurface>(
    surface: &mut S,
    settings: &Settings,
    text: &str,
    line: u32,
    fg: Color,
    bg: Color,
) {
    let row_width = f64::from(settings.row_width);
    let row_top = f64::from(settings.row_height) * f64::from(line);

    // The fill starts 2px below the row top so repaints cannot clip the
    // descenders of the row above.
    surface.fill_rect(
        Rect::new(
            0.0,
            row_top + 2.0,
            row_width,
            f64::from(settings.row_height),
        ),
        bg,
    );

    let font = FontSpec {
        family: &settings.font_name,
        size: settings.font_size,
        weight: FontWeight::Normal,
    };

    let mut offset = line_offset(settings, line);
    let mut cursor = MarkupCursor::new(text);
    loop {
        let budget = row_width - offset.x;
        let Some(token) = cursor.next(surface, font, budget) else {
            break;
        };
        match token {
            Token::Image(path) => {
                let bounds = ImageFormat::new(
                    (row_width - offset.x).max(0.0) as u32,
                    settings.row_height,
                );
                let drawn = draw_image(surface, path, offset, bounds);
                offset.x += f64::from(drawn.width);
            }
            Token::Text(run) => {
                offset.x += draw_run(surface, run, offset, fg, font);
            }
            Token::Emphasized(run, attrs) => {
                let mut run_font = font;
                if attrs.contains(RunAttrs::BOLD) {
                    run_font.weight = FontWeight::Bold;
                }
                if attrs.contains(RunAttrs::CENTER) {
                    let advance = surface.measure_text(run, run_font).x_advance;
                    if advance < f64::from(settings.desc_width) {
                        offset.x += (f64::from(settings.desc_width) - advance) / 2.0;
                    }
                }
                offset.x += draw_run(surface, run, offset, fg, run_font);
            }
            // Breaks have nowhere to go in a single-row context.
            Token::LineBreak | Token::Rule => {}
        }
    }
}

/// Draw the query line with its cursor, scrolling horizontally so the
/// cursor always lands inside `[0, row_width]`.
///
/// The right bound is inclusive: with overflowing text and the cursor at
/// the end of the string, `cursor_x` sits at exactly `row_width`, matching
/// the launcher's historical layout.
///
/// `cursor` is a byte index into `text` on a char boundary; out-of-range
/// values clamp to the end of the string.
pub(crate) fn draw_query_row<S: DrawSurface>(
    surface: &mut S,
    settings: &Settings,
    text: &str,
    cursor: usize,
    line: u32,
    fg: Color,
    bg: Color,
) {
    let row_width = f64::from(settings.row_width);
    let row_top = f64::from(settings.row_height) * f64::from(line);
    surface.fill_rect(
        Rect::new(0.0, row_top, row_width, f64::from(settings.row_height)),
        bg,
    );

    let font = FontSpec {
        family: &settings.font_name,
        size: settings.font_size,
        weight: FontWeight::Normal,
    };
    let mut offset = line_offset(settings, line);

    // Cursor position relative to the text start, measured on a slice.
    let prefix = text.get(..cursor).unwrap_or(text);
    let mut cursor_x = surface.measure_text(prefix, font).x_advance;

    // When the full text overflows the row, right-align its tail.
    let full = surface.measure_text(text, font);
    if full.width > row_width {
        offset.x = row_width - full.x_advance;
    }

    cursor_x += offset.x;
    if cursor_x < 0.0 {
        // Cursor scrolled off the left edge: shift the origin right by the
        // deficit plus a small margin so the cursor sits at zero.
        offset.x -= cursor_x - 3.0;
        cursor_x = 0.0;
    }

    surface.draw_text(text, offset.x, offset.y, fg, font);

    if settings.cursor_is_underline {
        surface.draw_text("_", offset.x + full.x_advance, offset.y, fg, font);
    } else {
        let cursor_top = offset.y - settings.font_size - settings.cursor_padding;
        surface.fill_rect(
            Rect::new(
                cursor_x + 2.0,
                cursor_top,
                1.0,
                settings.font_size + settings.cursor_padding * 2.0,
            ),
            fg,
        );
    }
}
