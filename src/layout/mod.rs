//! Layout engines for rows and the description panel.
//!
//! [`line`] lays out the single-row contexts (the editable query line and
//! each result row); [`desc`] flows multi-line content inside the
//! description panel. Both consume tokens from a [`MarkupCursor`] and hand
//! each one to the inline run renderer here, which reports the horizontal
//! advance the engine uses to position the next token.

pub(crate) mod desc;
pub(crate) mod line;

use crate::color::Color;
use crate::geometry::Offset;
use crate::surface::{DrawSurface, FontSpec};

/// Draw one text run at `offset` and report its horizontal advance.
pub(crate) fn draw_run<S: DrawSurface>(
    surface: &mut S,
    run: &str,
    offset: Offset,
    color: Color,
    font: FontSpec<'_>,
) -> f64 {
    let extents = surface.measure_text(run, font);
    surface.draw_text(run, offset.x, offset.y, color, font);
    extents.x_advance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offscreen::{DrawOp, OffscreenSurface};
    use crate::surface::FontWeight;

    #[test]
    fn test_draw_run_reports_advance() {
        let mut surface = OffscreenSurface::new();
        let font = FontSpec {
            family: "monospace",
            size: 10.0,
            weight: FontWeight::Normal,
        };
        let offset = Offset {
            x: 7.0,
            y: 20.0,
            image_y: 0.0,
        };
        let advance = draw_run(&mut surface, "abc", offset, Color::WHITE, font);
        assert_eq!(advance, 15.0);
        assert!(matches!(
            &surface.ops()[0],
            DrawOp::Text { content, x, y, .. } if content == "abc" && *x == 7.0 && *y == 20.0
        ));
    }
}
