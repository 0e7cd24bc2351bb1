//! Multi-line flowed layout inside the description panel.
//!
//! The panel sits to the right of the rows and flows tokens with two
//! vertical positions: the text baseline `y` and the image origin
//! `image_y`. An image raises the baseline to its bottom edge, so following
//! text starts below the image even though no text line overflowed. Lines
//! wrap either at an explicit `%N` or when the pen would leave the panel;
//! the overflow check compares `x + desc_font_size` against the right edge,
//! the launcher's historical approximation, kept so visible wrap points do
//! not move.

use crate::color::Color;
use crate::config::Settings;
use crate::geometry::{ImageFormat, Offset, Rect};
use crate::image::draw_image;
use crate::layout::draw_run;
use crate::surface::{DrawSurface, FontSpec, FontWeight};
use crate::token::{MarkupCursor, RunAttrs, Token};

/// Draw the highlighted item's description inside a panel of
/// `panel_height` pixels.
pub(crate) fn draw_desc<S: DrawSurface>(
    surface: &mut S,
    settings: &Settings,
    text: &str,
    panel_height: u32,
    fg: Color,
    bg: Color,
    rule_color: Color,
) {
    let left = f64::from(settings.row_width);
    surface.fill_rect(
        Rect::new(
            left + 2.0,
            0.0,
            f64::from(settings.desc_width),
            f64::from(panel_height),
        ),
        bg,
    );

    let font = FontSpec {
        family: &settings.font_name,
        size: settings.desc_font_size,
        weight: FontWeight::Normal,
    };

    let mut offset = Offset {
        x: left + 2.0,
        y: settings.desc_line_height,
        image_y: 0.0,
    };
    let mut cursor = MarkupCursor::new(text);
    loop {
        let budget = left + f64::from(settings.desc_width) - offset.x;
        let Some(token) = cursor.next(surface, font, budget) else {
            break;
        };
        offset = flow_token(surface, settings, token, offset, panel_height, fg, rule_color);
        offset = wrap_overflow(settings, offset);
    }
}

/// Flow one token, returning the layout cursor for the next one.
fn flow_token<S: DrawSurface>(
    surface: &mut S,
    settings: &Settings,
    token: Token<'_>,
    mut offset: Offset,
    panel_height: u32,
    fg: Color,
    rule_color: Color,
) -> Offset {
    let left = f64::from(settings.row_width);
    let line_height = settings.desc_line_height;
    let font = FontSpec {
        family: &settings.font_name,
        size: settings.desc_font_size,
        weight: FontWeight::Normal,
    };

    match token {
        Token::Image(path) => {
            let remaining = (f64::from(panel_height) - offset.image_y).max(0.0) as u32;
            let drawn = draw_image(
                surface,
                path,
                offset,
                ImageFormat::new(settings.desc_width, remaining),
            );
            // The baseline catches up to the image bottom, but x advances
            // past the image too: a following %N decides whether text
            // continues beside or below.
            offset.image_y += f64::from(drawn.height);
            offset.y = offset.image_y;
            offset.x += f64::from(drawn.width);
        }
        Token::Rule => {
            offset.y += line_height / 2.0;
            offset.x = left;
            surface.stroke_line(
                (offset.x + settings.line_gap, offset.y),
                (
                    offset.x + f64::from(settings.desc_width) - settings.line_gap,
                    offset.y,
                ),
                rule_color,
            );
            offset.y += line_height;
            offset.image_y += 2.0 * line_height;
        }
        Token::LineBreak => {
            offset.x = left;
            offset.y += line_height;
            offset.image_y += line_height;
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
    }
    offset
}

/// Wrap to the next line when the pen would leave the panel. Same motion as
/// an explicit break.
fn wrap_overflow(settings: &Settings, mut offset: Offset) -> Offset {
    let right_edge = f64::from(settings.row_width) + f64::from(settings.desc_width);
    if offset.x + settings.desc_font_size > right_edge {
        offset.x = f64::from(settings.row_width);
        offset.y += settings.desc_line_height;
        offset.image_y += settings.desc_line_height;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offscreen::{DrawOp, OffscreenSurface};

    fn settings() -> Settings {
        Settings {
            row_width: 100,
            desc_width: 80,
            row_height: 30,
            desc_font_size: 10.0, // offscreen metrics: 5px per column
            desc_line_height: 12.0,
            line_gap: 4.0,
            ..Settings::default()
        }
    }

    fn text_ops(surface: &OffscreenSurface) -> Vec<(String, f64, f64)> {
        surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { content, x, y, .. } => Some((content.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_panel_background_fills_panel_rect() {
        let mut surface = OffscreenSurface::new();
        draw_desc(
            &mut surface,
            &settings(),
            "hi",
            120,
            Color::WHITE,
            Color::BLACK,
            Color::BLACK,
        );
        assert!(matches!(
            surface.ops()[0],
            DrawOp::FillRect { rect, .. }
                if rect.x == 102.0 && rect.width == 80.0 && rect.height == 120.0
        ));
    }

    #[test]
    fn test_explicit_break_starts_next_line() {
        let mut surface = OffscreenSurface::new();
        draw_desc(
            &mut surface,
            &settings(),
            "ab%Ncd",
            120,
            Color::WHITE,
            Color::BLACK,
            Color::BLACK,
        );
        let ops = text_ops(&surface);
        assert_eq!(ops[0], ("ab".to_string(), 102.0, 12.0));
        // After %N the pen returns to the panel's left edge one line down.
        assert_eq!(ops[1], ("cd".to_string(), 100.0, 24.0));
    }

    #[test]
    fn test_overflow_wraps_exactly_at_threshold() {
        // Pen starts at 102, 5px per column, right edge at 180. A
        // 13-column run lands the pen at 167: 167 + 10 <= 180 keeps the
        // line, so the following run draws beside it.
        let mut surface = OffscreenSurface::new();
        draw_desc(
            &mut surface,
            &settings(),
            "abcdefghijklm%Bz",
            240,
            Color::WHITE,
            Color::BLACK,
            Color::BLACK,
        );
        let ops = text_ops(&surface);
        assert_eq!(ops[1], ("z".to_string(), 167.0, 12.0));

        // One more column lands the pen at 172: 172 + 10 > 180 wraps, and
        // the following run starts the next line.
        surface.clear();
        draw_desc(
            &mut surface,
            &settings(),
            "abcdefghijklmx%Bz",
            240,
            Color::WHITE,
            Color::BLACK,
            Color::BLACK,
        );
        let ops = text_ops(&surface);
        assert_eq!(ops[1], ("z".to_string(), 100.0, 24.0));
    }

    #[test]
    fn test_budget_cuts_run_and_tail_flows_to_next_line() {
        // Sixteen columns exceed the 78px budget of the first line; the
        // run cuts at fifteen and the remainder flows below.
        let mut surface = OffscreenSurface::new();
        draw_desc(
            &mut surface,
            &settings(),
            "abcdefghijklmxyZ",
            240,
            Color::WHITE,
            Color::BLACK,
            Color::BLACK,
        );
        let ops = text_ops(&surface);
        assert_eq!(ops[0], ("abcdefghijklmxy".to_string(), 102.0, 12.0));
        assert_eq!(ops[1], ("Z".to_string(), 100.0, 24.0));
    }

    #[test]
    fn test_image_pushes_baseline_below() {
        let (_dir, path) = {
            use std::io::Write;
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("tall.png");
            let mut file = std::fs::File::create(&path).unwrap();
            file.write_all(&[0x89, b'P', b'N', b'G']).unwrap();
            (dir, path)
        };
        let mut surface = OffscreenSurface::new();
        surface.register_image(&path, ImageFormat::new(40, 48));

        let content = format!("A %I{}% tail", path.display());
        draw_desc(
            &mut surface,
            &settings(),
            &content,
            240,
            Color::WHITE,
            Color::BLACK,
            Color::BLACK,
        );

        let image_op = surface
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::Image { x, y, size, .. } => Some((*x, *y, *size)),
                _ => None,
            })
            .unwrap();
        // Image drawn at the top of the panel, beside the leading text.
        assert_eq!(image_op.1, 0.0);
        assert_eq!(image_op.2, ImageFormat::new(40, 48));

        let ops = text_ops(&surface);
        // "A " at the initial baseline, the tail below the image.
        assert_eq!(ops[0].2, 12.0);
        let tail = &ops[1];
        assert_eq!(tail.2, 48.0);
    }

    #[test]
    fn test_missing_image_advances_zero() {
        let mut surface = OffscreenSurface::new();
        draw_desc(
            &mut surface,
            &settings(),
            "a%I/nope/missing.png%b",
            240,
            Color::WHITE,
            Color::BLACK,
            Color::BLACK,
        );
        let ops = text_ops(&surface);
        assert_eq!(ops.len(), 2);
        // The next run renders immediately adjacent, no gap.
        assert_eq!(ops[1].1, ops[0].1 + 5.0);
        assert_eq!(ops[1].2, ops[0].2);
    }

    #[test]
    fn test_rule_draws_inset_line() {
        let mut surface = OffscreenSurface::new();
        draw_desc(
            &mut surface,
            &settings(),
            "%L",
            120,
            Color::WHITE,
            Color::BLACK,
            Color::new(0.5, 0.5, 0.5),
        );
        let line = surface
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::StrokeLine { from, to, color } => Some((*from, *to, *color)),
                _ => None,
            })
            .unwrap();
        assert_eq!(line.0, (104.0, 18.0));
        assert_eq!(line.1, (176.0, 18.0));
        assert_eq!(line.2, Color::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_centered_run() {
        let mut surface = OffscreenSurface::new();
        draw_desc(
            &mut surface,
            &settings(),
            "%Cab",
            120,
            Color::WHITE,
            Color::BLACK,
            Color::BLACK,
        );
        let ops = text_ops(&surface);
        // Advance 10 inside an 80px panel: pen moves (80-10)/2 = 35 right.
        assert_eq!(ops[0].1, 102.0 + 35.0);
    }
}
