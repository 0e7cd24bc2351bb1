//! Frame composition and the public drawing surface of the crate.
//!
//! The compositor owns the viewport state and borrows the application's
//! drawing surface and window handle. Redraw requests may arrive from more
//! than one thread (input handling and the query runner), so one mutex
//! serializes everything that touches the surface — including the viewport
//! update and the window resize/reposition calls, which the historical
//! implementation left outside its lock.
//!
//! Nothing in here returns an error: a failed image load or a poisoned lock
//! degrades to a visually incomplete frame, never a crash.

use crate::config::{Settings, Theme};
use crate::layout::desc::draw_desc;
use crate::layout::line::{draw_query_row, draw_row};
use crate::results::ResultItem;
use crate::surface::{DrawSurface, WindowSystem};
use crate::viewport::Viewport;
use std::sync::Mutex;
use tracing::warn;

struct Shared<S, W> {
    surface: S,
    window: W,
    viewport: Viewport,
}

/// Full-frame renderer for the popup.
///
/// All drawing entry points take `&self`; the internal mutex makes each row
/// or panel mutation atomic with respect to concurrent callers.
pub struct Compositor<S: DrawSurface, W: WindowSystem> {
    shared: Mutex<Shared<S, W>>,
    settings: Settings,
    theme: Theme,
}

impl<S: DrawSurface, W: WindowSystem> Compositor<S, W> {
    /// Create a compositor over the application's surface and window.
    pub fn new(
        surface: S,
        window: W,
        settings: Settings,
        theme: Theme,
    ) -> crate::error::Result<Self> {
        settings.validate()?;
        Ok(Self {
            shared: Mutex::new(Shared {
                surface,
                window,
                viewport: Viewport::default(),
            }),
            settings,
            theme,
        })
    }

    /// Current viewport state.
    pub fn viewport(&self) -> Viewport {
        match self.shared.lock() {
            Ok(shared) => shared.viewport,
            Err(_) => Viewport::default(),
        }
    }

    /// Move the highlight by `delta` rows, clamped to the result set. The
    /// window scrolls on the next redraw.
    pub fn move_highlight(&self, delta: i32) {
        if let Ok(mut shared) = self.shared.lock() {
            shared.viewport = shared.viewport.moved(delta);
        }
    }

    /// Jump the highlight to `index` (clamped on the next redraw if the
    /// result set shrank).
    pub fn set_highlight(&self, index: u32) {
        if let Ok(mut shared) = self.shared.lock() {
            shared.viewport.highlight = index;
        }
    }

    /// Draw the query line with its cursor. `cursor` is a byte index into
    /// `text`.
    pub fn draw_query_text(&self, text: &str, cursor: usize) {
        let Ok(mut shared) = self.shared.lock() else {
            warn!("draw mutex poisoned; skipping query redraw");
            return;
        };
        draw_query_row(
            &mut shared.surface,
            &self.settings,
            text,
            cursor,
            0,
            self.theme.query_fg,
            self.theme.query_bg,
        );
        shared.surface.flush();
    }

    /// Draw the visible slice of the result list, the description panel for
    /// the highlighted item, and apply the matching window geometry.
    pub fn draw_result_list(&self, results: &[ResultItem]) {
        let Ok(mut shared) = self.shared.lock() else {
            warn!("draw mutex poisoned; skipping result redraw");
            return;
        };
        let shared = &mut *shared;

        let count = results.len() as u32;
        let (viewport, display) = shared
            .viewport
            .scrolled(count, self.settings.max_visible_rows());
        shared.viewport = viewport;

        let height = self.settings.window_height(count);
        let highlighted = results.get(viewport.highlight as usize);
        let desc = highlighted.and_then(|item| item.desc.as_deref());

        if let Some(desc) = desc {
            if self.settings.auto_center {
                let (x, y) = self.settings.anchor_with_desc;
                shared.window.reposition(x, y);
            }
            let full_width = self.settings.row_width + self.settings.desc_width;
            shared.window.resize(full_width, height);
            shared.surface.set_size(full_width, height);
            draw_desc(
                &mut shared.surface,
                &self.settings,
                desc,
                height,
                self.theme.highlight_fg,
                self.theme.highlight_bg,
                self.theme.result_bg,
            );
        } else {
            if self.settings.auto_center {
                let (x, y) = self.settings.anchor;
                shared.window.reposition(x, y);
            }
            shared.window.resize(self.settings.row_width, height);
            shared.surface.set_size(self.settings.row_width, height);
        }

        for (line, index) in (viewport.offset..viewport.offset + display).enumerate() {
            let item = &results[index as usize];
            let line = line as u32 + 1; // row 0 is the query line
            let (fg, bg) = if item.action.is_none() || index != viewport.highlight {
                (self.theme.result_fg, self.theme.result_bg)
            } else {
                (self.theme.highlight_fg, self.theme.highlight_bg)
            };
            draw_row(&mut shared.surface, &self.settings, &item.text, line, fg, bg);
        }

        shared.surface.flush();
        shared.window.flush();
    }

    /// Redraw the whole frame: query line first, then the result list.
    pub fn redraw_all(&self, text: &str, cursor: usize, results: &[ResultItem]) {
        self.draw_query_text(text, cursor);
        self.draw_result_list(results);
    }

    /// Tear the compositor apart, returning the surface and window to the
    /// application.
    pub fn into_parts(self) -> (S, W) {
        match self.shared.into_inner() {
            Ok(shared) => (shared.surface, shared.window),
            Err(poisoned) => {
                let shared = poisoned.into_inner();
                (shared.surface, shared.window)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offscreen::{OffscreenSurface, RecordingWindow, WindowOp};

    fn compositor() -> Compositor<OffscreenSurface, RecordingWindow> {
        let settings = Settings {
            row_width: 100,
            desc_width: 80,
            row_height: 30,
            max_height: 120, // query + 3 result rows
            font_size: 10.0,
            desc_font_size: 10.0,
            ..Settings::default()
        };
        Compositor::new(
            OffscreenSurface::new(),
            RecordingWindow::new(),
            settings,
            Theme::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let settings = Settings {
            row_height: 0,
            ..Settings::default()
        };
        assert!(
            Compositor::new(
                OffscreenSurface::new(),
                RecordingWindow::new(),
                settings,
                Theme::default(),
            )
            .is_err()
        );
    }

    #[test]
    fn test_result_list_resizes_without_desc() {
        let comp = compositor();
        let results = vec![ResultItem::new("a", "1"), ResultItem::new("b", "2")];
        comp.draw_result_list(&results);
        let (_, window) = comp.into_parts();
        assert_eq!(
            window.ops()[0],
            WindowOp::Resize {
                width: 100,
                height: 90
            }
        );
    }

    #[test]
    fn test_result_list_widens_for_desc() {
        let comp = compositor();
        let results = vec![ResultItem::with_desc("a", "1", "details")];
        comp.draw_result_list(&results);
        let (_, window) = comp.into_parts();
        assert_eq!(
            window.ops()[0],
            WindowOp::Resize {
                width: 180,
                height: 60
            }
        );
    }

    #[test]
    fn test_highlight_scrolls_viewport() {
        let comp = compositor();
        let results: Vec<ResultItem> = (0..5)
            .map(|i| ResultItem::new(format!("item {i}"), "run"))
            .collect();
        for _ in 0..4 {
            comp.move_highlight(1);
            comp.draw_result_list(&results);
        }
        let viewport = comp.viewport();
        assert_eq!(viewport.highlight, 4);
        assert_eq!(viewport.offset, 2);
    }

    #[test]
    fn test_empty_results_draw_no_rows() {
        let comp = compositor();
        comp.draw_result_list(&[]);
        let (surface, _) = comp.into_parts();
        let texts = surface
            .ops()
            .iter()
            .filter(|op| matches!(op, crate::offscreen::DrawOp::Text { .. }))
            .count();
        assert_eq!(texts, 0);
    }
}
