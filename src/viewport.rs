//! Highlight-tracking scroll window over the result list.
//!
//! The viewport is a plain value: the compositor feeds the previous state
//! plus the current result count through [`Viewport::scrolled`] and stores
//! what comes back. The policy is greedy minimal scroll — the offset moves
//! just far enough to keep the highlight visible, never to center it.

/// Scroll state of the result list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Number of items in the current result set.
    pub result_count: u32,
    /// Index of the highlighted item.
    pub highlight: u32,
    /// Index of the first visible item.
    pub offset: u32,
}

impl Viewport {
    /// Recompute the window after the result set or highlight changed.
    ///
    /// Returns the new state and the number of rows to display, which never
    /// exceeds `max_visible`. Afterwards
    /// `offset <= highlight <= offset + display - 1` holds whenever the
    /// list is non-empty.
    #[must_use]
    pub fn scrolled(mut self, result_count: u32, max_visible: u32) -> (Self, u32) {
        self.result_count = result_count;
        if result_count == 0 {
            self.highlight = 0;
            self.offset = 0;
            return (self, 0);
        }
        if self.highlight > result_count - 1 {
            self.highlight = result_count - 1;
        }

        let mut display = result_count.min(max_visible);

        // A shrunken result set can leave a stale offset behind.
        if result_count <= max_visible {
            self.offset = 0;
        } else if result_count - max_visible < self.offset {
            self.offset = result_count - max_visible;
        }

        if self.offset + display < self.highlight + 1 {
            // Highlight fell below the window: pin it as the last row.
            self.offset = self.highlight + 1 - display;
            display = (result_count - self.offset).min(max_visible);
        } else if self.offset > self.highlight {
            // Highlight rose above the window.
            self.offset = self.highlight;
        }

        (self, display)
    }

    /// Move the highlight by `delta`, clamped to the result set.
    #[must_use]
    pub fn moved(mut self, delta: i32) -> Self {
        let count = self.result_count;
        if count == 0 {
            self.highlight = 0;
            return self;
        }
        let target = i64::from(self.highlight) + i64::from(delta);
        self.highlight = target.clamp(0, i64::from(count - 1)) as u32;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(vp: Viewport, count: u32, max: u32) -> (Viewport, u32) {
        vp.scrolled(count, max)
    }

    #[test]
    fn test_scroll_down_pins_highlight_last() {
        // Five results, three visible, highlight walked 0 -> 4.
        let mut vp = Viewport::default();
        let mut display = 0;
        for _ in 0..4 {
            vp = vp.moved(1);
            (vp, display) = step(vp, 5, 3);
        }
        assert_eq!(vp.highlight, 4);
        assert_eq!(vp.offset, 2);
        assert_eq!(display, 3);
    }

    #[test]
    fn test_small_result_set_never_scrolls() {
        let mut vp = Viewport::default();
        for delta in [1, 1, -1, 1, 1, 1] {
            vp = vp.moved(delta);
            let (next, display) = step(vp, 3, 10);
            vp = next;
            assert_eq!(display, 3);
            assert_eq!(vp.offset, 0);
        }
    }

    #[test]
    fn test_scroll_up_pins_highlight_first() {
        let vp = Viewport {
            result_count: 10,
            highlight: 2,
            offset: 5,
        };
        let (vp, _) = step(vp, 10, 3);
        assert_eq!(vp.offset, 2);
    }

    #[test]
    fn test_shrinking_set_clamps_highlight_and_offset() {
        let vp = Viewport {
            result_count: 50,
            highlight: 40,
            offset: 38,
        };
        let (vp, display) = step(vp, 2, 3);
        assert_eq!(vp.highlight, 1);
        assert_eq!(vp.offset, 0);
        assert_eq!(display, 2);
    }

    #[test]
    fn test_empty_set_draws_nothing() {
        let vp = Viewport {
            result_count: 4,
            highlight: 3,
            offset: 1,
        };
        let (vp, display) = step(vp, 0, 3);
        assert_eq!(display, 0);
        assert_eq!(vp.highlight, 0);
        assert_eq!(vp.offset, 0);
    }

    #[test]
    fn test_jump_far_down_keeps_display_within_max() {
        let vp = Viewport {
            result_count: 10,
            highlight: 5,
            offset: 0,
        };
        let (vp, display) = step(vp, 10, 3);
        assert_eq!(vp.offset, 3);
        assert!(display <= 3);
        assert!(vp.offset <= vp.highlight);
        assert!(vp.highlight < vp.offset + display);
    }

    #[test]
    fn test_moved_clamps_at_both_ends() {
        let vp = Viewport {
            result_count: 3,
            highlight: 0,
            offset: 0,
        };
        assert_eq!(vp.moved(-5).highlight, 0);
        assert_eq!(vp.moved(10).highlight, 2);
    }
}
