//! Scroll-derived header state and the back-to-top gate.

use crate::config::{SCROLLED_THRESHOLD_PX, SCROLL_TOP_THRESHOLD_PX};
use crate::viewport::Viewport;

/// One reading of the page's vertical scroll geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn read(viewport: &impl Viewport) -> Self {
        Self {
            scroll_top: viewport.scroll_top(),
            document_height: viewport.document_height(),
            viewport_height: viewport.viewport_height(),
        }
    }

    /// Distance the page can actually travel.
    pub fn scrollable(&self) -> f64 {
        self.document_height - self.viewport_height
    }

    /// Percentage of the scrollable distance covered, always within `0.0..=100.0`.
    pub fn progress(&self) -> f64 {
        let scrollable = self.scrollable();
        // Pages shorter than the viewport have nowhere to go.
        if scrollable <= 0.0 || !scrollable.is_finite() {
            return 0.0;
        }
        let pct = self.scroll_top / scrollable * 100.0;
        if pct.is_nan() {
            return 0.0;
        }
        pct.clamp(0.0, 100.0)
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll_top > SCROLLED_THRESHOLD_PX
    }

    pub fn shows_scroll_top(&self) -> bool {
        self.scroll_top > SCROLL_TOP_THRESHOLD_PX
    }
}

/// What the sticky header renders from a scroll reading.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeaderScroll {
    pub progress: f64,
    pub scrolled: bool,
}

impl From<ScrollMetrics> for HeaderScroll {
    fn from(metrics: ScrollMetrics) -> Self {
        Self {
            progress: metrics.progress(),
            scrolled: metrics.is_scrolled(),
        }
    }
}
