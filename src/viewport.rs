use web_sys::{window, Element, ScrollBehavior, ScrollToOptions, Window};

/// Read-only view of the browser viewport. Everything that reacts to scrolling
/// goes through this so the math can run against fixed numbers in tests.
pub trait Viewport {
    fn scroll_top(&self) -> f64;
    fn document_height(&self) -> f64;
    fn viewport_height(&self) -> f64;
}

pub struct BrowserViewport {
    window: Window,
    root: Element,
}

impl BrowserViewport {
    /// `None` until both the window and the document element exist.
    pub fn current() -> Option<Self> {
        let window = window()?;
        let root = window.document()?.document_element()?;
        Some(Self { window, root })
    }
}

impl Viewport for BrowserViewport {
    fn scroll_top(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn document_height(&self) -> f64 {
        self.root.scroll_height() as f64
    }

    fn viewport_height(&self) -> f64 {
        self.root.client_height() as f64
    }
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedViewport {
    pub scroll_top: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

#[cfg(test)]
impl Viewport for FixedViewport {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }
}
