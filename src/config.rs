use log::Level;

pub const CONTACT_EMAIL: &str = "hello@kineticclips.com";

/// Scroll depth (px) after which the header switches to its solid background.
pub const SCROLLED_THRESHOLD_PX: f64 = 8.0;

/// Scroll depth (px) after which the back-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 800.0;

// Scrollspy band: the viewport shrunk by these fractions from the top and bottom.
pub const SPY_TOP_INSET: f64 = 0.40;
pub const SPY_BOTTOM_INSET: f64 = 0.55;
pub const SPY_THRESHOLD: f64 = 0.01;

/// Degrees per unit of normalized pointer offset from a tilt card's center.
pub const TILT_FACTOR_DEG: f64 = 6.0;
pub const TILT_PERSPECTIVE_PX: u32 = 800;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_leaves_room_in_the_viewport() {
        assert!(SPY_TOP_INSET + SPY_BOTTOM_INSET < 1.0);
    }
}
