//! Which page section the navigation should highlight.
//!
//! A section counts as "in view" while it overlaps a narrow horizontal band of
//! the viewport (40% down from the top to 55% up from the bottom). The browser
//! reports overlap ratios through `IntersectionObserver`; [`Scrollspy`] keeps
//! the latest ratio per section and resolves the active one deterministically:
//! the largest ratio wins, and on equal ratios the section that comes first in
//! the document does.

use crate::config::{SPY_BOTTOM_INSET, SPY_THRESHOLD, SPY_TOP_INSET};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpyBand {
    pub top_inset: f64,
    pub bottom_inset: f64,
    pub threshold: f64,
}

impl Default for SpyBand {
    fn default() -> Self {
        Self {
            top_inset: SPY_TOP_INSET,
            bottom_inset: SPY_BOTTOM_INSET,
            threshold: SPY_THRESHOLD,
        }
    }
}

impl SpyBand {
    /// `rootMargin` that shrinks the observer's viewport to the band.
    pub fn root_margin(&self) -> String {
        format!(
            "-{}% 0px -{}% 0px",
            (self.top_inset * 100.0).round(),
            (self.bottom_inset * 100.0).round()
        )
    }

    /// Ratios at which the observer reports. A section's overlap with the band
    /// is a few percent of its height at most, so the low end is stepped
    /// finely; the stored ratio then stays within one step of the live overlap.
    pub fn thresholds(&self) -> Vec<f64> {
        let mut steps = vec![self.threshold];
        steps.extend(
            (4..=40)
                .map(|i| i as f64 / 400.0)
                .chain((3..=20).map(|i| i as f64 / 20.0))
                .filter(|t| *t > self.threshold),
        );
        steps
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scrollspy {
    // Kept in document order; index doubles as the tie-break rank.
    sections: Vec<(String, f64)>,
    threshold: f64,
}

impl Scrollspy {
    pub fn new<I, S>(ids: I, threshold: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: ids.into_iter().map(|id| (id.into(), 0.0)).collect(),
            threshold,
        }
    }

    /// Store the newest ratio reported for `id`. Unknown ids are ignored and
    /// reported back as `false`.
    pub fn record(&mut self, id: &str, ratio: f64) -> bool {
        match self.sections.iter_mut().find(|(section, _)| section == id) {
            Some((_, stored)) => {
                *stored = if ratio.is_finite() { ratio } else { 0.0 };
                true
            }
            None => false,
        }
    }

    pub fn active(&self) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (id, ratio) in &self.sections {
            if *ratio <= self.threshold {
                continue;
            }
            // Strictly greater keeps the earlier section on ties.
            if best.map_or(true, |(_, top)| *ratio > top) {
                best = Some((id.as_str(), *ratio));
            }
        }
        best.map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDS: [&str; 5] = ["services", "work", "pricing", "faq", "contact"];
    const VIEWPORT: f64 = 1000.0;

    fn spy() -> Scrollspy {
        Scrollspy::new(IDS, SPY_THRESHOLD)
    }

    // Same overlap math the browser does, for concrete layouts.
    impl SpyBand {
        fn bounds(&self, viewport_height: f64) -> (f64, f64) {
            (
                viewport_height * self.top_inset,
                viewport_height * (1.0 - self.bottom_inset),
            )
        }

        /// `section_top` is relative to the top of the viewport.
        fn intersection_ratio(
            &self,
            viewport_height: f64,
            section_top: f64,
            section_height: f64,
        ) -> f64 {
            if section_height <= 0.0 {
                return 0.0;
            }
            let (band_top, band_bottom) = self.bounds(viewport_height);
            let overlap = (section_top + section_height).min(band_bottom) - section_top.max(band_top);
            (overlap.max(0.0) / section_height).min(1.0)
        }
    }

    /// Feeds ratios to a spy the way an observer does: only when a section
    /// crosses one of the thresholds or starts/stops intersecting.
    struct Observed {
        thresholds: Vec<f64>,
        last: Vec<Option<(usize, bool)>>,
    }

    impl Observed {
        fn new(band: &SpyBand, sections: usize) -> Self {
            Self {
                thresholds: band.thresholds(),
                last: vec![None; sections],
            }
        }

        fn report(&mut self, spy: &mut Scrollspy, index: usize, id: &str, ratio: f64) {
            let crossed = self.thresholds.iter().filter(|t| ratio >= **t).count();
            let state = Some((crossed, ratio > 0.0));
            if self.last[index] != state {
                self.last[index] = state;
                spy.record(id, ratio);
            }
        }
    }

    #[test]
    fn band_bounds() {
        let (top, bottom) = SpyBand::default().bounds(VIEWPORT);
        assert!((top - 400.0).abs() < 1e-9);
        assert!((bottom - 450.0).abs() < 1e-9);
    }

    #[test]
    fn ratio_of_section_outside_band_is_zero() {
        let band = SpyBand::default();
        assert_eq!(band.intersection_ratio(VIEWPORT, 500.0, 600.0), 0.0);
        assert_eq!(band.intersection_ratio(VIEWPORT, -900.0, 600.0), 0.0);
        assert_eq!(band.intersection_ratio(VIEWPORT, 100.0, 0.0), 0.0);
    }

    #[test]
    fn ratio_of_section_covering_band() {
        let band = SpyBand::default();
        // 50px of band over a 500px section.
        let ratio = band.intersection_ratio(VIEWPORT, 200.0, 500.0);
        assert!((ratio - 0.1).abs() < 1e-9);
    }

    #[test]
    fn root_margin_matches_band_insets() {
        assert_eq!(SpyBand::default().root_margin(), "-40% 0px -55% 0px");
    }

    #[test]
    fn thresholds_start_at_the_candidate_cutoff_and_ascend() {
        let steps = SpyBand::default().thresholds();
        assert_eq!(steps[0], SPY_THRESHOLD);
        assert_eq!(*steps.last().unwrap(), 1.0);
        assert!(steps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn active_follows_geometry_when_fed_only_at_crossings() {
        let band = SpyBand::default();
        let (_, band_bottom) = band.bounds(VIEWPORT);
        let mut spy = spy();
        let mut observed = Observed::new(&band, 2);

        // Work sits directly above pricing, 800px each. Scrolling down moves
        // their shared edge up through the band one pixel at a time.
        for step in 1..50 {
            let edge = band_bottom - step as f64;
            let work = band.intersection_ratio(VIEWPORT, edge - 800.0, 800.0);
            let pricing = band.intersection_ratio(VIEWPORT, edge, 800.0);
            observed.report(&mut spy, 0, "work", work);
            observed.report(&mut spy, 1, "pricing", pricing);

            // Reported ratios lag by under one step, so only a clear lead is decisive.
            if (work - pricing).abs() > 0.005 {
                let expected = if work > pricing { "work" } else { "pricing" };
                assert_eq!(spy.active(), Some(expected), "edge at {edge}");
            }
            if step == 40 {
                // work 0.0125, pricing 0.05
                assert_eq!(spy.active(), Some("pricing"));
            }
        }
    }

    #[test]
    fn pricing_alone_in_band_is_active() {
        let band = SpyBand::default();
        // Stack of sections, 800px each, scrolled so pricing straddles the band.
        let tops = [-1400.0, -600.0, 200.0, 1000.0, 1800.0];
        let mut spy = spy();
        for (id, top) in IDS.iter().zip(tops) {
            spy.record(id, band.intersection_ratio(VIEWPORT, top, 800.0));
        }
        assert_eq!(spy.active(), Some("pricing"));
    }

    #[test]
    fn nothing_in_band_means_no_active_section() {
        let mut spy = spy();
        assert_eq!(spy.active(), None);
        spy.record("work", 0.2);
        spy.record("work", 0.0);
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn below_threshold_is_ignored() {
        let mut spy = spy();
        spy.record("faq", 0.005);
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn largest_ratio_wins_regardless_of_report_order() {
        let mut a = spy();
        a.record("work", 0.03);
        a.record("pricing", 0.05);

        let mut b = spy();
        b.record("pricing", 0.05);
        b.record("work", 0.03);

        assert_eq!(a.active(), Some("pricing"));
        assert_eq!(b.active(), Some("pricing"));
    }

    #[test]
    fn ties_go_to_the_topmost_section() {
        let mut spy = spy();
        spy.record("faq", 0.04);
        spy.record("work", 0.04);
        assert_eq!(spy.active(), Some("work"));
    }

    #[test]
    fn unknown_sections_are_skipped() {
        let mut spy = spy();
        assert!(!spy.record("team", 0.9));
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn nan_ratio_does_not_win() {
        let mut spy = spy();
        spy.record("contact", f64::NAN);
        spy.record("services", 0.02);
        assert_eq!(spy.active(), Some("services"));
    }
}
