//! Scroll-driven page state: header visibility, background layers, back-to-top
//! button and the active navigation section.

/// Scroll offset at or below which the header is always shown.
pub const TOP_ZONE: f64 = 10.0;
/// Minimum offset before scrolling down hides the header.
pub const HIDE_THRESHOLD: f64 = 10.0;
pub const BACK_TO_TOP_AFTER: f64 = 300.0;
/// Fraction of the viewport after which the rain layers are hidden.
pub const MATRIX_HIDE_FRACTION: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    Visible,
    Hidden,
}

impl HeaderState {
    /// (class to add, class to remove)
    pub fn classes(self) -> (&'static str, &'static str) {
        match self {
            HeaderState::Visible => ("nav-visible", "nav-hidden"),
            HeaderState::Hidden => ("nav-hidden", "nav-visible"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollView {
    pub header: HeaderState,
    pub matrix_hidden: bool,
    pub back_to_top_visible: bool,
}

/// Remembers the previous scroll offset to tell scroll direction.
#[derive(Debug, Default, Clone)]
pub struct ScrollTracker {
    last_scroll: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, scroll: f64, viewport_height: f64) -> ScrollView {
        let header = if scroll <= TOP_ZONE {
            HeaderState::Visible
        } else if scroll > self.last_scroll && scroll > HIDE_THRESHOLD {
            HeaderState::Hidden
        } else {
            HeaderState::Visible
        };
        self.last_scroll = scroll;
        ScrollView {
            header,
            matrix_hidden: scroll > viewport_height * MATRIX_HIDE_FRACTION,
            back_to_top_visible: scroll > BACK_TO_TOP_AFTER,
        }
    }
}

/// A section's id and its bounding box relative to the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

/// Section overlaps the middle band (30%..70%) of the viewport.
pub fn in_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top <= viewport_height * 0.7 && bottom >= viewport_height * 0.3
}

/// Id of the section whose nav link should be active: the last one in view.
pub fn active_section(sections: &[SectionBox], viewport_height: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| in_view(s.top, s.bottom, viewport_height))
        .map(|s| s.id.as_str())
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_hides_on_scroll_down_and_shows_on_scroll_up() {
        let mut t = ScrollTracker::new();
        assert_eq!(t.update(0.0, 800.0).header, HeaderState::Visible);
        assert_eq!(t.update(120.0, 800.0).header, HeaderState::Hidden);
        assert_eq!(t.update(60.0, 800.0).header, HeaderState::Visible);
        assert_eq!(t.update(5.0, 800.0).header, HeaderState::Visible);
    }

    #[test]
    fn thresholds_for_layers_and_button() {
        let mut t = ScrollTracker::new();
        let v = t.update(300.0, 800.0);
        assert!(!v.back_to_top_visible);
        assert!(!v.matrix_hidden);
        let v = t.update(641.0, 800.0);
        assert!(v.back_to_top_visible);
        assert!(v.matrix_hidden);
    }

    #[test]
    fn last_section_in_band_wins() {
        let sections = vec![
            SectionBox { id: "intro".into(), top: -900.0, bottom: -100.0 },
            SectionBox { id: "about".into(), top: -200.0, bottom: 400.0 },
            SectionBox { id: "services".into(), top: 500.0, bottom: 1200.0 },
            SectionBox { id: "team".into(), top: 1300.0, bottom: 2000.0 },
        ];
        assert_eq!(active_section(&sections, 800.0), Some("services"));
        assert_eq!(active_section(&sections[..1], 800.0), None);
    }
}
