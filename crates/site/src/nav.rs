// File: crates/site/src/nav.rs
// Summary: Navigation bar state. Each event is applied synchronously; nothing else mutates it.

/// Scroll distance (px) past which the bar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;
/// Height reserved for the fixed bar when jumping to a section.
pub const HEADER_OFFSET: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Context,
    Trends,
    Methods,
    Impact,
    Authors,
}

impl Section {
    pub const ALL: [Section; 5] = [Section::Context, Section::Trends, Section::Methods, Section::Impact, Section::Authors];

    /// Anchor id in the page.
    pub fn id(self) -> &'static str {
        match self {
            Section::Context => "context",
            Section::Trends => "trends",
            Section::Methods => "methods",
            Section::Impact => "impact",
            Section::Authors => "authors",
        }
    }

    /// Nav bar label; authors has no entry in the bar.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Section::Context => Some("The Region"),
            Section::Trends => Some("Precipitation Trends"),
            Section::Methods => Some("Methodology"),
            Section::Impact => Some("Impact"),
            Section::Authors => None,
        }
    }

    pub fn from_id(id: &str) -> Option<Section> { Section::ALL.into_iter().find(|s| s.id() == id) }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavEvent {
    Scrolled(f64),
    ToggleMenu,
    /// `element_top` is relative to the viewport, `page_offset` the current scroll position.
    Navigate { section: Section, element_top: f64, page_offset: f64 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Returns the absolute scroll target for `Navigate`, `None` otherwise.
    pub fn apply(&mut self, event: NavEvent) -> Option<f64> {
        match event {
            NavEvent::Scrolled(y) => {
                self.scrolled = y > SCROLL_THRESHOLD;
                None
            }
            NavEvent::ToggleMenu => {
                self.menu_open = !self.menu_open;
                None
            }
            NavEvent::Navigate { section, element_top, page_offset } => {
                self.menu_open = false;
                let target = element_top + page_offset - HEADER_OFFSET;
                tracing::trace!(section = section.id(), target, "navigate");
                Some(target)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_threshold_is_strict() {
        let mut s = NavState::default();
        s.apply(NavEvent::Scrolled(50.0));
        assert!(!s.scrolled);
        s.apply(NavEvent::Scrolled(50.5));
        assert!(s.scrolled);
        s.apply(NavEvent::Scrolled(0.0));
        assert!(!s.scrolled);
    }

    #[test]
    fn navigate_closes_menu_and_offsets_header() {
        let mut s = NavState::default();
        s.apply(NavEvent::ToggleMenu);
        assert!(s.menu_open);
        let target = s.apply(NavEvent::Navigate { section: Section::Trends, element_top: 640.0, page_offset: 200.0 });
        assert_eq!(target, Some(740.0));
        assert!(!s.menu_open);
        assert!(!s.scrolled, "navigation does not touch scroll styling");
    }

    #[test]
    fn section_ids_round_trip() {
        for s in Section::ALL {
            assert_eq!(Section::from_id(s.id()), Some(s));
        }
        assert_eq!(Section::from_id("nowhere"), None);
        assert_eq!(Section::ALL.iter().filter_map(|s| s.label()).count(), 4);
    }
}
