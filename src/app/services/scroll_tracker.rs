//! Active-section tracking and programmatic scrolling.
//!
//! The active section is recomputed from absolute positions on every scroll
//! signal, never incrementally, so repeated or coalesced signals are harmless.

use crate::app::domain::sections::SectionDescriptor;

/// A section is "being read" once its top edge reaches this line (viewport px).
pub const DEFAULT_ACTIVE_THRESHOLD: i32 = 100;

/// Height reserved for the fixed navigation bar when jumping to a section.
pub const DEFAULT_NAV_OFFSET: i32 = 80;

/// Scroll distance after which the navigation bar switches to its raised style.
pub const SCROLLED_THRESHOLD: i32 = 50;

/// The viewport the tracker reads positions from and scrolls.
pub trait Viewport {
    /// Top edge of the section relative to the top of the viewport, or `None`
    /// when the section has no mounted element.
    fn section_top(&self, id: &str) -> Option<i32>;

    /// Current vertical scroll offset of the document.
    fn scroll_position(&self) -> i32;

    /// Request a scroll to an absolute document offset. A new request
    /// replaces any animation still running.
    fn scroll_to(&mut self, y: i32, animated: bool);

    /// Absolute document offset of the section's top edge.
    fn document_top(&self, id: &str) -> Option<i32> {
        self.section_top(id).map(|top| top + self.scroll_position())
    }
}

pub fn is_scrolled(scroll_position: i32) -> bool {
    scroll_position > SCROLLED_THRESHOLD
}

type ActiveListener = Box<dyn FnMut(&str)>;

pub struct ScrollSectionTracker {
    sections: Vec<SectionDescriptor>,
    active_id: String,
    threshold: i32,
    listeners: Vec<ActiveListener>,
}

impl ScrollSectionTracker {
    /// Start with the first section active. With no sections the active id is empty.
    pub fn new(sections: Vec<SectionDescriptor>) -> Self {
        let active_id = sections.first().map(|s| s.id.clone()).unwrap_or_default();
        Self {
            sections,
            active_id,
            threshold: DEFAULT_ACTIVE_THRESHOLD,
            listeners: Vec::new(),
        }
    }

    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    pub fn active_index(&self) -> Option<usize> {
        self.sections.iter().position(|s| s.id == self.active_id)
    }

    /// Register an observer fired whenever the active id changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Pick the lowest section whose top edge has reached the threshold.
    ///
    /// Sections are scanned last to first; unmounted ones are skipped. When
    /// no section qualifies (scrolled above all of them) the previous active
    /// id is kept.
    pub fn recompute_active(&mut self, viewport: &dyn Viewport) -> &str {
        let found = self
            .sections
            .iter()
            .rev()
            .find(|section| {
                viewport
                    .section_top(&section.id)
                    .is_some_and(|top| top <= self.threshold)
            })
            .map(|section| section.id.clone());

        if let Some(id) = found
            && id != self.active_id
        {
            log::debug!("Active section: {} -> {}", self.active_id, id);
            self.active_id = id;
            for listener in &mut self.listeners {
                listener(&self.active_id);
            }
        }

        &self.active_id
    }

    /// Smooth-scroll so the section's top edge sits just below the fixed
    /// navigation bar. Unknown or unmounted ids are ignored.
    pub fn navigate_to(&self, id: &str, viewport: &mut dyn Viewport, fixed_offset: i32) {
        let Some(top) = viewport.document_top(id) else {
            log::debug!("navigate_to: no mounted section '{}'", id);
            return;
        };
        let target = (top - fixed_offset).max(0);
        viewport.scroll_to(target, true);
    }

    pub fn first_id(&self) -> Option<&str> {
        self.sections.first().map(|s| s.id.as_str())
    }

    pub fn last_id(&self) -> Option<&str> {
        self.sections.last().map(|s| s.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Sections stacked at fixed absolute offsets.
    struct FakeViewport {
        tops: HashMap<String, i32>,
        scroll: i32,
        requests: Vec<(i32, bool)>,
    }

    impl FakeViewport {
        fn new(tops: &[(&str, i32)]) -> Self {
            Self {
                tops: tops.iter().map(|(id, y)| (id.to_string(), *y)).collect(),
                scroll: 0,
                requests: Vec::new(),
            }
        }
    }

    impl Viewport for FakeViewport {
        fn section_top(&self, id: &str) -> Option<i32> {
            self.tops.get(id).map(|abs| abs - self.scroll)
        }

        fn scroll_position(&self) -> i32 {
            self.scroll
        }

        fn scroll_to(&mut self, y: i32, animated: bool) {
            self.requests.push((y, animated));
        }
    }

    fn abc() -> Vec<SectionDescriptor> {
        vec![
            SectionDescriptor::new("a", "A"),
            SectionDescriptor::new("b", "B"),
            SectionDescriptor::new("c", "C"),
        ]
    }

    #[test]
    fn test_initial_active_is_first_section() {
        let tracker = ScrollSectionTracker::new(abc());
        assert_eq!(tracker.active_id(), "a");
        assert_eq!(tracker.active_index(), Some(0));
    }

    #[test]
    fn test_empty_sections_have_empty_active_id() {
        let mut tracker = ScrollSectionTracker::new(Vec::new());
        let vp = FakeViewport::new(&[]);
        assert_eq!(tracker.recompute_active(&vp), "");
        assert_eq!(tracker.first_id(), None);
    }

    #[test]
    fn test_active_section_follows_scroll() {
        let mut tracker = ScrollSectionTracker::new(abc());
        // A at 50 so it is above the threshold from the start
        let mut vp = FakeViewport::new(&[("a", 50), ("b", 800), ("c", 1600)]);

        assert_eq!(tracker.recompute_active(&vp), "a");

        vp.scroll = 699; // B top = 101, still below threshold
        assert_eq!(tracker.recompute_active(&vp), "a");

        vp.scroll = 700; // B top = 100, exactly on threshold
        assert_eq!(tracker.recompute_active(&vp), "b");

        vp.scroll = 1500; // C top = 100
        assert_eq!(tracker.recompute_active(&vp), "c");

        vp.scroll = 900; // back inside B
        assert_eq!(tracker.recompute_active(&vp), "b");
    }

    #[test]
    fn test_above_all_sections_keeps_previous_id() {
        let mut tracker = ScrollSectionTracker::new(abc());
        let mut vp = FakeViewport::new(&[("a", 400), ("b", 1200), ("c", 2000)]);

        vp.scroll = 1900;
        assert_eq!(tracker.recompute_active(&vp), "c");

        vp.scroll = 0; // every top edge is below the threshold
        assert_eq!(tracker.recompute_active(&vp), "c");
    }

    #[test]
    fn test_unmounted_sections_are_skipped() {
        let mut tracker = ScrollSectionTracker::new(abc());
        // "c" has no element
        let mut vp = FakeViewport::new(&[("a", 0), ("b", 500)]);
        vp.scroll = 5000;
        assert_eq!(tracker.recompute_active(&vp), "b");
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut tracker = ScrollSectionTracker::new(abc());
        let mut vp = FakeViewport::new(&[("a", 0), ("b", 500), ("c", 1000)]);
        vp.scroll = 450;
        let first = tracker.recompute_active(&vp).to_string();
        let second = tracker.recompute_active(&vp).to_string();
        assert_eq!(first, second);
        assert_eq!(first, "b");
    }

    #[test]
    fn test_custom_threshold() {
        let mut tracker = ScrollSectionTracker::new(abc()).with_threshold(0);
        let mut vp = FakeViewport::new(&[("a", 0), ("b", 500), ("c", 1000)]);
        vp.scroll = 450; // B top = 50 > 0
        assert_eq!(tracker.recompute_active(&vp), "a");
    }

    #[test]
    fn test_listeners_fire_only_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut tracker = ScrollSectionTracker::new(abc());
        let sink = seen.clone();
        tracker.subscribe(move |id| sink.borrow_mut().push(id.to_string()));

        let mut vp = FakeViewport::new(&[("a", 0), ("b", 500), ("c", 1000)]);
        tracker.recompute_active(&vp);
        vp.scroll = 450;
        tracker.recompute_active(&vp);
        tracker.recompute_active(&vp);
        vp.scroll = 950;
        tracker.recompute_active(&vp);

        assert_eq!(*seen.borrow(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_navigate_subtracts_fixed_offset() {
        let tracker = ScrollSectionTracker::new(abc());
        let mut vp = FakeViewport::new(&[("a", 0), ("b", 500), ("c", 1000)]);
        vp.scroll = 230; // result must not depend on the current position
        tracker.navigate_to("b", &mut vp, DEFAULT_NAV_OFFSET);
        assert_eq!(vp.requests, vec![(420, true)]);
    }

    #[test]
    fn test_navigate_clamps_at_document_top() {
        let tracker = ScrollSectionTracker::new(abc());
        let mut vp = FakeViewport::new(&[("a", 0), ("b", 500), ("c", 1000)]);
        tracker.navigate_to("a", &mut vp, 80);
        assert_eq!(vp.requests, vec![(0, true)]);
    }

    #[test]
    fn test_navigate_to_missing_section_is_noop() {
        let tracker = ScrollSectionTracker::new(abc());
        let mut vp = FakeViewport::new(&[("a", 0), ("b", 500)]);
        tracker.navigate_to("nonexistent", &mut vp, 80);
        tracker.navigate_to("c", &mut vp, 80);
        assert!(vp.requests.is_empty());
    }

    #[test]
    fn test_is_scrolled() {
        assert!(!is_scrolled(0));
        assert!(!is_scrolled(50));
        assert!(is_scrolled(51));
    }
}
