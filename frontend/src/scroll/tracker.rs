use std::rc::Rc;

use yew::Reducible;

use super::host::ScrollSignal;
use super::section::{NavEntry, Section, SectionId};
use crate::config::SCROLL_LOOKAHEAD_PX;

#[derive(Clone, Debug, PartialEq)]
pub enum TrackerAction {
    Intersected { id: SectionId, is_intersecting: bool },
    Scrolled { offset: f64 },
}

#[derive(Clone, Debug)]
struct Tracked {
    section: Section,
    /// Latched once the section has been on screen.
    visible: bool,
}

/// Which section is highlighted in the nav bar and which ones have already
/// faded in.
///
/// Sections keep their registration order. The first one starts active, and
/// an empty registry cannot be built.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    entries: Vec<Tracked>,
    active: usize,
    lookahead: f64,
}

impl ScrollTracker {
    pub fn register_sections(first: Section, rest: impl IntoIterator<Item = Section>) -> Self {
        let mut entries = vec![Tracked {
            section: first,
            visible: false,
        }];
        for section in rest {
            if entries.iter().any(|e| e.section.id() == section.id()) {
                log::warn!("Ignoring duplicate section id {}", section.id());
                continue;
            }
            entries.push(Tracked {
                section,
                visible: false,
            });
        }
        Self {
            entries,
            active: 0,
            lookahead: SCROLL_LOOKAHEAD_PX,
        }
    }

    pub fn with_lookahead(mut self, lookahead: f64) -> Self {
        self.lookahead = lookahead;
        self
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.section.id() == id)
    }

    /// Latches the fade-in flag. Leaving the viewport never clears it.
    ///
    /// Returns `true` if the flag changed.
    pub fn on_viewport_intersect(&mut self, id: &str, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.index_of(id) {
            Some(index) if !self.entries[index].visible => {
                self.entries[index].visible = true;
                true
            }
            Some(_) => false,
            None => {
                log::debug!("Intersection reported for unknown section {}", id);
                false
            }
        }
    }

    /// Recomputes the active section for the given scroll offset.
    ///
    /// When ranges overlap the last matching section wins. When nothing
    /// matches the current section stays active. Returns `true` if the active
    /// section changed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let position = offset + self.lookahead;
        let hit = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.section.extent().map_or(false, |x| x.contains(position)))
            .map(|(index, _)| index)
            .last();

        match hit {
            Some(index) if index != self.active => {
                self.active = index;
                log::debug!("Active section is now {}", self.active_section());
                true
            }
            _ => false,
        }
    }

    /// Smooth-scrolls so the section's top meets the top of the viewport.
    ///
    /// Unknown ids and regions that are not mounted yet are ignored.
    pub fn scroll_to_section<S>(&self, id: &str, scroll: &S)
    where
        S: ScrollSignal + ?Sized,
    {
        let Some(index) = self.index_of(id) else {
            return;
        };
        if let Some(extent) = self.entries[index].section.extent() {
            scroll.smooth_scroll_to(extent.top);
        }
    }

    pub fn active_section(&self) -> &SectionId {
        self.entries[self.active].section.id()
    }

    /// `false` for ids that were never registered.
    pub fn is_visible(&self, id: &str) -> bool {
        self.index_of(id).map_or(false, |index| self.entries[index].visible)
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.entries.iter().map(|e| &e.section)
    }

    /// Labelled sections in page order. Unlabelled ones get no nav button.
    pub fn nav_entries(&self) -> Vec<NavEntry> {
        self.sections()
            .filter_map(|section| {
                section.label().map(|label| NavEntry {
                    id: section.id().clone(),
                    label,
                })
            })
            .collect()
    }
}

impl Reducible for ScrollTracker {
    type Action = TrackerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            TrackerAction::Intersected {
                id,
                is_intersecting,
            } => next.on_viewport_intersect(id.as_str(), is_intersecting),
            TrackerAction::Scrolled { offset } => next.on_scroll(offset),
        };
        // Same Rc means no re-render for scroll ticks inside one section.
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::testing::{FakeRegion, RecordingScroll};

    const IDS: [&str; 4] = ["section1", "section2", "section3", "section4"];

    /// Four stacked 800px sections; section 4 stays unmounted unless asked.
    fn page(mount_last: bool) -> (ScrollTracker, Vec<FakeRegion>) {
        let regions: Vec<FakeRegion> = (0..4)
            .map(|i| {
                if i == 3 && !mount_last {
                    FakeRegion::unmounted()
                } else {
                    FakeRegion::at(i as f64 * 800.0, 800.0)
                }
            })
            .collect();
        let tracker = ScrollTracker::register_sections(
            Section::new(IDS[0], regions[0].clone()).with_label("Home"),
            vec![
                Section::new(IDS[1], regions[1].clone()).with_label("About Us"),
                Section::new(IDS[2], regions[2].clone()).with_label("Setting Up"),
                Section::new(IDS[3], regions[3].clone()),
            ],
        );
        (tracker, regions)
    }

    #[test]
    fn starts_on_first_section_with_nothing_visible() {
        let (tracker, _) = page(true);
        assert_eq!(tracker.active_section(), &"section1");
        for id in IDS {
            assert!(!tracker.is_visible(id), "{id} should start hidden");
        }
        assert_eq!(tracker.sections().count(), 4);
    }

    #[test]
    fn scrolling_into_a_section_activates_it_and_back_again() {
        let (mut tracker, _) = page(true);

        // 750 + 100 lands inside section2's [800, 1600).
        assert!(tracker.on_scroll(750.0));
        assert_eq!(tracker.active_section(), &"section2");

        assert!(tracker.on_scroll(0.0));
        assert_eq!(tracker.active_section(), &"section1");
    }

    #[test]
    fn lookahead_moves_the_boundary() {
        let (mut tracker, _) = page(true);
        assert!(!tracker.on_scroll(699.0));
        assert_eq!(tracker.active_section(), &"section1");
        assert!(tracker.on_scroll(700.0));
        assert_eq!(tracker.active_section(), &"section2");
    }

    #[test]
    fn custom_lookahead_is_applied() {
        let (tracker, _) = page(true);
        let mut tracker = tracker.with_lookahead(0.0);
        tracker.on_scroll(750.0);
        assert_eq!(tracker.active_section(), &"section1");
        tracker.on_scroll(800.0);
        assert_eq!(tracker.active_section(), &"section2");
    }

    #[test]
    fn scrolling_within_a_section_reports_no_change() {
        let (mut tracker, _) = page(true);
        tracker.on_scroll(900.0);
        assert!(!tracker.on_scroll(1000.0));
        assert_eq!(tracker.active_section(), &"section2");
    }

    #[test]
    fn position_outside_every_section_keeps_current() {
        let (mut tracker, _) = page(true);
        tracker.on_scroll(1700.0);
        assert_eq!(tracker.active_section(), &"section3");
        assert!(!tracker.on_scroll(10_000.0));
        assert_eq!(tracker.active_section(), &"section3");
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        let (mut tracker, regions) = page(false);
        assert!(!tracker.on_scroll(2500.0));
        assert_eq!(tracker.active_section(), &"section1");

        regions[3].mount(2400.0, 800.0);
        assert!(tracker.on_scroll(2500.0));
        assert_eq!(tracker.active_section(), &"section4");
    }

    #[test]
    fn overlapping_ranges_resolve_to_last_registered() {
        let (mut tracker, regions) = page(true);
        // Stale layout: section3 measured on top of section2.
        regions[2].mount(800.0, 800.0);
        tracker.on_scroll(1000.0);
        assert_eq!(tracker.active_section(), &"section3");
    }

    #[test]
    fn visibility_latches() {
        let (mut tracker, _) = page(true);
        assert!(tracker.on_viewport_intersect("section3", true));
        assert!(tracker.is_visible("section3"));

        assert!(!tracker.on_viewport_intersect("section3", false));
        tracker.on_scroll(0.0);
        assert!(tracker.is_visible("section3"));

        assert!(!tracker.on_viewport_intersect("section3", true));
        assert!(!tracker.is_visible("section2"));
    }

    #[test]
    fn leaving_viewport_before_entering_changes_nothing() {
        let (mut tracker, _) = page(true);
        assert!(!tracker.on_viewport_intersect("section2", false));
        assert!(!tracker.is_visible("section2"));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let (mut tracker, _) = page(true);
        assert!(!tracker.on_viewport_intersect("footer", true));
        assert!(!tracker.is_visible("footer"));
        assert_eq!(tracker.sections().count(), 4);
    }

    #[test]
    fn scroll_to_section_targets_its_top() {
        let (tracker, _) = page(true);
        let scroll = RecordingScroll::default();
        tracker.scroll_to_section("section3", &scroll);
        assert_eq!(*scroll.commands.borrow(), vec![1600.0]);
    }

    #[test]
    fn scroll_to_unknown_or_unmeasured_section_is_a_noop() {
        let (tracker, regions) = page(false);
        let scroll = RecordingScroll::default();

        tracker.scroll_to_section("section9", &scroll);
        tracker.scroll_to_section("section4", &scroll);
        assert!(scroll.commands.borrow().is_empty());

        regions[3].mount(2400.0, 800.0);
        tracker.scroll_to_section("section4", &scroll);
        assert_eq!(*scroll.commands.borrow(), vec![2400.0]);
    }

    #[test]
    fn scroll_to_section_does_not_change_active() {
        let (tracker, _) = page(true);
        tracker.scroll_to_section("section3", &RecordingScroll::default());
        assert_eq!(tracker.active_section(), &"section1");
    }

    #[test]
    fn nav_entries_skip_unlabelled_sections() {
        let (tracker, _) = page(true);
        let labels: Vec<_> = tracker.nav_entries().into_iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Home", "About Us", "Setting Up"]);
    }

    #[test]
    fn duplicate_ids_are_dropped() {
        let tracker = ScrollTracker::register_sections(
            Section::new("section1", FakeRegion::at(0.0, 100.0)),
            vec![
                Section::new("section1", FakeRegion::at(100.0, 100.0)),
                Section::new("section2", FakeRegion::at(100.0, 100.0)),
            ],
        );
        let ids: Vec<_> = tracker.sections().map(|s| s.id().to_string()).collect();
        assert_eq!(ids, vec!["section1", "section2"]);
    }

    #[test]
    fn active_is_always_registered() {
        let (mut tracker, _) = page(true);
        for offset in [-500.0, 0.0, 650.0, 1550.0, 2350.0, 3150.0, 99_999.0] {
            tracker.on_scroll(offset);
            assert!(IDS.contains(&tracker.active_section().as_str()));
        }
    }

    #[test]
    fn reducer_keeps_rc_when_nothing_changes() {
        let (tracker, _) = page(true);
        let state = Rc::new(tracker);

        let same = state.clone().reduce(TrackerAction::Scrolled { offset: 10.0 });
        assert!(Rc::ptr_eq(&state, &same));

        let moved = same.clone().reduce(TrackerAction::Scrolled { offset: 900.0 });
        assert!(!Rc::ptr_eq(&same, &moved));
        assert_eq!(moved.active_section(), &"section2");
        assert_eq!(same.active_section(), &"section1");
    }

    #[test]
    fn reducer_latches_visibility() {
        let (tracker, _) = page(true);
        let state = Rc::new(tracker).reduce(TrackerAction::Intersected {
            id: SectionId::from("section2"),
            is_intersecting: true,
        });
        let state = state.reduce(TrackerAction::Intersected {
            id: SectionId::from("section2"),
            is_intersecting: false,
        });
        assert!(state.is_visible("section2"));
    }
}
