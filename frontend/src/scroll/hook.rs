use yew::prelude::*;

use super::browser::{IntersectionViewport, WindowScroll};
use super::host;
use super::section::{Section, SectionId};
use super::tracker::ScrollTracker;
use crate::config::TrackerConfig;

/// Owns the page's scroll state for the lifetime of the calling component.
///
/// Sections are registered on first render only. The scroll listener and the
/// intersection observer attach after mount and are released on unmount.
#[hook]
pub fn use_scroll_tracker(
    first: Section,
    rest: Vec<Section>,
    config: TrackerConfig,
) -> UseReducerHandle<ScrollTracker> {
    let tracker = use_reducer(move || {
        ScrollTracker::register_sections(first, rest).with_lookahead(config.lookahead)
    });

    {
        let dispatcher = tracker.dispatcher();
        let targets: Vec<SectionId> = tracker.sections().map(|s| s.id().clone()).collect();
        use_effect_with_deps(
            move |_| {
                let teardown = host::attach(
                    &WindowScroll,
                    &IntersectionViewport,
                    &targets,
                    &config,
                    move |action| dispatcher.dispatch(action),
                );
                move || {
                    teardown.release();
                    log::debug!("Scroll tracking released");
                }
            },
            (),
        );
    }

    tracker
}
