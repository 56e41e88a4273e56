use std::rc::Rc;

use thiserror::Error;

use super::section::SectionId;
use super::tracker::TrackerAction;
use crate::config::TrackerConfig;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("failed to attach {what}: {detail}")]
    Attach { what: &'static str, detail: String },
}

/// Source of scroll position changes plus the ability to scroll.
pub trait ScrollSignal {
    /// Current vertical offset in CSS pixels.
    fn offset(&self) -> Option<f64>;

    fn smooth_scroll_to(&self, top: f64);

    /// Calls `on_scroll` with the new offset on every scroll tick until the
    /// returned guard is dropped.
    fn subscribe(&self, on_scroll: Box<dyn Fn(f64)>) -> Result<Teardown, HostError>;
}

/// Reports sections entering or leaving the viewport.
pub trait ViewportObserver {
    fn observe(
        &self,
        targets: &[SectionId],
        threshold: f64,
        on_change: Box<dyn Fn(&str, bool)>,
    ) -> Result<Teardown, HostError>;
}

/// Releases a host resource when dropped. Release runs at most once.
#[must_use = "dropping a Teardown releases the resource immediately"]
pub struct Teardown {
    release: Option<Box<dyn FnOnce()>>,
}

impl Teardown {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn noop() -> Self {
        Self { release: None }
    }

    pub fn release(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    /// Combines two guards; `self` is released first.
    pub fn join(self, other: Teardown) -> Teardown {
        Teardown::new(move || {
            self.release();
            other.release();
        })
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Wires both event sources to `sink` and syncs the active section once.
///
/// A source that fails to attach is logged and skipped; the other one still
/// works. Dropping the returned guard detaches everything that did attach.
pub fn attach<S, V, F>(
    scroll: &S,
    viewport: &V,
    targets: &[SectionId],
    config: &TrackerConfig,
    sink: F,
) -> Teardown
where
    S: ScrollSignal + ?Sized,
    V: ViewportObserver + ?Sized,
    F: Fn(TrackerAction) + 'static,
{
    let sink = Rc::new(sink);

    let observer = {
        let sink = sink.clone();
        viewport.observe(
            targets,
            config.visibility_threshold,
            Box::new(move |id: &str, is_intersecting: bool| {
                sink(TrackerAction::Intersected {
                    id: SectionId::from(id),
                    is_intersecting,
                })
            }),
        )
    }
    .unwrap_or_else(|err| {
        log::warn!("Fade-in disabled: {}", err);
        Teardown::noop()
    });

    let listener = {
        let sink = sink.clone();
        scroll.subscribe(Box::new(move |offset: f64| {
            sink(TrackerAction::Scrolled { offset })
        }))
    }
    .unwrap_or_else(|err| {
        log::warn!("Section highlighting disabled: {}", err);
        Teardown::noop()
    });

    if let Some(offset) = scroll.offset() {
        sink(TrackerAction::Scrolled { offset });
    }

    log::debug!("Scroll tracking attached to {} sections", targets.len());
    listener.join(observer)
}
