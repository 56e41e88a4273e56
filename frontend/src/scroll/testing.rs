//! In-memory stand-ins for the browser so tracker logic runs under `cargo test`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::host::{HostError, ScrollSignal, Teardown, ViewportObserver};
use super::section::{Extent, SectionId, SectionRegion};

#[derive(Clone, Default)]
pub struct FakeRegion(Rc<Cell<Option<Extent>>>);

impl FakeRegion {
    pub fn unmounted() -> Self {
        Self::default()
    }

    pub fn at(top: f64, height: f64) -> Self {
        let region = Self::default();
        region.mount(top, height);
        region
    }

    pub fn mount(&self, top: f64, height: f64) {
        self.0.set(Some(Extent::new(top, height)));
    }
}

impl SectionRegion for FakeRegion {
    fn extent(&self) -> Option<Extent> {
        self.0.get()
    }
}

type ScrollHandler = Box<dyn Fn(f64)>;
type ViewportHandler = Box<dyn Fn(&str, bool)>;

#[derive(Default)]
pub struct RecordingScroll {
    offset: Cell<Option<f64>>,
    pub commands: RefCell<Vec<f64>>,
    handler: Rc<RefCell<Option<ScrollHandler>>>,
    pub releases: Rc<Cell<u32>>,
    pub refuse_subscribe: bool,
}

impl RecordingScroll {
    pub fn at(offset: f64) -> Self {
        let scroll = Self::default();
        scroll.offset.set(Some(offset));
        scroll
    }

    pub fn failing() -> Self {
        Self {
            refuse_subscribe: true,
            ..Self::default()
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.handler.borrow().is_some()
    }

    /// Moves the page and fires the listener, if one is attached.
    pub fn scroll_to(&self, offset: f64) {
        self.offset.set(Some(offset));
        if let Some(handler) = self.handler.borrow().as_ref() {
            handler(offset);
        }
    }
}

impl ScrollSignal for RecordingScroll {
    fn offset(&self) -> Option<f64> {
        self.offset.get()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.commands.borrow_mut().push(top);
    }

    fn subscribe(&self, on_scroll: ScrollHandler) -> Result<Teardown, HostError> {
        if self.refuse_subscribe {
            return Err(HostError::Attach {
                what: "scroll listener",
                detail: "refused by test".to_string(),
            });
        }
        *self.handler.borrow_mut() = Some(on_scroll);
        let handler = self.handler.clone();
        let releases = self.releases.clone();
        Ok(Teardown::new(move || {
            handler.borrow_mut().take();
            releases.set(releases.get() + 1);
        }))
    }
}

#[derive(Default)]
pub struct FakeViewport {
    pub observed: RefCell<Vec<SectionId>>,
    pub threshold: Cell<Option<f64>>,
    handler: Rc<RefCell<Option<ViewportHandler>>>,
    pub releases: Rc<Cell<u32>>,
    pub refuse_observe: bool,
}

impl FakeViewport {
    pub fn failing() -> Self {
        Self {
            refuse_observe: true,
            ..Self::default()
        }
    }

    pub fn is_observing(&self) -> bool {
        self.handler.borrow().is_some()
    }

    pub fn fire(&self, id: &str, is_intersecting: bool) {
        if let Some(handler) = self.handler.borrow().as_ref() {
            handler(id, is_intersecting);
        }
    }
}

impl ViewportObserver for FakeViewport {
    fn observe(
        &self,
        targets: &[SectionId],
        threshold: f64,
        on_change: ViewportHandler,
    ) -> Result<Teardown, HostError> {
        if self.refuse_observe {
            return Err(HostError::Attach {
                what: "intersection observer",
                detail: "refused by test".to_string(),
            });
        }
        self.observed.borrow_mut().extend(targets.iter().cloned());
        self.threshold.set(Some(threshold));
        *self.handler.borrow_mut() = Some(on_change);
        let handler = self.handler.clone();
        let releases = self.releases.clone();
        Ok(Teardown::new(move || {
            handler.borrow_mut().take();
            releases.set(releases.get() + 1);
        }))
    }
}
