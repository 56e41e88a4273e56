use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};
use yew::NodeRef;

use super::host::{HostError, ScrollSignal, Teardown, ViewportObserver};
use super::section::{Extent, SectionId, SectionRegion};

fn attach_error(what: &'static str, err: &JsValue) -> HostError {
    HostError::Attach {
        what,
        detail: format!("{:?}", err),
    }
}

impl SectionRegion for NodeRef {
    fn extent(&self) -> Option<Extent> {
        let element = self.cast::<HtmlElement>()?;
        Some(Extent::new(
            element.offset_top() as f64,
            element.offset_height() as f64,
        ))
    }
}

/// The page's own scroll position.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroll;

impl ScrollSignal for WindowScroll {
    fn offset(&self) -> Option<f64> {
        web_sys::window()?.scroll_y().ok()
    }

    fn smooth_scroll_to(&self, top: f64) {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn subscribe(&self, on_scroll: Box<dyn Fn(f64)>) -> Result<Teardown, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let callback = Closure::<dyn Fn()>::new(move || {
            if let Some(Ok(scroll_y)) = web_sys::window().map(|win| win.scroll_y()) {
                on_scroll(scroll_y);
            }
        });
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(|err| attach_error("scroll listener", &err))?;

        Ok(Teardown::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove scroll listener: {:?}", err);
            }
        }))
    }
}

/// `IntersectionObserver` against the document viewport. Targets are looked
/// up by DOM id, so each section must render with `id` equal to its key.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntersectionViewport;

impl ViewportObserver for IntersectionViewport {
    fn observe(
        &self,
        targets: &[SectionId],
        threshold: f64,
        on_change: Box<dyn Fn(&str, bool)>,
    ) -> Result<Teardown, HostError> {
        let document = web_sys::window()
            .ok_or(HostError::NoWindow)?
            .document()
            .ok_or(HostError::NoDocument)?;

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_change(&entry.target().id(), entry.is_intersecting());
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| attach_error("intersection observer", &err))?;

        for id in targets {
            match document.get_element_by_id(id.as_str()) {
                Some(element) => observer.observe(&element),
                None => log::debug!("Section {} not in the document, not observed", id),
            }
        }

        Ok(Teardown::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}
