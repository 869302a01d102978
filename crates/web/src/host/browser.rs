// =============================================================================
// CS:GO Pro Web - Browser Host
// =============================================================================
// Table of Contents:
// 1. BrowserHost
// 2. Scroll Subscription
// 3. Viewport Subscription
// =============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use super::{HostError, PageHost};
use crate::interaction::{IntersectionGate, ObserveOptions};

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

// -----------------------------------------------------------------------------
// 1. BrowserHost
// -----------------------------------------------------------------------------

/// `PageHost` backed by the real window and document.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl BrowserHost {
    fn window(&self) -> Result<Window, HostError> {
        web_sys::window().ok_or(HostError::NoWindow)
    }

    fn document(&self) -> Result<Document, HostError> {
        self.window()?.document().ok_or(HostError::NoDocument)
    }
}

impl PageHost for BrowserHost {
    fn scroll_offset(&self) -> Result<f64, HostError> {
        Ok(self.window()?.scroll_y()?)
    }

    fn scroll_to_anchor(&self, anchor: &str) -> Result<bool, HostError> {
        let Some(element) = self.document()?.get_element_by_id(anchor) else {
            return Ok(false);
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(true)
    }
}

// -----------------------------------------------------------------------------
// 2. Scroll Subscription
// -----------------------------------------------------------------------------

/// Owns the callback of a registered window `scroll` listener. Dropping it
/// without `detach` invalidates the listener.
#[must_use]
pub struct ListenerHandle {
    callback: Closure<dyn FnMut(Event)>,
}

impl ListenerHandle {
    /// Leave the listener registered for the rest of the page lifetime.
    pub fn detach(self) {
        self.callback.forget();
    }
}

impl BrowserHost {
    /// Call `on_offset` with the current vertical offset on every scroll event.
    pub fn on_scroll(
        &self,
        mut on_offset: impl FnMut(f64) + 'static,
    ) -> Result<ListenerHandle, HostError> {
        let window = self.window()?;
        let source = window.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |_: Event| match source.scroll_y() {
            Ok(offset) => on_offset(offset),
            Err(err) => log::warn!("scrollY unavailable: {}", HostError::from(err)),
        });
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        Ok(ListenerHandle { callback })
    }
}

// -----------------------------------------------------------------------------
// 3. Viewport Subscription
// -----------------------------------------------------------------------------

/// Owns the callback of a one-shot IntersectionObserver.
#[must_use]
pub struct ObserverHandle {
    callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObserverHandle {
    /// Keep observing until the first entry, after which the observer
    /// disconnects itself.
    pub fn detach(self) {
        self.callback.forget();
    }
}

impl BrowserHost {
    /// Call `on_enter` the first time `element` intersects the viewport,
    /// shrunk by `options.margin`, then disconnect.
    pub fn observe_once(
        &self,
        element: &Element,
        options: ObserveOptions,
        on_enter: impl FnOnce() + 'static,
    ) -> Result<ObserverHandle, HostError> {
        let mut gate = IntersectionGate::default();
        let mut on_enter = Some(on_enter);

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if !gate.sample(intersecting) {
                    return;
                }
                observer.disconnect();
                if let Some(notify) = on_enter.take() {
                    notify();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(ObserverHandle { callback })
    }
}
