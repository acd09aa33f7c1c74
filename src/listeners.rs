//! Browser listeners that unregister themselves when dropped.
//!
//! Hooks hold these inside their effects and drop them from the effect
//! destructor, so every registration is released on unmount or when the
//! effect's dependencies change.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, AddEventListenerOptions, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        Self::register(event, handler, false)
    }

    /// Same as [`WindowListener::new`] but tells the browser the handler never
    /// calls `preventDefault`, which keeps scrolling smooth.
    pub fn passive<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        Self::register(event, handler, true)
    }

    fn register<F>(event: &'static str, handler: F, passive: bool) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        let added = window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        );
        if let Err(err) = added {
            warn!("Failed to listen for window {} events: {:?}", event, err);
            return None;
        }

        Some(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// One `IntersectionObserver` watching one element. Disconnects on drop.
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl SectionObserver {
    /// `on_ratio` receives the visible ratio each time it crosses one of
    /// `thresholds`, or `0.0` once the element no longer intersects.
    pub fn watch<F>(
        target: &Element,
        root_margin: &str,
        thresholds: &[f64],
        mut on_ratio: F,
    ) -> Option<Self>
    where
        F: FnMut(f64) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    let ratio = if entry.is_intersecting() {
                        entry.intersection_ratio()
                    } else {
                        0.0
                    };
                    on_ratio(ratio);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        let steps: Array = thresholds.iter().map(|t| JsValue::from_f64(*t)).collect();
        options.set_threshold(&steps);

        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("IntersectionObserver unavailable: {:?}", err);
                return None;
            }
        };
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
