//! Browser viewport source and resize subscription.
//!
//! [`use_responsive`] is the Dioxus entry point: it seeds a viewport signal
//! from the window, subscribes to `resize` for the component's lifetime,
//! and hands back a [`ResponsiveHandle`] whose `snapshot()` reads the
//! signal, so any component or effect that takes a snapshot recomputes on
//! every resize notification. Notifications are not debounced.
//!
//! If there is no window or the listener cannot be registered, the handle
//! keeps the constructed-time snapshot forever: degraded but valid.

use std::rc::Rc;

use dioxus::prelude::*;
use pulse_core::responsive::{Responsive, ViewportSize, ViewportSource};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Snapshot reported when the window dimensions cannot be queried.
pub const FALLBACK_VIEWPORT: ViewportSize = ViewportSize::new(1200, 800);

/// Viewport source backed by `window.innerWidth`/`innerHeight`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl BrowserViewport {
    /// Query the current window size, falling back to
    /// [`FALLBACK_VIEWPORT`] outside an interactive context.
    pub fn snapshot() -> ViewportSize {
        let Some(window) = web_sys::window() else {
            return FALLBACK_VIEWPORT;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(FALLBACK_VIEWPORT.width as f64);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(FALLBACK_VIEWPORT.height as f64);
        ViewportSize::new(width.max(0.0) as u32, height.max(0.0) as u32)
    }
}

impl ViewportSource for BrowserViewport {
    fn size(&self) -> ViewportSize {
        Self::snapshot()
    }
}

/// RAII subscription to window `resize` events.
///
/// The callback fires once per notification with the fresh window size.
/// Dropping the listener removes it from the window, so teardown mid-burst
/// cannot leak a handle; the closure itself is owned here and freed with
/// the struct.
pub struct ResizeListener {
    closure: Closure<dyn FnMut()>,
    attached: bool,
}

impl ResizeListener {
    pub fn attach(mut on_resize: impl FnMut(ViewportSize) + 'static) -> Self {
        let closure = Closure::wrap(Box::new(move || {
            on_resize(BrowserViewport::snapshot());
        }) as Box<dyn FnMut()>);
        let attached = match web_sys::window() {
            Some(window) => window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                .is_ok(),
            None => false,
        };
        if !attached {
            log::warn!("resize events unavailable; layout will keep the initial viewport");
        }
        Self { closure, attached }
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        if self.attached {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    self.closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

/// Handle to the tracked viewport. Copy, so it moves freely into effects
/// and event handlers.
#[derive(Clone, Copy)]
pub struct ResponsiveHandle {
    viewport: Signal<ViewportSize>,
}

impl ResponsiveHandle {
    /// Current responsive snapshot. Reading it inside a component or
    /// effect subscribes that scope to resize notifications.
    pub fn snapshot(&self) -> Responsive {
        Responsive::new((self.viewport)())
    }
}

/// Track the browser viewport for the lifetime of the calling component.
///
/// Each call owns an independent subscription; the listener is removed
/// when the component unmounts and its hook state drops.
pub fn use_responsive() -> ResponsiveHandle {
    let mut viewport = use_signal(BrowserViewport::snapshot);
    use_hook(|| {
        Rc::new(ResizeListener::attach(move |size| {
            viewport.set(size);
        }))
    });
    ResponsiveHandle { viewport }
}
