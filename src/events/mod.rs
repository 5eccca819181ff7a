//! Scoped DOM event subscriptions.
//!
//! Page-lifetime listeners are wired with `Closure::forget` (see `dom`).
//! Listeners that must be released when a tracker is disabled go through
//! [`EventSubscription`], which removes itself from its target on drop.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod pointer;
pub mod scroll;

pub use pointer::{subscribe_tilt, TiltWiring};
pub use scroll::{refresh_parallax, subscribe_parallax_scroll, subscribe_resize, ParallaxWiring};

pub struct EventSubscription {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventSubscription {
    pub fn listen(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::warn!("[events] failed to listen for {}: {:?}", event, e);
                None
            }
        }
    }

    /// Subscribe on `window`.
    pub fn on_window(event: &'static str, handler: impl FnMut(web::Event) + 'static) -> Option<Self> {
        let window = web::window()?;
        Self::listen(&window, event, handler)
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        log::debug!("[events] released {} listener", self.event);
    }
}
