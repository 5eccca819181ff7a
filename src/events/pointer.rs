use super::EventSubscription;
use crate::dom;
use glam::Vec2;
use site_core::TiltTracker;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct TiltWiring {
    pub tracker: Rc<RefCell<TiltTracker>>,
    pub content: web::HtmlElement,
}

/// Listen for pointer movement over the whole viewport and tilt the hero
/// content toward the cursor. Dropping the returned subscription stops it.
pub fn subscribe_tilt(w: &TiltWiring) -> Option<EventSubscription> {
    let w = w.clone();
    EventSubscription::on_window("pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let Some((vw, vh)) = dom::viewport_size() else {
            return;
        };
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let viewport = Vec2::new(vw as f32, vh as f32);
        let tilt = w.tracker.borrow_mut().on_pointer_move(pointer, viewport);
        if let Some(t) = tilt {
            dom::set_transform(&w.content, &t.css_transform());
        }
    })
}
