use super::EventSubscription;
use crate::dom;
use site_core::{ParallaxMapper, ScrollSample};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct ParallaxWiring {
    pub mapper: Rc<RefCell<ParallaxMapper>>,
    pub container: web::Element,
    pub track: web::HtmlElement,
}

fn sample(container: &web::Element) -> Option<ScrollSample> {
    let rect = container.get_bounding_client_rect();
    let (_, vh) = dom::viewport_size()?;
    Some(ScrollSample {
        top: rect.top(),
        height: rect.height(),
        viewport_height: vh,
    })
}

/// Recompute progress from the container's current geometry and apply the
/// resulting translation to the card track.
pub fn refresh_parallax(w: &ParallaxWiring) {
    if let Some(s) = sample(&w.container) {
        w.mapper.borrow_mut().on_scroll_sample(&s);
    }
    let transform = w.mapper.borrow().css_transform();
    dom::set_transform(&w.track, &transform);
}

pub fn subscribe_parallax_scroll(w: &ParallaxWiring) -> Option<EventSubscription> {
    let w = w.clone();
    EventSubscription::on_window("scroll", move |_| refresh_parallax(&w))
}

/// Resize re-evaluates the mobile breakpoint, then runs `after` so the owner
/// can acquire or release its scroll subscription.
pub fn subscribe_resize(
    w: &ParallaxWiring,
    mut after: impl FnMut() + 'static,
) -> Option<EventSubscription> {
    let w = w.clone();
    EventSubscription::on_window("resize", move |_| {
        if let Some((vw, _)) = dom::viewport_size() {
            w.mapper.borrow_mut().on_viewport(vw);
        }
        refresh_parallax(&w);
        after();
    })
}
