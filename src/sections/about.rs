use crate::constants::{ABOUT_ID, ABOUT_TRACK_ID};
use crate::dom;
use crate::events::{self, EventSubscription, ParallaxWiring};
use site_core::content::STORY_CARDS;
use site_core::{MotionPreference, ParallaxConfig, ParallaxMapper};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

type ScrollSlot = Rc<RefCell<Option<EventSubscription>>>;

/// Story section with the scroll-driven horizontal card track.
///
/// The resize listener lives as long as the section. The scroll listener is
/// held only while parallax is enabled (desktop width, motion allowed).
pub struct About {
    wiring: ParallaxWiring,
    scroll: ScrollSlot,
    _resize: Option<EventSubscription>,
}

impl About {
    pub fn mount(
        document: &web::Document,
        parent: &web::Element,
        preference: MotionPreference,
    ) -> anyhow::Result<Self> {
        let cards: String = STORY_CARDS
            .iter()
            .map(|c| {
                format!(
                    "<article class='reveal min-w-[75%] sm:min-w-[55%] md:min-w-[40%] lg:min-w-[32%] xl:min-w-[28%]'>\
                       <div class='relative overflow-hidden rounded-2xl border border-white/10 bg-white/5'>\
                         <img src='{img}' alt='story visual' class='h-64 sm:h-80 w-full object-cover opacity-90' loading='lazy'>\
                         <div class='p-5 sm:p-6'><p class='text-white/80 text-sm sm:text-base'>{text}</p></div>\
                       </div>\
                     </article>",
                    img = c.image_url,
                    text = c.text,
                )
            })
            .collect();
        let html = format!(
            "<div class='mx-auto max-w-7xl px-6'>\
               <div class='mb-10 sm:mb-16'>\
                 <h2 class='text-3xl sm:text-4xl font-bold tracking-tight text-white'>Our Philosophy</h2>\
                 <p class='mt-3 max-w-2xl text-white/70'>A creative-first practice blending brand, product and motion to build experiences that feel inevitable.</p>\
               </div>\
             </div>\
             <div class='relative w-full'>\
               <div id='{track}' class='flex gap-6 sm:gap-8 will-change-transform px-6'>{cards}</div>\
             </div>",
            track = ABOUT_TRACK_ID,
            cards = cards,
        );
        let section = dom::create(
            document,
            "section",
            "relative bg-[#0b0c10] py-24 sm:py-32 overflow-hidden",
            &html,
        )?;
        section.set_id(ABOUT_ID);
        dom::append(parent, &section)?;

        let (vw, _) = dom::viewport_size().unwrap_or_default();
        let wiring = ParallaxWiring {
            mapper: Rc::new(RefCell::new(ParallaxMapper::new(
                preference,
                vw,
                ParallaxConfig::default(),
            ))),
            container: section,
            track: dom::by_id(document, ABOUT_TRACK_ID)?,
        };
        let scroll: ScrollSlot = Rc::new(RefCell::new(None));

        let resize = {
            let wiring_r = wiring.clone();
            let scroll_r = scroll.clone();
            events::subscribe_resize(&wiring, move || sync_scroll(&wiring_r, &scroll_r))
        };

        sync_scroll(&wiring, &scroll);
        events::refresh_parallax(&wiring);
        Ok(Self {
            wiring,
            scroll,
            _resize: resize,
        })
    }

    pub fn apply_preference(&mut self, preference: MotionPreference) {
        self.wiring.mapper.borrow_mut().set_preference(preference);
        sync_scroll(&self.wiring, &self.scroll);
        events::refresh_parallax(&self.wiring);
    }
}

fn sync_scroll(wiring: &ParallaxWiring, slot: &ScrollSlot) {
    let enabled = wiring.mapper.borrow().is_enabled();
    let mut slot = slot.borrow_mut();
    match (enabled, slot.is_some()) {
        (true, false) => {
            *slot = events::subscribe_parallax_scroll(wiring);
            log::info!("[parallax] scroll tracking on");
        }
        (false, true) => {
            *slot = None;
            log::info!("[parallax] scroll tracking off");
        }
        _ => {}
    }
}
