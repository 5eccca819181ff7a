use crate::constants::{ABOUT_ID, HERO_CONTENT_ID, HERO_ID};
use crate::dom;
use crate::events::{self, EventSubscription, TiltWiring};
use site_core::content::{HERO_CTA, HERO_SUBTITLE, HERO_TITLE, HERO_TITLE_ACCENT, SPLINE_SCENE_URL};
use site_core::{MotionPreference, Tilt, TiltConfig, TiltTracker};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Hero section. Owns the tilt tracker and its pointer subscription; the
/// subscription exists only while motion is allowed and is released when the
/// hero is dropped.
pub struct Hero {
    wiring: TiltWiring,
    pointer: Option<EventSubscription>,
}

impl Hero {
    pub fn mount(
        document: &web::Document,
        parent: &web::Element,
        preference: MotionPreference,
    ) -> anyhow::Result<Self> {
        let html = format!(
            "<div class='absolute inset-0'>\
               <spline-viewer url='{scene}' style='width:100%;height:100%'></spline-viewer>\
             </div>\
             <div class='pointer-events-none absolute inset-0 bg-gradient-to-b from-black/50 via-black/40 to-[#0b0c10]'></div>\
             <div id='{content}' class='relative z-10 mx-auto flex min-h-screen max-w-7xl flex-col items-center justify-center px-6 text-center' \
                  style='transition: transform 0.3s ease-out'>\
               <h1 class='reveal bg-gradient-to-br from-white via-white to-blue-300 bg-clip-text text-4xl font-extrabold tracking-tight text-transparent sm:text-6xl md:text-7xl'>\
                 {title}<span class='block text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-cyan-300'>{accent}</span>\
               </h1>\
               <p class='reveal mt-6 max-w-2xl text-base text-white/70 sm:text-lg'>{subtitle}</p>\
               <div class='reveal mt-10 flex items-center gap-4'>\
                 <a href='#{about}' class='inline-flex items-center justify-center rounded-full bg-gradient-to-r from-blue-600 to-cyan-500 px-6 py-3 text-sm font-semibold text-white shadow-lg shadow-blue-500/20'>{cta}</a>\
               </div>\
               <div class='absolute bottom-8 left-1/2 z-10 -translate-x-1/2 text-white/70'>\
                 <div class='flex flex-col items-center text-xs'><span>Scroll</span><span class='mt-1 animate-bounce'>&#8964;</span></div>\
               </div>\
             </div>\
             <div class='pointer-events-none absolute inset-0 ring-1 ring-inset ring-white/5'></div>",
            scene = SPLINE_SCENE_URL,
            content = HERO_CONTENT_ID,
            title = HERO_TITLE,
            accent = HERO_TITLE_ACCENT,
            subtitle = HERO_SUBTITLE,
            about = ABOUT_ID,
            cta = HERO_CTA,
        );
        let section = dom::create(
            document,
            "section",
            "relative min-h-screen w-full overflow-hidden bg-[#0b0c10]",
            &html,
        )?;
        section.set_id(HERO_ID);
        dom::append(parent, &section)?;

        let content: web::HtmlElement = dom::by_id(document, HERO_CONTENT_ID)?;
        let wiring = TiltWiring {
            tracker: Rc::new(RefCell::new(TiltTracker::new(preference, TiltConfig::default()))),
            content,
        };
        let mut hero = Self {
            wiring,
            pointer: None,
        };
        hero.sync_subscription();
        Ok(hero)
    }

    pub fn apply_preference(&mut self, preference: MotionPreference) {
        if self.wiring.tracker.borrow_mut().set_preference(preference) {
            self.sync_subscription();
        }
    }

    fn sync_subscription(&mut self) {
        let active = self.wiring.tracker.borrow().is_active();
        if active {
            if self.pointer.is_none() {
                self.pointer = events::subscribe_tilt(&self.wiring);
                log::info!("[tilt] pointer tracking on");
            }
        } else {
            // Dropping the subscription removes the listener.
            if self.pointer.take().is_some() {
                log::info!("[tilt] pointer tracking off");
            }
            dom::set_transform(&self.wiring.content, &Tilt::ZERO.css_transform());
        }
    }
}
