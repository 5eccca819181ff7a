#![cfg(target_arch = "wasm32")]
use site_core::MotionPreferenceStore;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod sections;
mod storage;

use constants::{ALL_SECTION_IDS, APP_ROOT_ID, MOTION_TOGGLE_ID, REDUCE_MOTION_CLASS};
use sections::{About, Hero};
use storage::BrowserStorage;

/// Sections that react to the motion preference. Everything else owns its own
/// state and never reads another section's.
struct MotionConsumers {
    hero: Hero,
    about: About,
}

fn wire_motion_toggle(
    document: &web::Document,
    store: Rc<RefCell<MotionPreferenceStore<BrowserStorage>>>,
    consumers: Rc<RefCell<MotionConsumers>>,
) -> anyhow::Result<()> {
    let button: web::Element = dom::by_id(document, MOTION_TOGGLE_ID)?;
    let doc = document.clone();
    let button_for_render = button.clone();
    dom::add_click_listener(&button, move |_| {
        let pref = store.borrow_mut().toggle();
        sections::header::render_toggle(&button_for_render, pref);
        dom::set_root_class(&doc, REDUCE_MOTION_CLASS, pref.is_reduced());
        let mut c = consumers.borrow_mut();
        c.hero.apply_preference(pref);
        c.about.apply_preference(pref);
    });
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("limitless-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .get_element_by_id(APP_ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", APP_ROOT_ID))?;

    let store = MotionPreferenceStore::load(BrowserStorage::open(), &storage::prefers_reduced_motion);
    let pref = store.get();
    dom::set_root_class(&document, REDUCE_MOTION_CLASS, pref.is_reduced());

    let header = sections::header::build(&document, pref)?;
    dom::append(&root, &header)?;

    let main = dom::create(&document, "main", "min-h-screen bg-[#0b0c10] text-white", "")?;
    dom::append(&root, &main)?;

    let hero = Hero::mount(&document, &main, pref)?;
    let about = About::mount(&document, &main, pref)?;
    dom::append(&main, &sections::services::build(&document)?)?;
    dom::append(&main, &sections::portfolio::build(&document)?)?;
    dom::append(&main, &sections::contact::build(&document)?)?;
    sections::contact::wire(&document)?;
    dom::append(&root, &sections::footer::build(&document)?)?;

    wire_motion_toggle(
        &document,
        Rc::new(RefCell::new(store)),
        Rc::new(RefCell::new(MotionConsumers { hero, about })),
    )?;

    // Header anchors point at these; a missing one means a broken nav link.
    for id in ALL_SECTION_IDS {
        if document.get_element_by_id(id).is_none() {
            log::warn!("[init] section #{} was not mounted", id);
        }
    }

    log::info!("[motion] page ready with preference {}", pref);
    Ok(())
}
