use crate::constants::{HERO_ID, MOTION_TOGGLE_ID};
use crate::dom;
use site_core::content::{BRAND_NAME, NAV_LINKS};
use site_core::MotionPreference;
use web_sys as web;

pub fn build(document: &web::Document, preference: MotionPreference) -> anyhow::Result<web::Element> {
    let nav: String = NAV_LINKS
        .iter()
        .map(|l| {
            format!(
                "<a class='hover:text-white transition-colors' href='{}'>{}</a>",
                l.href, l.label
            )
        })
        .collect();
    let html = format!(
        "<div class='mx-auto max-w-7xl px-4 sm:px-6 lg:px-8'>\
           <div class='mt-4 flex items-center justify-between rounded-2xl border border-white/5 bg-black/30 px-4 py-3 backdrop-blur-md'>\
             <a href='#{hero}' class='text-xl font-semibold tracking-tight text-white hover:text-blue-400 transition-colors'>{brand}</a>\
             <div class='flex items-center gap-4'>\
               <nav class='hidden md:flex items-center gap-6 text-sm text-white/70'>{nav}</nav>\
               <button id='{toggle}' type='button' aria-label='Toggle reduced motion' \
                 class='inline-flex items-center gap-2 rounded-full border border-white/10 bg-white/5 px-3 py-1.5 text-xs font-medium text-white/80 hover:bg-white/10 transition-colors'></button>\
             </div>\
           </div>\
         </div>",
        hero = HERO_ID,
        brand = BRAND_NAME,
        nav = nav,
        toggle = MOTION_TOGGLE_ID,
    );
    let header = dom::create(document, "header", "fixed top-0 left-0 right-0 z-40", &html)?;
    if let Ok(Some(button)) = header.query_selector(&format!("#{}", MOTION_TOGGLE_ID)) {
        render_toggle(&button, preference);
    }
    Ok(header)
}

pub fn render_toggle(button: &web::Element, preference: MotionPreference) {
    let reduced = preference.is_reduced();
    _ = button.set_attribute("aria-pressed", if reduced { "true" } else { "false" });
    button.set_inner_html(if reduced {
        "<span class='text-blue-400'>&#9790;</span> Reduced Motion"
    } else {
        "<span class='text-yellow-300'>&#9728;</span> Motion On"
    });
}
