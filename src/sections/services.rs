use crate::constants::SERVICES_ID;
use crate::dom;
use site_core::content::SERVICES;
use web_sys as web;

pub fn build(document: &web::Document) -> anyhow::Result<web::Element> {
    let cards: String = SERVICES
        .iter()
        .map(|s| {
            format!(
                "<div class='reveal group relative overflow-hidden rounded-2xl border border-white/10 bg-gradient-to-b from-white/5 to-white/[0.03] p-6'>\
                   <div class='absolute -inset-px opacity-0 transition-opacity duration-300 group-hover:opacity-100 bg-gradient-to-r {accent} blur-2xl'></div>\
                   <div class='relative'>\
                     <span aria-hidden='true' data-icon='{icon}' class='inline-flex h-6 w-6 items-center justify-center text-lg text-blue-400'>{glyph}</span>\
                     <h3 class='mt-4 text-lg font-semibold text-white'>{title}</h3>\
                     <p class='mt-2 text-sm text-white/70'>{desc}</p>\
                     <button type='button' class='mt-5 inline-flex items-center rounded-full border border-white/10 bg-white/5 px-3 py-1.5 text-xs text-white/80 transition-all group-hover:bg-white/10 group-hover:text-white'>Learn more</button>\
                   </div>\
                 </div>",
                icon = s.icon.name(),
                glyph = s.icon.glyph(),
                accent = s.accent,
                title = s.title,
                desc = s.description,
            )
        })
        .collect();
    let html = format!(
        "<div class='mx-auto max-w-7xl px-6'>\
           <div class='mb-12 sm:mb-16'>\
             <h2 class='text-3xl sm:text-4xl font-bold tracking-tight text-white'>Capabilities</h2>\
             <p class='mt-3 max-w-2xl text-white/70'>A modular set of services designed to move brands from spark to scale.</p>\
           </div>\
           <div class='grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6'>{}</div>\
         </div>",
        cards
    );
    let section = dom::create(document, "section", "relative bg-[#0b0c10] py-24 sm:py-32", &html)?;
    section.set_id(SERVICES_ID);
    Ok(section)
}
