use crate::dom;
use site_core::content::BRAND_NAME;
use web_sys as web;

pub fn build(document: &web::Document) -> anyhow::Result<web::Element> {
    let year = js_sys::Date::new_0().get_full_year();
    dom::create(
        document,
        "footer",
        "border-t border-white/10 py-10 text-center text-white/50",
        &format!("&copy; {} {}. All rights reserved.", year, BRAND_NAME),
    )
}
