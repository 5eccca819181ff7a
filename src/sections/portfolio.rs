use crate::constants::{
    FILTER_BUTTON_ACTIVE, FILTER_BUTTON_BASE, FILTER_BUTTON_IDLE, PORTFOLIO_FILTERS_ID,
    PORTFOLIO_GRID_ID, PORTFOLIO_SELECT_ID, WORK_ID,
};
use crate::dom;
use site_core::content::PORTFOLIO_ITEMS;
use site_core::{Filter, PortfolioFilter};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct GalleryWiring {
    state: Rc<RefCell<PortfolioFilter>>,
    buttons: web::Element,
    select: web::HtmlSelectElement,
    grid: web::Element,
}

fn button_class(active: bool) -> String {
    let state = if active {
        FILTER_BUTTON_ACTIVE
    } else {
        FILTER_BUTTON_IDLE
    };
    format!("{} {}", FILTER_BUTTON_BASE, state)
}

fn render(w: &GalleryWiring) {
    let state = w.state.borrow();
    let active = state.active();

    let buttons: String = Filter::options()
        .map(|f| {
            format!(
                "<button type='button' data-filter='{label}' aria-pressed='{pressed}' class='{class}'>{label}</button>",
                label = f.label(),
                pressed = (f == active),
                class = button_class(f == active),
            )
        })
        .collect();
    w.buttons.set_inner_html(&buttons);
    w.select.set_value(active.label());

    let cards: String = state
        .visible()
        .iter()
        .map(|it| {
            format!(
                "<article data-id='{id}' class='reveal group relative overflow-hidden rounded-2xl border border-white/10 bg-white/5'>\
                   <img src='{img}' alt='{title}' class='h-56 w-full object-cover transition-transform duration-500 group-hover:scale-105' loading='lazy'>\
                   <div class='absolute inset-x-0 bottom-0 p-4 bg-gradient-to-t from-black/60 to-transparent'>\
                     <h3 class='text-white font-semibold'>{title}</h3>\
                     <p class='text-xs text-white/70'>{tag}</p>\
                   </div>\
                 </article>",
                id = it.id,
                img = it.image_url,
                title = it.title,
                tag = it.tag,
            )
        })
        .collect();
    w.grid.set_inner_html(&cards);
}

fn select_label(w: &GalleryWiring, label: &str) {
    let result = w.state.borrow_mut().select_label(label);
    match result {
        Ok(f) => {
            log::info!("[portfolio] showing {}", f.label());
            render(w);
        }
        Err(e) => log::warn!("[portfolio] {}", e),
    }
}

pub fn build(document: &web::Document) -> anyhow::Result<web::Element> {
    let options: String = Filter::options()
        .map(|f| format!("<option value='{0}'>{0}</option>", f.label()))
        .collect();
    let html = format!(
        "<div class='mx-auto max-w-7xl px-6'>\
           <div class='mb-8 sm:mb-12 flex items-center justify-between gap-4'>\
             <div>\
               <h2 class='text-3xl sm:text-4xl font-bold tracking-tight text-white'>Selected Work</h2>\
               <p class='mt-3 max-w-2xl text-white/70'>A rotating selection of brand, product and motion projects.</p>\
             </div>\
             <div id='{buttons}' class='hidden md:flex items-center gap-2'></div>\
           </div>\
           <div class='md:hidden mb-6'>\
             <select id='{select}' class='w-full rounded-lg border border-white/10 bg-white/5 p-2 text-white/80'>{options}</select>\
           </div>\
           <div id='{grid}' class='grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6'></div>\
         </div>",
        buttons = PORTFOLIO_FILTERS_ID,
        select = PORTFOLIO_SELECT_ID,
        options = options,
        grid = PORTFOLIO_GRID_ID,
    );
    let section = dom::create(document, "section", "relative bg-[#0b0c10] py-24 sm:py-32", &html)?;
    section.set_id(WORK_ID);

    let find = |id: &str| {
        section
            .query_selector(&format!("#{}", id))
            .ok()
            .flatten()
            .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
    };
    let w = GalleryWiring {
        state: Rc::new(RefCell::new(PortfolioFilter::new(&PORTFOLIO_ITEMS))),
        buttons: find(PORTFOLIO_FILTERS_ID)?,
        select: find(PORTFOLIO_SELECT_ID)?
            .dyn_into::<web::HtmlSelectElement>()
            .map_err(|_| anyhow::anyhow!("#{} is not a <select>", PORTFOLIO_SELECT_ID))?,
        grid: find(PORTFOLIO_GRID_ID)?,
    };
    render(&w);

    // Buttons are re-rendered on every selection, so listen on their container.
    let w_click = w.clone();
    dom::add_click_listener(&w.buttons, move |ev| {
        let label = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("[data-filter]").ok().flatten())
            .and_then(|el| el.get_attribute("data-filter"));
        if let Some(label) = label {
            select_label(&w_click, &label);
        }
    });

    let w_change = w.clone();
    let on_change = Closure::wrap(Box::new(move |_: web::Event| {
        let label = w_change.select.value();
        select_label(&w_change, &label);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .select
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
    on_change.forget();

    Ok(section)
}
