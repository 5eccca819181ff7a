use crate::constants::{
    CONTACT_BRIEF_ID, CONTACT_EMAIL_ID, CONTACT_FORM_ID, CONTACT_ID, CONTACT_NAME_ID,
    CONTACT_SUBMIT_ID,
};
use crate::dom;
use gloo_timers::future::TimeoutFuture;
use instant::Instant;
use site_core::content::{CONTACT_HEADLINE, CONTACT_PITCH_POINTS, CONTACT_SUBTITLE};
use site_core::{ContactForm, ContactFormData};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone)]
struct FormWiring {
    state: Rc<RefCell<ContactForm>>,
    form: web::HtmlFormElement,
    name: web::HtmlInputElement,
    email: web::HtmlInputElement,
    brief: web::HtmlTextAreaElement,
    button: web::HtmlButtonElement,
}

impl FormWiring {
    fn data(&self) -> ContactFormData {
        ContactFormData {
            name: self.name.value(),
            email: self.email.value(),
            brief: self.brief.value(),
        }
    }

    fn render(&self) {
        let state = self.state.borrow();
        self.button.set_disabled(state.is_locked());
        if let Ok(Some(label)) = self.button.query_selector("[data-label]") {
            label.set_text_content(Some(state.button_label()));
        }
    }
}

fn on_submit(w: &FormWiring, ev: web::Event) {
    ev.prevent_default();
    // Native `required` / `type=email` constraints are the only gate.
    if !w.form.check_validity() {
        _ = w.form.report_validity();
        return;
    }
    let w = w.clone();
    spawn_local(async move {
        let started = Instant::now();
        let w_pending = w.clone();
        let result = site_core::submit(&w.state, w.data(), move |latency| {
            w_pending.render();
            TimeoutFuture::new(latency.as_millis() as u32)
        })
        .await;
        match result {
            Ok(()) => log::info!(
                "[contact] sent after {} ms",
                started.elapsed().as_millis()
            ),
            Err(e) => log::warn!("[contact] submission ignored: {}", e),
        }
        w.render();
    });
}

pub fn build(document: &web::Document) -> anyhow::Result<web::Element> {
    let points: String = CONTACT_PITCH_POINTS
        .iter()
        .map(|p| format!("<li>{}</li>", p))
        .collect();
    let input_class = "mt-1 w-full rounded-lg border border-white/10 bg-black/30 p-3 text-white placeholder:text-white/40";
    let html = format!(
        "<div class='mx-auto max-w-7xl px-6'>\
           <div class='mb-10 sm:mb-16'>\
             <h2 class='text-3xl sm:text-4xl font-bold tracking-tight text-white'>{headline}</h2>\
             <p class='mt-3 max-w-2xl text-white/70'>{subtitle}</p>\
           </div>\
           <div class='grid grid-cols-1 lg:grid-cols-2 gap-10'>\
             <form id='{form}' class='rounded-2xl border border-white/10 bg-white/5 p-6'>\
               <div class='grid grid-cols-1 sm:grid-cols-2 gap-4'>\
                 <div>\
                   <label for='{name}' class='text-sm text-white/70'>Name</label>\
                   <input id='{name}' name='name' required class='{input}' placeholder='Jane Doe'>\
                 </div>\
                 <div>\
                   <label for='{email}' class='text-sm text-white/70'>Email</label>\
                   <input id='{email}' name='email' type='email' required class='{input}' placeholder='jane@studio.com'>\
                 </div>\
               </div>\
               <div class='mt-4'>\
                 <label for='{brief}' class='text-sm text-white/70'>Project brief</label>\
                 <textarea id='{brief}' name='brief' rows='5' required class='{input}' placeholder='What are we building together?'></textarea>\
               </div>\
               <button id='{submit}' type='submit' class='group relative mt-6 inline-flex items-center justify-center overflow-hidden rounded-full px-6 py-3 text-sm font-semibold text-white'>\
                 <span class='absolute inset-0 rounded-full bg-gradient-to-r from-blue-600 to-cyan-500 transition-transform duration-500 group-hover:scale-110'></span>\
                 <span data-label class='relative'></span>\
               </button>\
             </form>\
             <div class='rounded-2xl border border-white/10 bg-gradient-to-br from-blue-600/20 to-cyan-500/10 p-8'>\
               <h3 class='text-white text-xl font-semibold'>A premium partner for creative teams</h3>\
               <p class='mt-3 text-white/80'>We fuse brand, product and motion to deliver experiences that feel inevitable. From concept to ship — with precision and play.</p>\
               <ul class='mt-6 space-y-3 text-sm text-white/70 list-disc list-inside'>{points}</ul>\
             </div>\
           </div>\
         </div>",
        headline = CONTACT_HEADLINE,
        subtitle = CONTACT_SUBTITLE,
        form = CONTACT_FORM_ID,
        name = CONTACT_NAME_ID,
        email = CONTACT_EMAIL_ID,
        brief = CONTACT_BRIEF_ID,
        submit = CONTACT_SUBMIT_ID,
        input = input_class,
        points = points,
    );
    let section = dom::create(document, "section", "relative bg-[#0b0c10] py-24 sm:py-32", &html)?;
    section.set_id(CONTACT_ID);
    Ok(section)
}

/// Wire the submit handler. Must run after the section is in the document.
pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let w = FormWiring {
        state: Rc::new(RefCell::new(ContactForm::new())),
        form: dom::by_id(document, CONTACT_FORM_ID)?,
        name: dom::by_id(document, CONTACT_NAME_ID)?,
        email: dom::by_id(document, CONTACT_EMAIL_ID)?,
        brief: dom::by_id(document, CONTACT_BRIEF_ID)?,
        button: dom::by_id(document, CONTACT_SUBMIT_ID)?,
    };
    w.render();

    let w_submit = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| on_submit(&w_submit, ev))
        as Box<dyn FnMut(_)>);
    _ = w
        .form
        .add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
    Ok(())
}
