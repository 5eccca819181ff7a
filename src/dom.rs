use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create an element with the given class attribute and inner markup.
pub fn create(
    document: &web::Document,
    tag: &str,
    class: &str,
    inner_html: &str,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    if !inner_html.is_empty() {
        el.set_inner_html(inner_html);
    }
    Ok(el)
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))
}

/// Look up an element by id and cast it to a concrete element type.
pub fn by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("#{} has an unexpected element type", id))
}

#[inline]
pub fn set_transform(el: &web::HtmlElement, transform: &str) {
    _ = el.style().set_property("transform", transform);
}

/// Toggle a class on `<html>`.
pub fn set_root_class(document: &web::Document, class: &str, on: bool) {
    if let Some(root) = document.document_element() {
        _ = root.class_list().toggle_with_force(class, on);
    }
}

/// Wire a click handler for the lifetime of the page.
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Browser viewport size in CSS pixels.
pub fn viewport_size() -> Option<(f64, f64)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width, height))
}
