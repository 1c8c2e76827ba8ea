use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Write one style property, ignoring failure the way all DOM style
/// writes here do (a detached element is not an error worth surfacing).
#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    let _ = el.style().set_property(prop, value);
}

#[inline]
pub fn set_opacity(el: &web::HtmlElement, value: f64) {
    set_style(el, "opacity", &format!("{:.3}", value));
}

/// Create a `<div>`, give it a class and inline style, and append it to
/// `parent`. Used for the particle and ray layers built at startup.
pub fn append_div(
    document: &web::Document,
    parent: &web::HtmlElement,
    class: &str,
    style: &str,
) -> Option<web::HtmlElement> {
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    if !style.is_empty() {
        let _ = el.set_attribute("style", style);
    }
    let _ = parent.append_child(&el);
    Some(el)
}

/// Smooth-scroll the window to a vertical offset (navigation dots).
pub fn scroll_to(top: f64) {
    if let Some(w) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}
