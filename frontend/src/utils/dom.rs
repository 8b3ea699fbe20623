use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn inner_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// First match of `selector` in the whole document.
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All matches of `selector` under `root`, in document order.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector).map(elements).unwrap_or_default()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(elements)
        .unwrap_or_default()
}

pub fn as_html(element: &Element) -> Option<HtmlElement> {
    element.clone().dyn_into::<HtmlElement>().ok()
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = as_html(element) {
        let style = html.style();
        if value.is_empty() {
            let _ = style.remove_property(property);
        } else {
            let _ = style.set_property(property, value);
        }
    }
}

/// `(hover: none)` matches on touch-only devices.
pub fn hover_unavailable() -> bool {
    window()
        .and_then(|w| w.match_media("(hover: none)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}
