use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config;
use crate::utils::dom;

/// In-page anchor selector for `href`, or `None` for the bare `#` link and
/// anything that is not an in-page anchor.
pub fn anchor_selector(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Document offset to scroll to so the target clears the fixed header.
pub fn scroll_target(rect_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    rect_top + scroll_y - header_height - config::SMOOTH_SCROLL_GAP
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = dom::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn header_height() -> f64 {
    dom::query(".site-header")
        .and_then(|header| dom::as_html(&header))
        .map(|header| header.offset_height() as f64)
        .unwrap_or(0.0)
}

/// Delegated click handler for every `a[href^="#"]` on the page.
#[hook]
pub fn use_smooth_scroll() {
    use_event_with_window("click", move |e: MouseEvent| {
        let Some(anchor) = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
        else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        let Some(target) = anchor_selector(&href).and_then(dom::query) else {
            return;
        };

        e.prevent_default();
        let top = scroll_target(
            target.get_bounding_client_rect().top(),
            dom::scroll_y(),
            header_height(),
        );
        smooth_scroll_to(top);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_and_external_links_are_ignored() {
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector("https://wa.me/1"), None);
        assert_eq!(anchor_selector("/about#team"), None);
        assert_eq!(anchor_selector("#contact"), Some("#contact"));
    }

    #[test]
    fn target_clears_header_and_gap() {
        assert_eq!(scroll_target(500.0, 1000.0, 80.0), 1400.0);
        assert_eq!(scroll_target(-200.0, 1000.0, 0.0), 780.0);
    }
}
