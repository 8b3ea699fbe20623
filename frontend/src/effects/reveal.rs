use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Element, Node};
use yew::prelude::*;

use crate::config;
use crate::utils::dom;
use crate::utils::observer::OneShotObserver;

pub const REVEAL_CLASS: &str = "reveal";
pub const STAGGER_CLASS: &str = "stagger-children";
pub const ACTIVE_CLASS: &str = "active";

/// Content that fades in the first time it scrolls into view.
pub const REVEAL_SELECTORS: [&str; 9] = [
    ".card",
    ".stat-card",
    ".portfolio-card",
    ".review",
    ".faq-item",
    ".service-areas .areas li",
    "section > .container > h2",
    "section > .container > p.muted",
    ".section-line",
];

/// Containers whose children animate in sequence.
pub const STAGGER_SELECTORS: [&str; 3] = [".grid", ".portfolio-grid", ".service-areas .areas"];

pub const FOOTER_REVEAL_SELECTORS: [&str; 6] = [
    ".footer-cta-title",
    ".footer-cta-sub",
    ".footer-cta-actions",
    ".footer-brand",
    ".footer-col",
    ".footer-map-wrapper",
];

const FOOTER_HIDDEN_TRANSFORM: &str = "translateY(30px)";
const FOOTER_TRANSITION: &str =
    "opacity 0.7s cubic-bezier(0.16,1,0.3,1), transform 0.7s cubic-bezier(0.16,1,0.3,1)";

/// Delay before the footer item at `index` appears.
pub fn footer_delay(index: usize) -> u32 {
    (index as u32)
        .saturating_mul(config::FOOTER_STAGGER_MS)
        .min(config::FOOTER_STAGGER_CAP_MS)
}

/// Classes the page tags onto elements matched by `selector`. A selector
/// listed in both groups gets both classes.
pub fn classes_for(selector: &str) -> Vec<&'static str> {
    let mut classes = Vec::new();
    if REVEAL_SELECTORS.contains(&selector) {
        classes.push(REVEAL_CLASS);
    }
    if STAGGER_SELECTORS.contains(&selector) {
        classes.push(STAGGER_CLASS);
    }
    classes
}

fn add_class(element: &Element, class: &str) {
    let classes = element.class_list();
    if !classes.contains(class) {
        let _ = classes.add_1(class);
    }
}

/// Tags page content for reveal and activates each element once, the
/// first time at least 15% of it is inside the viewport.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        |_| {
            for selector in REVEAL_SELECTORS.iter().chain(STAGGER_SELECTORS.iter()) {
                let classes = classes_for(selector);
                for element in dom::query_all(selector) {
                    for class in &classes {
                        add_class(&element, class);
                    }
                }
            }

            let observer = OneShotObserver::new(
                config::REVEAL_THRESHOLD,
                Some(config::REVEAL_ROOT_MARGIN),
                |element| add_class(&element, ACTIVE_CLASS),
            );
            if let Some(observer) = &observer {
                let targets = dom::query_all(&format!(".{REVEAL_CLASS}, .{STAGGER_CLASS}"));
                log::debug!("observing {} reveal targets", targets.len());
                for element in &targets {
                    observer.observe(element);
                }
            }

            move || drop(observer)
        },
        (),
    );
}

/// Footer blocks start hidden and rise into place one after another.
#[hook]
pub fn use_footer_reveal(footer: NodeRef) {
    use_effect_with_deps(
        move |footer: &NodeRef| {
            let items: Vec<Element> = match footer.cast::<Element>() {
                Some(root) => FOOTER_REVEAL_SELECTORS
                    .iter()
                    .flat_map(|selector| dom::query_all_in(&root, selector))
                    .collect(),
                None => Vec::new(),
            };

            for item in &items {
                dom::set_style(item, "opacity", "0");
                dom::set_style(item, "transform", FOOTER_HIDDEN_TRANSFORM);
                dom::set_style(item, "transition", FOOTER_TRANSITION);
            }

            let order = Rc::new(items);
            let lookup = order.clone();
            let observer = OneShotObserver::new(config::REVEAL_THRESHOLD, None, move |element| {
                let node: &Node = &element;
                let index = lookup
                    .iter()
                    .position(|item| item.is_same_node(Some(node)))
                    .unwrap_or(0);
                Timeout::new(footer_delay(index), move || {
                    dom::set_style(&element, "opacity", "1");
                    dom::set_style(&element, "transform", "translateY(0)");
                })
                .forget();
            });
            if let Some(observer) = &observer {
                for item in order.iter() {
                    observer.observe(item);
                }
            }

            move || drop(observer)
        },
        footer,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_delay_is_capped() {
        assert_eq!(footer_delay(0), 0);
        assert_eq!(footer_delay(3), 300);
        assert_eq!(footer_delay(6), 600);
        assert_eq!(footer_delay(40), 600);
    }

    #[test]
    fn content_selectors_get_the_reveal_class() {
        assert_eq!(classes_for(".card"), vec![REVEAL_CLASS]);
        assert_eq!(classes_for(".service-areas .areas li"), vec![REVEAL_CLASS]);
        assert_eq!(classes_for("section > .container > h2"), vec![REVEAL_CLASS]);
    }

    #[test]
    fn grid_selectors_stagger_their_children() {
        assert_eq!(classes_for(".grid"), vec![STAGGER_CLASS]);
        assert_eq!(classes_for(".portfolio-grid"), vec![STAGGER_CLASS]);
        assert_eq!(classes_for(".service-areas .areas"), vec![STAGGER_CLASS]);
    }

    #[test]
    fn unlisted_selectors_are_left_alone() {
        assert!(classes_for(".footer-brand").is_empty());
        assert!(classes_for(".btn.primary").is_empty());
    }

    #[test]
    fn every_tagged_selector_is_watched() {
        for selector in REVEAL_SELECTORS.iter().chain(STAGGER_SELECTORS.iter()) {
            let classes = classes_for(selector);
            assert!(!classes.is_empty(), "{selector} would never be observed");
            assert!(classes.iter().all(|c| *c == REVEAL_CLASS || *c == STAGGER_CLASS));
        }
    }
}
