//! Pointer-driven decorations: card tilt, magnetic buttons and the portfolio
//! sibling dimmer. All of them are skipped on devices without hover.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::utils::dom;
use crate::utils::frame::FrameGuard;

const TILT_DIVISOR: f64 = 20.0;
const MAGNET_STRENGTH: f64 = 0.15;
pub const DIMMED_OPACITY: &str = "0.55";
pub const DIMMED_FILTER: &str = "grayscale(40%) brightness(0.8)";

/// Pointer position relative to an element's box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PointerBox {
    pub fn from_event(event: &MouseEvent, element: &Element) -> Self {
        let rect = element.get_bounding_client_rect();
        Self {
            x: event.client_x() as f64 - rect.left(),
            y: event.client_y() as f64 - rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

pub fn tilt_transform(p: PointerBox) -> String {
    let rotate_x = (p.y - p.height / 2.0) / TILT_DIVISOR;
    let rotate_y = (p.width / 2.0 - p.x) / TILT_DIVISOR;
    format!("translateY(-8px) perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg)")
}

pub fn magnetic_transform(p: PointerBox) -> String {
    let dx = p.x - p.width / 2.0;
    let dy = p.y - p.height / 2.0;
    format!("translate({}px, {}px)", dx * MAGNET_STRENGTH, dy * MAGNET_STRENGTH)
}

/// Inline style for portfolio card `index` while card `hovered` is under the pointer.
pub fn dim_style(index: usize, hovered: Option<usize>) -> Option<String> {
    match hovered {
        Some(h) if h != index => Some(format!("opacity: {DIMMED_OPACITY}; filter: {DIMMED_FILTER};")),
        _ => None,
    }
}

/// Follows the pointer over `node` and yields the transform `effect` computes
/// for it, at most once per frame. Returns the current transform (if any)
/// plus the move/leave handlers to attach.
#[hook]
pub fn use_pointer_transform(
    node: NodeRef,
    effect: fn(PointerBox) -> String,
) -> (Option<String>, Callback<MouseEvent>, Callback<MouseEvent>) {
    let transform = use_state(|| None::<String>);
    let guard = use_state(FrameGuard::new);
    // `None` once the pointer has left, so a frame queued before the leave is dropped.
    let latest = use_state(|| Rc::new(Cell::new(None::<PointerBox>)));
    let enabled = use_state(|| !dom::hover_unavailable());

    let onmousemove = {
        let transform = transform.clone();
        let guard = (*guard).clone();
        let latest = (*latest).clone();
        let enabled = *enabled;
        Callback::from(move |e: MouseEvent| {
            if !enabled {
                return;
            }
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            latest.set(Some(PointerBox::from_event(&e, &element)));
            let transform = transform.clone();
            let latest = latest.clone();
            guard.schedule(move || {
                if let Some(pointer) = latest.get() {
                    transform.set(Some(effect(pointer)));
                }
            });
        })
    };

    let onmouseleave = {
        let transform = transform.clone();
        let latest = (*latest).clone();
        Callback::from(move |_: MouseEvent| {
            latest.set(None);
            transform.set(None);
        })
    };

    ((*transform).clone(), onmousemove, onmouseleave)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64) -> PointerBox {
        PointerBox { x, y, width: 200.0, height: 100.0 }
    }

    #[test]
    fn tilt_is_flat_at_centre() {
        assert_eq!(
            tilt_transform(at(100.0, 50.0)),
            "translateY(-8px) perspective(1000px) rotateX(0deg) rotateY(0deg)"
        );
    }

    #[test]
    fn tilt_leans_toward_pointer() {
        // top-left corner: tips back on X, turns toward the left on Y
        assert_eq!(
            tilt_transform(at(0.0, 0.0)),
            "translateY(-8px) perspective(1000px) rotateX(-2.5deg) rotateY(5deg)"
        );
    }

    #[test]
    fn magnet_pulls_from_centre() {
        assert_eq!(magnetic_transform(at(100.0, 50.0)), "translate(0px, 0px)");
        assert_eq!(magnetic_transform(at(200.0, 0.0)), "translate(15px, -7.5px)");
    }

    #[test]
    fn only_siblings_of_hovered_card_dim() {
        assert_eq!(dim_style(0, None), None);
        assert_eq!(dim_style(2, Some(2)), None);
        let style = dim_style(1, Some(2)).unwrap();
        assert!(style.contains("opacity: 0.55"));
        assert!(style.contains("grayscale(40%) brightness(0.8)"));
    }
}
