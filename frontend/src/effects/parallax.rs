use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config;
use crate::utils::dom;
use crate::utils::frame::FrameGuard;

pub const OFFSET_PROPERTY: &str = "--parallax-offset";

/// Offset for the hero background while the hero is still on screen.
pub fn parallax_offset(scroll_y: f64, hero_height: f64) -> Option<f64> {
    (scroll_y < hero_height).then(|| scroll_y * config::PARALLAX_FACTOR)
}

/// Drives `--parallax-offset` on `hero`. Disabled on viewports narrower than
/// the nav breakpoint at mount time.
#[hook]
pub fn use_parallax(hero: NodeRef) {
    let enabled = use_state(|| dom::inner_width() >= config::NAV_BREAKPOINT);
    let guard = use_state(FrameGuard::new);

    let enabled = *enabled;
    let guard = (*guard).clone();
    use_event_with_window("scroll", move |_: Event| {
        if !enabled {
            return;
        }
        let hero = hero.clone();
        guard.schedule(move || {
            let Some(element) = hero.cast::<web_sys::HtmlElement>() else {
                return;
            };
            if let Some(offset) = parallax_offset(dom::scroll_y(), element.offset_height() as f64) {
                let _ = element.style().set_property(OFFSET_PROPERTY, &format!("{offset}px"));
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_tracks_scroll_inside_hero() {
        assert_eq!(parallax_offset(0.0, 800.0), Some(0.0));
        assert_eq!(parallax_offset(100.0, 800.0), Some(40.0));
    }

    #[test]
    fn offset_freezes_past_hero() {
        assert_eq!(parallax_offset(800.0, 800.0), None);
        assert_eq!(parallax_offset(1200.0, 800.0), None);
    }
}
