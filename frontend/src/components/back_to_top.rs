use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config;
use crate::effects::smooth_scroll::smooth_scroll_to;
use crate::utils::dom;
use crate::utils::frame::FrameGuard;

pub fn is_visible(scroll_y: f64) -> bool {
    scroll_y > config::BACK_TO_TOP_THRESHOLD
}

pub fn button_style(visible: bool) -> String {
    let (opacity, pointer_events) = if visible { ("1", "auto") } else { ("0", "none") };
    format!(
        "opacity: {opacity}; pointer-events: {pointer_events}; transition: opacity 0.3s, transform 0.3s, box-shadow 0.3s;"
    )
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state(|| false);
    let guard = use_state(FrameGuard::new);

    {
        let visible = visible.clone();
        let guard = (*guard).clone();
        use_event_with_window("scroll", move |_: Event| {
            let visible = visible.clone();
            guard.schedule(move || visible.set(is_visible(dom::scroll_y())));
        });
    }

    let onclick = Callback::from(|_: MouseEvent| smooth_scroll_to(0.0));

    html! {
        <button id="back-to-top" class="back-to-top" aria-label="Back to top"
            style={button_style(*visible)} {onclick}>
            {"↑"}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appears_only_after_threshold() {
        assert!(!is_visible(0.0));
        assert!(!is_visible(600.0));
        assert!(is_visible(601.0));
    }

    #[test]
    fn hidden_button_ignores_pointer() {
        let hidden = button_style(false);
        assert!(hidden.starts_with("opacity: 0; pointer-events: none;"));
        let shown = button_style(true);
        assert!(shown.starts_with("opacity: 1; pointer-events: auto;"));
    }
}
