use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config;
use crate::nav::{self, NavEvent, NavState};
use crate::utils::dom;
use crate::utils::frame::FrameGuard;
use crate::utils::timing::Debounced;

pub const NAV_LINKS: [(&str, &str); 6] = [
    ("#services", "Services"),
    ("#portfolio", "Work"),
    ("#reviews", "Reviews"),
    ("#faq", "FAQ"),
    ("#areas", "Areas"),
    ("#contact", "Contact"),
];

impl Reducible for NavState {
    type Action = NavEvent;

    fn reduce(self: Rc<Self>, event: Self::Action) -> Rc<Self> {
        let next = self.apply(event);
        if next == *self {
            return self;
        }
        log::debug!("nav {:?} -> {:?} on {:?}", *self, next, event);
        Rc::new(next)
    }
}

fn contains_target(node: &NodeRef, target: &Node) -> bool {
    node.cast::<Node>()
        .map(|n| n.contains(Some(target)))
        .unwrap_or(false)
}

#[function_component(Header)]
pub fn header() -> Html {
    let is_scrolled = use_state(|| nav::is_scrolled(dom::scroll_y()));
    let nav_state = use_reducer(NavState::default);
    let scroll_guard = use_state(FrameGuard::new);
    let nav_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    let dispatch = {
        let dispatcher = nav_state.dispatcher();
        Callback::from(move |event: NavEvent| dispatcher.dispatch(event))
    };

    // Body scroll lock follows the menu.
    use_effect_with_deps(
        |state: &NavState| {
            if let Some(body) = dom::body() {
                let overflow = state.body_overflow();
                let style = body.style();
                let _ = if overflow.is_empty() {
                    style.remove_property("overflow").map(|_| ())
                } else {
                    style.set_property("overflow", overflow)
                };
            }
            || ()
        },
        *nav_state,
    );

    {
        let is_scrolled = is_scrolled.clone();
        let guard = (*scroll_guard).clone();
        use_event_with_window("scroll", move |_: Event| {
            let is_scrolled = is_scrolled.clone();
            guard.schedule(move || is_scrolled.set(nav::is_scrolled(dom::scroll_y())));
        });
    }

    {
        let dispatch = dispatch.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                dispatch.emit(NavEvent::Escape);
            }
        });
    }

    {
        let dispatch = dispatch.clone();
        let nav_ref = nav_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            if !contains_target(&nav_ref, &target) && !contains_target(&toggle_ref, &target) {
                dispatch.emit(NavEvent::ClickedOutside);
            }
        });
    }

    {
        let dispatch = dispatch.clone();
        let on_resize = use_state(move || {
            Debounced::new(config::RESIZE_DEBOUNCE_MS, move || {
                dispatch.emit(NavEvent::Resized { width: dom::inner_width() });
            })
        });
        let resize = (*on_resize).clone();
        use_event_with_window("resize", move |_: Event| resize.call());

        let on_resize = on_resize.clone();
        use_effect_with_deps(move |_| move || on_resize.cancel(), ());
    }

    let toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(NavEvent::Toggle))
    };

    let close_on_link = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(NavEvent::LinkClicked))
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="container header-inner">
                <a href="#top" class="brand">{"Ravi Woodcraft"}</a>
                <button
                    id="nav-toggle"
                    class="nav-toggle"
                    ref={toggle_ref}
                    aria-controls="nav"
                    aria-expanded={nav_state.aria_expanded()}
                    aria-label="Toggle navigation"
                    onclick={toggle}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav id="nav" ref={nav_ref} class={classes!("site-nav", nav_state.is_open().then(|| "active"))}>
                    {
                        NAV_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href} onclick={close_on_link.clone()}>{*label}</a>
                        }).collect::<Html>()
                    }
                </nav>
            </div>
        </header>
    }
}
