use std::rc::Rc;

use gloo_timers::callback::Timeout;
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::config;
use crate::utils::frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn background(self) -> &'static str {
        match self {
            Severity::Info => "#3b82f6",
            Severity::Success => "#22c55e",
            Severity::Error => "#ef4444",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Severity::Info => "notification-info",
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mounted off-screen, waiting for the next frame.
    Entering,
    Shown,
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

impl Toast {
    pub fn transform(&self) -> &'static str {
        match self.phase {
            Phase::Shown => "translateX(0)",
            Phase::Entering | Phase::Leaving => "translateX(120%)",
        }
    }
}

pub enum NotificationAction {
    Show { message: String, severity: Severity },
    Advance { id: u64, phase: Phase },
    Remove { id: u64 },
}

/// The single toast slot. Actions carrying an id only touch the toast they
/// were scheduled for; a replaced toast's timers become no-ops.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationState {
    pub current: Option<Toast>,
    next_id: u64,
}

impl Reducible for NotificationState {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NotificationAction::Show { message, severity } => {
                next.next_id += 1;
                next.current = Some(Toast {
                    id: next.next_id,
                    message,
                    severity,
                    phase: Phase::Entering,
                });
            }
            NotificationAction::Advance { id, phase } => match next.current.as_mut() {
                Some(toast) if toast.id == id => toast.phase = phase,
                _ => return self,
            },
            NotificationAction::Remove { id } => match &next.current {
                Some(toast) if toast.id == id => next.current = None,
                _ => return self,
            },
        }
        Rc::new(next)
    }
}

/// Handle shared through context so any section can raise a toast.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatcher: UseReducerDispatcher<NotificationState>,
}

impl Notifier {
    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        self.dispatcher.dispatch(NotificationAction::Show {
            message: message.into(),
            severity,
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, Severity::Error);
    }
}

#[hook]
pub fn use_notifier() -> Option<Notifier> {
    use_context::<Notifier>()
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let state = use_reducer(NotificationState::default);
    let notifier = Notifier {
        dispatcher: state.dispatcher(),
    };

    // Drive the slide-in / dwell / slide-out cycle for whichever toast is current.
    {
        let dispatcher = state.dispatcher();
        let current_id = state.current.as_ref().map(|toast| toast.id);
        use_effect_with_deps(
            move |current_id: &Option<u64>| {
                let mut timers = Vec::new();
                if let Some(id) = *current_id {
                    let enter = dispatcher.clone();
                    frame::next_frame(move || {
                        enter.dispatch(NotificationAction::Advance { id, phase: Phase::Shown })
                    });

                    let leave = dispatcher.clone();
                    timers.push(Timeout::new(config::NOTIFICATION_DWELL_MS, move || {
                        leave.dispatch(NotificationAction::Advance { id, phase: Phase::Leaving })
                    }));

                    let remove = dispatcher;
                    timers.push(Timeout::new(
                        config::NOTIFICATION_DWELL_MS + config::NOTIFICATION_EXIT_MS,
                        move || remove.dispatch(NotificationAction::Remove { id }),
                    ));
                }
                move || drop(timers)
            },
            current_id,
        );
    }

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { for props.children.iter() }
            if let Some(toast) = state.current.clone() {
                <NotificationToast {toast} />
            }
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct NotificationToastProps {
    toast: Toast,
}

#[styled_component]
fn NotificationToast(props: &NotificationToastProps) -> Html {
    let toast = &props.toast;
    let base = css!(
        r#"
        position: fixed;
        top: 100px;
        right: 20px;
        padding: 16px 24px;
        color: white;
        border-radius: 12px;
        font-weight: 500;
        box-shadow: 0 10px 40px rgba(0,0,0,0.2);
        z-index: 10000;
        transition: transform 0.4s cubic-bezier(0.34, 1.56, 0.64, 1);
        "#
    );
    let style = format!(
        "background: {}; transform: {};",
        toast.severity.background(),
        toast.transform()
    );

    html! {
        <div key={toast.id.to_string()}
            class={classes!(base, "notification", toast.severity.class())}
            role="status"
            {style}>
            { &toast.message }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(state: Rc<NotificationState>, message: &str, severity: Severity) -> Rc<NotificationState> {
        state.reduce(NotificationAction::Show {
            message: message.to_string(),
            severity,
        })
    }

    #[test]
    fn severities_map_to_colors() {
        assert_eq!(Severity::Info.background(), "#3b82f6");
        assert_eq!(Severity::Success.background(), "#22c55e");
        assert_eq!(Severity::Error.background(), "#ef4444");
    }

    #[test]
    fn new_toast_replaces_existing() {
        let state = show(Rc::default(), "first", Severity::Info);
        let first_id = state.current.as_ref().unwrap().id;
        let state = show(state, "second", Severity::Error);

        let toast = state.current.as_ref().unwrap();
        assert_ne!(toast.id, first_id);
        assert_eq!(toast.message, "second");
        assert_eq!(toast.phase, Phase::Entering);
    }

    #[test]
    fn toast_lifecycle_slides_in_then_out() {
        let state = show(Rc::default(), "hello", Severity::Success);
        let id = state.current.as_ref().unwrap().id;
        assert_eq!(state.current.as_ref().unwrap().transform(), "translateX(120%)");

        let state = state.reduce(NotificationAction::Advance { id, phase: Phase::Shown });
        assert_eq!(state.current.as_ref().unwrap().transform(), "translateX(0)");

        let state = state.reduce(NotificationAction::Advance { id, phase: Phase::Leaving });
        assert_eq!(state.current.as_ref().unwrap().transform(), "translateX(120%)");

        let state = state.reduce(NotificationAction::Remove { id });
        assert!(state.current.is_none());
    }

    #[test]
    fn stale_timers_leave_replacement_alone() {
        let state = show(Rc::default(), "old", Severity::Info);
        let old_id = state.current.as_ref().unwrap().id;
        let state = show(state, "new", Severity::Success);

        let state = state.reduce(NotificationAction::Advance { id: old_id, phase: Phase::Leaving });
        let state = state.reduce(NotificationAction::Remove { id: old_id });

        let toast = state.current.as_ref().expect("replacement survives");
        assert_eq!(toast.message, "new");
        assert_eq!(toast.phase, Phase::Entering);
    }
}
