use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::counter::{CounterBoard, STATS};
use crate::utils::frame;
use crate::utils::observer::OneShotObserver;

pub enum CounterAction {
    Frame { index: usize, label: String },
}

#[derive(Clone, PartialEq)]
pub struct CounterLabels(Vec<String>);

impl Default for CounterLabels {
    fn default() -> Self {
        Self(STATS.iter().map(|stat| stat.initial_label()).collect())
    }
}

impl Reducible for CounterLabels {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let CounterAction::Frame { index, label } = action;
        if self.0.get(index) == Some(&label) {
            return self;
        }
        let mut labels = self.0.clone();
        if let Some(slot) = labels.get_mut(index) {
            *slot = label;
        }
        Rc::new(Self(labels))
    }
}

fn start_counters(board: &RefCell<CounterBoard>, dispatcher: UseReducerDispatcher<CounterLabels>) {
    for (index, delay) in board.borrow_mut().claim() {
        let stat = STATS[index];
        let dispatcher = dispatcher.clone();
        Timeout::new(delay, move || {
            frame::animate(config::STAT_ANIMATION_DURATION, move |progress| {
                dispatcher.dispatch(CounterAction::Frame { index, label: stat.label_at(progress) });
            });
        })
        .forget();
    }
}

#[function_component(Stats)]
pub fn stats() -> Html {
    let section_ref = use_node_ref();
    let labels = use_reducer(CounterLabels::default);
    let board = use_mut_ref(|| CounterBoard::new(STATS.len()));

    {
        let dispatcher = labels.dispatcher();
        use_effect_with_deps(
            move |section: &NodeRef| {
                let section = section.cast::<web_sys::Element>();
                let observer = OneShotObserver::new(config::STATS_THRESHOLD, None, move |_| {
                    log::debug!("stats section visible, starting counters");
                    start_counters(&board, dispatcher.clone());
                });
                if let (Some(observer), Some(section)) = (&observer, &section) {
                    observer.observe(section);
                }
                move || drop(observer)
            },
            section_ref.clone(),
        );
    }

    html! {
        <section class="stats" ref={section_ref}>
            <div class="container grid stats-grid">
                { for STATS.iter().zip(labels.0.iter()).map(|(stat, label)| html! {
                    <div class="stat-card">
                        <span class="stat-number">{label.clone()}</span>
                        <span class="stat-label">{stat.label}</span>
                    </div>
                }) }
            </div>
        </section>
    }
}
