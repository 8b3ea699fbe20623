use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

use crate::accordion::Accordion;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: String,
    accordion: Accordion,
    on_toggle: Callback<usize>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = props.accordion.is_open(props.index);

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class="faq-item">
            <button class={classes!("faq-q", is_open.then(|| "active"))}
                aria-expanded={if is_open { "true" } else { "false" }}
                onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-a" style={props.accordion.answer_display(props.index)}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_state(Accordion::default);

    let on_toggle = {
        let accordion = accordion.clone();
        Callback::from(move |index: usize| accordion.set(accordion.toggle(index)))
    };

    let item = |index: usize, question: &str, answer: &str| {
        html! {
            <FaqItem {index} question={question.to_string()} accordion={*accordion} on_toggle={on_toggle.clone()}>
                <p>{answer.to_string()}</p>
            </FaqItem>
        }
    };

    html! {
        <section id="faq" class="faq">
            <div class="container">
                <h2>{"Frequently Asked Questions"}</h2>
                <p class="muted">{"Straight answers before you pick up the phone."}</p>
                <div class="section-line"></div>
                <div class="faq-list">
                    { item(0, "Do you give free quotes?",
                        "Yes. We visit, take measurements and send an itemised quote at no cost.") }
                    { item(1, "How long does a modular kitchen take?",
                        "Most kitchens are designed, built and installed within three to four weeks.") }
                    { item(2, "Which wood do you work with?",
                        "Teak, sheesham and oak for solid pieces, plus marine ply and MDF with laminate or veneer finishes.") }
                    { item(3, "Do you repair old furniture?",
                        "We restore, polish and re-upholster furniture, and fix hinges, drawers and loose joints.") }
                    { item(4, "Is there a warranty?",
                        "All installations carry a one-year workmanship warranty on top of the hardware manufacturer's.") }
                </div>
            </div>
        </section>
    }
}
