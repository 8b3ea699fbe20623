use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, FocusEvent, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::components::magnetic::{ButtonKind, MagneticButton};
use crate::components::notification::use_notifier;
use crate::config;
use crate::contact::{self, ContactForm};
use crate::utils::dom;

fn field_value(form: &Element, selector: &str) -> String {
    let Ok(Some(field)) = form.query_selector(selector) else {
        return String::new();
    };
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    field
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

fn read_form(form: &Element) -> ContactForm {
    ContactForm {
        name: field_value(form, "input[name=\"name\"]"),
        phone: field_value(form, "input[name=\"phone\"]"),
        message: field_value(form, "textarea[name=\"message\"]"),
    }
}

fn focus_field(form: &Element, name: &str) {
    let field = form
        .query_selector(&format!("[name=\"{name}\"]"))
        .ok()
        .flatten()
        .and_then(|el| dom::as_html(&el));
    if let Some(field) = field {
        let _ = field.focus();
    }
}

/// Floating labels: the wrapper keeps `focused` while the field has focus or a value.
fn floating_label(focused: bool) -> Callback<FocusEvent> {
    Callback::from(move |e: FocusEvent| {
        let Some(field) = e.target_dyn_into::<HtmlElement>() else {
            return;
        };
        let Some(wrapper) = field.parent_element() else {
            return;
        };
        let has_value = field
            .dyn_ref::<HtmlInputElement>()
            .map(|input| !input.value().is_empty())
            .or_else(|| field.dyn_ref::<HtmlTextAreaElement>().map(|area| !area.value().is_empty()))
            .unwrap_or(false);
        if focused {
            let _ = wrapper.class_list().add_1("focused");
        } else if !has_value {
            let _ = wrapper.class_list().remove_1("focused");
        }
    })
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form_ref = use_node_ref();
    let submitted = use_state(|| false);
    let notifier = use_notifier();

    let onsubmit = {
        let form_ref = form_ref.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };

            let request = match read_form(&form).validate() {
                Ok(request) => request,
                Err(err) => {
                    if let Some(notifier) = &notifier {
                        notifier.error(err.to_string());
                    }
                    if let Some(name) = contact::invalid_field(&err) {
                        focus_field(&form, name);
                    }
                    return;
                }
            };

            let url = request.whatsapp_url();
            if let Some(notifier) = &notifier {
                notifier.success("Opening WhatsApp...");
            }
            log::info!("contact request from {} forwarded to WhatsApp", request.name);
            if let Some(window) = dom::window() {
                if let Err(err) = window.open_with_url_and_target(&url, "_blank") {
                    log::warn!("could not open WhatsApp link: {:?}", err);
                }
            }

            submitted.set(true);
            let submitted = submitted.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::FORM_RESET_DELAY_MS).await;
                form.reset();
                submitted.set(false);
            });
        })
    };

    let onfocusin = floating_label(true);
    let onfocusout = floating_label(false);

    html! {
        <section id="contact" class="contact">
            <div class="container">
                <h2>{"Get a Free Quote"}</h2>
                <p class="muted">{"Send us a few details and we will continue the conversation on WhatsApp."}</p>
                <div class="section-line"></div>
                <form id="contact-form" ref={form_ref} novalidate={true}
                    class={classes!("contact-form", (*submitted).then(|| "submitted"))}
                    {onsubmit}>
                    <div class="field">
                        <label for="contact-name">{"Your name"}</label>
                        <input id="contact-name" name="name" type="text" autocomplete="name"
                            onfocus={onfocusin.clone()} onblur={onfocusout.clone()} />
                    </div>
                    <div class="field">
                        <label for="contact-phone">{"Phone number"}</label>
                        <input id="contact-phone" name="phone" type="tel" autocomplete="tel"
                            onfocus={onfocusin.clone()} onblur={onfocusout.clone()} />
                    </div>
                    <div class="field">
                        <label for="contact-message">{"What do you need?"}</label>
                        <textarea id="contact-message" name="message" rows="4"
                            onfocus={onfocusin} onblur={onfocusout} />
                    </div>
                    <MagneticButton kind={ButtonKind::Submit}>{"Send on WhatsApp"}</MagneticButton>
                </form>
            </div>
        </section>
    }
}
