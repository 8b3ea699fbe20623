use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::header::NAV_LINKS;
use crate::components::magnetic::{ButtonKind, MagneticButton};
use crate::config;
use crate::effects::reveal::use_footer_reveal;

pub fn current_year() -> i32 {
    Local::now().year()
}

/// The footer's quote button, magnetic like every other `.btn.primary`.
pub fn quote_button() -> ButtonKind {
    ButtonKind::Link("#contact".into())
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer_ref = use_node_ref();
    use_footer_reveal(footer_ref.clone());

    let whatsapp = format!("https://wa.me/{}", config::WHATSAPP_NUMBER);

    html! {
        <footer class="site-footer" ref={footer_ref}>
            <div class="container footer-cta">
                <h2 class="footer-cta-title">{"Have a project in mind?"}</h2>
                <p class="footer-cta-sub">{"Tell us what you need and we will get back to you the same day."}</p>
                <div class="footer-cta-actions">
                    <MagneticButton kind={quote_button()}>{"Get a free quote"}</MagneticButton>
                    <a href={whatsapp} class="btn ghost" target="_blank" rel="noopener noreferrer">{"Chat on WhatsApp"}</a>
                </div>
            </div>
            <div class="container footer-grid">
                <div class="footer-brand">
                    <span class="brand">{"Ravi Woodcraft"}</span>
                    <p class="muted">{"Custom furniture, kitchens and interior woodwork."}</p>
                </div>
                <div class="footer-col">
                    <h4>{"Explore"}</h4>
                    <ul>
                        { for NAV_LINKS.iter().map(|(href, label)| html! { <li><a href={*href}>{*label}</a></li> }) }
                    </ul>
                </div>
                <div class="footer-col">
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li><a href={format!("tel:+{}", config::WHATSAPP_NUMBER)}>{"Call us"}</a></li>
                        <li>{"Mon to Sat, 9am to 7pm"}</li>
                    </ul>
                </div>
                <div class="footer-map-wrapper">
                    <iframe title="Workshop location" class="footer-map" loading="lazy"
                        src="https://maps.google.com/maps?q=Hyderabad&output=embed"></iframe>
                </div>
            </div>
            <div class="container footer-bottom">
                <p>{"© "}<span id="year">{current_year().to_string()}</span>{" Ravi Woodcraft. All rights reserved."}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_button_is_a_magnetic_link_to_contact() {
        assert_eq!(quote_button(), ButtonKind::Link("#contact".into()));
    }
}
