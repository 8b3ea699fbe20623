use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::magnetic::{ButtonKind, MagneticButton};
use crate::effects::parallax::use_parallax;
use crate::effects::reveal::use_scroll_reveal;
use crate::effects::smooth_scroll::use_smooth_scroll;
use crate::pages::{
    contact::Contact, faq::Faq, portfolio::Portfolio, reviews::Reviews, services::Services,
    stats::Stats,
};
use crate::utils::dom;

const SERVICE_AREAS: [&str; 8] = [
    "Banjara Hills",
    "Jubilee Hills",
    "Gachibowli",
    "Madhapur",
    "Kondapur",
    "Kukatpally",
    "Secunderabad",
    "Begumpet",
];

#[function_component(Hero)]
fn hero() -> Html {
    let hero_ref = use_node_ref();
    use_parallax(hero_ref.clone());

    html! {
        <section id="top" class="hero" ref={hero_ref}>
            <div class="container hero-content">
                <p class="eyebrow">{"Carpentry & interior woodwork"}</p>
                <h1>{"Furniture made to fit your home, not the other way round"}</h1>
                <p class="hero-sub">
                    {"Kitchens, wardrobes and custom pieces designed, built and installed by one team."}
                </p>
                <div class="hero-actions">
                    <MagneticButton kind={ButtonKind::Link("#contact".into())}>{"Get a free quote"}</MagneticButton>
                    <a href="#portfolio" class="btn ghost">{"See our work"}</a>
                </div>
            </div>
        </section>
    }
}

#[function_component(ServiceAreas)]
fn service_areas() -> Html {
    html! {
        <section id="areas" class="service-areas">
            <div class="container">
                <h2>{"Areas We Serve"}</h2>
                <p class="muted">{"Site visits are free anywhere in these neighbourhoods."}</p>
                <ul class="areas">
                    { for SERVICE_AREAS.iter().map(|area| html! { <li>{*area}</li> }) }
                </ul>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_reveal();
    use_smooth_scroll();

    use_effect_with_deps(
        |_| {
            if let Some(body) = dom::body() {
                let _ = body.class_list().add_1("loaded");
            }
            log::info!("✨ Premium animations initialized");
            || ()
        },
        (),
    );

    html! {
        <>
            <Header />
            <main>
                <Hero />
                <Services />
                <Stats />
                <Portfolio />
                <Reviews />
                <Faq />
                <ServiceAreas />
                <Contact />
            </main>
            <Footer />
            <BackToTop />
        </>
    }
}
