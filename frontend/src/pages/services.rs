use yew::prelude::*;

use crate::effects::pointer::{tilt_transform, use_pointer_transform};

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub text: AttrValue,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let node = use_node_ref();
    let (transform, onmousemove, onmouseleave) = use_pointer_transform(node.clone(), tilt_transform);
    let style = transform.map(|t| format!("transform: {t};"));

    html! {
        <article ref={node} class="card" {style} {onmousemove} {onmouseleave}>
            <span class="card-icon" aria-hidden="true">{&*props.icon}</span>
            <h3>{&*props.title}</h3>
            <p>{&*props.text}</p>
        </article>
    }
}

const SERVICES: [(&str, &str, &str); 6] = [
    ("🍳", "Modular Kitchens", "Cabinets, shutters and countertops built to the millimetre for your space."),
    ("🚪", "Wardrobes & Doors", "Sliding and hinged wardrobes, main doors and interior doors in solid wood or ply."),
    ("🛋️", "Custom Furniture", "Beds, sofas, dining sets and study tables designed around how you live."),
    ("📺", "TV Units & Shelving", "Wall units, bookshelves and display cabinets with concealed wiring."),
    ("🏢", "Office Interiors", "Workstations, reception desks and storage for shops and offices."),
    ("🔧", "Repairs & Polishing", "Restoration, re-polishing and hardware replacement for older pieces."),
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services">
            <div class="container">
                <h2>{"What We Build"}</h2>
                <p class="muted">{"From a single shelf to a full home interior, every piece is made in our own workshop."}</p>
                <div class="section-line"></div>
                <div class="grid services-grid">
                    { for SERVICES.iter().map(|(icon, title, text)| html! {
                        <ServiceCard icon={*icon} title={*title} text={*text} />
                    }) }
                </div>
            </div>
        </section>
    }
}
