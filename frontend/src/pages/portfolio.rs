use yew::prelude::*;

use crate::effects::pointer::dim_style;

const PROJECTS: [(&str, &str); 6] = [
    ("/assets/portfolio/kitchen.jpg", "Walnut-finish modular kitchen"),
    ("/assets/portfolio/wardrobe.jpg", "Floor-to-ceiling sliding wardrobe"),
    ("/assets/portfolio/tv-unit.jpg", "Floating TV unit with fluted panels"),
    ("/assets/portfolio/dining.jpg", "Six-seater sheesham dining set"),
    ("/assets/portfolio/office.jpg", "Open-plan office workstations"),
    ("/assets/portfolio/door.jpg", "Hand-carved teak main door"),
];

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let hovered = use_state(|| None::<usize>);

    html! {
        <section id="portfolio" class="portfolio">
            <div class="container">
                <h2>{"Recent Work"}</h2>
                <p class="muted">{"A few of the homes and offices we have finished this year."}</p>
                <div class="section-line"></div>
                <div class="portfolio-grid">
                    { for PROJECTS.iter().enumerate().map(|(index, (src, caption))| {
                        let onmouseenter = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                        };
                        let onmouseleave = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(None))
                        };
                        html! {
                            <figure class="portfolio-card" style={dim_style(index, *hovered)}
                                {onmouseenter} {onmouseleave}>
                                <img src={*src} alt={*caption} loading="lazy" />
                                <figcaption>{*caption}</figcaption>
                            </figure>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
