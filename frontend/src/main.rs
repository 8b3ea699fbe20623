use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod accordion;
mod contact;
mod counter;
mod nav;
mod places;
mod reviews;
mod utils {
    pub mod dom;
    pub mod frame;
    pub mod observer;
    pub mod timing;
}
mod effects {
    pub mod parallax;
    pub mod pointer;
    pub mod reveal;
    pub mod smooth_scroll;
}
mod components {
    pub mod back_to_top;
    pub mod footer;
    pub mod header;
    pub mod magnetic;
    pub mod notification;
}
mod pages {
    pub mod contact;
    pub mod faq;
    pub mod home;
    pub mod portfolio;
    pub mod reviews;
    pub mod services;
    pub mod stats;
}

use components::notification::NotificationProvider;
use pages::home::Home;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <NotificationProvider>
                <Switch<Route> render={switch} />
            </NotificationProvider>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
