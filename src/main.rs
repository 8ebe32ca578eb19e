use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod binder;
mod config;
mod dom;
mod lead;
mod overlay;
mod partners;
mod resolve;
mod tabs;
mod view_model;
mod visibility;

mod pages {
    pub mod partner;
    pub mod placeholder;
}
mod components {
    pub mod lead_form;
    pub mod tabs;
}

use pages::{
    partner::Microsite,
    placeholder::NotFound,
};

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
            info!("Rendering partner microsite");
            html! { <Microsite /> }
        },
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::LOG_LEVEL).expect("error initializing log");

    info!("Starting partner microsite");
    yew::Renderer::<App>::new().render();
}
