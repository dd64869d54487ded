use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod error;
pub mod icons;
pub mod listener;
pub mod state;

pub mod components {
    pub mod contact_modal;
    pub mod cursor;
    pub mod hero;
    pub mod profile_image;
    pub mod social_links;
}

pub mod pages {
    pub mod portfolio;
    pub mod resume;
}

use pages::{
    portfolio::Portfolio,
    resume::{NotFound, Resume},
};

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/resume")]
    Resume,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        }
        Route::Resume => {
            info!("Rendering Resume page");
            html! { <Resume /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
