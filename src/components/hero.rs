use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <header class="hero enter-down">
            <h1 class="hero-name">{config::OWNER_NAME}</h1>
            <p class="hero-role">{config::OWNER_ROLE}</p>
        </header>
    }
}

#[function_component(Tagline)]
pub fn tagline() -> Html {
    html! {
        <p class="tagline enter-up delay-200">{config::TAGLINE}</p>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="portfolio-footer enter-fade delay-400">
            {format!("© {} {}", year, config::OWNER_NAME)}
        </footer>
    }
}
