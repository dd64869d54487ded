use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::icons;
use crate::Route;

const PAGE_STYLE: &str = r#"
    .resume-page {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1rem;
        padding: 1rem;
        background: #fff;
        color: #000;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .resume-page h1 {
        font-size: 1.875rem;
        font-weight: 700;
        margin: 0;
    }
    .resume-download {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        background: #000;
        color: #fff;
        padding: 0.5rem 1rem;
        border-radius: 0.375rem;
        text-decoration: none;
    }
    .resume-download:hover {
        background: #1f2937;
    }
    .back-home {
        color: #4b5563;
        font-size: 0.875rem;
    }
"#;

#[function_component(Resume)]
pub fn resume() -> Html {
    html! {
        <div class="resume-page">
            <h1>{"Resume"}</h1>
            <p>{format!("{}, {}", config::OWNER_NAME, config::OWNER_ROLE)}</p>
            <a
                class="resume-download"
                href={config::asset_url(config::RESUME_DOCUMENT)}
                download={config::RESUME_DOCUMENT}
            >
                {icons::file_text(20)}
                <span>{"Download PDF"}</span>
            </a>
            <Link<Route> to={Route::Home} classes="back-home">
                {"Back to Home"}
            </Link<Route>>
            <style>{PAGE_STYLE}</style>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="resume-page">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="back-home">
                {"Back to Home"}
            </Link<Route>>
            <style>{PAGE_STYLE}</style>
        </div>
    }
}
