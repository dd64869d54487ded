use yew::prelude::*;

use crate::state::SocialKind;

fn outline(size: u32, body: Html) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {body}
        </svg>
    }
}

pub fn code(size: u32) -> Html {
    outline(size, html! {
        <>
            <polyline points="16 18 22 12 16 6" />
            <polyline points="8 6 2 12 8 18" />
        </>
    })
}

pub fn coffee(size: u32) -> Html {
    outline(size, html! {
        <>
            <path d="M17 8h1a4 4 0 1 1 0 8h-1" />
            <path d="M3 8h14v9a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4Z" />
            <line x1="6" x2="6" y1="2" y2="4" />
            <line x1="10" x2="10" y1="2" y2="4" />
            <line x1="14" x2="14" y1="2" y2="4" />
        </>
    })
}

pub fn send(size: u32) -> Html {
    outline(size, html! {
        <>
            <path d="m22 2-7 20-4-9-9-4Z" />
            <path d="M22 2 11 13" />
        </>
    })
}

pub fn file_text(size: u32) -> Html {
    outline(size, html! {
        <>
            <path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" />
            <path d="M14 2v4a2 2 0 0 0 2 2h4" />
            <path d="M10 9H8" />
            <path d="M16 13H8" />
            <path d="M16 17H8" />
        </>
    })
}

pub fn close(size: u32) -> Html {
    outline(size, html! {
        <>
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        </>
    })
}

pub fn for_social(kind: SocialKind, size: u32) -> Html {
    match kind {
        SocialKind::Code => code(size),
        SocialKind::CoffeeChat => coffee(size),
        SocialKind::Contact => send(size),
        SocialKind::Resume => file_text(size),
    }
}
