use log::warn;
use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{LinkTarget, SocialLinkConfig, SOCIAL_LINKS};
use crate::icons;
use crate::state::SocialKind;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SocialLinkProps {
    pub link: SocialLinkConfig,
    /// `(kind, true)` on enter, `(kind, false)` on leave.
    pub on_hover: Callback<(SocialKind, bool)>,
}

/// One entry of the list. Hover is reported from the wrapping `.social-entry`
/// so external anchors and router links behave the same.
#[function_component(SocialLink)]
pub fn social_link(props: &SocialLinkProps) -> Html {
    let kind = props.link.kind;
    let anchor_ref = use_node_ref();

    // `Link` renders its own anchor, so the accessible name is set on it after render.
    {
        let anchor_ref = anchor_ref.clone();
        use_effect_with_deps(
            move |label| {
                if let Some(anchor) = anchor_ref.cast::<Element>() {
                    if let Err(err) = anchor.set_attribute("aria-label", label) {
                        warn!("Could not label `{}` link: {:?}", label, err);
                    }
                }
                || ()
            },
            kind.label(),
        );
    }

    let onmouseenter = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit((kind, true)))
    };
    let onmouseleave = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit((kind, false)))
    };

    let (window_target, rel) = if props.link.new_tab {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };

    let link = match props.link.target {
        LinkTarget::External(href) => html! {
            <a
                class="social-link"
                href={href}
                target={window_target}
                rel={rel}
                ref={anchor_ref}
            >
                {icons::for_social(kind, 24)}
            </a>
        },
        LinkTarget::Internal(route) => html! {
            <Link<Route> to={route} classes="social-link" anchor_ref={anchor_ref}>
                {icons::for_social(kind, 24)}
            </Link<Route>>
        },
    };

    html! {
        <span class="social-entry" onmouseenter={onmouseenter} onmouseleave={onmouseleave}>
            {link}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct SocialLinksProps {
    pub hovered_label: Option<&'static str>,
    pub on_hover: Callback<(SocialKind, bool)>,
}

#[function_component(SocialLinks)]
pub fn social_links(props: &SocialLinksProps) -> Html {
    html! {
        <>
            <nav class="social-links enter-up delay-300">
                { for SOCIAL_LINKS.iter().map(|link| html! {
                    <SocialLink key={link.kind.label()} link={*link} on_hover={props.on_hover.clone()} />
                }) }
            </nav>
            <div class="social-status enter-fade delay-400" aria-live="polite">
                if let Some(label) = props.hovered_label {
                    <p>{label}</p>
                }
            </div>
            <style>
                {r#"
                    .social-links {
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                    }
                    .social-entry {
                        display: inline-flex;
                    }
                    .social-link {
                        color: #000;
                        display: inline-flex;
                        transition: transform 0.15s ease, color 0.15s ease;
                    }
                    .social-link:hover {
                        color: #4b5563;
                        transform: scale(1.2) rotate(5deg);
                    }
                    .social-link:active {
                        transform: scale(0.9);
                    }
                    .social-status {
                        margin-top: 1.5rem;
                        height: 1.5rem;
                        font-size: 0.875rem;
                    }
                "#}
            </style>
        </>
    }
}
