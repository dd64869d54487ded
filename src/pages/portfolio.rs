use log::info;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::contact_modal::ContactModal;
use crate::components::cursor::CursorMarker;
use crate::components::hero::{Footer, Hero, Tagline};
use crate::components::profile_image::ProfileImage;
use crate::components::social_links::SocialLinks;
use crate::listener::use_pointer_tracking;
use crate::state::{
    CloseReason, HoverTarget, PointerPosition, PortfolioAction, PortfolioState, SocialKind,
};

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let state = use_reducer(PortfolioState::default);

    use_mount(|| info!("Portfolio mounted"));
    use_unmount(|| info!("Portfolio unmounted"));

    let on_pointer_move = {
        let dispatcher = state.dispatcher();
        Callback::from(move |position: PointerPosition| {
            dispatcher.dispatch(PortfolioAction::PointerMoved(position))
        })
    };
    use_pointer_tracking(on_pointer_move);

    let on_image_hover = {
        let dispatcher = state.dispatcher();
        Callback::from(move |entered: bool| {
            let target = HoverTarget::ProfileImage;
            dispatcher.dispatch(if entered {
                PortfolioAction::HoverEnter(target)
            } else {
                PortfolioAction::HoverLeave(target)
            });
        })
    };

    let on_open_contact = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PortfolioAction::OpenContact))
    };

    let on_link_hover = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(kind, entered): (SocialKind, bool)| {
            let target = HoverTarget::Social(kind);
            dispatcher.dispatch(if entered {
                PortfolioAction::HoverEnter(target)
            } else {
                PortfolioAction::HoverLeave(target)
            });
        })
    };

    let on_close_contact = {
        let dispatcher = state.dispatcher();
        Callback::from(move |reason: CloseReason| dispatcher.dispatch(PortfolioAction::CloseContact(reason)))
    };

    html! {
        <div class="portfolio">
            <CursorMarker position={state.pointer} hovering={state.is_hovering_interactive()} />

            <Hero />
            <ProfileImage on_hover={on_image_hover} on_open_contact={on_open_contact} />
            <Tagline />
            <SocialLinks hovered_label={state.hovered_label()} on_hover={on_link_hover} />
            <Footer />

            <ContactModal open={state.is_contact_open()} on_close={on_close_contact} />

            <style>
                {r#"
                    @keyframes enterDown {
                        from { opacity: 0; transform: translateY(-20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes enterUp {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes enterScale {
                        from { opacity: 0; transform: scale(0.8); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    @keyframes enterFade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .enter-down { animation: enterDown 0.3s ease-out both; }
                    .enter-up { animation: enterUp 0.3s ease-out both; }
                    .enter-scale { animation: enterScale 0.3s ease-out both; }
                    .enter-fade { animation: enterFade 0.3s ease-out both; }
                    .delay-200 { animation-delay: 0.2s; }
                    .delay-300 { animation-delay: 0.3s; }
                    .delay-400 { animation-delay: 0.4s; }

                    .portfolio {
                        min-height: 100vh;
                        background: #fff;
                        color: #000;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        cursor: none;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .portfolio a,
                    .portfolio .profile-overlay {
                        cursor: none;
                    }
                    .hero {
                        text-align: center;
                    }
                    .hero-name {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin: 0 0 0.5rem;
                    }
                    .hero-role {
                        font-size: 1.25rem;
                        margin: 0 0 1.5rem;
                    }
                    .tagline {
                        font-size: 1.125rem;
                        max-width: 28rem;
                        text-align: center;
                        margin: 0 0 1.5rem;
                    }
                    .portfolio-footer {
                        margin-top: 2rem;
                        font-size: 0.75rem;
                        color: #6b7280;
                    }
                    @media (max-width: 640px) {
                        .hero-name {
                            font-size: 1.875rem;
                        }
                        .hero-role {
                            font-size: 1.125rem;
                        }
                        .tagline {
                            font-size: 1rem;
                        }
                    }
                    @media (hover: none) {
                        .portfolio,
                        .portfolio a,
                        .portfolio .profile-overlay {
                            cursor: auto;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
