use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config;
use crate::icons;
use crate::state::{CloseReason, ModalPresence};

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub open: bool,
    pub on_close: Callback<CloseReason>,
}

/// Contact form overlay. Submitting only closes it; nothing is sent.
#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    let presence = use_state(|| ModalPresence::initial(props.open));
    // Bumped on every open so the form remounts empty.
    let generation = use_state(|| 0u32);

    {
        let presence = presence.clone();
        let generation = generation.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let current = *presence;
                let next = current.on_open_changed(*open);
                if next == ModalPresence::Shown && current != ModalPresence::Shown {
                    generation.set(*generation + 1);
                }
                if next != current {
                    presence.set(next);
                }

                let exit_timer = (next == ModalPresence::Leaving).then(|| {
                    let presence = presence.clone();
                    Timeout::new(config::MODAL_TRANSITION_MS, move || {
                        presence.set(next.on_exit_finished());
                    })
                });

                // Dropping a pending Timeout cancels it.
                move || drop(exit_timer)
            },
            props.open,
        );
    }

    if !presence.is_rendered() {
        return html! {};
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(CloseReason::Backdrop))
    };
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(CloseReason::CloseButton)
        })
    };
    let onsubmit = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            debug!("Contact form submitted; message discarded");
            on_close.emit(CloseReason::Submitted)
        })
    };

    html! {
        <div
            class={classes!("modal-backdrop", presence.as_str())}
            data-state={presence.as_str()}
            onclick={on_backdrop_click}
        >
            <div
                class="modal-panel"
                role="dialog"
                aria-modal="true"
                aria-labelledby="contact-title"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <div class="modal-header">
                    <h2 id="contact-title">{"Get in Touch"}</h2>
                    <button type="button" class="modal-close" aria-label="Close" onclick={on_close_click}>
                        {icons::close(24)}
                    </button>
                </div>
                <div class="modal-body">
                    <form key={generation.to_string()} class="contact-form" onsubmit={onsubmit}>
                        <div>
                            <label for="name">{"Name"}</label>
                            <input type="text" id="name" name="name" required={true} />
                        </div>
                        <div>
                            <label for="email">{"Email"}</label>
                            <input type="email" id="email" name="email" required={true} />
                        </div>
                        <div>
                            <label for="message">{"Message"}</label>
                            <textarea id="message" name="message" rows="4" required={true} />
                        </div>
                        <button type="submit" class="contact-submit">{"Send Message"}</button>
                    </form>
                </div>
            </div>
            <style>
                {r#"
                    @keyframes backdropIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes backdropOut {
                        from { opacity: 1; }
                        to { opacity: 0; }
                    }
                    @keyframes panelIn {
                        from { transform: translateY(20px) scale(0.9); }
                        to { transform: translateY(0) scale(1); }
                    }
                    @keyframes panelOut {
                        from { transform: translateY(0) scale(1); }
                        to { transform: translateY(20px) scale(0.9); }
                    }
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.5);
                        z-index: 50;
                        animation: backdropIn 0.3s ease forwards;
                    }
                    .modal-backdrop.closing {
                        animation: backdropOut 0.3s ease forwards;
                        pointer-events: none;
                    }
                    .modal-panel {
                        background: #fff;
                        padding: 2rem;
                        border: 2px solid #000;
                        border-radius: 0.5rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        width: 100%;
                        max-width: 28rem;
                        margin: 0 1rem;
                        cursor: auto;
                        animation: panelIn 0.3s ease forwards;
                    }
                    .modal-backdrop.closing .modal-panel {
                        animation: panelOut 0.3s ease forwards;
                    }
                    .modal-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 1.5rem;
                    }
                    .modal-header h2 {
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .modal-close {
                        background: none;
                        border: none;
                        color: #000;
                        cursor: pointer;
                    }
                    .modal-close:hover {
                        color: #4b5563;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-form label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                        margin-bottom: 0.25rem;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        width: 100%;
                        padding: 0.5rem 0.75rem;
                        border: 2px solid #000;
                        border-radius: 0.375rem;
                        box-sizing: border-box;
                    }
                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        box-shadow: 0 0 0 2px #000;
                    }
                    .contact-submit {
                        width: 100%;
                        background: #000;
                        color: #fff;
                        padding: 0.5rem 1rem;
                        border: none;
                        border-radius: 0.375rem;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .contact-submit:hover {
                        background: #1f2937;
                    }
                "#}
            </style>
        </div>
    }
}
