use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct ProfileImageProps {
    pub on_hover: Callback<bool>,
    pub on_open_contact: Callback<()>,
}

#[function_component(ProfileImage)]
pub fn profile_image(props: &ProfileImageProps) -> Html {
    let onmouseenter = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(true))
    };
    let onmouseleave = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(false))
    };
    let onclick = {
        let on_open_contact = props.on_open_contact.clone();
        Callback::from(move |_: MouseEvent| on_open_contact.emit(()))
    };

    html! {
        <div class="profile-image enter-scale" onmouseenter={onmouseenter} onmouseleave={onmouseleave}>
            <img
                src={config::asset_url(config::PROFILE_IMAGE)}
                alt={config::OWNER_NAME}
            />
            <div class="profile-overlay" onclick={onclick}>
                <p class="profile-cta">{config::CTA_LABEL}</p>
            </div>
            <style>
                {r#"
                    .profile-image {
                        position: relative;
                        width: min(400px, 80vw);
                        aspect-ratio: 1 / 1;
                        margin-bottom: 2rem;
                        overflow: hidden;
                    }
                    .profile-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.3s ease;
                    }
                    .profile-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0);
                        transition: background 0.3s ease;
                    }
                    .profile-image:hover .profile-overlay {
                        background: rgba(0, 0, 0, 0.5);
                    }
                    .profile-cta {
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 700;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .profile-image:hover .profile-cta {
                        opacity: 1;
                    }
                    @media (max-width: 640px) {
                        .profile-cta {
                            font-size: 1rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
