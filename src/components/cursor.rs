use yew::prelude::*;

use crate::config;
use crate::state::PointerPosition;

#[derive(Properties, PartialEq)]
pub struct CursorProps {
    pub position: PointerPosition,
    pub hovering: bool,
}

/// Inline style for the marker: centered on the pointer, enlarged while
/// something interactive is under it.
pub fn marker_style(position: PointerPosition, hovering: bool) -> String {
    let half = config::CURSOR_SIZE_PX / 2.0;
    let scale = if hovering {
        config::CURSOR_HOVER_SCALE
    } else {
        config::CURSOR_IDLE_SCALE
    };
    format!(
        "left: {}px; top: {}px; width: {}px; height: {}px; transform: scale({}); transition: transform {}ms ease-out;",
        position.x - half,
        position.y - half,
        config::CURSOR_SIZE_PX,
        config::CURSOR_SIZE_PX,
        scale,
        config::CURSOR_TRANSITION_MS,
    )
}

#[function_component(CursorMarker)]
pub fn cursor_marker(props: &CursorProps) -> Html {
    html! {
        <div
            class={classes!("cursor-marker", props.hovering.then(|| "hovering"))}
            style={marker_style(props.position, props.hovering)}
            aria-hidden="true"
        >
            <style>
                {r#"
                    .cursor-marker {
                        position: fixed;
                        background: #000;
                        pointer-events: none;
                        /* Same layer as the modal backdrop, which is later in the DOM and covers it. */
                        z-index: 50;
                        will-change: transform;
                    }
                    @media (hover: none) {
                        .cursor-marker {
                            display: none;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_is_centered_on_the_pointer() {
        let style = marker_style(PointerPosition { x: 120.0, y: 48.0 }, false);
        assert!(style.starts_with("left: 116px; top: 44px;"), "{}", style);
        assert!(style.contains("transform: scale(1);"));
        assert!(style.contains("transition: transform 100ms ease-out;"));
    }

    #[test]
    fn marker_grows_over_interactive_elements() {
        let style = marker_style(PointerPosition::default(), true);
        assert!(style.contains("transform: scale(1.5);"), "{}", style);
        assert!(style.starts_with("left: -104px; top: -104px;"));
    }
}
