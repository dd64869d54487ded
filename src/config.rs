use crate::state::SocialKind;
use crate::Route;

/// trunk copies `assets/` next to index.html, both in `trunk serve` and in `dist/`.
pub const ASSET_BASE: &str = "/assets";

pub fn asset_url(name: &str) -> String {
    format!("{}/{}", ASSET_BASE, name.trim_start_matches('/'))
}

pub const OWNER_NAME: &str = "Julian Galante";
pub const OWNER_ROLE: &str = "Software Developer & Design Enthusiast";
pub const TAGLINE: &str = "Crafting elegant solutions through clean and scalable code.";
pub const CTA_LABEL: &str = "Let's create together!";

pub const PROFILE_IMAGE: &str = "kline.png";
pub const RESUME_DOCUMENT: &str = "julian-galante-resume.pdf";

/// Pointer position used before the first `mousemove`, far enough off-screen
/// that the marker is not visible.
pub const OFFSCREEN_POINTER: (f64, f64) = (-100.0, -100.0);
pub const CURSOR_SIZE_PX: f64 = 8.0;
pub const CURSOR_IDLE_SCALE: f64 = 1.0;
pub const CURSOR_HOVER_SCALE: f64 = 1.5;
pub const CURSOR_TRANSITION_MS: u32 = 100;

/// Entrance/exit duration shared by the modal backdrop and panel.
pub const MODAL_TRANSITION_MS: u32 = 300;

/// Where a social link points. Internal routes are navigated in place by the
/// router instead of reloading the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    External(&'static str),
    Internal(Route),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLinkConfig {
    pub kind: SocialKind,
    pub target: LinkTarget,
    pub new_tab: bool,
}

pub const SOCIAL_LINKS: [SocialLinkConfig; 4] = [
    SocialLinkConfig {
        kind: SocialKind::Code,
        target: LinkTarget::External("https://github.com/juliangalante"),
        new_tab: true,
    },
    SocialLinkConfig {
        kind: SocialKind::CoffeeChat,
        target: LinkTarget::External("https://linkedin.com/in/juliangalante"),
        new_tab: true,
    },
    SocialLinkConfig {
        kind: SocialKind::Contact,
        target: LinkTarget::External("mailto:julian.galante@example.com"),
        new_tab: false,
    },
    SocialLinkConfig {
        kind: SocialKind::Resume,
        target: LinkTarget::Internal(Route::Resume),
        new_tab: false,
    },
];
