//! Interactive state of the portfolio view.
//!
//! Everything the page reacts to funnels through [`PortfolioAction`] into a
//! single [`PortfolioState`] reducer, so the rules live here and the
//! components only translate DOM events into actions.

use std::rc::Rc;

use log::{debug, info};
use web_sys::MouseEvent;
use yew::functional::Reducible;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocialKind {
    Code,
    CoffeeChat,
    Contact,
    Resume,
}

impl SocialKind {
    pub fn label(self) -> &'static str {
        match self {
            SocialKind::Code => "Code",
            SocialKind::CoffeeChat => "Coffee Chat",
            SocialKind::Contact => "Contact",
            SocialKind::Resume => "Resume",
        }
    }
}

/// Elements that count as interactive for the cursor marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTarget {
    ProfileImage,
    Social(SocialKind),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn from_event(event: &MouseEvent) -> Self {
        Self {
            x: f64::from(event.client_x()),
            y: f64::from(event.client_y()),
        }
    }
}

impl Default for PointerPosition {
    fn default() -> Self {
        let (x, y) = config::OFFSCREEN_POINTER;
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactModal {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    Backdrop,
    CloseButton,
    Submitted,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PortfolioAction {
    PointerMoved(PointerPosition),
    HoverEnter(HoverTarget),
    HoverLeave(HoverTarget),
    OpenContact,
    CloseContact(CloseReason),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortfolioState {
    pub pointer: PointerPosition,
    pub hovered: Option<HoverTarget>,
    pub contact: ContactModal,
}

impl PortfolioState {
    pub fn hovered_label(&self) -> Option<&'static str> {
        match self.hovered {
            Some(HoverTarget::Social(kind)) => Some(kind.label()),
            _ => None,
        }
    }

    pub fn is_hovering_interactive(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn is_contact_open(&self) -> bool {
        self.contact == ContactModal::Open
    }

    /// Applies one action, returning `None` when nothing changed.
    pub fn apply(&self, action: PortfolioAction) -> Option<Self> {
        let mut next = self.clone();
        match action {
            PortfolioAction::PointerMoved(position) => {
                next.pointer = position;
            }
            PortfolioAction::HoverEnter(target) => {
                next.hovered = Some(target);
            }
            // Only one element can be under the pointer, so a leave always
            // clears whatever was entered last.
            PortfolioAction::HoverLeave(_) => {
                next.hovered = None;
            }
            PortfolioAction::OpenContact => {
                if self.contact == ContactModal::Closed {
                    info!("Opening contact form");
                }
                next.contact = ContactModal::Open;
            }
            PortfolioAction::CloseContact(reason) => {
                if self.contact == ContactModal::Open {
                    info!("Closing contact form ({:?})", reason);
                }
                next.contact = ContactModal::Closed;
            }
        }
        (next != *self).then_some(next)
    }
}

impl Reducible for PortfolioState {
    type Action = PortfolioAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

/// Render lifecycle of the contact modal. The open flag flips immediately;
/// `Leaving` keeps the panel on screen until its exit animation finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalPresence {
    Hidden,
    Shown,
    Leaving,
}

impl ModalPresence {
    pub fn initial(open: bool) -> Self {
        if open {
            ModalPresence::Shown
        } else {
            ModalPresence::Hidden
        }
    }

    pub fn on_open_changed(self, open: bool) -> Self {
        match (self, open) {
            (_, true) => ModalPresence::Shown,
            (ModalPresence::Hidden, false) => ModalPresence::Hidden,
            (_, false) => ModalPresence::Leaving,
        }
    }

    pub fn on_exit_finished(self) -> Self {
        match self {
            ModalPresence::Leaving => {
                debug!("Contact form exit animation finished");
                ModalPresence::Hidden
            }
            other => other,
        }
    }

    pub fn is_rendered(self) -> bool {
        self != ModalPresence::Hidden
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModalPresence::Hidden => "hidden",
            ModalPresence::Shown => "open",
            ModalPresence::Leaving => "closing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SOCIAL_LINKS;

    fn reduce_all(actions: impl IntoIterator<Item = PortfolioAction>) -> Rc<PortfolioState> {
        actions
            .into_iter()
            .fold(Rc::new(PortfolioState::default()), |state, action| state.reduce(action))
    }

    fn moved(x: f64, y: f64) -> PortfolioAction {
        PortfolioAction::PointerMoved(PointerPosition { x, y })
    }

    #[test]
    fn starts_offscreen_closed_and_idle() {
        let state = PortfolioState::default();
        assert_eq!(state.pointer, PointerPosition { x: -100.0, y: -100.0 });
        assert_eq!(state.hovered_label(), None);
        assert!(!state.is_hovering_interactive());
        assert!(!state.is_contact_open());
    }

    #[test]
    fn pointer_tracks_the_latest_move() {
        let state = reduce_all([moved(1.0, 2.0), moved(300.5, 40.0), moved(0.0, 999.0)]);
        assert_eq!(state.pointer, PointerPosition { x: 0.0, y: 999.0 });

        let state = state.reduce(moved(12.0, 12.0));
        assert_eq!(state.pointer, PointerPosition { x: 12.0, y: 12.0 });
    }

    #[test]
    fn each_social_link_sets_then_clears_its_label() {
        for link in SOCIAL_LINKS {
            let target = HoverTarget::Social(link.kind);
            let hovered = Rc::new(PortfolioState::default()).reduce(PortfolioAction::HoverEnter(target));
            assert_eq!(hovered.hovered_label(), Some(link.kind.label()));
            assert!(hovered.is_hovering_interactive());

            let left = hovered.reduce(PortfolioAction::HoverLeave(target));
            assert_eq!(left.hovered_label(), None);
            assert!(!left.is_hovering_interactive());
        }
    }

    #[test]
    fn profile_image_is_interactive_without_a_label() {
        let state = reduce_all([PortfolioAction::HoverEnter(HoverTarget::ProfileImage)]);
        assert!(state.is_hovering_interactive());
        assert_eq!(state.hovered_label(), None);

        let state = state.reduce(PortfolioAction::HoverLeave(HoverTarget::ProfileImage));
        assert!(!state.is_hovering_interactive());
    }

    #[test]
    fn last_enter_wins_and_leave_always_clears() {
        let code = HoverTarget::Social(SocialKind::Code);
        let resume = HoverTarget::Social(SocialKind::Resume);
        let state = reduce_all([PortfolioAction::HoverEnter(code), PortfolioAction::HoverEnter(resume)]);
        assert_eq!(state.hovered_label(), Some("Resume"));

        // A late leave from the first link still clears.
        let state = state.reduce(PortfolioAction::HoverLeave(code));
        assert_eq!(state.hovered, None);
    }

    #[test]
    fn modal_opens_only_on_request_and_closes_for_every_reason() {
        for reason in [CloseReason::Backdrop, CloseReason::CloseButton, CloseReason::Submitted] {
            let state = reduce_all([PortfolioAction::OpenContact]);
            assert!(state.is_contact_open());
            let state = state.reduce(PortfolioAction::CloseContact(reason));
            assert!(!state.is_contact_open(), "{:?}", reason);
        }
    }

    #[test]
    fn modal_and_hover_are_independent() {
        let state = reduce_all([
            PortfolioAction::HoverEnter(HoverTarget::ProfileImage),
            PortfolioAction::OpenContact,
            PortfolioAction::HoverLeave(HoverTarget::ProfileImage),
        ]);
        assert!(state.is_contact_open());
        assert!(!state.is_hovering_interactive());

        let state = state.reduce(PortfolioAction::HoverEnter(HoverTarget::Social(SocialKind::Contact)));
        let state = state.reduce(PortfolioAction::CloseContact(CloseReason::Backdrop));
        assert_eq!(state.hovered_label(), Some("Contact"));
    }

    #[test]
    fn submit_scenario_changes_nothing_but_the_modal() {
        let opened = reduce_all([
            moved(200.0, 150.0),
            PortfolioAction::HoverEnter(HoverTarget::ProfileImage),
            PortfolioAction::OpenContact,
        ]);
        let closed = opened.clone().reduce(PortfolioAction::CloseContact(CloseReason::Submitted));
        assert!(!closed.is_contact_open());
        assert_eq!(closed.pointer, opened.pointer);
        assert_eq!(closed.hovered, opened.hovered);
    }

    #[test]
    fn no_op_actions_keep_the_same_state() {
        let state = Rc::new(PortfolioState::default());
        let same = state.clone().reduce(PortfolioAction::CloseContact(CloseReason::Backdrop));
        assert!(Rc::ptr_eq(&state, &same));

        let state = reduce_all([moved(5.0, 5.0)]);
        let same = state.clone().reduce(moved(5.0, 5.0));
        assert!(Rc::ptr_eq(&state, &same));
    }

    #[test]
    fn presence_runs_the_exit_animation_before_hiding() {
        let presence = ModalPresence::initial(false);
        assert!(!presence.is_rendered());

        let presence = presence.on_open_changed(true);
        assert_eq!(presence, ModalPresence::Shown);

        let presence = presence.on_open_changed(false);
        assert_eq!(presence, ModalPresence::Leaving);
        assert!(presence.is_rendered());

        assert_eq!(presence.on_exit_finished(), ModalPresence::Hidden);
    }

    #[test]
    fn presence_reopens_mid_exit_and_ignores_stale_timers() {
        let leaving = ModalPresence::Shown.on_open_changed(false);
        assert_eq!(leaving.on_open_changed(true), ModalPresence::Shown);
        assert_eq!(ModalPresence::Shown.on_exit_finished(), ModalPresence::Shown);
        assert_eq!(ModalPresence::Hidden.on_open_changed(false), ModalPresence::Hidden);
    }
}
