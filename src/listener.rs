use log::{debug, error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, Window};
use yew::prelude::*;

use crate::error::PortfolioError;
use crate::state::PointerPosition;

/// A listener attached to `window` for as long as this value lives.
/// Dropping it removes the listener.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Result<Self, PortfolioError>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window().ok_or(PortfolioError::NoWindow)?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| PortfolioError::listener("register", event, &err))?;
        debug!("Registered window `{}` listener", event);

        Ok(Self {
            window,
            event,
            callback,
        })
    }

    pub fn mouse_move<F>(mut handler: F) -> Result<Self, PortfolioError>
    where
        F: FnMut(&MouseEvent) + 'static,
    {
        Self::new("mousemove", move |event: Event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                handler(mouse);
            }
        })
    }

    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        match self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            Ok(()) => debug!("Removed window `{}` listener", self.event),
            Err(err) => warn!("{}", PortfolioError::listener("remove", self.event, &err)),
        }
    }
}

/// Reports window-wide pointer movement to `on_move` while the calling
/// component is mounted. The listener is registered once on mount and removed
/// on unmount; the callback passed on the first render is the one kept.
#[hook]
pub fn use_pointer_tracking(on_move: Callback<PointerPosition>) {
    use_effect_with_deps(
        move |_| {
            let listener = WindowListener::mouse_move(move |event| {
                on_move.emit(PointerPosition::from_event(event));
            })
            .map_err(|err| error!("Cursor tracking disabled: {}", err))
            .ok();

            move || drop(listener)
        },
        (),
    );
}
