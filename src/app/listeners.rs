use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::observers::{navbar_solid, ParallaxOffset};
use crate::view_state::ViewState;

// Both listeners are removed by leptos-use when the page's owner is cleaned up.

/// Keeps `navbar_solid` in sync with the window's scroll offset.
pub fn use_navbar_observer(state: RwSignal<ViewState>) {
    let sync = move || {
        let scroll_y = window().scroll_y().unwrap_or_default();
        if navbar_solid(scroll_y) != state.with_untracked(|s| s.navbar_solid()) {
            state.update(|s| s.set_scroll_offset(scroll_y));
        }
    };

    // initial state, e.g. after a reload halfway down the page
    Effect::new(move |_| sync());
    let _ = use_event_listener(use_window(), ev::scroll, move |_| sync());
}

/// Background offset following the pointer across the whole viewport.
pub fn use_parallax_observer() -> ReadSignal<ParallaxOffset> {
    let (offset, set_offset) = signal(ParallaxOffset::default());

    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        let win = window();
        let width = win
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default();
        let height = win
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        set_offset.set(ParallaxOffset::from_pointer(
            ev.client_x() as f64,
            ev.client_y() as f64,
            width,
            height,
        ));
    });

    offset
}
