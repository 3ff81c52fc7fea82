use gloo_events::EventListener;
use yew::prelude::*;

use wallet_ui::breakpoint::Breakpoint;

fn window_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

/// Current breakpoint of the window, updated on resize. Components only
/// re-render when the breakpoint itself changes.
#[hook]
pub fn use_breakpoint() -> Breakpoint {
    let breakpoint = use_state_eq(|| Breakpoint::from_width(window_width()));

    {
        let breakpoint = breakpoint.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    breakpoint.set(Breakpoint::from_width(window_width()));
                })
            });
            move || drop(listener)
        });
    }

    *breakpoint
}
