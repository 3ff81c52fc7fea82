use web_sys::HtmlElement;
use yew::prelude::*;

use wallet_ui::events::CLOSE_EVENT;

use crate::dom;
use crate::hooks::use_latest_callback;

/// Lets the referenced element be swiped down to close while `enabled`.
#[hook]
pub fn use_swipe_to_close(node_ref: NodeRef, enabled: bool, on_close: Callback<()>) {
    let on_close = use_latest_callback(on_close);
    use_effect_with((node_ref, enabled, on_close), |(node_ref, enabled, on_close)| {
        let subscription = node_ref
            .cast::<HtmlElement>()
            .filter(|_| *enabled)
            .map(|element| {
                dom::swipe_to_close(&element).and(dom::relay(&element, CLOSE_EVENT, on_close.clone()))
            });
        move || drop(subscription)
    });
}
