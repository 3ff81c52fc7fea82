use web_sys::Element;
use yew::prelude::*;

use wallet_ui::Subscription;
use wallet_ui::events::CLICK_OUTSIDE_EVENT;

use crate::dom;
use crate::hooks::use_latest_callback;

/// Calls `on_click_outside` for clicks outside the referenced element while
/// the component is mounted.
#[hook]
pub fn use_click_outside(node_ref: NodeRef, on_click_outside: Callback<()>) {
    let on_click_outside = use_latest_callback(on_click_outside);
    use_effect_with((node_ref, on_click_outside), |(node_ref, callback)| {
        let subscription = node_ref.cast::<Element>().map(|element| {
            match dom::click_outside(&element) {
                Ok(outside) => outside.and(dom::relay(&element, CLICK_OUTSIDE_EVENT, callback.clone())),
                Err(err) => {
                    wallet_ui::error!(%err, "click-outside detection unavailable");
                    Subscription::empty()
                }
            }
        });
        move || drop(subscription)
    });
}
