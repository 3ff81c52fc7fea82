use web_sys::{Element, HtmlDialogElement};
use yew::prelude::*;

use wallet_ui::Subscription;
use wallet_ui::events::{CLOSE_EVENT, OPEN_EVENT};

use crate::dom;
use crate::hooks::use_latest_callback;

/// Calls `on_open` each time the referenced `<dialog>` opens.
///
/// Must be called before any effect that opens the dialog on mount, so the
/// observer is in place when the attribute changes.
#[hook]
pub fn use_dialog_open(node_ref: NodeRef, on_open: Callback<()>) {
    let on_open = use_latest_callback(on_open);
    use_effect_with((node_ref, on_open), |(node_ref, on_open)| {
        let subscription = node_ref.cast::<HtmlDialogElement>().map(|dialog| {
            match dom::dialog_open(&dialog) {
                Ok(observer) => observer.and(dom::relay(&dialog, OPEN_EVENT, on_open.clone())),
                Err(err) => {
                    wallet_ui::error!(%err, "dialog open detection unavailable");
                    Subscription::empty()
                }
            }
        });
        move || drop(subscription)
    });
}

/// Calls `on_close` when Escape is pressed or the referenced dialog receives
/// a `close` event of its own.
#[hook]
pub fn use_dialog_escape(node_ref: NodeRef, on_close: Callback<()>) {
    let on_close = use_latest_callback(on_close);
    use_effect_with((node_ref, on_close), |(node_ref, on_close)| {
        let subscription = node_ref.cast::<Element>().map(|dialog| {
            let relay = dom::relay(&dialog, CLOSE_EVENT, on_close.clone());
            match dom::dialog_escape(&dialog) {
                Ok(escape) => escape.and(relay),
                Err(err) => {
                    wallet_ui::error!(%err, "escape handling unavailable");
                    relay
                }
            }
        });
        move || drop(subscription)
    });
}
