use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

use wallet_ui::button::ButtonStatus;
use wallet_ui::style::Style;

use crate::components::{Button, WalletIcon};
use crate::hooks::{SelectWalletRequest, use_click_outside, use_wallet_multi_button};

const COPY_FEEDBACK_MS: u32 = 400;

#[derive(Properties, PartialEq)]
pub struct WalletMultiButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Style,
    /// Custom wallet picker. Without it the wallet modal is opened.
    #[prop_or_default]
    pub on_select_wallet: Option<Callback<SelectWalletRequest>>,
}

/// One button for the whole lifecycle: select, connect, then a menu to copy
/// the address, change wallet or disconnect.
#[function_component(WalletMultiButton)]
pub fn wallet_multi_button(props: &WalletMultiButtonProps) -> Html {
    let handle = use_wallet_multi_button(props.on_select_wallet.clone());
    let menu_open = use_state_eq(|| false);
    let copied = use_state_eq(|| false);
    let dropdown_ref = use_node_ref();

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };
    use_click_outside(dropdown_ref.clone(), close_menu.clone());

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let onclick = match handle.state.status {
        ButtonStatus::NoWallet => Some(handle.on_select_wallet.clone()),
        ButtonStatus::HasWallet => handle.on_connect.clone(),
        ButtonStatus::Connected => Some(toggle_menu),
        ButtonStatus::Connecting | ButtonStatus::Disconnecting => None,
    };

    let copy_address = {
        let copied = copied.clone();
        let close_menu = close_menu.clone();
        let public_key = handle.state.public_key();
        Callback::from(move |_: MouseEvent| {
            let Some(public_key) = public_key.clone() else {
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            let clipboard = window.navigator().clipboard();
            let copied = copied.clone();
            let close_menu = close_menu.clone();

            wasm_bindgen_futures::spawn_local(async move {
                if JsFuture::from(clipboard.write_text(&public_key)).await.is_ok() {
                    copied.set(true);

                    let reset = copied.clone();
                    Timeout::new(COPY_FEEDBACK_MS, move || {
                        reset.set(false);
                        close_menu.emit(());
                    })
                    .forget();
                }
            });
        })
    };

    let change_wallet = {
        let select_wallet = handle.on_select_wallet.clone();
        let close_menu = close_menu.clone();
        Callback::from(move |event: MouseEvent| {
            select_wallet.emit(event);
            close_menu.emit(());
        })
    };

    let disconnect = handle.on_disconnect.clone().map(|on_disconnect| {
        let close_menu = close_menu.clone();
        Callback::from(move |event: MouseEvent| {
            on_disconnect.emit(event);
            close_menu.emit(());
        })
    });

    let item_class = "wallet-adapter-dropdown-list-item block w-full px-4 py-2 text-left hover:opacity-80";

    html! {
        <div ref={dropdown_ref} class="wallet-adapter-dropdown relative inline-block">
            <Button
                class={classes!("wallet-adapter-button-trigger", props.class.clone())}
                style={props.style.clone()}
                disabled={handle.state.disabled}
                start_icon={html! { <WalletIcon wallet={handle.state.wallet().cloned()} /> }}
                onclick={onclick}
            >
                { handle.state.label() }
            </Button>
            <ul
                class={classes!(
                    "wallet-adapter-dropdown-list",
                    "absolute", "right-0", "mt-2", "min-w-full", "rounded-lg", "shadow-lg",
                    if *menu_open { "wallet-adapter-dropdown-list-active block" } else { "hidden" }
                )}
                role="menu"
            >
                if handle.state.public_key().is_some() {
                    <li class={item_class} role="menuitem" onclick={copy_address}>
                        { if *copied { "Copied" } else { "Copy address" } }
                    </li>
                }
                <li class={item_class} role="menuitem" onclick={change_wallet}>
                    { "Change wallet" }
                </li>
                if let Some(disconnect) = disconnect {
                    <li class={item_class} role="menuitem" onclick={disconnect}>
                        { "Disconnect" }
                    </li>
                }
            </ul>
        </div>
    }
}
