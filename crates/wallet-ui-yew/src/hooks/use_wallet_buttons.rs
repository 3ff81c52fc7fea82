use web_sys::MouseEvent;
use yew::prelude::*;

use wallet_ui::adapter::Wallet;
use wallet_ui::async_callback;
use wallet_ui::button::{ButtonState, WalletAction};

use crate::providers::{use_wallet, use_wallet_modal_result};

/// A button view-model plus the click handler that performs its action.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletButton {
    pub state: ButtonState,
    /// Only present while the button has an action to run.
    pub on_click: Option<Callback<MouseEvent>>,
}

fn action_callback(state: &ButtonState, action: WalletAction) -> Option<Callback<MouseEvent>> {
    if state.action() != Some(action) {
        return None;
    }
    let button = state.clone();
    // Fire-and-forget: failures surface through the wallet context itself.
    Some(async_callback!([button] {
        button.click().await;
    }))
}

fn wallet_button(state: ButtonState) -> WalletButton {
    let on_click = state
        .action()
        .and_then(|action| action_callback(&state, action));
    WalletButton { state, on_click }
}

#[hook]
pub fn use_wallet_connect_button() -> WalletButton {
    let wallet = use_wallet();
    wallet_button(ButtonState::connect_button(&wallet.state))
}

#[hook]
pub fn use_wallet_disconnect_button() -> WalletButton {
    let wallet = use_wallet();
    wallet_button(ButtonState::disconnect_button(&wallet.state))
}

/// Handed to a custom wallet picker: the wallets on offer and the operation
/// that selects one of them.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectWalletRequest {
    pub wallets: Vec<Wallet>,
    pub select: Callback<Option<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiButtonHandle {
    pub state: ButtonState,
    pub on_connect: Option<Callback<MouseEvent>>,
    pub on_disconnect: Option<Callback<MouseEvent>>,
    pub on_select_wallet: Callback<MouseEvent>,
}

/// View-model of the multi button.
///
/// Selecting a wallet goes to `on_select_wallet` when given; otherwise it
/// opens the wallet modal, which then needs a `WalletModalProvider` ancestor.
#[hook]
pub fn use_wallet_multi_button(
    on_select_wallet: Option<Callback<SelectWalletRequest>>,
) -> MultiButtonHandle {
    let wallet = use_wallet();
    let modal = use_wallet_modal_result();
    let state = ButtonState::multi_button(&wallet.state);

    let select_wallet = Callback::from(move |_: MouseEvent| match &on_select_wallet {
        Some(picker) => picker.emit(SelectWalletRequest {
            wallets: wallet.state.wallets.clone(),
            select: wallet.select.clone(),
        }),
        None => match &modal {
            Ok(modal) => modal.open(),
            Err(err) => wallet_ui::error!(%err, "no wallet picker available"),
        },
    });

    MultiButtonHandle {
        on_connect: action_callback(&state, WalletAction::Connect),
        on_disconnect: action_callback(&state, WalletAction::Disconnect),
        on_select_wallet: select_wallet,
        state,
    }
}
