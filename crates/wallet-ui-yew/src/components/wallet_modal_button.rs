use yew::prelude::*;

use wallet_ui::style::Style;

use crate::components::{Button, chain_click};
use crate::providers::use_wallet_modal;

#[derive(Properties, PartialEq)]
pub struct WalletModalButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Style,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// Opens the wallet modal. Must be rendered inside a `WalletModalProvider`.
#[function_component(WalletModalButton)]
pub fn wallet_modal_button(props: &WalletModalButtonProps) -> Html {
    let modal = use_wallet_modal();
    let open = Callback::from(move |_: MouseEvent| modal.open());
    let onclick = chain_click(props.onclick.clone(), Some(open));

    html! {
        <Button
            class={classes!("wallet-adapter-button-trigger", props.class.clone())}
            style={props.style.clone()}
            onclick={onclick}
        >
            if props.children.is_empty() {
                { "Select Wallet" }
            } else {
                { props.children.clone() }
            }
        </Button>
    }
}
