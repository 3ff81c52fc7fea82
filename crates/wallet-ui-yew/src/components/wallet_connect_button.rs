use yew::prelude::*;

use wallet_ui::style::Style;

use crate::components::{Button, WalletIcon, chain_click};
use crate::hooks::use_wallet_connect_button;

#[derive(Properties, PartialEq)]
pub struct WalletConnectButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Style,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Replaces the status label.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(WalletConnectButton)]
pub fn wallet_connect_button(props: &WalletConnectButtonProps) -> Html {
    let button = use_wallet_connect_button();
    let onclick = chain_click(props.onclick.clone(), button.on_click.clone());

    html! {
        <Button
            class={classes!("wallet-adapter-button-trigger", props.class.clone())}
            style={props.style.clone()}
            disabled={props.disabled || button.state.disabled}
            start_icon={html! { <WalletIcon wallet={button.state.wallet().cloned()} /> }}
            onclick={onclick}
        >
            if props.children.is_empty() {
                { button.state.label() }
            } else {
                { props.children.clone() }
            }
        </Button>
    }
}
