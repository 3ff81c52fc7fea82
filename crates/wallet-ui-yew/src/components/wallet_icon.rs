use yew::prelude::*;

use wallet_ui::adapter::Wallet;

#[derive(Properties, PartialEq)]
pub struct WalletIconProps {
    #[prop_or_default]
    pub wallet: Option<Wallet>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(WalletIcon)]
pub fn wallet_icon(props: &WalletIconProps) -> Html {
    match &props.wallet {
        Some(wallet) => html! {
            <img
                class={classes!("wallet-adapter-wallet-icon", "h-6", "w-6", props.class.clone())}
                src={wallet.icon().to_string()}
                alt={format!("{} icon", wallet.name())}
            />
        },
        None => html! {},
    }
}
