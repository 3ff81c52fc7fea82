mod adapter;
mod session;

use yew::prelude::*;

use wallet_ui::theme::ThemeConfig;
use wallet_ui_yew::{
    ThemeProvider, WalletConnectButton, WalletDisconnectButton, WalletModalButton,
    WalletModalProvider, WalletMultiButton, WalletProvider,
};

use adapter::demo_wallets;
use session::{AdapterEvent, Session, SessionAction};

const THEME: &str = r#"{
    "colors": {
        "primary": { "color": "purple" },
        "accent": { "color": "cyan", "shade": "light" }
    }
}"#;

#[function_component(App)]
fn app() -> Html {
    let session = use_reducer(Session::default);
    let wallets = {
        let dispatcher = session.dispatcher();
        use_memo((), move |_| {
            demo_wallets(Callback::from(move |(wallet, event): (String, AdapterEvent)| {
                dispatcher.dispatch(SessionAction::Adapter { wallet, event });
            }))
        })
    };
    let theme = use_memo((), |_| {
        ThemeConfig::from_json(THEME).unwrap_or_else(|err| {
            wallet_ui::warn!(%err, "demo theme rejected");
            ThemeConfig::default()
        })
    });

    let on_select = {
        let dispatcher = session.dispatcher();
        let wallets = wallets.clone();
        Callback::from(move |name: Option<String>| {
            wallet_ui::debug!(?name, "wallet selected");
            wallets.release_others(name.as_deref());
            dispatcher.dispatch(SessionAction::Select(name));
        })
    };

    html! {
        <ThemeProvider config={(*theme).clone()}>
            <WalletProvider state={session.snapshot(wallets.wallets())} on_select={on_select}>
                <WalletModalProvider>
                    <div class="p-8 space-y-8">
                        <h1 class="text-2xl font-bold">{ "Wallet UI" }</h1>

                        <section class="space-y-4">
                            <h2 class="text-xl font-semibold">{ "Multi button" }</h2>
                            <WalletMultiButton />
                        </section>

                        <section class="space-y-4">
                            <h2 class="text-xl font-semibold">{ "Individual buttons" }</h2>
                            <div class="flex flex-wrap gap-4">
                                <WalletModalButton />
                                <WalletConnectButton />
                                <WalletDisconnectButton />
                            </div>
                        </section>

                        if let Some(error) = session.last_error.as_ref() {
                            <div class="p-4 bg-red-100 text-red-700 rounded">
                                <p>{ error }</p>
                            </div>
                        }
                    </div>
                </WalletModalProvider>
            </WalletProvider>
        </ThemeProvider>
    }
}

fn main() {
    wallet_ui::log::setup().expect("Failed to setup logging");
    yew::Renderer::<App>::new().render();
}
