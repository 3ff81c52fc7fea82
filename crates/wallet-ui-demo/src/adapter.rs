use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use yew::Callback;

use wallet_ui::adapter::{Wallet, WalletAdapter, WalletReadyState};
use wallet_ui::errors::WalletError;

use crate::session::AdapterEvent;

const LATENCY_MS: u32 = 800;

/// An in-memory wallet that takes a moment to connect, so every button
/// state can be seen.
pub struct DemoAdapter {
    name: &'static str,
    icon: &'static str,
    url: &'static str,
    ready_state: WalletReadyState,
    account: &'static str,
    connected: RefCell<bool>,
    events: Callback<(String, AdapterEvent)>,
}

impl DemoAdapter {
    pub fn new(
        name: &'static str,
        icon: &'static str,
        ready_state: WalletReadyState,
        account: &'static str,
        events: Callback<(String, AdapterEvent)>,
    ) -> Self {
        Self {
            name,
            icon,
            url: "https://solana.com/ecosystem/explore?categories=wallet",
            ready_state,
            account,
            connected: RefCell::new(false),
            events,
        }
    }

    /// Drops the account without going through `disconnect`, for when the
    /// user switches to another wallet.
    pub fn forget(&self) {
        *self.connected.borrow_mut() = false;
    }

    fn report(&self, event: AdapterEvent) {
        self.events.emit((self.name.to_string(), event));
    }
}

#[async_trait::async_trait(?Send)]
impl WalletAdapter for DemoAdapter {
    fn name(&self) -> &str {
        self.name
    }

    fn icon(&self) -> &str {
        self.icon
    }

    fn url(&self) -> &str {
        self.url
    }

    fn ready_state(&self) -> WalletReadyState {
        self.ready_state
    }

    fn public_key(&self) -> Option<String> {
        (*self.connected.borrow()).then(|| self.account.to_string())
    }

    async fn connect(&self) -> Result<(), WalletError> {
        if !self.ready_state.is_installed() {
            let err = WalletError::NotReady(self.name.to_string());
            self.report(AdapterEvent::Failed(err.to_string()));
            return Err(err);
        }

        self.report(AdapterEvent::Connecting);
        TimeoutFuture::new(LATENCY_MS).await;
        *self.connected.borrow_mut() = true;
        wallet_ui::info!(wallet = self.name, "connected");
        self.report(AdapterEvent::Connected);
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        self.report(AdapterEvent::Disconnecting);
        TimeoutFuture::new(LATENCY_MS / 2).await;
        *self.connected.borrow_mut() = false;
        wallet_ui::info!(wallet = self.name, "disconnected");
        self.report(AdapterEvent::Disconnected);
        Ok(())
    }
}

fn icon(fill: &str) -> &'static str {
    match fill {
        "purple" => "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 32 32'><circle cx='16' cy='16' r='16' fill='%238B7EC8'/></svg>",
        "orange" => "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 32 32'><circle cx='16' cy='16' r='16' fill='%23DA702C'/></svg>",
        _ => "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 32 32'><circle cx='16' cy='16' r='16' fill='%23878580'/></svg>",
    }
}

/// The demo adapters together with the `Wallet` handles the UI sees.
pub struct DemoWallets {
    adapters: Vec<Rc<DemoAdapter>>,
    wallets: Vec<Wallet>,
}

impl DemoWallets {
    pub fn new(adapters: Vec<DemoAdapter>) -> Self {
        let adapters: Vec<Rc<DemoAdapter>> = adapters.into_iter().map(Rc::new).collect();
        let wallets = adapters
            .iter()
            .map(|adapter| {
                let adapter: Rc<dyn WalletAdapter> = adapter.clone();
                Wallet::from_rc(adapter)
            })
            .collect();
        Self { adapters, wallets }
    }

    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    /// Every adapter except `selected` loses its account.
    pub fn release_others(&self, selected: Option<&str>) {
        for adapter in &self.adapters {
            if Some(adapter.name) != selected {
                adapter.forget();
            }
        }
    }
}

pub fn demo_wallets(events: Callback<(String, AdapterEvent)>) -> DemoWallets {
    DemoWallets::new(vec![
        DemoAdapter::new(
            "Phantom",
            icon("purple"),
            WalletReadyState::Installed,
            "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU",
            events.clone(),
        ),
        DemoAdapter::new(
            "Solflare",
            icon("orange"),
            WalletReadyState::Installed,
            "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM",
            events.clone(),
        ),
        DemoAdapter::new(
            "Backpack",
            icon("gray"),
            WalletReadyState::NotDetected,
            "HN7cABqLq46Es1jh92dQQisAq662SmxELLLsHHe4YWrH",
            events,
        ),
    ])
}
