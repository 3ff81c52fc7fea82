//! The seam between the UI and the external wallet-adapter library.
//!
//! The UI never talks to a wallet directly. Hosts implement [`WalletAdapter`]
//! for whatever bindings they use and hand the current connection state to
//! the UI as a [`WalletState`] snapshot.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::errors::WalletError;

/// How available a wallet is in the current browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WalletReadyState {
    /// The wallet extension was detected.
    Installed,
    /// The wallet can be loaded on demand (e.g. a web wallet).
    Loadable,
    NotDetected,
    Unsupported,
}

impl WalletReadyState {
    pub fn is_installed(&self) -> bool {
        matches!(self, WalletReadyState::Installed)
    }
}

#[async_trait::async_trait(?Send)]
pub trait WalletAdapter {
    fn name(&self) -> &str;

    /// Icon as a URL or data URI.
    fn icon(&self) -> &str;

    /// Where to get the wallet when it is not installed.
    fn url(&self) -> &str;

    fn ready_state(&self) -> WalletReadyState;

    /// Base58 public key of the connected account.
    fn public_key(&self) -> Option<String>;

    async fn connect(&self) -> Result<(), WalletError>;

    async fn disconnect(&self) -> Result<(), WalletError>;
}

/// A cheap, clonable handle to a [`WalletAdapter`].
#[derive(Clone)]
pub struct Wallet {
    adapter: Rc<dyn WalletAdapter>,
}

impl Wallet {
    pub fn new(adapter: impl WalletAdapter + 'static) -> Self {
        Self {
            adapter: Rc::new(adapter),
        }
    }

    pub fn from_rc(adapter: Rc<dyn WalletAdapter>) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &dyn WalletAdapter {
        self.adapter.as_ref()
    }

    pub fn name(&self) -> &str {
        self.adapter.name()
    }

    pub fn icon(&self) -> &str {
        self.adapter.icon()
    }

    pub fn url(&self) -> &str {
        self.adapter.url()
    }

    pub fn ready_state(&self) -> WalletReadyState {
        self.adapter.ready_state()
    }

    pub fn public_key(&self) -> Option<String> {
        self.adapter.public_key()
    }

    pub async fn connect(&self) -> Result<(), WalletError> {
        self.adapter.connect().await
    }

    pub async fn disconnect(&self) -> Result<(), WalletError> {
        self.adapter.disconnect().await
    }
}

// Two handles are equal when they point at the same adapter.
impl PartialEq for Wallet {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.adapter, &other.adapter) && self.name() == other.name()
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("name", &self.name())
            .field("ready_state", &self.ready_state())
            .finish()
    }
}

/// Snapshot of the external wallet context.
///
/// Hosts rebuild it whenever the underlying context changes; everything the
/// UI shows is derived from it on each render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletState {
    pub wallets: Vec<Wallet>,
    pub wallet: Option<Wallet>,
    pub connecting: bool,
    pub connected: bool,
    pub disconnecting: bool,
}

impl WalletState {
    pub fn new(wallets: Vec<Wallet>) -> Self {
        Self {
            wallets,
            ..Self::default()
        }
    }

    pub fn with_selected(mut self, wallet: Option<Wallet>) -> Self {
        self.wallet = wallet;
        self
    }

    pub fn find(&self, name: &str) -> Option<&Wallet> {
        self.wallets.iter().find(|wallet| wallet.name() == name)
    }

    pub fn public_key(&self) -> Option<String> {
        self.wallet.as_ref().and_then(Wallet::public_key)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};

    use super::*;

    /// Scriptable adapter that records how often it was asked to connect.
    pub struct MockAdapter {
        pub name: String,
        pub ready_state: WalletReadyState,
        pub public_key: RefCell<Option<String>>,
        pub fail_with: Option<WalletError>,
        pub connects: Cell<usize>,
        pub disconnects: Cell<usize>,
    }

    impl MockAdapter {
        pub fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                ready_state: WalletReadyState::Installed,
                public_key: RefCell::new(None),
                fail_with: None,
                connects: Cell::new(0),
                disconnects: Cell::new(0),
            }
        }

        pub fn failing(name: &str, error: WalletError) -> Self {
            Self {
                fail_with: Some(error),
                ..Self::new(name)
            }
        }

        pub fn with_ready_state(mut self, ready_state: WalletReadyState) -> Self {
            self.ready_state = ready_state;
            self
        }
    }

    #[async_trait::async_trait(?Send)]
    impl WalletAdapter for MockAdapter {
        fn name(&self) -> &str {
            &self.name
        }

        fn icon(&self) -> &str {
            "data:image/svg+xml;base64,"
        }

        fn url(&self) -> &str {
            "https://example.com/wallet"
        }

        fn ready_state(&self) -> WalletReadyState {
            self.ready_state
        }

        fn public_key(&self) -> Option<String> {
            self.public_key.borrow().clone()
        }

        async fn connect(&self) -> Result<(), WalletError> {
            self.connects.set(self.connects.get() + 1);
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        async fn disconnect(&self) -> Result<(), WalletError> {
            self.disconnects.set(self.disconnects.get() + 1);
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MockAdapter;
    use super::*;

    #[test]
    fn test_wallet_equality_is_identity() {
        let phantom = Wallet::new(MockAdapter::new("Phantom"));
        let same = phantom.clone();
        let other = Wallet::new(MockAdapter::new("Phantom"));

        assert_eq!(phantom, same);
        assert_ne!(phantom, other);
    }

    #[test]
    fn test_find_wallet_by_name() {
        let state = WalletState::new(vec![
            Wallet::new(MockAdapter::new("Phantom")),
            Wallet::new(MockAdapter::new("Solflare")),
        ]);

        assert_eq!(state.find("Solflare").map(Wallet::name), Some("Solflare"));
        assert!(state.find("Backpack").is_none());
    }

    #[test]
    fn test_ready_state_serde() {
        let serialized = serde_json::to_string(&WalletReadyState::NotDetected).unwrap();
        assert_eq!(serialized, "\"not-detected\"");
    }
}
