//! Which wallets the selection modal shows up front.

use crate::adapter::Wallet;

pub const CONNECT_TITLE: &str = "Connect a wallet on Solana to continue";
pub const NO_WALLET_TITLE: &str = "You'll need a wallet on Solana to continue";

/// Wallets split into the ones listed directly and the ones behind the
/// "More options" toggle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletListing {
    pub listed: Vec<Wallet>,
    pub collapsed: Vec<Wallet>,
}

impl WalletListing {
    /// Installed wallets are listed first. When none is installed, every
    /// wallet is listed and nothing is collapsed.
    pub fn from_wallets(wallets: &[Wallet]) -> Self {
        let (installed, others): (Vec<Wallet>, Vec<Wallet>) = wallets
            .iter()
            .cloned()
            .partition(|wallet| wallet.ready_state().is_installed());

        if installed.is_empty() {
            Self {
                listed: others,
                collapsed: Vec::new(),
            }
        } else {
            Self {
                listed: installed,
                collapsed: others,
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.listed.is_empty() && self.collapsed.is_empty()
    }

    pub fn title(&self) -> &'static str {
        if self.listed.iter().any(|wallet| wallet.ready_state().is_installed()) {
            CONNECT_TITLE
        } else {
            NO_WALLET_TITLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::WalletReadyState;
    use crate::adapter::testing::MockAdapter;

    fn wallet(name: &str, ready_state: WalletReadyState) -> Wallet {
        Wallet::new(MockAdapter::new(name).with_ready_state(ready_state))
    }

    #[test]
    fn test_installed_wallets_listed_first() {
        let wallets = vec![
            wallet("Ledger", WalletReadyState::Loadable),
            wallet("Phantom", WalletReadyState::Installed),
            wallet("Backpack", WalletReadyState::NotDetected),
            wallet("Solflare", WalletReadyState::Installed),
        ];

        let listing = WalletListing::from_wallets(&wallets);
        let listed: Vec<&str> = listing.listed.iter().map(Wallet::name).collect();
        let collapsed: Vec<&str> = listing.collapsed.iter().map(Wallet::name).collect();

        assert_eq!(listed, ["Phantom", "Solflare"]);
        assert_eq!(collapsed, ["Ledger", "Backpack"]);
        assert_eq!(listing.title(), CONNECT_TITLE);
    }

    #[test]
    fn test_nothing_installed_lists_everything() {
        let wallets = vec![
            wallet("Ledger", WalletReadyState::Loadable),
            wallet("Backpack", WalletReadyState::NotDetected),
        ];

        let listing = WalletListing::from_wallets(&wallets);
        assert_eq!(listing.listed.len(), 2);
        assert!(listing.collapsed.is_empty());
        assert_eq!(listing.title(), NO_WALLET_TITLE);
    }

    #[test]
    fn test_empty() {
        assert!(WalletListing::from_wallets(&[]).is_empty());
    }
}
