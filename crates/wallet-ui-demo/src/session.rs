//! Connection bookkeeping for the demo: which wallet is selected and what
//! it is currently doing. The wallet-adapter library keeps this state in a
//! real application.

use std::rc::Rc;

use yew::Reducible;

use wallet_ui::adapter::{Wallet, WalletState};

/// Progress reported by a demo adapter while it works.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterEvent {
    Connecting,
    Connected,
    Disconnecting,
    Disconnected,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    Select(Option<String>),
    Adapter { wallet: String, event: AdapterEvent },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub selected: Option<String>,
    pub connecting: bool,
    pub connected: bool,
    pub disconnecting: bool,
    pub last_error: Option<String>,
}

impl Session {
    pub fn apply(&self, action: SessionAction) -> Self {
        match action {
            // Picking another wallet drops the current connection.
            SessionAction::Select(selected) if selected != self.selected => Session {
                selected,
                ..Session::default()
            },
            SessionAction::Select(_) => self.clone(),
            SessionAction::Adapter { wallet, event } => {
                if self.selected.as_deref() != Some(wallet.as_str()) {
                    return self.clone();
                }
                let mut next = self.clone();
                match event {
                    AdapterEvent::Connecting => {
                        next.connecting = true;
                        next.last_error = None;
                    }
                    AdapterEvent::Connected => {
                        next.connecting = false;
                        next.connected = true;
                    }
                    AdapterEvent::Disconnecting => next.disconnecting = true,
                    AdapterEvent::Disconnected => {
                        next.disconnecting = false;
                        next.connected = false;
                    }
                    AdapterEvent::Failed(message) => {
                        next.connecting = false;
                        next.disconnecting = false;
                        next.last_error = Some(message);
                    }
                }
                next
            }
        }
    }

    /// The snapshot handed to `WalletProvider`.
    pub fn snapshot(&self, wallets: &[Wallet]) -> WalletState {
        let wallet = self
            .selected
            .as_deref()
            .and_then(|name| wallets.iter().find(|wallet| wallet.name() == name))
            .cloned();
        WalletState {
            wallets: wallets.to_vec(),
            wallet,
            connecting: self.connecting,
            connected: self.connected,
            disconnecting: self.disconnecting,
        }
    }
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(wallet: &str, event: AdapterEvent) -> SessionAction {
        SessionAction::Adapter {
            wallet: wallet.to_string(),
            event,
        }
    }

    #[test]
    fn test_connect_cycle() {
        let session = Session::default()
            .apply(SessionAction::Select(Some("Phantom".to_string())))
            .apply(adapter("Phantom", AdapterEvent::Connecting));
        assert!(session.connecting);

        let session = session.apply(adapter("Phantom", AdapterEvent::Connected));
        assert!(session.connected);
        assert!(!session.connecting);

        let session = session
            .apply(adapter("Phantom", AdapterEvent::Disconnecting))
            .apply(adapter("Phantom", AdapterEvent::Disconnected));
        assert!(!session.connected);
        assert!(!session.disconnecting);
    }

    #[test]
    fn test_events_from_other_wallets_are_ignored() {
        let session = Session::default().apply(SessionAction::Select(Some("Phantom".to_string())));
        let after = session.apply(adapter("Solflare", AdapterEvent::Connected));
        assert_eq!(after, session);
    }

    #[test]
    fn test_selecting_another_wallet_resets_connection() {
        let session = Session::default()
            .apply(SessionAction::Select(Some("Phantom".to_string())))
            .apply(adapter("Phantom", AdapterEvent::Connecting))
            .apply(adapter("Phantom", AdapterEvent::Connected))
            .apply(SessionAction::Select(Some("Solflare".to_string())));

        assert_eq!(session.selected.as_deref(), Some("Solflare"));
        assert!(!session.connected);
    }

    #[test]
    fn test_failure_clears_progress() {
        let session = Session::default()
            .apply(SessionAction::Select(Some("Phantom".to_string())))
            .apply(adapter("Phantom", AdapterEvent::Connecting))
            .apply(adapter("Phantom", AdapterEvent::Failed("User rejected".to_string())));

        assert!(!session.connecting);
        assert_eq!(session.last_error.as_deref(), Some("User rejected"));
    }

    #[test]
    fn test_snapshot_resolves_selected_wallet() {
        let session = Session::default().apply(SessionAction::Select(Some("Missing".to_string())));
        let state = session.snapshot(&[]);
        assert_eq!(state.wallet, None);
        assert!(state.wallets.is_empty());
    }
}
