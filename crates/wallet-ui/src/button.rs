//! Button view-models derived from a [`WalletState`].
//!
//! A [`ButtonState`] is a pure projection: it is recomputed from the current
//! snapshot every time the host re-renders and has no identity of its own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::adapter::{Wallet, WalletState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonStatus {
    NoWallet,
    HasWallet,
    Connecting,
    Connected,
    Disconnecting,
}

impl ButtonStatus {
    /// Status precedence: no wallet, then connecting, connected and
    /// disconnecting in that order, otherwise a selected idle wallet.
    pub fn derive(state: &WalletState) -> Self {
        if state.wallet.is_none() {
            ButtonStatus::NoWallet
        } else if state.connecting {
            ButtonStatus::Connecting
        } else if state.connected {
            ButtonStatus::Connected
        } else if state.disconnecting {
            ButtonStatus::Disconnecting
        } else {
            ButtonStatus::HasWallet
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonStatus::NoWallet => "no-wallet",
            ButtonStatus::HasWallet => "has-wallet",
            ButtonStatus::Connecting => "connecting",
            ButtonStatus::Connected => "connected",
            ButtonStatus::Disconnecting => "disconnecting",
        }
    }
}

impl fmt::Display for ButtonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Connect,
    Disconnect,
    Multi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletAction {
    Connect,
    Disconnect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonState {
    pub kind: ButtonKind,
    pub status: ButtonStatus,
    pub disabled: bool,
    wallet: Option<Wallet>,
    action: Option<WalletAction>,
}

impl ButtonState {
    pub fn connect_button(state: &WalletState) -> Self {
        let status = ButtonStatus::derive(state);
        Self {
            kind: ButtonKind::Connect,
            status,
            disabled: status != ButtonStatus::HasWallet,
            wallet: state.wallet.clone(),
            action: (status == ButtonStatus::HasWallet).then_some(WalletAction::Connect),
        }
    }

    pub fn disconnect_button(state: &WalletState) -> Self {
        let status = if state.disconnecting {
            ButtonStatus::Disconnecting
        } else if state.wallet.is_some() {
            ButtonStatus::HasWallet
        } else {
            ButtonStatus::NoWallet
        };
        Self {
            kind: ButtonKind::Disconnect,
            status,
            disabled: state.wallet.is_none(),
            wallet: state.wallet.clone(),
            action: (status == ButtonStatus::HasWallet && state.wallet.is_some())
                .then_some(WalletAction::Disconnect),
        }
    }

    pub fn multi_button(state: &WalletState) -> Self {
        let status = ButtonStatus::derive(state);
        let action = match status {
            ButtonStatus::HasWallet => Some(WalletAction::Connect),
            ButtonStatus::Connected => Some(WalletAction::Disconnect),
            _ => None,
        };
        Self {
            kind: ButtonKind::Multi,
            status,
            disabled: matches!(
                status,
                ButtonStatus::Connecting | ButtonStatus::Disconnecting
            ),
            wallet: state.wallet.clone(),
            action,
        }
    }

    pub fn wallet(&self) -> Option<&Wallet> {
        self.wallet.as_ref()
    }

    pub fn wallet_icon(&self) -> Option<&str> {
        self.wallet.as_ref().map(Wallet::icon)
    }

    pub fn wallet_name(&self) -> Option<&str> {
        self.wallet.as_ref().map(Wallet::name)
    }

    pub fn public_key(&self) -> Option<String> {
        self.wallet.as_ref().and_then(Wallet::public_key)
    }

    pub fn action(&self) -> Option<WalletAction> {
        self.action
    }

    pub fn label(&self) -> String {
        let label = match (self.kind, self.status) {
            (_, ButtonStatus::Connecting) => "Connecting ...",
            (_, ButtonStatus::Disconnecting) => "Disconnecting ...",
            (ButtonKind::Connect, ButtonStatus::NoWallet) => "Connect Wallet",
            (ButtonKind::Connect, ButtonStatus::HasWallet) => "Connect",
            (ButtonKind::Connect, ButtonStatus::Connected) => "Connected",
            (ButtonKind::Disconnect, ButtonStatus::NoWallet) => "Disconnect Wallet",
            (ButtonKind::Disconnect, _) => "Disconnect",
            (ButtonKind::Multi, ButtonStatus::NoWallet) => "Select Wallet",
            (ButtonKind::Multi, ButtonStatus::HasWallet) => "Connect",
            (ButtonKind::Multi, ButtonStatus::Connected) => {
                return self
                    .public_key()
                    .map(|key| abbreviate_public_key(&key))
                    .unwrap_or_else(|| "Connected".to_string());
            }
        };
        label.to_string()
    }

    /// Runs the button's wallet action, if it has one.
    ///
    /// Fire-and-forget: a rejected connect or disconnect is logged and
    /// discarded here. The external wallet context reports the failure
    /// through its own error channel. Returns whether an action ran.
    pub async fn click(&self) -> bool {
        let (Some(action), Some(wallet)) = (self.action, self.wallet.as_ref()) else {
            return false;
        };

        let result = match action {
            WalletAction::Connect => wallet.connect().await,
            WalletAction::Disconnect => wallet.disconnect().await,
        };
        if let Err(err) = result {
            tracing::debug!(wallet = wallet.name(), ?action, %err, "wallet action failed");
        }
        true
    }
}

/// Shortens a base58 key to its first and last four characters.
pub fn abbreviate_public_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return key.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}..{tail}")
}
