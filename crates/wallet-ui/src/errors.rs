//! Shared error types and utilities for the wallet UI crates.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures reported by a [`WalletAdapter`](crate::adapter::WalletAdapter).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("Wallet {0} is not ready")]
    NotReady(String),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Disconnection failed: {0}")]
    Disconnection(String),
    #[error("User rejected the request")]
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error(
        "You have tried to {action} \"{value}\" on a {context} without providing one. \
         Make sure to render a {provider} as an ancestor of the component that uses {context}"
    )]
    MissingProvider {
        action: &'static str,
        value: &'static str,
        context: &'static str,
        provider: &'static str,
    },
}

impl ContextError {
    pub fn wallet_modal(action: &'static str, value: &'static str) -> Self {
        Self::MissingProvider {
            action,
            value,
            context: "WalletModalContext",
            provider: "WalletModalProvider",
        }
    }

    pub fn wallet(action: &'static str, value: &'static str) -> Self {
        Self::MissingProvider {
            action,
            value,
            context: "WalletContext",
            provider: "WalletProvider",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("Unknown palette color: {0}")]
    UnknownColor(String),
    #[error("Unknown shade {shade} for palette color {color}")]
    UnknownShade { color: String, shade: String },
    #[error("Invalid theme config: {0}")]
    InvalidConfig(String),
}

/// A DOM call that threw, with the exception rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("No global window available")]
    NoWindow,
    #[error("{operation} failed: {message}")]
    Js {
        operation: &'static str,
        message: String,
    },
}
