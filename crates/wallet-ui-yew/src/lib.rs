//! Yew components and hooks for connecting a Solana wallet.
//!
//! Wrap the application in a [`ThemeProvider`], a [`WalletProvider`] fed from
//! the wallet-adapter state, and a [`WalletModalProvider`]; then render any of
//! the wallet buttons below them. Call [`wallet_ui::log::setup`] once before
//! rendering to get panic messages and tracing output in the browser console.

pub mod components;
pub mod dom;
pub mod hooks;
pub mod providers;

pub use wallet_ui;

pub use components::{
    Button, ButtonProps, WalletConnectButton, WalletDisconnectButton, WalletIcon, WalletModal,
    WalletModalButton, WalletMultiButton,
};
pub use hooks::{
    MultiButtonHandle, SelectWalletRequest, WalletButton, use_breakpoint, use_click_outside,
    use_dialog_escape, use_dialog_open, use_latest_callback, use_swipe_to_close,
    use_wallet_connect_button, use_wallet_disconnect_button, use_wallet_multi_button,
};
pub use providers::{
    ThemeContext, ThemeProvider, WalletContext, WalletModalContext, WalletModalProvider,
    WalletProvider, use_theme, use_theme_opt, use_wallet, use_wallet_modal,
    use_wallet_modal_result, use_wallet_result,
};
