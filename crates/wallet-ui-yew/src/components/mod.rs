//! Presentational components for wallet connection state.
//!
//! Contains the base button, the wallet buttons and the wallet selection
//! modal. All of them read the wallet state from `WalletProvider`.

pub mod button;
pub mod wallet_connect_button;
pub mod wallet_disconnect_button;
pub mod wallet_icon;
pub mod wallet_modal;
pub mod wallet_modal_button;
pub mod wallet_multi_button;

pub use button::*;
pub use wallet_connect_button::*;
pub use wallet_disconnect_button::*;
pub use wallet_icon::*;
pub use wallet_modal::*;
pub use wallet_modal_button::*;
pub use wallet_multi_button::*;
