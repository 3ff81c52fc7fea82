//! Hooks binding the DOM helpers and button view-models to Yew components.

pub mod use_breakpoint;
pub mod use_click_outside;
pub mod use_dialog;
pub mod use_latest_callback;
pub mod use_swipe_to_close;
pub mod use_wallet_buttons;

pub use use_breakpoint::*;
pub use use_click_outside::*;
pub use use_dialog::*;
pub use use_latest_callback::*;
pub use use_swipe_to_close::*;
pub use use_wallet_buttons::*;
