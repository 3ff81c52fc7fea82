//! Context providers for theme, wallet state and modal visibility.

pub mod theme;
pub mod wallet;
pub mod wallet_modal;

pub use theme::*;
pub use wallet::*;
pub use wallet_modal::*;
