//! Framework-agnostic core of the wallet UI bindings.
//!
//! This crate derives everything the wallet buttons and modal display from a
//! snapshot of an external wallet-adapter context, and holds the pure parts of
//! the interaction helpers (breakpoints, spring easing, swipe tracking), plus
//! error handling, logging setup and macros shared with the Yew bindings.

pub mod adapter;
pub mod breakpoint;
pub mod button;
pub mod easing;
pub mod errors;
pub mod events;
pub mod log;
pub mod macros;
pub mod modal;
pub mod style;
pub mod subscription;
pub mod swipe;
pub mod theme;

pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing::{debug, error, info, trace, warn};

pub use adapter::{Wallet, WalletAdapter, WalletReadyState, WalletState};
pub use button::{ButtonKind, ButtonState, ButtonStatus, WalletAction};
pub use subscription::Subscription;
