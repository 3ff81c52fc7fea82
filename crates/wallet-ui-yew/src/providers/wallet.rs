use yew::prelude::*;

use wallet_ui::adapter::{Wallet, WalletState};
use wallet_ui::errors::ContextError;

/// The external wallet context as seen by the components: the current
/// snapshot plus the operation that changes the selected wallet.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletContext {
    pub state: WalletState,
    pub select: Callback<Option<String>>,
}

impl WalletContext {
    pub fn selected(&self) -> Option<&Wallet> {
        self.state.wallet.as_ref()
    }

    pub fn select(&self, name: Option<String>) {
        self.select.emit(name);
    }
}

#[derive(Properties, PartialEq)]
pub struct WalletProviderProps {
    pub state: WalletState,
    /// Called with the wallet the user picked, or `None` to clear it.
    pub on_select: Callback<Option<String>>,
    pub children: Children,
}

#[function_component(WalletProvider)]
pub fn wallet_provider(props: &WalletProviderProps) -> Html {
    let context = WalletContext {
        state: props.state.clone(),
        select: props.on_select.clone(),
    };

    html! {
        <ContextProvider<WalletContext> context={context}>
            {props.children.clone()}
        </ContextProvider<WalletContext>>
    }
}

fn require_wallet(context: Option<WalletContext>) -> Result<WalletContext, ContextError> {
    context.ok_or_else(|| ContextError::wallet("use", "wallet"))
}

#[hook]
pub fn use_wallet_result() -> Result<WalletContext, ContextError> {
    require_wallet(use_context::<WalletContext>())
}

#[hook]
pub fn use_wallet() -> WalletContext {
    match use_wallet_result() {
        Ok(context) => context,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_wallet_provider() {
        let err = require_wallet(None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "You have tried to use \"wallet\" on a WalletContext without providing one. \
             Make sure to render a WalletProvider as an ancestor of the component that uses WalletContext"
        );
    }

    #[test]
    fn test_wallet_context_passes_through() {
        let context = WalletContext {
            state: WalletState::default(),
            select: Callback::noop(),
        };
        assert_eq!(require_wallet(Some(context.clone())), Ok(context));
    }
}
